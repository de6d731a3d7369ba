//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

use rust_decimal::Decimal;

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

/// Formats a decimal amount as pounds sterling.
///
/// Usage in templates: `{{ product.price|gbp }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn gbp(amount: &Decimal, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(format_gbp(*amount))
}

/// Renders a rating out of five as filled and empty stars.
///
/// Usage in templates: `{{ product.rating|stars }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn stars(rating: &f32, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(star_string(*rating))
}

fn format_gbp(amount: Decimal) -> String {
    format!("£{:.2}", amount.round_dp(2))
}

fn star_string(rating: f32) -> String {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let filled = rating.round().clamp(0.0, 5.0) as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}
