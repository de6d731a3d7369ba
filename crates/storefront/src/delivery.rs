//! Delivery pricing and arrival estimation.
//!
//! Standard delivery is free at and above the free-delivery threshold.
//! Platinum (next-day) delivery is never free. Arrival estimates count
//! business days only, with a 16:00 cutoff for platinum dispatch.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike, Weekday};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

// Money constants use `Decimal::from_parts`, the only const constructor.

/// Subtotal at which standard delivery becomes free (inclusive): £100.00.
pub const FREE_DELIVERY_THRESHOLD: Decimal = Decimal::from_parts(10_000, 0, 0, false, 2);

/// Standard delivery cost below the threshold: £4.99.
pub const STANDARD_DELIVERY_COST: Decimal = Decimal::from_parts(499, 0, 0, false, 2);

/// Platinum next-day delivery cost: £8.99.
pub const PLATINUM_DELIVERY_COST: Decimal = Decimal::from_parts(899, 0, 0, false, 2);

/// VAT rate applied to the gross (VAT-inclusive) total for the display line.
const VAT_RATE: Decimal = Decimal::from_parts(20, 0, 0, false, 2);

/// Hour of day (24h) after which platinum orders miss next-day dispatch.
const PLATINUM_CUTOFF_HOUR: u32 = 16;

/// Delivery method chosen at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryMethod {
    #[default]
    Standard,
    Platinum,
}

impl DeliveryMethod {
    /// Delivery cost for this method at the given subtotal.
    #[must_use]
    pub fn cost(self, subtotal: Decimal) -> Decimal {
        match self {
            Self::Standard => standard_delivery_cost(subtotal),
            Self::Platinum => PLATINUM_DELIVERY_COST,
        }
    }
}

/// Standard delivery cost: free at and above the threshold.
#[must_use]
pub fn standard_delivery_cost(subtotal: Decimal) -> Decimal {
    if subtotal >= FREE_DELIVERY_THRESHOLD {
        Decimal::ZERO
    } else {
        STANDARD_DELIVERY_COST
    }
}

/// Progress towards free delivery as a whole percentage, capped at 100.
#[must_use]
pub fn free_delivery_progress(subtotal: Decimal) -> u32 {
    if subtotal <= Decimal::ZERO {
        return 0;
    }
    let percent = (subtotal * Decimal::ONE_HUNDRED) / FREE_DELIVERY_THRESHOLD;
    let rounded = percent.round();
    if rounded >= Decimal::ONE_HUNDRED {
        100
    } else {
        rounded.to_u32().unwrap_or(0)
    }
}

/// Amount still needed to reach free delivery (zero once earned).
#[must_use]
pub fn free_delivery_remaining(subtotal: Decimal) -> Decimal {
    if subtotal >= FREE_DELIVERY_THRESHOLD {
        Decimal::ZERO
    } else {
        FREE_DELIVERY_THRESHOLD - subtotal
    }
}

/// VAT portion of a gross total (prices are VAT-inclusive).
#[must_use]
pub fn vat_included(gross_total: Decimal) -> Decimal {
    (gross_total * VAT_RATE).round_dp(2)
}

/// Estimated arrival dates for both delivery methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryEstimate {
    /// Standard window: earliest and latest arrival.
    pub standard_from: NaiveDate,
    pub standard_to: NaiveDate,
    /// Platinum single arrival date.
    pub platinum: NaiveDate,
    /// Whether the order missed today's platinum dispatch cutoff.
    pub after_cutoff: bool,
}

impl DeliveryEstimate {
    /// Compute estimates from the order time.
    ///
    /// Standard arrives in 1-2 business days. Platinum arrives the next
    /// business day when ordered before the cutoff, otherwise in 2.
    #[must_use]
    pub fn from_order_time(now: NaiveDateTime) -> Self {
        let after_cutoff = now.hour() >= PLATINUM_CUTOFF_HOUR;
        Self {
            standard_from: add_business_days(now.date(), 1),
            standard_to: add_business_days(now.date(), 2),
            platinum: add_business_days(now.date(), if after_cutoff { 2 } else { 1 }),
            after_cutoff,
        }
    }

    /// Standard window formatted for display, e.g. "Thu 28 Aug - Fri 29 Aug".
    #[must_use]
    pub fn standard_display(&self) -> String {
        format!(
            "{} - {}",
            format_arrival(self.standard_from),
            format_arrival(self.standard_to)
        )
    }

    /// Platinum arrival formatted for display, e.g. "Thu 28 Aug".
    #[must_use]
    pub fn platinum_display(&self) -> String {
        format_arrival(self.platinum)
    }
}

/// Short arrival format: "Thu 28 Aug".
fn format_arrival(date: NaiveDate) -> String {
    format!(
        "{} {} {}",
        weekday_abbrev(date.weekday()),
        date.day(),
        month_abbrev(date.month())
    )
}

const fn weekday_abbrev(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

const fn month_abbrev(month: u32) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        _ => "Dec",
    }
}

fn is_business_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Advance `days` business days from `start` (weekends skipped).
fn add_business_days(start: NaiveDate, days: u32) -> NaiveDate {
    let mut date = start;
    let mut added = 0;
    while added < days {
        date = date.succ_opt().unwrap_or(date);
        if is_business_day(date) {
            added += 1;
        }
    }
    date
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn at(d: NaiveDate, hour: u32) -> NaiveDateTime {
        d.and_time(NaiveTime::from_hms_opt(hour, 0, 0).expect("valid time"))
    }

    #[test]
    fn test_money_constant_values() {
        assert_eq!(FREE_DELIVERY_THRESHOLD, Decimal::new(10_000, 2));
        assert_eq!(STANDARD_DELIVERY_COST, Decimal::new(499, 2));
        assert_eq!(PLATINUM_DELIVERY_COST, Decimal::new(899, 2));
        assert_eq!(VAT_RATE, Decimal::new(20, 2));
    }

    #[test]
    fn test_standard_delivery_free_at_exact_threshold() {
        assert_eq!(
            standard_delivery_cost(Decimal::new(9_999, 2)),
            STANDARD_DELIVERY_COST
        );
        assert_eq!(standard_delivery_cost(Decimal::new(10_000, 2)), Decimal::ZERO);
        assert_eq!(standard_delivery_cost(Decimal::new(10_001, 2)), Decimal::ZERO);
    }

    #[test]
    fn test_platinum_never_free() {
        assert_eq!(
            DeliveryMethod::Platinum.cost(Decimal::new(100_000, 2)),
            PLATINUM_DELIVERY_COST
        );
    }

    #[test]
    fn test_free_delivery_progress_caps_at_100() {
        assert_eq!(free_delivery_progress(Decimal::ZERO), 0);
        assert_eq!(free_delivery_progress(Decimal::new(5_000, 2)), 50);
        assert_eq!(free_delivery_progress(Decimal::new(10_000, 2)), 100);
        assert_eq!(free_delivery_progress(Decimal::new(50_000, 2)), 100);
    }

    #[test]
    fn test_free_delivery_remaining() {
        assert_eq!(
            free_delivery_remaining(Decimal::new(7_501, 2)),
            Decimal::new(2_499, 2)
        );
        assert_eq!(free_delivery_remaining(Decimal::new(10_000, 2)), Decimal::ZERO);
    }

    #[test]
    fn test_vat_is_a_fifth_of_gross() {
        assert_eq!(vat_included(Decimal::new(10_499, 2)), Decimal::new(2_100, 2));
    }

    #[test]
    fn test_add_business_days_skips_weekend() {
        // Friday + 1 business day = Monday
        let friday = date(2026, 8, 28);
        assert_eq!(add_business_days(friday, 1), date(2026, 8, 31));
        assert_eq!(add_business_days(friday, 2), date(2026, 9, 1));
    }

    #[test]
    fn test_add_business_days_from_weekend() {
        // Saturday + 1 business day = Monday
        let saturday = date(2026, 8, 29);
        assert_eq!(add_business_days(saturday, 1), date(2026, 8, 31));
    }

    #[test]
    fn test_platinum_cutoff() {
        // Wednesday morning order arrives Thursday
        let wednesday = date(2026, 8, 26);
        let before = DeliveryEstimate::from_order_time(at(wednesday, 10));
        assert!(!before.after_cutoff);
        assert_eq!(before.platinum, date(2026, 8, 27));

        // 16:00 order misses dispatch and arrives Friday
        let after = DeliveryEstimate::from_order_time(at(wednesday, 16));
        assert!(after.after_cutoff);
        assert_eq!(after.platinum, date(2026, 8, 28));
    }

    #[test]
    fn test_arrival_display_format() {
        let estimate = DeliveryEstimate::from_order_time(at(date(2026, 8, 26), 10));
        assert_eq!(estimate.platinum_display(), "Thu 27 Aug");
        assert_eq!(estimate.standard_display(), "Thu 27 Aug - Fri 28 Aug");
    }
}
