//! Customer-facing order references.
//!
//! Order references are short, human-readable strings of the form
//! `HI-nnnnnn` where `nnnnnn` is a six-digit number. They appear in the
//! order history and in support conversations, so the format is stable.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Prefix for all Hive Image order references.
const ORDER_REF_PREFIX: &str = "HI-";

/// Number of digits in the numeric part of an order reference.
const ORDER_REF_DIGITS: usize = 6;

/// Error validating an order reference.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OrderRefError {
    #[error("order reference must start with '{ORDER_REF_PREFIX}': {0}")]
    MissingPrefix(String),
    #[error("order reference must have {ORDER_REF_DIGITS} digits: {0}")]
    BadNumber(String),
}

/// A validated customer-facing order reference (`HI-nnnnnn`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderRef(String);

impl OrderRef {
    /// Build a reference from a six-digit number.
    ///
    /// # Errors
    ///
    /// Returns `OrderRefError::BadNumber` if `number` is outside
    /// `100000..=999999`.
    pub fn from_number(number: u32) -> Result<Self, OrderRefError> {
        if !(100_000..=999_999).contains(&number) {
            return Err(OrderRefError::BadNumber(number.to_string()));
        }
        Ok(Self(format!("{ORDER_REF_PREFIX}{number}")))
    }

    /// Parse and validate a reference string.
    ///
    /// # Errors
    ///
    /// Returns an error if the prefix or numeric part is malformed.
    pub fn parse(s: &str) -> Result<Self, OrderRefError> {
        let digits = s
            .strip_prefix(ORDER_REF_PREFIX)
            .ok_or_else(|| OrderRefError::MissingPrefix(s.to_string()))?;
        if digits.len() != ORDER_REF_DIGITS || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(OrderRefError::BadNumber(s.to_string()));
        }
        Ok(Self(s.to_string()))
    }

    /// The reference as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OrderRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
