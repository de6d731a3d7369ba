//! Status enums for orders and chat.

use serde::{Deserialize, Serialize};

/// Order fulfillment status shown in the order history.
///
/// New orders always start as `Processing`; the simulated fulfillment
/// pipeline never fails an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    #[default]
    Processing,
    Shipped,
    Delivered,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Processing => write!(f, "Processing"),
            Self::Shipped => write!(f, "Shipped"),
            Self::Delivered => write!(f, "Delivered"),
        }
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Processing" => Ok(Self::Processing),
            "Shipped" => Ok(Self::Shipped),
            "Delivered" => Ok(Self::Delivered),
            _ => Err(format!("invalid order status: {s}")),
        }
    }
}

/// Chat message role for the assistant transcript.
///
/// `Model` matches the wire role used by the Gemini API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    User,
    Model,
}

impl ChatRole {
    /// Wire-format role string for the Gemini API.
    #[must_use]
    pub const fn as_wire_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Model => "model",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_order_status_display_roundtrip() {
        for status in [
            OrderStatus::Processing,
            OrderStatus::Shipped,
            OrderStatus::Delivered,
        ] {
            let parsed = OrderStatus::from_str(&status.to_string()).expect("roundtrip");
            assert_eq!(parsed, status);
        }
        assert!(OrderStatus::from_str("Lost").is_err());
    }

    #[test]
    fn test_new_orders_default_to_processing() {
        assert_eq!(OrderStatus::default(), OrderStatus::Processing);
    }

    #[test]
    fn test_chat_role_serde() {
        assert_eq!(
            serde_json::to_string(&ChatRole::Model).expect("serialize"),
            "\"model\""
        );
        assert_eq!(ChatRole::User.as_wire_str(), "user");
    }
}
