use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};

use super::{AccountId, PartId};

pub type OrderId = u64;

/// Status values the system gives meaning to. Any other string may still be
/// stored on an order.
pub struct OrderStatus;

impl OrderStatus {
    pub const CURRENT: &'static str = "CURRENT";
    pub const PREVIOUS: &'static str = "PREVIOUS";
}

/// Represents a purchase record.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: OrderId,
    pub account_id: AccountId,
    pub price: f64,
    pub quantity: i64,
    pub date: DateTime<Utc>,
    pub status: String,
    pub part_id: PartId,
}

impl Order {
    /// Case-insensitive status comparison.
    pub fn has_status(&self, status: &str) -> bool {
        self.status.eq_ignore_ascii_case(status)
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Order_ID={} | Account_ID={} | Part_ID={} | Qty={} | Price=${:.2} | Status={} | Date={}",
            self.id,
            self.account_id,
            self.part_id,
            self.quantity,
            self.price,
            self.status,
            self.date.to_rfc3339_opts(SecondsFormat::Secs, true),
        )
    }
}

/// Payload for creating a new order.
///
/// `date` falls back to the creation time when absent.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub account_id: AccountId,
    pub price: f64,
    pub quantity: i64,
    pub status: String,
    pub part_id: PartId,
    pub date: Option<DateTime<Utc>>,
}

impl OrderCreate {
    pub fn new(
        account_id: AccountId,
        price: f64,
        quantity: i64,
        status: impl Into<String>,
        part_id: PartId,
    ) -> Self {
        Self {
            account_id,
            price,
            quantity,
            status: status.into(),
            part_id,
            date: None,
        }
    }

    pub fn dated(mut self, date: DateTime<Utc>) -> Self {
        self.date = Some(date);
        self
    }
}

/// Payload for updating an existing order. Only supplied fields change.
#[derive(Debug, Clone, Default)]
pub struct OrderPatch {
    pub status: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i64>,
    pub part_id: Option<PartId>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> Order {
        Order {
            id: 5000,
            account_id: 1001,
            price: 199.9,
            quantity: 10,
            date: Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 45).unwrap(),
            status: "current".to_string(),
            part_id: 2000,
        }
    }

    #[test]
    fn test_status_match_ignores_case() {
        let order = sample();
        assert!(order.has_status(OrderStatus::CURRENT));
        assert!(!order.has_status(OrderStatus::PREVIOUS));
    }

    #[test]
    fn test_display_renders_summary_line() {
        assert_eq!(
            sample().to_string(),
            "Order_ID=5000 | Account_ID=1001 | Part_ID=2000 | Qty=10 | Price=$199.90 | Status=current | Date=2024-03-01T12:30:45Z"
        );
    }
}
