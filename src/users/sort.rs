use std::cmp::Ordering;

use tracing::debug;

use crate::domain::Order;

/// Order field an administrator can sort the order book by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderSortKey {
    Id,
    AccountId,
    Price,
    Quantity,
    #[default]
    Date,
    Status,
    PartId,
}

impl OrderSortKey {
    /// Accepts the dashboard column names (`Order_Price`, ...) or the field
    /// names of [`Order`]. Anything else sorts by date.
    pub fn from_field_name(name: &str) -> Self {
        match name {
            "Order_ID" | "id" => Self::Id,
            "Account_ID" | "account_id" => Self::AccountId,
            "Order_Price" | "price" => Self::Price,
            "Order_Quantity" | "quantity" => Self::Quantity,
            "Order_Date" | "date" => Self::Date,
            "Order_Status" | "status" => Self::Status,
            "Part_ID" | "part_id" => Self::PartId,
            other => {
                debug!(key = other, "Unrecognised sort key, falling back to date");
                Self::Date
            }
        }
    }

    pub fn compare(&self, a: &Order, b: &Order) -> Ordering {
        match self {
            Self::Id => a.id.cmp(&b.id),
            Self::AccountId => a.account_id.cmp(&b.account_id),
            Self::Price => a.price.total_cmp(&b.price),
            Self::Quantity => a.quantity.cmp(&b.quantity),
            Self::Date => a.date.cmp(&b.date),
            Self::Status => a.status.cmp(&b.status),
            Self::PartId => a.part_id.cmp(&b.part_id),
        }
    }
}

impl From<&str> for OrderSortKey {
    fn from(name: &str) -> Self {
        Self::from_field_name(name)
    }
}

/// Stable sort: orders with equal keys keep their incoming order, including
/// when `reverse` is set.
pub fn sort_orders(mut orders: Vec<Order>, key: OrderSortKey, reverse: bool) -> Vec<Order> {
    orders.sort_by(|a, b| {
        let ord = key.compare(a, b);
        if reverse {
            ord.reverse()
        } else {
            ord
        }
    });
    orders
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn order(id: u64, price: f64, month: u32) -> Order {
        Order {
            id,
            account_id: 1,
            price,
            quantity: 1,
            date: Utc.with_ymd_and_hms(2024, month, 1, 0, 0, 0).unwrap(),
            status: "CURRENT".to_string(),
            part_id: 0,
        }
    }

    fn ids(orders: &[Order]) -> Vec<u64> {
        orders.iter().map(|o| o.id).collect()
    }

    #[test]
    fn test_known_names_map_to_fields() {
        assert_eq!(OrderSortKey::from_field_name("Order_Price"), OrderSortKey::Price);
        assert_eq!(OrderSortKey::from_field_name("part_id"), OrderSortKey::PartId);
        assert_eq!(OrderSortKey::from("Order_Status"), OrderSortKey::Status);
    }

    #[test]
    fn test_unknown_names_fall_back_to_date() {
        assert_eq!(OrderSortKey::from_field_name("Nonexistent_Field"), OrderSortKey::Date);
        assert_eq!(OrderSortKey::from_field_name("order_price"), OrderSortKey::Date);
    }

    #[test]
    fn test_descending_sort_keeps_ties_in_original_order() {
        let orders = vec![order(1, 5.0, 1), order(2, 10.0, 1), order(3, 5.0, 1), order(4, 10.0, 1)];
        let sorted = sort_orders(orders, OrderSortKey::Price, true);
        assert_eq!(ids(&sorted), vec![2, 4, 1, 3]);
    }

    #[test]
    fn test_ascending_sort_keeps_ties_in_original_order() {
        let orders = vec![order(1, 5.0, 1), order(2, 1.0, 1), order(3, 5.0, 1)];
        let sorted = sort_orders(orders, OrderSortKey::Price, false);
        assert_eq!(ids(&sorted), vec![2, 1, 3]);
    }

    #[test]
    fn test_date_sort_orders_by_creation_time() {
        let orders = vec![order(1, 1.0, 3), order(2, 1.0, 1), order(3, 1.0, 2)];
        assert_eq!(ids(&sort_orders(orders.clone(), OrderSortKey::Date, false)), vec![2, 3, 1]);
        assert_eq!(ids(&sort_orders(orders, OrderSortKey::Date, true)), vec![1, 3, 2]);
    }
}
