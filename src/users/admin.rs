use std::cell::RefCell;

use tracing::{info, instrument, warn};

use super::{sort_orders, Account, OrderSortKey, Session};
use crate::domain::{AccountRecord, Order, OrderId, Privilege};
use crate::store::Store;

/// Operations granted to admin accounts. Admins see the whole order book,
/// not only their own orders.
pub trait Administrator<'s>: Account<'s> {
    /// Sorts every order in the store by the named field. Unrecognised names
    /// sort by date.
    fn sort_orders(&self, key: &str, reverse: bool) -> Vec<Order> {
        self.sort_orders_by(OrderSortKey::from_field_name(key), reverse)
    }

    fn sort_orders_by(&self, key: OrderSortKey, reverse: bool) -> Vec<Order>;

    /// Applies each supplied change through the store.
    ///
    /// Returns `true` only if every store call that was made succeeded. The
    /// status is written first; if that fails the price/quantity call is not
    /// attempted. Nothing supplied means nothing to do and returns `true`.
    fn update_modify_orders(
        &self,
        order_id: OrderId,
        new_status: Option<&str>,
        new_price: Option<f64>,
        new_quantity: Option<i64>,
    ) -> bool;
}

/// Wrapper for an admin account.
#[derive(Debug, Clone)]
pub struct AdminUser<'s> {
    session: Session<'s>,
}

impl<'s> AdminUser<'s> {
    pub fn from_record(record: &AccountRecord, store: &'s RefCell<Store>) -> Self {
        Self {
            session: Session::new(record, Privilege::Admin, store),
        }
    }
}

impl<'s> Account<'s> for AdminUser<'s> {
    fn session(&self) -> &Session<'s> {
        &self.session
    }
}

impl<'s> Administrator<'s> for AdminUser<'s> {
    fn sort_orders_by(&self, key: OrderSortKey, reverse: bool) -> Vec<Order> {
        match self.session.read() {
            Some(store) => sort_orders(store.orders(), key, reverse),
            None => Vec::new(),
        }
    }

    #[instrument(skip(self), fields(admin_id = self.account_id()))]
    fn update_modify_orders(
        &self,
        order_id: OrderId,
        new_status: Option<&str>,
        new_price: Option<f64>,
        new_quantity: Option<i64>,
    ) -> bool {
        let Some(mut store) = self.session.write() else {
            return false;
        };
        let mut ok = true;

        if let Some(status) = new_status {
            ok = ok && store.update_order_status(order_id, status);
        }
        if new_price.is_some() || new_quantity.is_some() {
            ok = ok && store.update_order_price_quantity(order_id, new_price, new_quantity);
        }

        if ok {
            info!("Order modified");
        } else {
            warn!("Order modification failed");
        }
        ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AccountCreate, OrderCreate};

    fn setup() -> (RefCell<Store>, AccountRecord) {
        let mut store = Store::new();
        let admin = store.create_account(AccountCreate::new("admin", "admin123", Privilege::Admin));
        store.create_order(OrderCreate::new(1001, 199.9, 10, "CURRENT", 2000));
        store.create_order(OrderCreate::new(1001, 118.0, 200, "PREVIOUS", 2001));
        store.create_order(OrderCreate::new(1002, 199.9, 3, "CURRENT", 2002));
        store.create_order(OrderCreate::new(1003, 37.45, 5, "CURRENT", 2002));
        (RefCell::new(store), admin)
    }

    #[test]
    fn test_sorts_whole_book_by_price_descending() {
        let (store, record) = setup();
        let admin = AdminUser::from_record(&record, &store);

        let sorted = admin.sort_orders("Order_Price", true);
        let ids: Vec<_> = sorted.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![5000, 5002, 5001, 5003]);
    }

    #[test]
    fn test_unknown_key_sorts_by_date_ascending() {
        let (store, record) = setup();
        let admin = AdminUser::from_record(&record, &store);

        let sorted = admin.sort_orders("Nonexistent_Field", false);
        let by_date = admin.sort_orders_by(OrderSortKey::Date, false);
        assert_eq!(sorted, by_date);
        assert!(sorted.windows(2).all(|w| w[0].date <= w[1].date));
        assert_eq!(sorted.len(), 4);
    }

    #[test]
    fn test_modify_updates_status_and_quantity_only() {
        let (store, record) = setup();
        let admin = AdminUser::from_record(&record, &store);

        assert!(admin.update_modify_orders(5000, Some("PREVIOUS"), None, Some(13)));

        let order = store.borrow().get_order(5000).unwrap();
        assert_eq!(order.status, "PREVIOUS");
        assert_eq!(order.quantity, 13);
        assert_eq!(order.price, 199.9);
    }

    #[test]
    fn test_modify_unknown_order_fails_without_changes() {
        let (store, record) = setup();
        let admin = AdminUser::from_record(&record, &store);
        let before = store.borrow().orders();

        assert!(!admin.update_modify_orders(4242, Some("PREVIOUS"), Some(1.0), Some(1)));
        assert!(!admin.update_modify_orders(4242, None, Some(1.0), None));
        assert_eq!(store.borrow().orders(), before);
    }

    #[test]
    fn test_modify_with_nothing_supplied_is_vacuous_success() {
        let (store, record) = setup();
        let admin = AdminUser::from_record(&record, &store);

        assert!(admin.update_modify_orders(5001, None, None, None));
        assert!(admin.update_modify_orders(4242, None, None, None));
    }

    #[test]
    fn test_unknown_key_fallback_honours_reverse() {
        let mut store = Store::new();
        let admin_record = store.create_account(AccountCreate::new("admin", "admin123", Privilege::Admin));
        for month in [2, 3, 1] {
            let date = chrono::TimeZone::with_ymd_and_hms(&chrono::Utc, 2024, month, 1, 0, 0, 0).unwrap();
            store.create_order(OrderCreate::new(1001, 1.0, 1, "CURRENT", 2000).dated(date));
        }
        let store = RefCell::new(store);
        let admin = AdminUser::from_record(&admin_record, &store);

        let ids: Vec<_> = admin.sort_orders("Nonexistent_Field", true).iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![5001, 5000, 5002]);
    }
}
