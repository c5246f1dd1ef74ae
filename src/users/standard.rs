use std::cell::RefCell;

use chrono::Utc;
use tracing::{info, instrument, warn};

use super::{Account, Session};
use crate::domain::{AccountInfo, AccountRecord, Order, OrderCreate, OrderStatus, PartId, Privilege};
use crate::store::Store;

/// Operations granted to standard (customer) accounts.
pub trait Customer<'s>: Account<'s> {
    /// Profile as copied when the wrapper was built, not a live store read.
    fn view_account_info(&self) -> AccountInfo;

    /// Places an order for `quantity` units of a part at its unit price.
    ///
    /// Returns `None` when the part is unknown or `quantity` is not positive;
    /// no order is created in either case.
    fn order_parts(&self, part_id: PartId, quantity: i64) -> Option<Order>;
}

/// Wrapper for a standard account, carrying a snapshot of its profile.
#[derive(Debug, Clone)]
pub struct StandardUser<'s> {
    session: Session<'s>,
    company: Option<String>,
    shipping_address: Option<String>,
    contact_info: Option<String>,
}

impl<'s> StandardUser<'s> {
    pub fn from_record(record: &AccountRecord, store: &'s RefCell<Store>) -> Self {
        Self {
            session: Session::new(record, Privilege::Standard, store),
            company: record.company.clone(),
            shipping_address: record.shipping_address.clone(),
            contact_info: record.contact_info.clone(),
        }
    }
}

impl<'s> Account<'s> for StandardUser<'s> {
    fn session(&self) -> &Session<'s> {
        &self.session
    }
}

impl<'s> Customer<'s> for StandardUser<'s> {
    fn view_account_info(&self) -> AccountInfo {
        AccountInfo {
            id: self.account_id(),
            username: self.username().to_string(),
            privilege: self.privilege(),
            company: self.company.clone(),
            shipping_address: self.shipping_address.clone(),
            contact_info: self.contact_info.clone(),
        }
    }

    #[instrument(skip(self), fields(account_id = self.account_id()))]
    fn order_parts(&self, part_id: PartId, quantity: i64) -> Option<Order> {
        if quantity <= 0 {
            warn!("Rejected order with non-positive quantity");
            return None;
        }

        let mut store = self.session.write()?;
        let Some(part) = store.get_part(part_id) else {
            warn!("Part not found");
            return None;
        };

        let price = part.price * quantity as f64;
        let order = store.create_order(
            OrderCreate::new(self.account_id(), price, quantity, OrderStatus::CURRENT, part.id)
                .dated(Utc::now()),
        );
        store.link_part_to_order(part.id, order.id);

        info!(order_id = order.id, price, "Parts ordered");
        Some(order)
    }
}
