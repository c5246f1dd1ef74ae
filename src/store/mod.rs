//! In-memory repository for accounts, parts and orders.
//!
//! Every read hands back an owned copy; the only way to change a stored record
//! is through one of the update calls below. Unknown ids never panic or error:
//! lookups return `None` and updates return `false`.

mod entities;
mod table;

pub use table::{Entity, Table};

use tracing::{debug, info, instrument, warn};

use crate::config::StoreConfig;
use crate::domain::{
    AccountCreate, AccountId, AccountPatch, AccountRecord, Order, OrderCreate, OrderId, OrderPatch,
    Part, PartCreate, PartId, PartPatch,
};

/// Authoritative owner of all three entity collections and their id sequences.
///
/// Single-writer by construction: mutation needs `&mut Store`. Share it across
/// tasks through [`StoreService`](crate::service::StoreService).
#[derive(Debug, Clone)]
pub struct Store {
    accounts: Table<AccountRecord>,
    parts: Table<Part>,
    orders: Table<Order>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            accounts: Table::new(config.first_account_id),
            parts: Table::new(config.first_part_id),
            orders: Table::new(config.first_order_id),
        }
    }

    // -------------------------------------------------------------------------
    // Accounts
    // -------------------------------------------------------------------------

    #[instrument(skip(self, params), fields(username = %params.username, privilege = %params.privilege))]
    pub fn create_account(&mut self, params: AccountCreate) -> AccountRecord {
        debug!("Processing create_account request");
        let record = self.accounts.create(params);
        info!(account_id = record.id, "Account created");
        record
    }

    /// First account with this username, in insertion order.
    pub fn get_account_by_username(&self, username: &str) -> Option<AccountRecord> {
        debug!(username, "Processing get_account_by_username request");
        self.accounts.iter().find(|a| a.username == username).cloned()
    }

    pub fn get_account(&self, id: AccountId) -> Option<AccountRecord> {
        debug!(account_id = id, "Processing get_account request");
        self.accounts.get(id)
    }

    #[instrument(skip(self, new_password))]
    pub fn update_password(&mut self, id: AccountId, new_password: impl Into<String>) -> bool {
        debug!("Processing update_password request");
        let patch = AccountPatch {
            password: Some(new_password.into()),
        };
        let updated = self.accounts.update(id, patch);
        if updated {
            info!("Password updated");
        } else {
            warn!("Account not found for password update");
        }
        updated
    }

    pub fn accounts(&self) -> Vec<AccountRecord> {
        debug!("Processing list_accounts request");
        self.accounts.iter().cloned().collect()
    }

    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }

    // -------------------------------------------------------------------------
    // Orders
    // -------------------------------------------------------------------------

    /// No referential check: the account and part ids are stored as given.
    #[instrument(
        skip(self, params),
        fields(account_id = params.account_id, part_id = params.part_id, quantity = params.quantity)
    )]
    pub fn create_order(&mut self, params: OrderCreate) -> Order {
        debug!("Processing create_order request");
        let order = self.orders.create(params);
        info!(order_id = order.id, price = order.price, status = %order.status, "Order created");
        order
    }

    pub fn get_order(&self, id: OrderId) -> Option<Order> {
        debug!(order_id = id, "Processing get_order request");
        self.orders.get(id)
    }

    pub fn get_orders_for_account(&self, account_id: AccountId) -> Vec<Order> {
        debug!(account_id, "Processing get_orders_for_account request");
        self.orders
            .iter()
            .filter(|o| o.account_id == account_id)
            .cloned()
            .collect()
    }

    /// The whole order book in iteration order.
    pub fn orders(&self) -> Vec<Order> {
        debug!("Processing list_orders request");
        self.orders.iter().cloned().collect()
    }

    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    #[instrument(skip(self, status), fields(status = %status.as_ref()))]
    pub fn update_order_status(&mut self, id: OrderId, status: impl AsRef<str>) -> bool {
        debug!("Processing update_order_status request");
        let patch = OrderPatch {
            status: Some(status.as_ref().to_string()),
            ..OrderPatch::default()
        };
        let updated = self.orders.update(id, patch);
        if updated {
            info!("Order status updated");
        } else {
            warn!("Order not found for status update");
        }
        updated
    }

    /// Supplying neither field is a successful no-op for a known order.
    #[instrument(skip(self))]
    pub fn update_order_price_quantity(
        &mut self,
        id: OrderId,
        price: Option<f64>,
        quantity: Option<i64>,
    ) -> bool {
        debug!("Processing update_order_price_quantity request");
        let patch = OrderPatch {
            price,
            quantity,
            ..OrderPatch::default()
        };
        let updated = self.orders.update(id, patch);
        if updated {
            info!("Order price/quantity updated");
        } else {
            warn!("Order not found for price/quantity update");
        }
        updated
    }

    // -------------------------------------------------------------------------
    // Parts
    // -------------------------------------------------------------------------

    #[instrument(skip(self, params), fields(name = %params.name, size = %params.size, price = params.price))]
    pub fn create_part(&mut self, params: PartCreate) -> Part {
        debug!("Processing create_part request");
        let part = self.parts.create(params);
        info!(part_id = part.id, "Part created");
        part
    }

    pub fn get_part(&self, id: PartId) -> Option<Part> {
        debug!(part_id = id, "Processing get_part request");
        self.parts.get(id)
    }

    pub fn find_part_by_name(&self, name: &str) -> Option<Part> {
        debug!(name, "Processing find_part_by_name request");
        self.parts.iter().find(|p| p.name == name).cloned()
    }

    pub fn parts(&self) -> Vec<Part> {
        debug!("Processing list_parts request");
        self.parts.iter().cloned().collect()
    }

    /// Points the part at the order and the order at the part. Repeated links
    /// overwrite; nothing changes unless both ids exist.
    #[instrument(skip(self))]
    pub fn link_part_to_order(&mut self, part_id: PartId, order_id: OrderId) -> bool {
        debug!("Processing link_part_to_order request");
        if !self.parts.contains(part_id) || !self.orders.contains(order_id) {
            warn!("Cannot link: part or order not found");
            return false;
        }

        self.parts.update(
            part_id,
            PartPatch {
                linked_order: Some(order_id),
            },
        );
        self.orders.update(
            order_id,
            OrderPatch {
                part_id: Some(part_id),
                ..OrderPatch::default()
            },
        );

        debug!("Part linked to order");
        true
    }
}
