use chrono::Utc;

use super::table::Entity;
use crate::domain::{
    AccountCreate, AccountPatch, AccountRecord, Order, OrderCreate, OrderPatch, Part, PartCreate,
    PartPatch,
};

impl Entity for AccountRecord {
    type CreateParams = AccountCreate;
    type Patch = AccountPatch;

    fn id(&self) -> u64 {
        self.id
    }

    fn from_create_params(id: u64, params: AccountCreate) -> Self {
        Self {
            id,
            username: params.username,
            password: params.password,
            privilege: params.privilege,
            company: params.company,
            shipping_address: params.shipping_address,
            contact_info: params.contact_info,
        }
    }

    fn on_update(&mut self, patch: AccountPatch) {
        if let Some(password) = patch.password {
            self.password = password;
        }
    }
}

impl Entity for Part {
    type CreateParams = PartCreate;
    type Patch = PartPatch;

    fn id(&self) -> u64 {
        self.id
    }

    /// New parts start unlinked.
    fn from_create_params(id: u64, params: PartCreate) -> Self {
        Self {
            id,
            name: params.name,
            size: params.size,
            price: params.price,
            linked_order: None,
        }
    }

    fn on_update(&mut self, patch: PartPatch) {
        if let Some(order_id) = patch.linked_order {
            self.linked_order = Some(order_id);
        }
    }
}

impl Entity for Order {
    type CreateParams = OrderCreate;
    type Patch = OrderPatch;

    fn id(&self) -> u64 {
        self.id
    }

    /// Stamps the order with the current time unless a date was supplied.
    fn from_create_params(id: u64, params: OrderCreate) -> Self {
        Self {
            id,
            account_id: params.account_id,
            price: params.price,
            quantity: params.quantity,
            date: params.date.unwrap_or_else(Utc::now),
            status: params.status,
            part_id: params.part_id,
        }
    }

    fn on_update(&mut self, patch: OrderPatch) {
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(quantity) = patch.quantity {
            self.quantity = quantity;
        }
        if let Some(part_id) = patch.part_id {
            self.part_id = part_id;
        }
    }
}
