use tokio::sync::oneshot;

use crate::domain::{
    AccountCreate, AccountId, AccountRecord, Order, OrderCreate, OrderId, Part, PartCreate, PartId,
};

pub type Response<T> = oneshot::Sender<T>;

/// Typed requests understood by a [`StoreService`](super::StoreService). Each
/// variant carries its arguments and a oneshot channel for the reply.
#[derive(Debug)]
pub enum StoreRequest {
    CreateAccount {
        params: AccountCreate,
        respond_to: Response<AccountRecord>,
    },
    GetAccountByUsername {
        username: String,
        respond_to: Response<Option<AccountRecord>>,
    },
    GetAccount {
        id: AccountId,
        respond_to: Response<Option<AccountRecord>>,
    },
    UpdatePassword {
        id: AccountId,
        new_password: String,
        respond_to: Response<bool>,
    },
    CreateOrder {
        params: OrderCreate,
        respond_to: Response<Order>,
    },
    GetOrder {
        id: OrderId,
        respond_to: Response<Option<Order>>,
    },
    GetOrdersForAccount {
        account_id: AccountId,
        respond_to: Response<Vec<Order>>,
    },
    ListOrders {
        respond_to: Response<Vec<Order>>,
    },
    UpdateOrderStatus {
        id: OrderId,
        status: String,
        respond_to: Response<bool>,
    },
    UpdateOrderPriceQuantity {
        id: OrderId,
        price: Option<f64>,
        quantity: Option<i64>,
        respond_to: Response<bool>,
    },
    CreatePart {
        params: PartCreate,
        respond_to: Response<Part>,
    },
    GetPart {
        id: PartId,
        respond_to: Response<Option<Part>>,
    },
    LinkPartToOrder {
        part_id: PartId,
        order_id: OrderId,
        respond_to: Response<bool>,
    },
    Shutdown,
}
