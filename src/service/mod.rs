//! Actor front-end for sharing one [`Store`] between tasks.
//!
//! The [`Store`] itself has no locking. [`StoreService`] owns it outright and
//! applies requests one at a time from a bounded channel, so every operation
//! stays atomic no matter how many [`StoreClient`] handles are in flight.
//!
//! ```no_run
//! # use mfg_dashboard::{service::StoreService, store::Store};
//! # async fn demo() -> Result<(), mfg_dashboard::error::ServiceError> {
//! let (service, client) = StoreService::new(Store::new(), 100);
//! let handle = tokio::spawn(service.run());
//!
//! let orders = client.list_orders().await?;
//!
//! client.shutdown().await?;
//! let _ = handle.await;
//! # Ok(())
//! # }
//! ```

mod messages;

pub use messages::*;

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, instrument};

use crate::domain::{
    AccountCreate, AccountId, AccountRecord, Order, OrderCreate, OrderId, Part, PartCreate, PartId,
};
use crate::error::ServiceError;
use crate::store::Store;

/// Generate client methods with oneshot channel boilerplate and automatic tracing.
macro_rules! client_method {
    ($client:ty => fn $method:ident($($param:ident: $param_type:ty),*) -> $return_type:ty as $request:ident::$variant:ident) => {
        impl $client {
            #[instrument(skip(self))]
            pub async fn $method(&self, $($param: $param_type),*) -> Result<$return_type, ServiceError> {
                debug!("Sending request");
                let (respond_to, response) = oneshot::channel();
                self.sender
                    .send($request::$variant {
                        $($param,)*
                        respond_to,
                    })
                    .await
                    .map_err(|e| ServiceError::Closed(e.to_string()))?;

                response.await.map_err(|e| ServiceError::Dropped(e.to_string()))
            }
        }
    };
}

/// Owns a [`Store`] and serves [`StoreRequest`]s until shut down or until every
/// client is dropped.
pub struct StoreService {
    receiver: mpsc::Receiver<StoreRequest>,
    store: Store,
}

impl StoreService {
    pub fn new(store: Store, buffer_size: usize) -> (Self, StoreClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let service = Self { receiver, store };
        let client = StoreClient::new(sender);
        (service, client)
    }

    /// Main loop. Returns the store so callers can inspect the final state.
    #[instrument(name = "store_service", skip(self))]
    pub async fn run(mut self) -> Store {
        info!("StoreService starting");

        while let Some(msg) = self.receiver.recv().await {
            if matches!(msg, StoreRequest::Shutdown) {
                info!("StoreService shutting down");
                break;
            }
            self.handle(msg);
        }

        info!("StoreService stopped");
        self.store
    }

    // A dropped reply channel means the caller gave up; nothing to do about it.
    fn handle(&mut self, msg: StoreRequest) {
        let store = &mut self.store;
        match msg {
            StoreRequest::CreateAccount { params, respond_to } => {
                let _ = respond_to.send(store.create_account(params));
            }
            StoreRequest::GetAccountByUsername { username, respond_to } => {
                let _ = respond_to.send(store.get_account_by_username(&username));
            }
            StoreRequest::GetAccount { id, respond_to } => {
                let _ = respond_to.send(store.get_account(id));
            }
            StoreRequest::UpdatePassword { id, new_password, respond_to } => {
                let _ = respond_to.send(store.update_password(id, new_password));
            }
            StoreRequest::CreateOrder { params, respond_to } => {
                let _ = respond_to.send(store.create_order(params));
            }
            StoreRequest::GetOrder { id, respond_to } => {
                let _ = respond_to.send(store.get_order(id));
            }
            StoreRequest::GetOrdersForAccount { account_id, respond_to } => {
                let _ = respond_to.send(store.get_orders_for_account(account_id));
            }
            StoreRequest::ListOrders { respond_to } => {
                let orders = store.orders();
                debug!(order_count = orders.len(), "Listed orders");
                let _ = respond_to.send(orders);
            }
            StoreRequest::UpdateOrderStatus { id, status, respond_to } => {
                let _ = respond_to.send(store.update_order_status(id, status));
            }
            StoreRequest::UpdateOrderPriceQuantity { id, price, quantity, respond_to } => {
                let _ = respond_to.send(store.update_order_price_quantity(id, price, quantity));
            }
            StoreRequest::CreatePart { params, respond_to } => {
                let _ = respond_to.send(store.create_part(params));
            }
            StoreRequest::GetPart { id, respond_to } => {
                let _ = respond_to.send(store.get_part(id));
            }
            StoreRequest::LinkPartToOrder { part_id, order_id, respond_to } => {
                let _ = respond_to.send(store.link_part_to_order(part_id, order_id));
            }
            StoreRequest::Shutdown => {}
        }
    }
}

/// Cloneable handle to a running [`StoreService`].
#[derive(Clone)]
pub struct StoreClient {
    sender: mpsc::Sender<StoreRequest>,
}

impl StoreClient {
    pub fn new(sender: mpsc::Sender<StoreRequest>) -> Self {
        Self { sender }
    }

    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), ServiceError> {
        debug!("Sending shutdown request");
        self.sender
            .send(StoreRequest::Shutdown)
            .await
            .map_err(|e| ServiceError::Closed(e.to_string()))
    }
}

client_method!(StoreClient => fn create_account(params: AccountCreate) -> AccountRecord as StoreRequest::CreateAccount);
client_method!(StoreClient => fn get_account_by_username(username: String) -> Option<AccountRecord> as StoreRequest::GetAccountByUsername);
client_method!(StoreClient => fn get_account(id: AccountId) -> Option<AccountRecord> as StoreRequest::GetAccount);
client_method!(StoreClient => fn create_order(params: OrderCreate) -> Order as StoreRequest::CreateOrder);
client_method!(StoreClient => fn get_order(id: OrderId) -> Option<Order> as StoreRequest::GetOrder);
client_method!(StoreClient => fn get_orders_for_account(account_id: AccountId) -> Vec<Order> as StoreRequest::GetOrdersForAccount);
client_method!(StoreClient => fn list_orders() -> Vec<Order> as StoreRequest::ListOrders);
client_method!(StoreClient => fn update_order_status(id: OrderId, status: String) -> bool as StoreRequest::UpdateOrderStatus);
client_method!(StoreClient => fn update_order_price_quantity(id: OrderId, price: Option<f64>, quantity: Option<i64>) -> bool as StoreRequest::UpdateOrderPriceQuantity);
client_method!(StoreClient => fn create_part(params: PartCreate) -> Part as StoreRequest::CreatePart);
client_method!(StoreClient => fn get_part(id: PartId) -> Option<Part> as StoreRequest::GetPart);
client_method!(StoreClient => fn link_part_to_order(part_id: PartId, order_id: OrderId) -> bool as StoreRequest::LinkPartToOrder);

// The password never goes through `#[instrument]`, so this one is written out.
impl StoreClient {
    pub async fn update_password(&self, id: AccountId, new_password: String) -> Result<bool, ServiceError> {
        debug!(account_id = id, "Sending update_password request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::UpdatePassword { id, new_password, respond_to })
            .await
            .map_err(|e| ServiceError::Closed(e.to_string()))?;

        response.await.map_err(|e| ServiceError::Dropped(e.to_string()))
    }
}
