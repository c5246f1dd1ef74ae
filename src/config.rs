//! Construction-time settings for a [`Store`](crate::store::Store).

use crate::domain::{AccountId, OrderId, PartId};

/// First identifier handed out by each of the store's tables.
///
/// Every table counts up from its own start, so ids never repeat within one
/// store instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreConfig {
    pub first_account_id: AccountId,
    pub first_part_id: PartId,
    pub first_order_id: OrderId,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            first_account_id: 1000,
            first_part_id: 2000,
            first_order_id: 5000,
        }
    }
}

/// Channel capacity used by the demo's store service.
pub const DEFAULT_SERVICE_BUFFER: usize = 100;
