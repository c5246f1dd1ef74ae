//! # Manufacturing dashboard
//!
//! In-memory order tracking for a parts supplier: accounts with a standard or
//! admin role, a parts catalog, and the orders placed against it.
//!
//! ## Layers
//!
//! - **Domain types** - plain records and their create/patch payloads → [`domain`]
//! - **Store** - one owner for every collection and id sequence → [`store::Store`]
//! - **Role wrappers** - handles bound to one account, exposing only what the
//!   role allows → [`users::StandardUser`], [`users::AdminUser`], [`users::User`]
//! - **Store service** - an actor owning a store so several tasks can share it
//!   → [`service::StoreService`], [`service::StoreClient`]
//! - **Tracing setup** - subscriber configuration for binaries → [`telemetry::setup_tracing`]
//!
//! ## Example
//!
//! ```
//! use std::cell::RefCell;
//! use mfg_dashboard::seed::seed;
//! use mfg_dashboard::store::Store;
//! use mfg_dashboard::users::{Account, Administrator, Customer};
//!
//! let store = RefCell::new(Store::new());
//! let (admin, customer) = seed(&store);
//!
//! let bolt = store.borrow().find_part_by_name("Bolt").unwrap();
//! let order = customer.order_parts(bolt.id, 12).unwrap();
//! assert_eq!(order.quantity, 12);
//!
//! let book = admin.sort_orders("Order_Price", true);
//! assert_eq!(book.len(), 4);
//! assert!(customer.login("admin", "admin123").is_some());
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod seed;
pub mod service;
pub mod store;
pub mod telemetry;
pub mod users;
