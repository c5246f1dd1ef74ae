//! Role-scoped handles over a [`Store`](crate::store::Store).
//!
//! A wrapper is bound to one account and borrows the store it was created
//! from. The operations it offers depend on its role:
//!
//! - [`Account`]: login, password change, account creation, own order views
//! - [`Customer`]: profile view and part ordering (standard accounts)
//! - [`Administrator`]: whole-book sorting and order edits (admin accounts)

mod admin;
mod session;
mod sort;
mod standard;

pub use admin::*;
pub use session::*;
pub use sort::*;
pub use standard::*;
