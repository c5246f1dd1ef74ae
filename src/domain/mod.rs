pub mod account;
pub mod part;
pub mod order;

pub use account::*;
pub use part::*;
pub use order::*;
