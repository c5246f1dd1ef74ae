//! Example data for demos and tests.

use std::cell::RefCell;

use tracing::{info, instrument};

use crate::domain::{AccountCreate, OrderCreate, OrderStatus, Part, PartCreate, Privilege};
use crate::store::Store;
use crate::users::{AdminUser, StandardUser};

/// Fills `store` with three parts, an admin and a customer with three linked
/// orders, and returns wrappers for both accounts.
#[instrument(skip(store))]
pub fn seed(store: &RefCell<Store>) -> (AdminUser<'_>, StandardUser<'_>) {
    let (admin_record, std_record) = {
        let mut s = store.borrow_mut();

        let gear = s.create_part(PartCreate::new("Gear", "M12", 19.99));
        let bolt = s.create_part(PartCreate::new("Bolt", "M8", 0.59));
        let bearing = s.create_part(PartCreate::new("Bearing", "6203", 7.49));

        let admin_record = s.create_account(AccountCreate::new("admin", "admin123", Privilege::Admin));
        let std_record = s.create_account(
            AccountCreate::new("conor", "pass123", Privilege::Standard).with_profile(
                "Cape Manufacturing LLC",
                "123 River Rd, Cape Girardeau, MO",
                "conor@cape-mfg.com",
            ),
        );

        let book: [(&Part, i64, &str); 3] = [
            (&gear, 10, OrderStatus::CURRENT),
            (&bolt, 200, OrderStatus::PREVIOUS),
            (&bearing, 5, OrderStatus::CURRENT),
        ];
        for (part, quantity, status) in book {
            let order = s.create_order(OrderCreate::new(
                std_record.id,
                part.price * quantity as f64,
                quantity,
                status,
                part.id,
            ));
            s.link_part_to_order(part.id, order.id);
        }

        (admin_record, std_record)
    };

    info!("Store seeded");
    (
        AdminUser::from_record(&admin_record, store),
        StandardUser::from_record(&std_record, store),
    )
}
