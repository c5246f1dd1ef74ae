use std::cell::RefCell;

use tracing::{error, info, info_span, warn, Instrument};

use mfg_dashboard::config::DEFAULT_SERVICE_BUFFER;
use mfg_dashboard::domain::{AccountCreate, OrderStatus, Privilege};
use mfg_dashboard::seed::seed;
use mfg_dashboard::service::StoreService;
use mfg_dashboard::store::Store;
use mfg_dashboard::telemetry::setup_tracing;
use mfg_dashboard::users::{Account, Administrator, Customer, User};

/// Walks through every role operation against a freshly seeded store.
fn run_demo(store: &RefCell<Store>) -> Result<(), String> {
    let (admin, customer) = seed(store);

    {
        let _span = info_span!("account_info").entered();
        info!(info = %customer.view_account_info(), "Standard user profile");
    }

    {
        let _span = info_span!("own_orders").entered();
        for order in customer.view_current_orders() {
            info!(%order, "Current order");
        }
        for order in customer.view_previous_orders() {
            info!(%order, "Previous order");
        }
    }

    {
        let _span = info_span!("order_parts").entered();
        let bolt = store
            .borrow()
            .find_part_by_name("Bolt")
            .ok_or_else(|| "Bolt missing from seed data".to_string())?;
        match customer.order_parts(bolt.id, 12) {
            Some(order) => info!(%order, "Ordered 12 bolts"),
            None => warn!("Bolt order was rejected"),
        }
    }

    {
        let _span = info_span!("admin_sort").entered();
        for order in admin.sort_orders("Order_Price", true) {
            info!(%order, "By price, descending");
        }
    }

    {
        let _span = info_span!("admin_modify").entered();
        let newest = store
            .borrow()
            .orders()
            .into_iter()
            .max_by_key(|o| o.date)
            .ok_or_else(|| "Order book is empty".to_string())?;
        let ok = admin.update_modify_orders(
            newest.id,
            Some(OrderStatus::PREVIOUS),
            None,
            Some(newest.quantity + 3),
        );
        match store.borrow().get_order(newest.id) {
            Some(order) if ok => info!(%order, "Newest order moved to PREVIOUS"),
            _ => warn!(order_id = newest.id, "Could not modify newest order"),
        }
    }

    {
        let _span = info_span!("authentication").entered();
        let logged_in = customer.login("admin", "admin123");
        info!(admin = matches!(logged_in, Some(User::Admin(_))), "Logged in as 'admin'");

        let changed = customer.change_password("newpass456");
        info!(changed, "Password change");
        let again = customer.login("conor", "newpass456");
        info!(standard = matches!(again, Some(User::Standard(_))), "Re-login as 'conor'");
    }

    {
        let _span = info_span!("create_account").entered();
        let jane = admin
            .create_account(
                AccountCreate::new("jane", "pw123", Privilege::Standard)
                    .with_profile("RiverWorks", "44 Water St", "jane@riverworks.com"),
            )
            .map_err(|e| e.to_string())?;
        match jane.as_standard() {
            Some(jane) => info!(info = %jane.view_account_info(), "Created account"),
            None => warn!(account_id = jane.account_id(), "Created account is not a standard account"),
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    info!("Starting manufacturing dashboard demo");

    let store = RefCell::new(Store::new());
    run_demo(&store)?;

    // Hand the populated store to a service and read it back through a client.
    let (service, client) = StoreService::new(store.into_inner(), DEFAULT_SERVICE_BUFFER);
    let handle = tokio::spawn(service.run());

    let span = tracing::info_span!("order_book");
    async {
        let orders = client.list_orders().await.map_err(|e| e.to_string())?;
        info!(order_count = orders.len(), "Order book via store service");
        for order in orders {
            info!(%order, "Order");
        }
        Ok::<(), String>(())
    }
    .instrument(span)
    .await?;

    client.shutdown().await.map_err(|e| e.to_string())?;
    match handle.await {
        Ok(store) => info!(account_count = store.account_count(), "Store service stopped"),
        Err(e) => {
            error!(error = ?e, "Store service task failed");
            return Err(e.to_string());
        }
    }

    info!("Demo completed successfully");
    Ok(())
}
