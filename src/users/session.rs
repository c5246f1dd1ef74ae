use std::cell::{Ref, RefCell, RefMut};
use std::fmt;

use tracing::{info, instrument, warn};

use super::{AdminUser, StandardUser};
use crate::domain::{AccountCreate, AccountId, AccountRecord, Order, OrderStatus, Privilege};
use crate::error::AccessError;
use crate::store::Store;

/// Identity copied out of an account record plus a borrow of its store.
///
/// Only the id and role are treated as authoritative; the password is never
/// cached here. Each wrapper operation borrows the `RefCell` only for its own
/// duration; if the caller still holds a conflicting borrow, the operation
/// soft-fails (`None`, `false`, an empty list or [`AccessError::StoreBusy`])
/// instead of panicking.
#[derive(Clone)]
pub struct Session<'s> {
    account_id: AccountId,
    username: String,
    privilege: Privilege,
    store: &'s RefCell<Store>,
}

impl<'s> Session<'s> {
    pub(crate) fn new(record: &AccountRecord, privilege: Privilege, store: &'s RefCell<Store>) -> Self {
        Self {
            account_id: record.id,
            username: record.username.clone(),
            privilege,
            store,
        }
    }

    pub fn store(&self) -> &'s RefCell<Store> {
        self.store
    }

    pub(crate) fn read(&self) -> Option<Ref<'s, Store>> {
        read_store(self.store)
    }

    pub(crate) fn write(&self) -> Option<RefMut<'s, Store>> {
        match self.store.try_borrow_mut() {
            Ok(store) => Some(store),
            Err(_) => {
                warn!(account_id = self.account_id, "Store already borrowed, skipping write");
                None
            }
        }
    }
}

fn read_store(store: &RefCell<Store>) -> Option<Ref<'_, Store>> {
    match store.try_borrow() {
        Ok(store) => Some(store),
        Err(_) => {
            warn!("Store mutably borrowed, skipping read");
            None
        }
    }
}

impl fmt::Debug for Session<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("account_id", &self.account_id)
            .field("username", &self.username)
            .field("privilege", &self.privilege)
            .finish_non_exhaustive()
    }
}

/// Operations shared by every role.
pub trait Account<'s> {
    fn session(&self) -> &Session<'s>;

    fn account_id(&self) -> AccountId {
        self.session().account_id
    }

    fn username<'a>(&'a self) -> &'a str
    where
        's: 'a,
    {
        &self.session().username
    }

    fn privilege(&self) -> Privilege {
        self.session().privilege
    }

    /// Not tied to this wrapper's identity: any wrapper can log anyone in.
    fn login(&self, username: &str, password: &str) -> Option<User<'s>> {
        User::login(self.session().store, username, password)
    }

    fn change_password(&self, new_password: &str) -> bool {
        match self.session().write() {
            Some(mut store) => store.update_password(self.account_id(), new_password),
            None => false,
        }
    }

    /// Only admins may create accounts. A standard wrapper gets
    /// [`AccessError::AdminRequired`] and the store is left untouched.
    #[instrument(skip(self, params), fields(caller = self.account_id(), username = %params.username))]
    fn create_account(&self, params: AccountCreate) -> Result<User<'s>, AccessError> {
        if self.privilege() != Privilege::Admin {
            warn!("Account creation refused");
            return Err(AccessError::AdminRequired {
                account_id: self.account_id(),
                privilege: self.privilege(),
            });
        }

        let record = self
            .session()
            .write()
            .map(|mut store| store.create_account(params))
            .ok_or(AccessError::StoreBusy)?;
        Ok(User::from_record(&record, self.session().store))
    }

    fn view_current_orders(&self) -> Vec<Order> {
        own_orders_with_status(self.session(), OrderStatus::CURRENT)
    }

    fn view_previous_orders(&self) -> Vec<Order> {
        own_orders_with_status(self.session(), OrderStatus::PREVIOUS)
    }
}

fn own_orders_with_status(session: &Session<'_>, status: &str) -> Vec<Order> {
    let Some(store) = session.read() else {
        return Vec::new();
    };
    store
        .get_orders_for_account(session.account_id)
        .into_iter()
        .filter(|o| o.has_status(status))
        .collect()
}

/// A wrapper of either role.
#[derive(Debug, Clone)]
pub enum User<'s> {
    Standard(StandardUser<'s>),
    Admin(AdminUser<'s>),
}

impl<'s> User<'s> {
    /// Wraps a record in the wrapper matching its stored privilege.
    pub fn from_record(record: &AccountRecord, store: &'s RefCell<Store>) -> Self {
        match record.privilege {
            Privilege::Admin => User::Admin(AdminUser::from_record(record, store)),
            Privilege::Standard => User::Standard(StandardUser::from_record(record, store)),
        }
    }

    /// Unknown usernames and wrong passwords both yield `None`.
    #[instrument(skip(store, password))]
    pub fn login(store: &'s RefCell<Store>, username: &str, password: &str) -> Option<Self> {
        let record = read_store(store)?.get_account_by_username(username);
        match record {
            Some(record) if record.password == password => {
                info!(account_id = record.id, privilege = %record.privilege, "Login succeeded");
                Some(Self::from_record(&record, store))
            }
            _ => {
                warn!("Login rejected");
                None
            }
        }
    }

    pub fn as_standard(&self) -> Option<&StandardUser<'s>> {
        match self {
            User::Standard(user) => Some(user),
            User::Admin(_) => None,
        }
    }

    pub fn as_admin(&self) -> Option<&AdminUser<'s>> {
        match self {
            User::Admin(user) => Some(user),
            User::Standard(_) => None,
        }
    }

    pub fn into_standard(self) -> Option<StandardUser<'s>> {
        match self {
            User::Standard(user) => Some(user),
            User::Admin(_) => None,
        }
    }

    pub fn into_admin(self) -> Option<AdminUser<'s>> {
        match self {
            User::Admin(user) => Some(user),
            User::Standard(_) => None,
        }
    }
}

impl<'s> Account<'s> for User<'s> {
    fn session(&self) -> &Session<'s> {
        match self {
            User::Standard(user) => user.session(),
            User::Admin(user) => user.session(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{OrderCreate, PartCreate};
    use crate::users::{Administrator, Customer};

    fn store_with_accounts() -> (RefCell<Store>, AccountRecord, AccountRecord) {
        let mut store = Store::new();
        let admin = store.create_account(AccountCreate::new("admin", "admin123", Privilege::Admin));
        let customer = store.create_account(
            AccountCreate::new("conor", "pass123", Privilege::Standard)
                .with_profile("Cape Manufacturing LLC", "123 River Rd", "conor@cape-mfg.com"),
        );
        (RefCell::new(store), admin, customer)
    }

    #[test]
    fn test_login_matches_role_to_stored_privilege() {
        let (store, _, _) = store_with_accounts();

        let admin = User::login(&store, "admin", "admin123").unwrap();
        assert!(admin.as_admin().is_some());
        assert_eq!(admin.privilege(), Privilege::Admin);

        let customer = User::login(&store, "conor", "pass123").unwrap();
        assert!(customer.as_standard().is_some());
        assert_eq!(customer.username(), "conor");
    }

    #[test]
    fn test_login_rejects_unknown_user_and_wrong_password() {
        let (store, _, _) = store_with_accounts();
        assert!(User::login(&store, "ghost", "admin123").is_none());
        assert!(User::login(&store, "admin", "ADMIN123").is_none());
    }

    #[test]
    fn test_login_is_callable_from_any_wrapper() {
        let (store, _, std_record) = store_with_accounts();
        let customer = StandardUser::from_record(&std_record, &store);

        let other = customer.login("admin", "admin123").unwrap();
        assert!(matches!(other, User::Admin(_)));
    }

    #[test]
    fn test_change_password_takes_effect_for_later_logins() {
        let (store, _, std_record) = store_with_accounts();
        let customer = StandardUser::from_record(&std_record, &store);

        assert!(customer.change_password("newpass456"));
        assert!(customer.login("conor", "pass123").is_none());
        assert!(customer.login("conor", "newpass456").is_some());
    }

    #[test]
    fn test_standard_wrapper_cannot_create_accounts() {
        let (store, _, std_record) = store_with_accounts();
        let customer = StandardUser::from_record(&std_record, &store);
        let before = store.borrow().account_count();

        let result = customer.create_account(AccountCreate::new("mallory", "pw", Privilege::Admin));

        assert_eq!(
            result.unwrap_err(),
            AccessError::AdminRequired {
                account_id: std_record.id,
                privilege: Privilege::Standard,
            }
        );
        assert_eq!(store.borrow().account_count(), before);
    }

    #[test]
    fn test_admin_creates_wrapper_matching_new_role() {
        let (store, admin_record, _) = store_with_accounts();
        let admin = AdminUser::from_record(&admin_record, &store);

        let jane = admin
            .create_account(
                AccountCreate::new("jane", "pw123", Privilege::Standard)
                    .with_profile("RiverWorks", "44 Water St", "jane@riverworks.com"),
            )
            .unwrap();
        let jane = jane.into_standard().unwrap();
        assert_eq!(jane.view_account_info().company.as_deref(), Some("RiverWorks"));

        let ops = admin
            .create_account(AccountCreate::new("ops", "pw", Privilege::Admin))
            .unwrap();
        assert!(ops.as_admin().is_some());
    }

    #[test]
    fn test_order_views_are_scoped_and_case_insensitive() {
        let (store, admin_record, std_record) = store_with_accounts();
        {
            let mut s = store.borrow_mut();
            s.create_order(OrderCreate::new(std_record.id, 1.0, 1, "current", 0));
            s.create_order(OrderCreate::new(std_record.id, 1.0, 1, "Previous", 0));
            s.create_order(OrderCreate::new(std_record.id, 1.0, 1, "SHIPPED", 0));
            s.create_order(OrderCreate::new(admin_record.id, 1.0, 1, "CURRENT", 0));
        }
        let customer = StandardUser::from_record(&std_record, &store);

        let current = customer.view_current_orders();
        assert_eq!(current.len(), 1);
        assert_eq!(current[0].status, "current");
        assert_eq!(current[0].account_id, std_record.id);

        let previous = customer.view_previous_orders();
        assert_eq!(previous.len(), 1);
        assert_eq!(previous[0].status, "Previous");
    }

    #[test]
    fn test_username_is_readable_through_every_wrapper() {
        let (store, admin_record, std_record) = store_with_accounts();
        let admin = AdminUser::from_record(&admin_record, &store);
        let customer = StandardUser::from_record(&std_record, &store);
        let user = User::from_record(&std_record, &store);

        assert_eq!(admin.username(), "admin");
        assert_eq!(customer.username(), "conor");
        assert_eq!(user.username(), customer.username());
    }

    #[test]
    fn test_operations_soft_fail_while_store_is_borrowed() {
        let (store, admin_record, std_record) = store_with_accounts();
        let (bolt, order) = {
            let mut s = store.borrow_mut();
            let bolt = s.create_part(PartCreate::new("Bolt", "M8", 0.59));
            let order = s.create_order(OrderCreate::new(std_record.id, 1.18, 2, "CURRENT", bolt.id));
            (bolt, order)
        };
        let admin = AdminUser::from_record(&admin_record, &store);
        let customer = StandardUser::from_record(&std_record, &store);

        {
            let _held = store.borrow();
            assert!(customer.order_parts(bolt.id, 3).is_none());
            assert!(!customer.change_password("changed"));
            assert!(!admin.update_modify_orders(order.id, Some("PREVIOUS"), None, None));
            let refused = admin.create_account(AccountCreate::new("jane", "pw", Privilege::Standard));
            assert_eq!(refused.unwrap_err(), AccessError::StoreBusy);
        }

        {
            let _held = store.borrow_mut();
            assert!(customer.view_current_orders().is_empty());
            assert!(admin.sort_orders("Order_Price", true).is_empty());
            assert!(User::login(&store, "admin", "admin123").is_none());
        }

        let s = store.borrow();
        assert_eq!(s.order_count(), 1);
        assert_eq!(s.account_count(), 2);
        assert_eq!(s.get_order(order.id).unwrap().status, "CURRENT");
        drop(s);
        assert!(customer.login("conor", "pass123").is_some());
        assert_eq!(customer.view_current_orders().len(), 1);
    }
}
