use std::fmt;
use std::str::FromStr;

use crate::error::ParsePrivilegeError;

pub type AccountId = u64;

/// Role tag fixed when an account is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Privilege {
    Standard,
    Admin,
}

impl Privilege {
    pub fn as_str(&self) -> &'static str {
        match self {
            Privilege::Standard => "STANDARD",
            Privilege::Admin => "ADMIN",
        }
    }
}

impl fmt::Display for Privilege {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Privilege {
    type Err = ParsePrivilegeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "STANDARD" => Ok(Privilege::Standard),
            "ADMIN" => Ok(Privilege::Admin),
            _ => Err(ParsePrivilegeError(s.to_string())),
        }
    }
}

/// Identity and profile data as held by the store.
///
/// The password is kept and compared as plain text. Profile fields are only
/// filled in for standard accounts by convention.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountRecord {
    pub id: AccountId,
    pub username: String,
    pub password: String,
    pub privilege: Privilege,
    pub company: Option<String>,
    pub shipping_address: Option<String>,
    pub contact_info: Option<String>,
}

/// Payload for creating a new account.
#[derive(Clone)]
pub struct AccountCreate {
    pub username: String,
    pub password: String,
    pub privilege: Privilege,
    pub company: Option<String>,
    pub shipping_address: Option<String>,
    pub contact_info: Option<String>,
}

impl AccountCreate {
    pub fn new(username: impl Into<String>, password: impl Into<String>, privilege: Privilege) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            privilege,
            company: None,
            shipping_address: None,
            contact_info: None,
        }
    }

    /// Attaches the standard-account profile fields.
    pub fn with_profile(
        mut self,
        company: impl Into<String>,
        shipping_address: impl Into<String>,
        contact_info: impl Into<String>,
    ) -> Self {
        self.company = Some(company.into());
        self.shipping_address = Some(shipping_address.into());
        self.contact_info = Some(contact_info.into());
        self
    }
}

// Hand-written so the password never lands in a log line.
impl fmt::Debug for AccountCreate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccountCreate")
            .field("username", &self.username)
            .field("privilege", &self.privilege)
            .field("company", &self.company)
            .field("shipping_address", &self.shipping_address)
            .field("contact_info", &self.contact_info)
            .finish_non_exhaustive()
    }
}

/// Payload for updating an existing account.
#[derive(Clone, Default)]
pub struct AccountPatch {
    pub password: Option<String>,
}

impl fmt::Debug for AccountPatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccountPatch")
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Profile view handed out by a standard user wrapper.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountInfo {
    pub id: AccountId,
    pub username: String,
    pub privilege: Privilege,
    pub company: Option<String>,
    pub shipping_address: Option<String>,
    pub contact_info: Option<String>,
}

impl fmt::Display for AccountInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let or_dash = |v: &Option<String>| v.clone().unwrap_or_else(|| "-".to_string());
        write!(
            f,
            "Account_ID={} | Username={} | Privilege={} | Company={} | Shipping={} | Contact={}",
            self.id,
            self.username,
            self.privilege,
            or_dash(&self.company),
            or_dash(&self.shipping_address),
            or_dash(&self.contact_info),
        )
    }
}
