//! Store implementations and abstractions.
//!
//! This module provides storage abstractions for provider records and user
//! accounts. It includes traits for the two storage concerns and the
//! in-memory implementations used by the server and tests.

pub mod memory;

// Re-export main implementations
pub use memory::{MemoryAccounts, MemoryDirectory};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced by account creation.
#[derive(Debug, Error)]
pub enum StoreError {
    /// An account with the same email already exists.
    #[error("account with email {0} already exists")]
    DuplicateEmail(String),
}

/// Read-only access to provider records.
///
/// This trait provides the lookup operations the provider endpoints need,
/// allowing different implementations (in-memory, database-backed, remote).
pub trait ProviderStore: Send + Sync {
    /// Get all providers in the directory.
    ///
    /// # Returns
    ///
    /// Returns every provider record, in insertion order where possible.
    fn all(&self) -> Vec<Provider>;

    /// Look up a single provider by partner id.
    ///
    /// # Parameters
    ///
    /// - `partner_id` - Exact partner id to look up
    ///
    /// # Returns
    ///
    /// Returns the provider if one is registered under the id.
    fn find_by_partner_id(&self, partner_id: &str) -> Option<Provider>;

    /// Look up providers serving a city.
    ///
    /// # Parameters
    ///
    /// - `city` - City name, matched case-insensitively
    ///
    /// # Returns
    ///
    /// Returns all providers in the city, or an empty vector if none.
    fn find_by_city(&self, city: &str) -> Vec<Provider>;
}

/// Account creation for validated registration requests.
pub trait AccountStore: Send + Sync {
    /// Create a new user account.
    ///
    /// # Parameters
    ///
    /// - `account` - Validated account fields
    ///
    /// # Returns
    ///
    /// Returns the created record, or [`StoreError::DuplicateEmail`] if the
    /// email is already registered.
    fn create_account(&self, account: NewAccount) -> Result<AccountRecord, StoreError>;

    /// Look up an account by email.
    fn find_by_email(&self, email: &str) -> Option<AccountRecord>;
}

/// A service provider record, identified by partner id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provider {
    pub partner_id: String,
    pub name: String,
    pub city: String,
    /// Services the provider offers, free-form labels.
    #[serde(default)]
    pub services: Vec<String>,
}

impl Provider {
    /// Create a new provider record with no services listed.
    ///
    /// # Parameters
    ///
    /// - `partner_id` - Unique partner id
    /// - `name` - Display name
    /// - `city` - City the provider serves
    ///
    /// # Returns
    ///
    /// Returns a new `Provider` instance.
    pub fn new(
        partner_id: impl Into<String>,
        name: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        Self {
            partner_id: partner_id.into(),
            name: name.into(),
            city: city.into(),
            services: Vec::new(),
        }
    }
}

/// Validated fields for a new account, as accepted by [`AccountStore`].
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone_number: String,
}

impl From<&crate::validation::RegisterRequest> for NewAccount {
    fn from(request: &crate::validation::RegisterRequest) -> Self {
        Self {
            name: request.name.trim().to_string(),
            email: request.email.trim().to_string(),
            password: request.password.clone(),
            phone_number: request.phone_number.trim().to_string(),
        }
    }
}

/// A created user account. The password is never part of the record that
/// leaves the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountRecord {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    /// Creation time as Unix seconds.
    pub created_at: i64,
}
