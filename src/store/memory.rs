//! In-memory store implementations.
//!
//! This module provides the in-memory provider directory and account store
//! used by the server binary and the test suites. The directory keeps a
//! secondary city index for fast by-city lookup.

use std::sync::RwLock;

use fnv::FnvHashMap;

use crate::store::{AccountRecord, AccountStore, NewAccount, Provider, ProviderStore, StoreError};

/// In-memory provider directory with a city index.
pub struct MemoryDirectory {
    /// Map from partner id to provider record
    providers: RwLock<FnvHashMap<String, Provider>>,
    /// City index for fast lookup, keyed by lowercased city
    city_index: RwLock<FnvHashMap<String, Vec<String>>>,
}

impl Default for MemoryDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDirectory {
    /// Create a new empty in-memory directory.
    ///
    /// # Returns
    /// Returns a new `MemoryDirectory` instance with empty records and city index.
    pub fn new() -> Self {
        Self {
            providers: RwLock::new(FnvHashMap::default()),
            city_index: RwLock::new(FnvHashMap::default()),
        }
    }

    /// Create a directory pre-populated with the given providers.
    ///
    /// # Parameters
    ///
    /// - `providers` - Provider records to insert
    ///
    /// # Returns
    ///
    /// Returns a populated `MemoryDirectory` instance.
    pub fn with_providers(providers: impl IntoIterator<Item = Provider>) -> Self {
        let directory = Self::new();
        for provider in providers {
            directory.insert(provider);
        }
        directory
    }

    /// Add or replace a provider record.
    ///
    /// # Parameters
    ///
    /// - `provider` - Record to insert; replaces an existing record with the
    ///   same partner id
    pub fn insert(&self, provider: Provider) {
        // Never hold both locks at once.
        let previous = {
            let mut providers = self.providers.write().unwrap();
            providers.insert(provider.partner_id.clone(), provider.clone())
        };

        if let Some(previous) = previous {
            self.remove_from_city_index(&previous);
        }
        self.update_city_index(&provider);
    }

    /// Update city index for a new or replaced record.
    fn update_city_index(&self, provider: &Provider) {
        let mut index = self.city_index.write().unwrap();

        let ids = index.entry(provider.city.to_lowercase()).or_default();
        if !ids.contains(&provider.partner_id) {
            ids.push(provider.partner_id.clone());
        }
    }

    /// Drop a replaced record's entry from the city index.
    fn remove_from_city_index(&self, provider: &Provider) {
        let mut index = self.city_index.write().unwrap();

        if let Some(ids) = index.get_mut(&provider.city.to_lowercase()) {
            ids.retain(|id| id != &provider.partner_id);
        }
    }
}

impl ProviderStore for MemoryDirectory {
    fn all(&self) -> Vec<Provider> {
        let providers = self.providers.read().unwrap();
        let mut records: Vec<Provider> = providers.values().cloned().collect();
        // Sorted for deterministic listings.
        records.sort_by(|a, b| a.partner_id.cmp(&b.partner_id));
        records
    }

    fn find_by_partner_id(&self, partner_id: &str) -> Option<Provider> {
        let providers = self.providers.read().unwrap();
        providers.get(partner_id).cloned()
    }

    fn find_by_city(&self, city: &str) -> Vec<Provider> {
        let ids = {
            let index = self.city_index.read().unwrap();
            index.get(&city.to_lowercase()).cloned().unwrap_or_default()
        };

        let providers = self.providers.read().unwrap();
        ids.iter().filter_map(|id| providers.get(id).cloned()).collect()
    }
}

/// In-memory account store keyed by email.
pub struct MemoryAccounts {
    /// Map from email to created account
    accounts: RwLock<FnvHashMap<String, AccountRecord>>,
    /// Next account id
    next_id: RwLock<u64>,
}

impl Default for MemoryAccounts {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryAccounts {
    /// Create a new empty account store.
    pub fn new() -> Self {
        Self { accounts: RwLock::new(FnvHashMap::default()), next_id: RwLock::new(1) }
    }
}

impl AccountStore for MemoryAccounts {
    fn create_account(&self, account: NewAccount) -> Result<AccountRecord, StoreError> {
        let mut accounts = self.accounts.write().unwrap();

        if accounts.contains_key(&account.email) {
            return Err(StoreError::DuplicateEmail(account.email));
        }

        let id = {
            let mut next_id = self.next_id.write().unwrap();
            let id = *next_id;
            *next_id += 1;
            id
        };

        let record = AccountRecord {
            id,
            name: account.name,
            email: account.email,
            phone_number: account.phone_number,
            created_at: time::OffsetDateTime::now_utc().unix_timestamp(),
        };
        accounts.insert(record.email.clone(), record.clone());
        Ok(record)
    }

    fn find_by_email(&self, email: &str) -> Option<AccountRecord> {
        let accounts = self.accounts.read().unwrap();
        accounts.get(email).cloned()
    }
}
