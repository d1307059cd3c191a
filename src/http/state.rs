//! Application state and configuration for the HTTP server.

use std::io;
use std::sync::Arc;

use crate::store::{AccountStore, MemoryAccounts, ProviderStore};

/// Application state shared across all HTTP handlers.
///
/// Handlers receive the stores behind trait objects so the serving layer
/// never depends on a concrete storage implementation.
#[derive(Clone)]
pub struct AppState {
    /// Provider directory queried by the lookup endpoints
    pub directory: Arc<dyn ProviderStore>,
    /// Account store used by registration
    pub accounts: Arc<dyn AccountStore>,
}

impl AppState {
    /// Create new application state from its stores.
    ///
    /// # Parameters
    ///
    /// - `directory` - Provider store implementation
    /// - `accounts` - Account store implementation
    ///
    /// # Returns
    ///
    /// Returns configured `AppState` instance.
    pub fn new(directory: Arc<dyn ProviderStore>, accounts: Arc<dyn AccountStore>) -> Self {
        Self { directory, accounts }
    }

    /// Get a builder for configuring application state step by step.
    ///
    /// # Returns
    ///
    /// Returns an `AppStateBuilder` for fluent configuration.
    pub fn builder() -> AppStateBuilder {
        AppStateBuilder::new()
    }
}

/// Builder for constructing `AppState` with a fluent interface.
#[derive(Default)]
pub struct AppStateBuilder {
    directory: Option<Arc<dyn ProviderStore>>,
    accounts: Option<Arc<dyn AccountStore>>,
}

impl AppStateBuilder {
    /// Create a new builder with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the provider store implementation.
    ///
    /// # Parameters
    ///
    /// - `directory` - Provider store to use
    ///
    /// # Returns
    ///
    /// Returns the builder for method chaining.
    pub fn with_directory(mut self, directory: Arc<dyn ProviderStore>) -> Self {
        self.directory = Some(directory);
        self
    }

    /// Set the account store implementation.
    ///
    /// # Parameters
    ///
    /// - `accounts` - Account store to use
    ///
    /// # Returns
    ///
    /// Returns the builder for method chaining.
    pub fn with_accounts(mut self, accounts: Arc<dyn AccountStore>) -> Self {
        self.accounts = Some(accounts);
        self
    }

    /// Build the final `AppState` with validation.
    ///
    /// # Returns
    ///
    /// Returns `Ok(AppState)` if valid.
    ///
    /// # Errors
    ///
    /// Returns error if no provider store is provided. The account store
    /// defaults to a fresh in-memory store.
    pub fn build(self) -> io::Result<AppState> {
        let directory = self.directory.ok_or(io::Error::new(
            io::ErrorKind::InvalidInput,
            "Provider store is required for AppState",
        ))?;

        let accounts: Arc<dyn AccountStore> =
            self.accounts.unwrap_or_else(|| Arc::new(MemoryAccounts::new()));

        Ok(AppState::new(directory, accounts))
    }
}
