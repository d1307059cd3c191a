//! # Provider Directory Library
//!
//! A small REST backend exposing provider lookup endpoints and a
//! user-registration endpoint with field validation.
//!
//! This library provides components for:
//! - **Routing**: a declarative route table dispatching to handler functions
//! - **Validation**: a pure, stateless check of registration request bodies
//! - **Stores**: trait-abstracted provider and account storage with in-memory
//!   implementations
//! - **Seeding**: YAML-based provider seed data loaded at startup
//!
//! # Examples
//!
//! ```no_run
//! use std::sync::Arc;
//! use provider_directory_rs::{MemoryAccounts, MemoryDirectory, http::build_router};
//!
//! # fn example() -> std::io::Result<()> {
//! // Create the backing stores
//! let directory = Arc::new(MemoryDirectory::new());
//! let accounts = Arc::new(MemoryAccounts::new());
//!
//! // Build HTTP router with state
//! let state = provider_directory_rs::http::AppState::builder()
//!     .with_directory(directory)
//!     .with_accounts(accounts)
//!     .build()?;
//! let app = build_router(state);
//! # Ok(())
//! # }
//! ```

pub mod http;
pub mod seed;
pub mod store;
pub mod validation;

// Re-export commonly used types for convenience
pub use seed::DirectorySeed;
pub use store::{
    AccountRecord, AccountStore, MemoryAccounts, MemoryDirectory, NewAccount, Provider,
    ProviderStore,
};
pub use validation::{validate, Field, RegisterRequest, ValidationOutcome};
