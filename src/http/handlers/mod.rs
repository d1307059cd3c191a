//! HTTP handlers for different API endpoints.

pub mod health;
pub mod providers;
pub mod register;

// Re-export handlers for easier access
pub use health::{healthz, route_not_found};
pub use providers::{all_providers, provider_details, providers_by_city};
pub use register::register;
