//! HTTP server with provider lookup and user registration endpoints.

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::build_router;
pub use state::AppState;
