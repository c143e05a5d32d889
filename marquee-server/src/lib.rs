//! HTTP surface of the Marquee movie catalog.
//!
//! The binary wires configuration, storage and this router together; the
//! library half exists so integration tests can build the same router.

pub mod errors;
pub mod handlers;
pub mod infra;
pub mod response;
pub mod routes;

pub use infra::app_state::AppState;
pub use routes::create_router;
