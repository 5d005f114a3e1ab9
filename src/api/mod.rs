//! HTTP API for the triage pipeline.
//!
//! Routes are nested under `/api/` with permissive CORS and request
//! tracing. The router is composable: `api_router()` returns a `Router`
//! that can be mounted on any axum server instance.

pub mod endpoints;
pub mod error;
pub mod router;
pub mod server;
pub mod types;

pub use router::api_router;
pub use server::{start_server, ApiServer};
pub use types::ApiContext;
