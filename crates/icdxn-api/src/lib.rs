//! # icdxn-api
//!
//! JSON-over-HTTP surface of the curation service. Route paths follow the
//! single-page curation UI; every handler is a thin wrapper over one
//! `CurationService` operation.

pub mod endpoints;
pub mod error;
pub mod extract;
pub mod router;
pub mod server;
pub mod state;
pub mod types;

pub use error::ApiError;
pub use extract::ApiJson;
pub use router::api_router;
pub use server::serve;
pub use state::AppState;
