//! HTTP surface for the cross-lingual sentiment service
//!
//! Single orchestration endpoint (`POST /analyze`) sequencing the
//! translation gateway and the sentiment classifier, plus read-only
//! health, language-table, and metrics endpoints.

pub mod error;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::app;
pub use state::AppState;
