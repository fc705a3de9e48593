//! Feedback table service for the theme preference survey.
//!
//! Stores one row per submitted feedback form and answers the admin view:
//!
//! - `POST /feedback` inserts a record, `201` with the stored row
//! - `GET /feedback` lists every row, newest first
//! - `GET /feedback/summary` returns the aggregated report
//! - `GET /metrics` exposes Prometheus text
//! - `GET /health`
//!
//! Rows live in memory and are appended to a JSON-lines file that is read
//! back on start.

pub mod config;
pub mod error;
pub mod routes;
pub mod server;
pub mod store;

pub use config::ServiceConfig;
pub use error::ApiError;
pub use routes::{dispatch, AppState};
pub use server::{respond, run};
pub use store::FeedbackStore;
