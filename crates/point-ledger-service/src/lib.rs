//! Point ledger HTTP API service.
//!
//! This crate provides the HTTP API for the point ledger, including:
//!
//! - Balance reads and history listing
//! - Charge (credit) and use (debit) operations
//! - The per-user lock registry that serializes mutations per user
//!
//! # Concurrency
//!
//! Charge and use requests for the same user are executed one at a time, in
//! arrival order; requests for different users run in parallel. Balance and
//! history reads never wait on a user's lock.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Allow some pedantic lints that are noisy for Axum handler functions
#![allow(clippy::missing_errors_doc)] // Axum handlers all return Result
#![allow(clippy::unused_async)] // Handlers need async for routing consistency

pub mod config;
pub mod error;
pub mod handlers;
pub mod ledger;
pub mod lock;
pub mod routes;
pub mod state;

pub use config::ServiceConfig;
pub use error::ApiError;
pub use ledger::PointLedger;
pub use lock::{UserLockGuard, UserLockRegistry};
pub use routes::create_router;
pub use state::AppState;
