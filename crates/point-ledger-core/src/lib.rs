//! Core types for the point ledger service.
//!
//! This crate provides the foundational types used throughout the point
//! ledger:
//!
//! - **Balances**: `UserPoint`, one record per user
//! - **History**: `PointHistory`, `TransactionType`, one append-only row per
//!   accepted charge or spend
//! - **Errors**: `PointError`, the domain error shared by every operation
//!
//! # Point Unit
//!
//! Points are plain integers with no currency attached. Balances are stored
//! as `i64` and are never negative; a single balance is capped strictly
//! below [`MAX_POINT_BALANCE`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod point;

pub use error::{PointError, Result};
pub use point::{PointHistory, TransactionType, UserPoint, MAX_POINT_BALANCE};
