//! Storage layer for the point ledger.
//!
//! Balances and history rows live behind two async traits so the ledger can
//! run against the bundled in-memory backend in tests and demos, or a real
//! database behind the same contract.
//!
//! # Contract
//!
//! - [`BalanceStore`] holds one record per user, replaced wholesale on every
//!   write. `put` stamps a fresh `updated_at` and is the provisioning path:
//!   writing a balance for an unknown user creates the record.
//! - [`HistoryStore`] is append-only and assigns monotonic ids in insertion
//!   order. Neither trait offers a cross-call transaction; callers that need
//!   a read-modify-write to be exclusive serialize it themselves.
//!
//! # Example
//!
//! ```
//! use point_ledger_store::{BalanceStore, MemoryBalanceStore};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let store = MemoryBalanceStore::new();
//!
//! store.put(1, 500).await.unwrap();
//! let record = store.get(1).await.unwrap().unwrap();
//! assert_eq!(record.point, 500);
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod memory;

pub use error::{Result, StoreError};
pub use memory::{MemoryBalanceStore, MemoryHistoryStore};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use point_ledger_core::{PointHistory, TransactionType, UserPoint};

/// Storage for per-user balance records.
#[async_trait]
pub trait BalanceStore: Send + Sync {
    /// Get a user's balance record, or `None` if the user has none.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend operation fails.
    async fn get(&self, user_id: i64) -> Result<Option<UserPoint>>;

    /// Create or replace a user's balance record.
    ///
    /// The store stamps a fresh `updated_at` and returns the stored record.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend operation fails.
    async fn put(&self, user_id: i64, point: i64) -> Result<UserPoint>;
}

/// Append-only storage for balance-change history.
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// Append a history row, assigning the next monotonic id.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend operation fails.
    async fn append(
        &self,
        user_id: i64,
        amount: i64,
        kind: TransactionType,
        at: DateTime<Utc>,
    ) -> Result<PointHistory>;

    /// List the rows recorded for a user.
    ///
    /// Order is backend-defined; callers that need a specific order sort.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend operation fails.
    async fn list_by_user(&self, user_id: i64) -> Result<Vec<PointHistory>>;
}
