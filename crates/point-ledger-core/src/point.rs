//! Balance and history types for the point ledger.
//!
//! This module defines the per-user balance record and the append-only
//! history rows that track every accepted balance change.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Ceiling for a single user's balance.
///
/// A charge is rejected when the post-charge balance would reach or exceed
/// this value, so the largest storable balance is `MAX_POINT_BALANCE - 1`.
pub const MAX_POINT_BALANCE: i64 = 10_000_000;

/// A user's current point balance.
///
/// One record per user. Balances are only ever replaced wholesale under the
/// user's lock; `updated_at` is stamped by the store on every write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPoint {
    /// The owning user.
    pub user_id: i64,

    /// Current balance. Never negative.
    pub point: i64,

    /// When the balance last changed.
    pub updated_at: DateTime<Utc>,
}

impl UserPoint {
    /// Create a balance record stamped with the current time.
    #[must_use]
    pub fn new(user_id: i64, point: i64) -> Self {
        Self {
            user_id,
            point,
            updated_at: Utc::now(),
        }
    }
}

/// One accepted charge or spend.
///
/// History rows are append-only and carry the amount that was applied, not
/// the resulting balance. IDs are assigned by the store and increase in
/// insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointHistory {
    /// Store-assigned monotonic identifier.
    pub id: i64,

    /// The user whose balance changed.
    pub user_id: i64,

    /// The amount charged or spent. Always positive.
    pub amount: i64,

    /// Whether points were charged or used.
    #[serde(rename = "type")]
    pub kind: TransactionType,

    /// When the operation was accepted.
    pub created_at: DateTime<Utc>,
}

/// Type of balance change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    /// Points added to the balance.
    Charge,

    /// Points deducted from the balance.
    Use,
}

impl TransactionType {
    /// Check if this transaction type adds points.
    #[must_use]
    pub const fn is_charge(&self) -> bool {
        matches!(self, Self::Charge)
    }

    /// Check if this transaction type deducts points.
    #[must_use]
    pub const fn is_use(&self) -> bool {
        matches!(self, Self::Use)
    }
}
