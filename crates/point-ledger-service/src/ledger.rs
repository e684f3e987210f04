//! Ledger operations.
//!
//! Every balance mutation runs as a read-modify-write under the owning
//! user's lock: validate, load, apply the business rule, write the new
//! balance, then append a history row. Reads skip the lock entirely and
//! may land before or after a concurrent writer.

use std::sync::Arc;

use chrono::Utc;

use point_ledger_core::{
    PointError, PointHistory, Result, TransactionType, UserPoint, MAX_POINT_BALANCE,
};
use point_ledger_store::{BalanceStore, HistoryStore};

use crate::lock::UserLockRegistry;

/// The point ledger: balance reads and serialized balance mutations.
///
/// Owns the per-user lock registry for its whole lifetime; create one
/// ledger per process and share it behind an `Arc`.
pub struct PointLedger {
    balances: Arc<dyn BalanceStore>,
    history: Arc<dyn HistoryStore>,
    locks: UserLockRegistry,
}

impl PointLedger {
    /// Create a ledger over the given stores.
    #[must_use]
    pub fn new(balances: Arc<dyn BalanceStore>, history: Arc<dyn HistoryStore>) -> Self {
        Self {
            balances,
            history,
            locks: UserLockRegistry::new(),
        }
    }

    /// Add points to a user's balance.
    ///
    /// Runs under the user's lock. Fails without touching the balance when
    /// the amount is missing or not positive, the user has no balance
    /// record, or the new balance would reach [`MAX_POINT_BALANCE`].
    ///
    /// # Errors
    ///
    /// Returns `InvalidAmount`, `UserNotFound`, `BalanceCeilingExceeded`,
    /// or `Storage` if a store call fails.
    pub async fn charge(&self, user_id: i64, amount: Option<i64>) -> Result<UserPoint> {
        let _guard = self.locks.acquire(user_id).await;

        let amount = validate_amount(amount)?;
        let current = self.load_balance(user_id).await?;

        let new_point = current
            .point
            .checked_add(amount)
            .filter(|total| *total < MAX_POINT_BALANCE)
            .ok_or(PointError::BalanceCeilingExceeded {
                balance: current.point,
                amount,
            })?;

        let updated = self.balances.put(user_id, new_point).await?;
        self.record(user_id, amount, TransactionType::Charge).await?;

        tracing::info!(
            user_id = %user_id,
            amount = %amount,
            balance = %updated.point,
            "Points charged"
        );
        Ok(updated)
    }

    /// Deduct points from a user's balance.
    ///
    /// Runs under the user's lock. Beyond the charge failure modes, fails
    /// when the amount exceeds the current balance. Spending the exact
    /// balance is allowed and leaves zero.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAmount`, `UserNotFound`, `InsufficientBalance`, or
    /// `Storage` if a store call fails.
    pub async fn use_points(&self, user_id: i64, amount: Option<i64>) -> Result<UserPoint> {
        let _guard = self.locks.acquire(user_id).await;

        let amount = validate_amount(amount)?;
        let current = self.load_balance(user_id).await?;

        if amount > current.point {
            return Err(PointError::InsufficientBalance {
                balance: current.point,
                required: amount,
            });
        }

        let updated = self.balances.put(user_id, current.point - amount).await?;
        self.record(user_id, amount, TransactionType::Use).await?;

        tracing::info!(
            user_id = %user_id,
            amount = %amount,
            balance = %updated.point,
            "Points used"
        );
        Ok(updated)
    }

    /// Get a user's balance record.
    ///
    /// Reads without taking the user's lock, so the result may be stale
    /// against an in-flight mutation. Only negative ids are rejected.
    ///
    /// # Errors
    ///
    /// Returns `InvalidUserId`, `UserNotFound`, or `Storage`.
    pub async fn balance(&self, user_id: i64) -> Result<UserPoint> {
        if user_id < 0 {
            return Err(PointError::InvalidUserId { user_id });
        }
        self.load_balance(user_id).await
    }

    /// List a user's history rows, ascending by id.
    ///
    /// Reads without taking the user's lock. Rejects non-positive ids;
    /// unlike [`balance`](Self::balance), id zero is rejected here too.
    ///
    /// # Errors
    ///
    /// Returns `InvalidUserId`, `UserNotFound`, or `Storage`.
    pub async fn history(&self, user_id: i64) -> Result<Vec<PointHistory>> {
        if user_id <= 0 {
            return Err(PointError::InvalidUserId { user_id });
        }
        self.load_balance(user_id).await?;

        let mut rows = self.history.list_by_user(user_id).await?;
        rows.retain(|row| row.user_id == user_id);
        rows.sort_by_key(|row| row.id);
        Ok(rows)
    }

    /// Number of users whose lock entry is currently live.
    #[must_use]
    pub fn active_locks(&self) -> usize {
        self.locks.active_locks()
    }

    async fn load_balance(&self, user_id: i64) -> Result<UserPoint> {
        self.balances
            .get(user_id)
            .await?
            .ok_or(PointError::UserNotFound { user_id })
    }

    /// Append a history row for an already-written balance change.
    ///
    /// The balance write stays in place even when the append fails; history
    /// is advisory, the balance is authoritative.
    async fn record(&self, user_id: i64, amount: i64, kind: TransactionType) -> Result<()> {
        if let Err(err) = self.history.append(user_id, amount, kind, Utc::now()).await {
            tracing::warn!(
                user_id = %user_id,
                amount = %amount,
                error = %err,
                "Balance updated but history append failed"
            );
            return Err(err.into());
        }
        Ok(())
    }
}

fn validate_amount(amount: Option<i64>) -> Result<i64> {
    amount
        .filter(|value| *value > 0)
        .ok_or(PointError::InvalidAmount)
}
