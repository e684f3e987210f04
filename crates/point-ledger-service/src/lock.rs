//! Per-user lock registry.
//!
//! Charge and use requests for one user must behave as if executed one at a
//! time, while requests for different users proceed in parallel. The
//! registry hands out one async mutex per active user id, created on first
//! use and evicted as soon as nobody holds or waits on it, so the map does
//! not grow with the total number of users ever seen.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// Registry of per-user exclusive locks.
///
/// Entries live in a concurrent map whose shard locks guard creation and
/// eviction. A shard lock is only ever held for the map operation itself,
/// never across an await, so lookups stay cheap while a slow operation
/// holds its user's mutex.
///
/// Cloning is shallow; clones share the same set of locks.
#[derive(Clone, Default)]
pub struct UserLockRegistry {
    locks: Arc<DashMap<i64, Arc<Mutex<()>>>>,
}

impl UserLockRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire the exclusive lock for a user, waiting if it is held.
    ///
    /// Callers queued on the same user are admitted in arrival order. The
    /// returned guard releases the lock when dropped, on every exit path.
    pub async fn acquire(&self, user_id: i64) -> UserLockGuard {
        let lock = self
            .locks
            .entry(user_id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();

        let guard = lock.lock_owned().await;
        UserLockGuard {
            locks: Arc::clone(&self.locks),
            user_id,
            guard: Some(guard),
        }
    }

    /// Number of user ids that currently have a lock entry.
    #[must_use]
    pub fn active_locks(&self) -> usize {
        self.locks.len()
    }
}

/// Exclusive hold on one user's lock. Released on drop.
pub struct UserLockGuard {
    locks: Arc<DashMap<i64, Arc<Mutex<()>>>>,
    user_id: i64,
    guard: Option<OwnedMutexGuard<()>>,
}

impl Drop for UserLockGuard {
    fn drop(&mut self) {
        // Release before evicting so the next waiter wakes immediately.
        drop(self.guard.take());

        // The entry's Arc count is one per queued waiter plus one for the
        // map itself. Removal and a racing acquire both run under the same
        // shard lock, so an entry is only evicted when nobody else can
        // still reach it.
        if self
            .locks
            .remove_if(&self.user_id, |_, lock| Arc::strong_count(lock) == 1)
            .is_some()
        {
            tracing::debug!(user_id = %self.user_id, "Lock entry evicted");
        }
    }
}
