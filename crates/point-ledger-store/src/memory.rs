//! In-memory storage backends.
//!
//! Both stores are cloneable handles over shared state, so a test can keep a
//! handle for seeding and inspection while the ledger owns another. The
//! optional simulated latency mirrors the jittery table access of a real
//! backend: each call sleeps a random number of milliseconds first, which is
//! what forces interesting interleavings in concurrency tests.

use std::collections::HashMap;
use std::ops::Range;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rand::Rng;
use tokio::sync::RwLock;

use point_ledger_core::{PointHistory, TransactionType, UserPoint};

use crate::{BalanceStore, HistoryStore, Result};

/// In-memory balance records, keyed by user id.
#[derive(Clone, Default)]
pub struct MemoryBalanceStore {
    records: Arc<RwLock<HashMap<i64, UserPoint>>>,
    latency: Option<Range<u64>>,
}

impl MemoryBalanceStore {
    /// Create an empty store with no simulated latency.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store that sleeps a random number of milliseconds,
    /// drawn from the given non-empty range, before every call.
    #[must_use]
    pub fn with_latency(latency: Range<u64>) -> Self {
        Self {
            records: Arc::default(),
            latency: Some(latency),
        }
    }
}

#[async_trait]
impl BalanceStore for MemoryBalanceStore {
    async fn get(&self, user_id: i64) -> Result<Option<UserPoint>> {
        simulate_io(self.latency.as_ref()).await;

        let records = self.records.read().await;
        Ok(records.get(&user_id).cloned())
    }

    async fn put(&self, user_id: i64, point: i64) -> Result<UserPoint> {
        simulate_io(self.latency.as_ref()).await;

        let record = UserPoint::new(user_id, point);
        let mut records = self.records.write().await;
        records.insert(user_id, record.clone());
        Ok(record)
    }
}

/// In-memory append-only history rows.
#[derive(Clone)]
pub struct MemoryHistoryStore {
    inner: Arc<RwLock<HistoryRows>>,
    latency: Option<Range<u64>>,
}

struct HistoryRows {
    rows: Vec<PointHistory>,
    next_id: i64,
}

impl MemoryHistoryStore {
    /// Create an empty store with no simulated latency.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(HistoryRows {
                rows: Vec::new(),
                next_id: 1,
            })),
            latency: None,
        }
    }

    /// Create an empty store that sleeps a random number of milliseconds,
    /// drawn from the given non-empty range, before every call.
    #[must_use]
    pub fn with_latency(latency: Range<u64>) -> Self {
        Self {
            latency: Some(latency),
            ..Self::new()
        }
    }
}

impl Default for MemoryHistoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HistoryStore for MemoryHistoryStore {
    async fn append(
        &self,
        user_id: i64,
        amount: i64,
        kind: TransactionType,
        at: DateTime<Utc>,
    ) -> Result<PointHistory> {
        simulate_io(self.latency.as_ref()).await;

        // Id assignment and insertion happen under one write guard so ids
        // are gapless and rows stay in id order.
        let mut inner = self.inner.write().await;
        let row = PointHistory {
            id: inner.next_id,
            user_id,
            amount,
            kind,
            created_at: at,
        };
        inner.next_id += 1;
        inner.rows.push(row.clone());
        Ok(row)
    }

    async fn list_by_user(&self, user_id: i64) -> Result<Vec<PointHistory>> {
        simulate_io(self.latency.as_ref()).await;

        let inner = self.inner.read().await;
        Ok(inner
            .rows
            .iter()
            .filter(|row| row.user_id == user_id)
            .cloned()
            .collect())
    }
}

async fn simulate_io(latency: Option<&Range<u64>>) {
    if let Some(range) = latency {
        let millis = rand::rng().random_range(range.clone());
        tokio::time::sleep(Duration::from_millis(millis)).await;
    }
}
