//! Common test utilities for point-ledger integration tests.

#![allow(dead_code)] // Some utilities are used by different test files

use std::ops::Range;
use std::sync::Arc;

use axum::Router;
use axum_test::TestServer;

use point_ledger_service::{create_router, AppState, PointLedger, ServiceConfig};
use point_ledger_store::{BalanceStore, MemoryBalanceStore, MemoryHistoryStore};

/// Test harness containing everything needed for integration tests.
///
/// There is no registration endpoint; users are provisioned by writing a
/// balance record straight into the store, which is what [`seed_user`]
/// does.
///
/// [`seed_user`]: TestHarness::seed_user
pub struct TestHarness {
    /// The test server for making HTTP requests.
    pub server: TestServer,
    /// Balance store handle, for seeding users and inspecting state.
    pub balances: MemoryBalanceStore,
    /// History store handle.
    pub history: MemoryHistoryStore,
}

impl TestHarness {
    /// Create a new test harness over instant stores.
    pub fn new() -> Self {
        Self::build(MemoryBalanceStore::new(), MemoryHistoryStore::new())
    }

    /// Create a harness whose stores sleep a few milliseconds per call,
    /// forcing interleavings in the concurrency tests.
    pub fn with_slow_stores() -> Self {
        let latency: Range<u64> = 1..15;
        Self::build(
            MemoryBalanceStore::with_latency(latency.clone()),
            MemoryHistoryStore::with_latency(latency),
        )
    }

    fn build(balances: MemoryBalanceStore, history: MemoryHistoryStore) -> Self {
        let ledger = PointLedger::new(Arc::new(balances.clone()), Arc::new(history.clone()));

        let config = ServiceConfig {
            listen_addr: "127.0.0.1:0".into(),
            cors_origins: vec!["*".into()],
            max_body_bytes: 1024 * 1024,
            request_timeout_seconds: 30,
        };

        let state = AppState::new(Arc::new(ledger), config);
        let router: Router = create_router(state);

        let server = TestServer::new(router).expect("Failed to create test server");

        Self {
            server,
            balances,
            history,
        }
    }

    /// Provision a user by writing a balance record into the store.
    pub async fn seed_user(&self, user_id: i64, point: i64) {
        self.balances
            .put(user_id, point)
            .await
            .expect("Failed to seed balance");
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}
