//! Metrics registry for shardplan
//!
//! - Counters only
//! - Monotonic increase
//! - Reset only on process start

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

use crate::executor::ExecutionResult;

/// Operational counters for planning and execution
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    /// Candidate plans costed
    plans_estimated: AtomicU64,
    /// Selector decisions
    plans_selected: AtomicU64,
    /// Executions run
    queries_executed: AtomicU64,
    /// Result rows produced
    rows_emitted: AtomicU64,
    /// Orders dropped by the quantity predicate
    orders_filtered: AtomicU64,
}

impl MetricsRegistry {
    /// Create a new metrics registry with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Add costed candidates
    pub fn add_plans_estimated(&self, count: u64) {
        self.plans_estimated.fetch_add(count, Ordering::Relaxed);
    }

    /// Increment plans selected
    pub fn increment_plans_selected(&self) {
        self.plans_selected.fetch_add(1, Ordering::Relaxed);
    }

    /// Record one finished execution
    pub fn record_execution(&self, result: &ExecutionResult) {
        self.queries_executed.fetch_add(1, Ordering::Relaxed);
        self.rows_emitted
            .fetch_add(result.len() as u64, Ordering::Relaxed);
        self.orders_filtered
            .fetch_add(result.orders_filtered, Ordering::Relaxed);
    }

    /// Get all metrics as a snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            plans_estimated: self.plans_estimated.load(Ordering::Relaxed),
            plans_selected: self.plans_selected.load(Ordering::Relaxed),
            queries_executed: self.queries_executed.load(Ordering::Relaxed),
            rows_emitted: self.rows_emitted.load(Ordering::Relaxed),
            orders_filtered: self.orders_filtered.load(Ordering::Relaxed),
        }
    }
}

/// A point-in-time snapshot of all metrics
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub plans_estimated: u64,
    pub plans_selected: u64,
    pub queries_executed: u64,
    pub rows_emitted: u64,
    pub orders_filtered: u64,
}

impl MetricsSnapshot {
    /// Counters as `(name, value)` pairs for the logger
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("plans_estimated", self.plans_estimated.to_string()),
            ("plans_selected", self.plans_selected.to_string()),
            ("queries_executed", self.queries_executed.to_string()),
            ("rows_emitted", self.rows_emitted.to_string()),
            ("orders_filtered", self.orders_filtered.to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::executor::PlanExecutor;
    use crate::planner::PlanId;
    use crate::storage::{Node, Order, PartitionStore, User};

    #[test]
    fn test_new_registry_has_zero_values() {
        let snapshot = MetricsRegistry::new().snapshot();

        assert_eq!(snapshot.plans_estimated, 0);
        assert_eq!(snapshot.queries_executed, 0);
        assert_eq!(snapshot.rows_emitted, 0);
    }

    #[test]
    fn test_record_execution() {
        let store = PartitionStore::new(vec![Node::with_records(
            vec![User::new(1, "Ann", 30)],
            vec![Order::new(1, 1, "Pen", 1), Order::new(2, 1, "Pen", 3)],
        )]);
        let registry = MetricsRegistry::new();

        registry.add_plans_estimated(2);
        registry.increment_plans_selected();
        registry.record_execution(&PlanExecutor::new(&store).execute(&PlanId::Plan2));

        let snapshot = registry.snapshot();
        assert_eq!(snapshot.plans_estimated, 2);
        assert_eq!(snapshot.plans_selected, 1);
        assert_eq!(snapshot.queries_executed, 1);
        assert_eq!(snapshot.rows_emitted, 1);
        assert_eq!(snapshot.orders_filtered, 1);
    }

    #[test]
    fn test_snapshot_fields() {
        let registry = MetricsRegistry::new();
        registry.add_plans_estimated(4);

        let fields = registry.snapshot().fields();
        assert_eq!(fields.len(), 5);
        assert!(fields.contains(&("plans_estimated", "4".to_string())));
    }

    #[test]
    fn test_thread_safety() {
        use std::sync::Arc;
        use std::thread;

        let registry = Arc::new(MetricsRegistry::new());
        let mut handles = vec![];

        for _ in 0..10 {
            let reg = Arc::clone(&registry);
            handles.push(thread::spawn(move || {
                for _ in 0..100 {
                    reg.increment_plans_selected();
                }
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(registry.snapshot().plans_selected, 1000);
    }
}
