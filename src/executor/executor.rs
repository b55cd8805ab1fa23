//! Plan executor for shardplan
//!
//! Dispatches a plan id to its join strategy and runs it node by node in
//! store order. Unknown plans produce an empty result rather than an error.

use crate::planner::PlanId;
use crate::storage::PartitionStore;

use super::join::{FilteredJoin, NestedLoopJoin};
use super::result::ExecutionResult;

/// Executes plans against a borrowed store
pub struct PlanExecutor<'a> {
    store: &'a PartitionStore,
}

impl<'a> PlanExecutor<'a> {
    /// Creates a new executor
    pub fn new(store: &'a PartitionStore) -> Self {
        Self { store }
    }

    /// Executes `plan` and returns its rows.
    ///
    /// This method is deterministic: same plan + same store = same rows.
    pub fn execute(&self, plan: &PlanId) -> ExecutionResult {
        let mut result = ExecutionResult::empty(plan.clone());

        match plan {
            PlanId::Plan1 => {
                for node in self.store.nodes() {
                    NestedLoopJoin::join_node(node, &mut result.rows);
                    result.nodes_scanned += 1;
                }
            }
            PlanId::Plan2 => {
                let join = FilteredJoin::default();
                for node in self.store.nodes() {
                    result.orders_filtered += join.join_node(node, &mut result.rows);
                    result.nodes_scanned += 1;
                }
            }
            PlanId::Unknown(_) => {}
        }

        result
    }
}
