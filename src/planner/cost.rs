//! Row-count cost model
//!
//! - plan1: total users across all nodes
//! - plan2: total orders across all nodes
//! - anything else: `MAX_COST`
//!
//! Join and filter selectivity are not modeled.

use crate::storage::PartitionStore;

use super::plan::PlanId;

/// Relative plan cost
pub type Cost = u64;

/// Sentinel cost for plans that must never be chosen
pub const MAX_COST: Cost = Cost::MAX;

/// Estimates plan costs against a store. Pure: reads only.
pub struct CostEstimator;

impl CostEstimator {
    /// Estimates the cost of running `plan` over `store`
    pub fn estimate(plan: &PlanId, store: &PartitionStore) -> Cost {
        match plan {
            PlanId::Plan1 => store.total_users(),
            PlanId::Plan2 => store.total_orders(),
            PlanId::Unknown(_) => MAX_COST,
        }
    }
}
