//! Explain output for plan selection
//!
//! Deterministic, human-readable summary of every candidate cost.

use std::fmt;

use serde::Serialize;

use super::cost::Cost;
use super::plan::PlanId;
use super::selector::{PlanChoice, SelectionReason};

/// Estimated cost of one candidate plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanCost {
    pub plan: PlanId,
    pub strategy: &'static str,
    pub cost: Cost,
}

impl PlanCost {
    pub fn new(plan: PlanId, cost: Cost) -> Self {
        Self {
            strategy: plan.strategy(),
            plan,
            cost,
        }
    }
}

/// Explain plan output
#[derive(Debug, Clone, Serialize)]
pub struct ExplainPlan {
    /// Nodes in the store the estimate was made against
    pub node_count: usize,
    /// Candidates in estimation order
    pub candidates: Vec<PlanCost>,
    /// Selected plan
    pub chosen: PlanChoice,
    /// Why it was selected
    pub reason: SelectionReason,
}

impl fmt::Display for ExplainPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== EXPLAIN PLAN ===")?;
        writeln!(f, "Nodes: {}", self.node_count)?;
        writeln!(f, "Candidates:")?;
        for candidate in &self.candidates {
            writeln!(
                f,
                "  - {} ({}): cost {}",
                candidate.plan, candidate.strategy, candidate.cost
            )?;
        }
        writeln!(f, "Chosen: {}", self.chosen.plan)?;
        writeln!(f, "Estimated Cost: {}", self.chosen.cost)?;
        writeln!(f, "Reason: {}", self.reason.as_str())?;
        Ok(())
    }
}
