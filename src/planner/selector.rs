//! Plan selection
//!
//! `plan1` is chosen only when strictly cheaper than `plan2`.
//! Every other outcome, ties included, selects `plan2`.

use serde::Serialize;

use crate::storage::PartitionStore;

use super::cost::{Cost, CostEstimator};
use super::explain::{ExplainPlan, PlanCost};
use super::plan::PlanId;

/// Why the selector picked its plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SelectionReason {
    /// The chosen plan costs strictly less
    StrictlyCheaper,
    /// Costs were equal; `plan2` wins ties
    TieBreak,
}

impl SelectionReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            SelectionReason::StrictlyCheaper => "STRICTLY_CHEAPER",
            SelectionReason::TieBreak => "TIE_BREAK",
        }
    }
}

/// Selected plan and its estimated cost
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanChoice {
    pub plan: PlanId,
    pub cost: Cost,
}

/// Picks the cheapest known plan. Advisory only, never executes.
pub struct PlanSelector;

impl PlanSelector {
    /// Selects the plan to execute over `store`
    pub fn select(store: &PartitionStore) -> PlanChoice {
        let (choice, _) = Self::select_with_reason(store);
        choice
    }

    /// Selects a plan and reports every candidate cost
    pub fn explain(store: &PartitionStore) -> ExplainPlan {
        let candidates = PlanId::KNOWN
            .iter()
            .map(|plan| PlanCost::new(plan.clone(), CostEstimator::estimate(plan, store)))
            .collect();
        let (choice, reason) = Self::select_with_reason(store);

        ExplainPlan {
            node_count: store.node_count(),
            candidates,
            chosen: choice,
            reason,
        }
    }

    fn select_with_reason(store: &PartitionStore) -> (PlanChoice, SelectionReason) {
        let plan1_cost = CostEstimator::estimate(&PlanId::Plan1, store);
        let plan2_cost = CostEstimator::estimate(&PlanId::Plan2, store);

        if plan1_cost < plan2_cost {
            let choice = PlanChoice {
                plan: PlanId::Plan1,
                cost: plan1_cost,
            };
            (choice, SelectionReason::StrictlyCheaper)
        } else {
            let reason = if plan1_cost == plan2_cost {
                SelectionReason::TieBreak
            } else {
                SelectionReason::StrictlyCheaper
            };
            let choice = PlanChoice {
                plan: PlanId::Plan2,
                cost: plan2_cost,
            };
            (choice, reason)
        }
    }
}
