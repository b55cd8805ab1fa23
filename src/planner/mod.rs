//! Plan selection subsystem for shardplan
//!
//! Chooses between the two fixed execution strategies for
//! `SELECT * FROM users JOIN orders ON users.user_id = orders.user_id`.
//!
//! # Design Principles
//!
//! - Closed plan set: `plan1` (join) and `plan2` (filtered join)
//! - Unknown plans are disqualified with `MAX_COST`, never rejected
//! - Cost is a row-count proxy, not time
//! - Deterministic: same store → same choice
//!
//! # Selection Rule
//!
//! `plan1` wins only when strictly cheaper. Equal costs select `plan2`.

mod cost;
mod explain;
mod plan;
mod selector;

pub use cost::{Cost, CostEstimator, MAX_COST};
pub use explain::{ExplainPlan, PlanCost};
pub use plan::PlanId;
pub use selector::{PlanChoice, PlanSelector, SelectionReason};
