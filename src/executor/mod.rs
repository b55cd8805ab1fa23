//! Plan execution subsystem for shardplan
//!
//! Runs a selected plan against a partition store and produces joined rows.
//!
//! # Execution Flow (per node, in store order)
//!
//! - plan1: users outer, orders inner, emit on `user_id` match
//! - plan2: orders outer, skip `quantity <= 1`, users inner, emit on match
//! - unknown plan: no rows
//!
//! # Invariants
//!
//! - Joins never cross node boundaries
//! - Row order follows the nested loop order exactly
//! - Same plan + same store = same rows

mod executor;
mod filters;
mod join;
mod result;

pub use executor::PlanExecutor;
pub use filters::QuantityFilter;
pub use join::{FilteredJoin, NestedLoopJoin};
pub use result::{ExecutionResult, ResultRow, RESULT_FIELDS};
