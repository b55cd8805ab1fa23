//! Per-node join strategies
//!
//! Both joins are nested loops confined to a single node. The loop nesting
//! defines output order, so neither may be swapped for an unordered join.

use crate::storage::Node;

use super::filters::QuantityFilter;
use super::result::ResultRow;

/// plan1: users outer, orders inner
pub struct NestedLoopJoin;

impl NestedLoopJoin {
    /// Appends every matching user/order pair of `node` to `out`
    pub fn join_node(node: &Node, out: &mut Vec<ResultRow>) {
        for user in &node.users {
            for order in &node.orders {
                if order.belongs_to(user) {
                    out.push(ResultRow::joined(user, order));
                }
            }
        }
    }
}

/// plan2: orders outer (filtered), users inner
pub struct FilteredJoin {
    filter: QuantityFilter,
}

impl FilteredJoin {
    pub fn new(filter: QuantityFilter) -> Self {
        Self { filter }
    }

    /// Appends matches for orders passing the filter.
    ///
    /// Returns the number of orders the filter rejected.
    pub fn join_node(&self, node: &Node, out: &mut Vec<ResultRow>) -> u64 {
        let mut rejected = 0;

        for order in &node.orders {
            if !self.filter.matches(order) {
                rejected += 1;
                continue;
            }

            for user in &node.users {
                if order.belongs_to(user) {
                    out.push(ResultRow::joined(user, order));
                }
            }
        }

        rejected
    }
}

impl Default for FilteredJoin {
    fn default() -> Self {
        Self::new(QuantityFilter::default())
    }
}
