//! Order predicates for the filtered join

use crate::storage::Order;

/// Keeps orders whose quantity is strictly above a threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantityFilter {
    min_exclusive: u32,
}

impl QuantityFilter {
    /// Threshold used by plan2 (`quantity > 1`)
    pub const PLAN2_THRESHOLD: u32 = 1;

    pub fn new(min_exclusive: u32) -> Self {
        Self { min_exclusive }
    }

    /// Checks if an order passes the filter
    pub fn matches(&self, order: &Order) -> bool {
        order.quantity > self.min_exclusive
    }
}

impl Default for QuantityFilter {
    fn default() -> Self {
        Self::new(Self::PLAN2_THRESHOLD)
    }
}
