//! Result types for plan execution

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::planner::PlanId;
use crate::storage::{Order, User};

/// Field names present in every result row, in output order
pub const RESULT_FIELDS: [&str; 6] = ["age", "name", "order_id", "product", "quantity", "user_id"];

/// One joined user/order pair with every value rendered as text.
///
/// Fields iterate in name order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResultRow {
    fields: BTreeMap<&'static str, String>,
}

impl ResultRow {
    /// Materializes the row for a matching user and order
    pub fn joined(user: &User, order: &Order) -> Self {
        let mut fields = BTreeMap::new();
        fields.insert("user_id", user.user_id.to_string());
        fields.insert("name", user.name.clone());
        fields.insert("age", user.age.to_string());
        fields.insert("order_id", order.order_id.to_string());
        fields.insert("product", order.product.clone());
        fields.insert("quantity", order.quantity.to_string());
        Self { fields }
    }

    /// Returns the value of a field, if the name is a result field
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Iterates `(field, value)` pairs in name order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.fields.iter().map(|(k, v)| (*k, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl fmt::Display for ResultRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in self.iter() {
            write!(f, "{}: {}, ", key, value)?;
        }
        Ok(())
    }
}

/// Result of executing a plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExecutionResult {
    /// Plan that produced the rows
    pub plan: PlanId,
    /// Rows in execution order
    pub rows: Vec<ResultRow>,
    /// Nodes visited
    pub nodes_scanned: usize,
    /// Orders rejected by the quantity predicate (plan2 only)
    pub orders_filtered: u64,
}

impl ExecutionResult {
    /// Creates an empty result for `plan`
    pub fn empty(plan: PlanId) -> Self {
        Self {
            plan,
            rows: Vec::new(),
            nodes_scanned: 0,
            orders_filtered: 0,
        }
    }

    /// Returns true if no rows were produced
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns an iterator over the rows
    pub fn iter(&self) -> impl Iterator<Item = &ResultRow> {
        self.rows.iter()
    }

    /// Returns at most the first `limit` rows
    pub fn preview(&self, limit: usize) -> &[ResultRow] {
        &self.rows[..self.rows.len().min(limit)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ann_pen() -> ResultRow {
        ResultRow::joined(&User::new(1, "Ann", 30), &Order::new(2, 1, "Pen", 3))
    }

    #[test]
    fn test_row_has_all_fields() {
        let row = ann_pen();
        assert_eq!(row.len(), RESULT_FIELDS.len());
        for field in RESULT_FIELDS {
            assert!(row.get(field).is_some(), "missing {}", field);
        }
        assert_eq!(row.get("user_id"), Some("1"));
        assert_eq!(row.get("name"), Some("Ann"));
        assert_eq!(row.get("age"), Some("30"));
        assert_eq!(row.get("order_id"), Some("2"));
        assert_eq!(row.get("product"), Some("Pen"));
        assert_eq!(row.get("quantity"), Some("3"));
        assert_eq!(row.get("email"), None);
    }

    #[test]
    fn test_row_iterates_in_name_order() {
        let keys: Vec<_> = ann_pen().iter().map(|(k, _)| k).collect();
        assert_eq!(keys, RESULT_FIELDS.to_vec());
    }

    #[test]
    fn test_row_display() {
        assert_eq!(
            ann_pen().to_string(),
            "age: 30, name: Ann, order_id: 2, product: Pen, quantity: 3, user_id: 1, "
        );
    }

    #[test]
    fn test_row_serializes_as_object() {
        let value = serde_json::to_value(ann_pen()).unwrap();
        assert_eq!(value["quantity"], "3");
        assert_eq!(value.as_object().unwrap().len(), 6);
    }

    #[test]
    fn test_execution_result_empty() {
        let result = ExecutionResult::empty(PlanId::Plan1);
        assert!(result.is_empty());
        assert_eq!(result.len(), 0);
        assert!(result.preview(10).is_empty());
    }

    #[test]
    fn test_preview_truncates() {
        let mut result = ExecutionResult::empty(PlanId::Plan1);
        result.rows = vec![ann_pen(); 3];
        assert_eq!(result.preview(2).len(), 2);
        assert_eq!(result.preview(10).len(), 3);
        assert_eq!(result.preview(0).len(), 0);
    }
}
