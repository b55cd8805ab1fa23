//! User and order records
//!
//! Both record types are immutable value objects. `Order::user_id` is a
//! foreign key that may point at a user stored on a different node.

use serde::{Deserialize, Serialize};

/// A user row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique across the whole store
    pub user_id: u64,
    /// Display name
    pub name: String,
    pub age: u32,
}

impl User {
    /// Creates a new user
    pub fn new(user_id: u64, name: impl Into<String>, age: u32) -> Self {
        Self {
            user_id,
            name: name.into(),
            age,
        }
    }
}

/// An order row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Unique across the whole store
    pub order_id: u64,
    /// Referenced user (not necessarily on the same node)
    pub user_id: u64,
    pub product: String,
    /// Always >= 1 for a valid store
    pub quantity: u32,
}

impl Order {
    /// Creates a new order
    pub fn new(order_id: u64, user_id: u64, product: impl Into<String>, quantity: u32) -> Self {
        Self {
            order_id,
            user_id,
            product: product.into(),
            quantity,
        }
    }

    /// Returns true if this order references the given user
    pub fn belongs_to(&self, user: &User) -> bool {
        self.user_id == user.user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_belongs_to() {
        let ann = User::new(1, "Ann", 30);
        let bob = User::new(2, "Bob", 41);
        let order = Order::new(10, 1, "Pen", 2);

        assert!(order.belongs_to(&ann));
        assert!(!order.belongs_to(&bob));
    }

    #[test]
    fn test_record_json_shape() {
        let user = User::new(1, "Ann", 30);
        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value["user_id"], 1);
        assert_eq!(value["name"], "Ann");
        assert_eq!(value["age"], 30);
    }
}
