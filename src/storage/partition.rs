//! Nodes and the partition store
//!
//! A `PartitionStore` is an ordered list of nodes. Node order determines
//! result order during execution, so it is never rearranged after
//! construction.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::errors::{StoreError, StoreResult};
use super::record::{Order, User};

/// A single partition: users and orders in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub orders: Vec<Order>,
}

impl Node {
    /// Creates an empty node
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a node holding the given records
    pub fn with_records(users: Vec<User>, orders: Vec<Order>) -> Self {
        Self { users, orders }
    }

    /// Appends a user to the node
    pub fn push_user(&mut self, user: User) {
        self.users.push(user);
    }

    /// Appends an order to the node
    pub fn push_order(&mut self, order: Order) {
        self.orders.push(order);
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    pub fn order_count(&self) -> usize {
        self.orders.len()
    }
}

/// Ordered collection of nodes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionStore {
    nodes: Vec<Node>,
}

impl PartitionStore {
    /// Creates a store from nodes, preserving their order
    pub fn new(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    /// Creates a store with `count` empty nodes
    pub fn with_empty_nodes(count: usize) -> Self {
        Self {
            nodes: vec![Node::new(); count],
        }
    }

    /// Nodes in store order
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Mutable access for data providers populating the store.
    ///
    /// Returns None if `index` is out of range.
    pub fn node_mut(&mut self, index: usize) -> Option<&mut Node> {
        self.nodes.get_mut(index)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Total users across every node
    pub fn total_users(&self) -> u64 {
        self.nodes.iter().map(|n| n.user_count() as u64).sum()
    }

    /// Total orders across every node
    pub fn total_orders(&self) -> u64 {
        self.nodes.iter().map(|n| n.order_count() as u64).sum()
    }

    /// Checks the cross-node invariants of a store built outside the
    /// generator: user and order ids are globally unique and every
    /// quantity is positive.
    pub fn validate(&self) -> StoreResult<()> {
        let mut user_ids = HashSet::new();
        let mut order_ids = HashSet::new();

        for (node, partition) in self.nodes.iter().enumerate() {
            for user in &partition.users {
                if !user_ids.insert(user.user_id) {
                    return Err(StoreError::DuplicateUser {
                        user_id: user.user_id,
                        node,
                    });
                }
            }

            for order in &partition.orders {
                if !order_ids.insert(order.order_id) {
                    return Err(StoreError::DuplicateOrder {
                        order_id: order.order_id,
                        node,
                    });
                }
                if order.quantity == 0 {
                    return Err(StoreError::InvalidQuantity {
                        order_id: order.order_id,
                    });
                }
            }
        }

        Ok(())
    }

    /// Loads and validates a JSON snapshot
    pub fn load_json(path: &Path) -> StoreResult<Self> {
        let content = fs::read_to_string(path)?;
        let store: PartitionStore = serde_json::from_str(&content)?;
        store.validate()?;
        Ok(store)
    }

    /// Writes the store as a pretty-printed JSON snapshot
    pub fn save_json(&self, path: &Path) -> StoreResult<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
