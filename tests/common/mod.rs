//! Shared fixtures for integration tests

#![allow(dead_code)]

use proptest::prelude::*;
use shardplan::storage::{Node, Order, PartitionStore, User};

/// One node: user 1 (Ann), orders 1 (qty 1) and 2 (qty 3)
pub fn scenario_a() -> PartitionStore {
    PartitionStore::new(vec![Node::with_records(
        vec![User::new(1, "Ann", 30)],
        vec![Order::new(1, 1, "Pen", 1), Order::new(2, 1, "Pen", 3)],
    )])
}

/// One node, no records
pub fn scenario_b() -> PartitionStore {
    PartitionStore::new(vec![Node::new()])
}

/// User 1 on node 0, its order on node 1
pub fn scenario_c() -> PartitionStore {
    PartitionStore::new(vec![
        Node::with_records(vec![User::new(1, "Ann", 30)], vec![]),
        Node::with_records(vec![], vec![Order::new(1, 1, "Pen", 3)]),
    ])
}

/// Random node with small id ranges so joins actually match
fn node_strategy() -> impl Strategy<Value = Node> {
    (
        prop::collection::vec((1u64..12, 18u32..68), 0..8),
        prop::collection::vec((1u64..12, 1u32..6), 0..12),
    )
        .prop_map(|(users, orders)| {
            let users = users
                .into_iter()
                .map(|(id, age)| User::new(id, format!("user{}", id), age))
                .collect();
            let orders = orders
                .into_iter()
                .enumerate()
                .map(|(i, (user_id, quantity))| Order::new(i as u64 + 1, user_id, "Pen", quantity))
                .collect();
            Node::with_records(users, orders)
        })
}

/// Random store of 0..5 nodes
pub fn store_strategy() -> impl Strategy<Value = PartitionStore> {
    prop::collection::vec(node_strategy(), 0..5).prop_map(PartitionStore::new)
}

/// Order ids of result rows, in output order
pub fn order_ids(rows: &[shardplan::executor::ResultRow]) -> Vec<u64> {
    rows.iter()
        .map(|r| r.get("order_id").unwrap().parse().unwrap())
        .collect()
}
