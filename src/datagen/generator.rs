//! Seeded user/order generator
//!
//! - Users `1..=num_users`, ages 18..=67
//! - Orders `1..=num_orders`, quantity 1..=5, user id 1..=num_users
//! - Record `i` goes to node `i % node_count`

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::storage::{Order, PartitionStore, User};

use super::errors::{GeneratorError, GeneratorResult};

pub const FIRST_NAMES: [&str; 10] = [
    "Alice", "Bob", "Charlie", "David", "Eve", "Frank", "Grace", "Hank", "Ivy", "Jack",
];

pub const LAST_NAMES: [&str; 10] = [
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez",
];

pub const PRODUCTS: [&str; 10] = [
    "Laptop", "Phone", "Tablet", "Monitor", "Keyboard", "Mouse", "Printer", "Headphones", "Camera",
    "Speaker",
];

const MIN_AGE: u32 = 18;
const AGE_SPAN: u32 = 50;
const MAX_QUANTITY: u32 = 5;

/// Shape of the data to generate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub node_count: usize,
    pub num_users: u64,
    pub num_orders: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            node_count: 4,
            num_users: 100,
            num_orders: 200,
        }
    }
}

/// Deterministic generator: one seed always yields the same store
pub struct DataGenerator {
    seed: u64,
    rng: StdRng,
}

impl DataGenerator {
    /// Creates a generator from a seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generates a store. Users are drawn before orders.
    pub fn generate(&mut self, config: &GeneratorConfig) -> GeneratorResult<PartitionStore> {
        if config.node_count == 0 {
            return Err(GeneratorError::NoNodes);
        }
        if config.num_orders > 0 && config.num_users == 0 {
            return Err(GeneratorError::NoUsers(config.num_orders));
        }

        let mut store = PartitionStore::with_empty_nodes(config.node_count);
        let nodes = config.node_count as u64;

        for user_id in 1..=config.num_users {
            let user = User::new(user_id, self.random_name(), MIN_AGE + self.rng.gen_range(0..AGE_SPAN));
            if let Some(node) = store.node_mut((user_id % nodes) as usize) {
                node.push_user(user);
            }
        }

        for order_id in 1..=config.num_orders {
            let user_id = 1 + self.rng.gen_range(0..config.num_users);
            let product = self.pick(&PRODUCTS);
            let quantity = 1 + self.rng.gen_range(0..MAX_QUANTITY);
            if let Some(node) = store.node_mut((order_id % nodes) as usize) {
                node.push_order(Order::new(order_id, user_id, product, quantity));
            }
        }

        Ok(store)
    }

    fn random_name(&mut self) -> String {
        let first = self.pick(&FIRST_NAMES);
        let last = self.pick(&LAST_NAMES);
        format!("{} {}", first, last)
    }

    fn pick(&mut self, pool: &[&'static str]) -> &'static str {
        pool[self.rng.gen_range(0..pool.len())]
    }
}
