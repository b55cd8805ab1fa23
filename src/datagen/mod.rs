//! Synthetic data source for shardplan
//!
//! Produces a populated `PartitionStore` from a seed. Records are spread
//! across nodes by `id % node_count`, so a user's orders usually land on
//! other nodes.

mod errors;
mod generator;

pub use errors::{GeneratorError, GeneratorResult};
pub use generator::{DataGenerator, GeneratorConfig, FIRST_NAMES, LAST_NAMES, PRODUCTS};
