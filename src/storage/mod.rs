//! Partition storage for shardplan
//!
//! Holds users and orders split across a fixed, ordered set of nodes.
//! The planner and executor only ever borrow the store immutably.
//!
//! # Design Principles
//!
//! - Node order is significant and preserved
//! - Records are immutable once placed on a node
//! - A user and its orders are not guaranteed to share a node
//! - Snapshots are plain JSON (load/save), validated on load

mod errors;
mod partition;
mod record;

pub use errors::{StoreError, StoreResult};
pub use partition::{Node, PartitionStore};
pub use record::{Order, User};
