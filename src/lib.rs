//! shardplan - cost-based plan selection over partitioned data
//!
//! Users and orders live on a fixed set of nodes. Two fixed plans answer
//! the user/order join; the cheaper one (by row count) is selected and
//! executed node by node.

pub mod cli;
pub mod datagen;
pub mod executor;
pub mod observability;
pub mod planner;
pub mod storage;
