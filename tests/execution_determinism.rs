//! Determinism Tests
//!
//! - Executing twice over the same store yields identical rows
//! - The seeded generator is reproducible
//! - Snapshot round trips preserve plan choice and results

mod common;

use proptest::prelude::*;
use shardplan::datagen::{DataGenerator, GeneratorConfig};
use shardplan::executor::PlanExecutor;
use shardplan::planner::{PlanId, PlanSelector};
use shardplan::storage::PartitionStore;
use tempfile::TempDir;

use common::store_strategy;

fn generated(seed: u64) -> PartitionStore {
    DataGenerator::new(seed)
        .generate(&GeneratorConfig::default())
        .unwrap()
}

// =============================================================================
// Replay Tests
// =============================================================================

/// Repeated execution over a generated store is identical.
#[test]
fn test_generated_store_replay() {
    let store = generated(2024);
    let executor = PlanExecutor::new(&store);

    for plan in PlanId::KNOWN.iter() {
        let first = executor.execute(plan);
        for _ in 0..5 {
            assert_eq!(executor.execute(plan), first);
        }
    }
}

/// Same seed, same store, same plan, same rows.
#[test]
fn test_seed_reproduces_pipeline() {
    let a = generated(99);
    let b = generated(99);

    let choice_a = PlanSelector::select(&a);
    let choice_b = PlanSelector::select(&b);
    assert_eq!(choice_a, choice_b);

    assert_eq!(
        PlanExecutor::new(&a).execute(&choice_a.plan),
        PlanExecutor::new(&b).execute(&choice_b.plan)
    );
}

/// Default generation (100 users, 200 orders) always selects plan1.
#[test]
fn test_default_generation_selects_plan1() {
    for seed in 0..5 {
        let choice = PlanSelector::select(&generated(seed));
        assert_eq!(choice.plan, PlanId::Plan1);
        assert_eq!(choice.cost, 100);
    }
}

/// A snapshot reloads to an identical store and result.
#[test]
fn test_snapshot_round_trip_preserves_results() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("store.json");

    let store = generated(17);
    store.save_json(&path).unwrap();
    let loaded = PartitionStore::load_json(&path).unwrap();

    assert_eq!(PlanSelector::select(&loaded), PlanSelector::select(&store));
    assert_eq!(
        PlanExecutor::new(&loaded).execute(&PlanId::Plan1),
        PlanExecutor::new(&store).execute(&PlanId::Plan1)
    );
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    /// Execution is idempotent for arbitrary stores and plans.
    #[test]
    fn execution_is_idempotent(store in store_strategy(), name in "plan[0-3]") {
        let plan = PlanId::from(name.as_str());
        let executor = PlanExecutor::new(&store);
        prop_assert_eq!(executor.execute(&plan), executor.execute(&plan));
    }

    /// Execution never mutates the store.
    #[test]
    fn execution_leaves_store_unchanged(store in store_strategy()) {
        let before = store.clone();
        let executor = PlanExecutor::new(&store);
        executor.execute(&PlanId::Plan1);
        executor.execute(&PlanId::Plan2);
        prop_assert_eq!(store, before);
    }
}
