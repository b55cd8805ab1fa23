//! CLI command implementations
//!
//! Every command follows the same sequence:
//! 1. Resolve configuration (file + flags), set log level
//! 2. Build the partition store (snapshot or seeded generator)
//! 3. Plan (and for `run`, execute)
//! 4. Write the report to the given writer
//!
//! The planner and executor stay silent; all logging happens here.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::datagen::DataGenerator;
use crate::executor::{ExecutionResult, PlanExecutor};
use crate::observability::{
    log_event_with_fields, Event, Logger, MetricsRegistry, ObservationScope, Timer,
};
use crate::planner::{CostEstimator, ExplainPlan, PlanChoice, PlanId, PlanSelector};
use crate::storage::PartitionStore;

use super::args::{Command, OutputFormat, SourceArgs};
use super::config::Config;
use super::errors::CliResult;
use super::io::{write_explain, write_run_report};

/// Main entry point for CLI
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command).map_err(|e| {
        log_event_with_fields(
            Event::CommandFailed,
            &[("code", e.code_str()), ("message", e.message())],
        );
        e
    })
}

/// Run the appropriate command based on CLI args, writing to stdout
pub fn run_command(cmd: Command) -> CliResult<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cmd {
        Command::Run {
            source,
            plan,
            format,
        } => run_query(&source, plan.as_deref(), format, &mut out),
        Command::Explain { source, format } => explain(&source, format, &mut out),
        Command::Generate {
            output,
            config,
            seed,
        } => generate(&output, config, seed),
    }
}

/// Select (or force) a plan, execute it and write the report
pub fn run_query<W: Write>(
    source: &SourceArgs,
    forced_plan: Option<&str>,
    format: OutputFormat,
    out: &mut W,
) -> CliResult<()> {
    let config = load_config(source)?;
    let store = build_store(&config)?;
    let metrics = MetricsRegistry::new();

    let choice = match forced_plan {
        Some(name) => force_plan(&store, name),
        None => select_plan(&store, &metrics),
    };

    let result = execute_plan(&store, &choice, &metrics);

    write_run_report(out, &choice, &result, config.preview_rows, format)?;
    report_metrics(&metrics);

    Ok(())
}

/// Cost every candidate and write the selection without executing
pub fn explain<W: Write>(source: &SourceArgs, format: OutputFormat, out: &mut W) -> CliResult<()> {
    let config = load_config(source)?;
    let store = build_store(&config)?;
    let metrics = MetricsRegistry::new();

    let explain = PlanSelector::explain(&store);
    log_explain(&explain, &metrics);

    write_explain(out, &explain, format)?;
    report_metrics(&metrics);

    Ok(())
}

/// Write a generated store to a JSON snapshot
pub fn generate(output: &Path, config: Option<PathBuf>, seed: Option<u64>) -> CliResult<()> {
    let source = SourceArgs {
        config,
        seed,
        data: None,
    };
    let config = load_config(&source)?;
    let store = generate_store(&config)?;

    store.save_json(output)?;

    let path = output.display().to_string();
    log_event_with_fields(Event::SnapshotWritten, &[("path", &path)]);

    Ok(())
}

fn load_config(source: &SourceArgs) -> CliResult<Config> {
    let config = Config::resolve(source)?;
    Logger::set_min_severity(config.log_severity()?);

    let node_count = config.node_count.to_string();
    log_event_with_fields(
        Event::ConfigLoaded,
        &[
            ("node_count", &node_count),
            ("source", if config.data_file.is_some() { "snapshot" } else { "generator" }),
        ],
    );

    Ok(config)
}

fn build_store(config: &Config) -> CliResult<PartitionStore> {
    let Some(path) = &config.data_file else {
        return generate_store(config);
    };

    let store = PartitionStore::load_json(path)?;

    let path = path.display().to_string();
    let nodes = store.node_count().to_string();
    let users = store.total_users().to_string();
    let orders = store.total_orders().to_string();
    log_event_with_fields(
        Event::DataLoaded,
        &[
            ("path", &path),
            ("nodes", &nodes),
            ("users", &users),
            ("orders", &orders),
        ],
    );

    Ok(store)
}

fn generate_store(config: &Config) -> CliResult<PartitionStore> {
    let seed = config.seed.unwrap_or_else(rand::random::<u64>);
    let store = DataGenerator::new(seed).generate(&config.generator_config())?;

    let seed = seed.to_string();
    let nodes = store.node_count().to_string();
    let users = store.total_users().to_string();
    let orders = store.total_orders().to_string();
    log_event_with_fields(
        Event::DataGenerated,
        &[
            ("seed", &seed),
            ("nodes", &nodes),
            ("users", &users),
            ("orders", &orders),
        ],
    );

    Ok(store)
}

fn select_plan(store: &PartitionStore, metrics: &MetricsRegistry) -> PlanChoice {
    let explain = PlanSelector::explain(store);
    log_explain(&explain, metrics);
    explain.chosen
}

fn log_explain(explain: &ExplainPlan, metrics: &MetricsRegistry) {
    for candidate in &explain.candidates {
        let cost = candidate.cost.to_string();
        log_event_with_fields(
            Event::PlanEstimated,
            &[
                ("plan", candidate.plan.as_str()),
                ("strategy", candidate.strategy),
                ("cost", &cost),
            ],
        );
    }
    metrics.add_plans_estimated(explain.candidates.len() as u64);

    let cost = explain.chosen.cost.to_string();
    log_event_with_fields(
        Event::PlanSelected,
        &[
            ("plan", explain.chosen.plan.as_str()),
            ("cost", &cost),
            ("reason", explain.reason.as_str()),
        ],
    );
    metrics.increment_plans_selected();
}

fn force_plan(store: &PartitionStore, name: &str) -> PlanChoice {
    let plan = PlanId::from(name);
    let cost = CostEstimator::estimate(&plan, store);

    let cost_str = cost.to_string();
    let known = plan.is_known().to_string();
    log_event_with_fields(
        Event::PlanForced,
        &[("plan", plan.as_str()), ("cost", &cost_str), ("known", &known)],
    );

    PlanChoice { plan, cost }
}

fn execute_plan(
    store: &PartitionStore,
    choice: &PlanChoice,
    metrics: &MetricsRegistry,
) -> ExecutionResult {
    let scope = ObservationScope::with_fields("EXECUTE", &[("plan", choice.plan.as_str())]);
    let timer = Timer::new();

    let result = PlanExecutor::new(store).execute(&choice.plan);
    metrics.record_execution(&result);

    let rows = result.len().to_string();
    let nodes_scanned = result.nodes_scanned.to_string();
    let orders_filtered = result.orders_filtered.to_string();
    let elapsed = timer.elapsed_us();
    scope.complete_with_fields(&[
        ("rows", &rows),
        ("nodes_scanned", &nodes_scanned),
        ("orders_filtered", &orders_filtered),
        ("elapsed_us", &elapsed),
    ]);

    result
}

fn report_metrics(metrics: &MetricsRegistry) {
    let fields = metrics.snapshot().fields();
    let field_refs: Vec<(&str, &str)> = fields.iter().map(|(k, v)| (*k, v.as_str())).collect();
    log_event_with_fields(Event::MetricsReported, &field_refs);
}
