//! Observable events for shardplan
//!
//! Events are explicit and typed.

use std::fmt;

/// Observable events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Configuration
    /// Configuration loaded and validated
    ConfigLoaded,

    // Data source
    /// Store generated from a seed
    DataGenerated,
    /// Store loaded from a snapshot file
    DataLoaded,
    /// Store written to a snapshot file
    SnapshotWritten,

    // Planning
    /// One candidate plan costed
    PlanEstimated,
    /// Plan chosen
    PlanSelected,
    /// Plan supplied by the caller instead of the selector
    PlanForced,

    // Reporting
    /// Counters at the end of a command
    MetricsReported,

    // Failure
    /// Command aborted (FATAL)
    CommandFailed,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::DataGenerated => "DATA_GENERATED",
            Event::DataLoaded => "DATA_LOADED",
            Event::SnapshotWritten => "SNAPSHOT_WRITTEN",
            Event::PlanEstimated => "PLAN_ESTIMATED",
            Event::PlanSelected => "PLAN_SELECTED",
            Event::PlanForced => "PLAN_FORCED",
            Event::MetricsReported => "METRICS",
            Event::CommandFailed => "COMMAND_FAILED",
        }
    }

    /// Returns true if this event indicates a fatal condition
    pub fn is_fatal(&self) -> bool {
        matches!(self, Event::CommandFailed)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
