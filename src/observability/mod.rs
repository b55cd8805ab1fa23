//! Observability subsystem for shardplan
//!
//! - Structured logging (JSON, stderr)
//! - Counters for planning and execution
//! - Typed lifecycle events
//!
//! # Principles
//!
//! 1. Observability is read-only
//! 2. The planner and executor never log; their callers do
//! 3. No async or background threads
//! 4. Deterministic key ordering
//!
//! # Usage
//!
//! ```ignore
//! use shardplan::observability::{log_event_with_fields, Event, ObservationScope};
//!
//! log_event_with_fields(Event::PlanSelected, &[("plan", "plan1"), ("cost", "100")]);
//!
//! let scope = ObservationScope::new("EXECUTE");
//! // ... do work ...
//! scope.complete();
//! ```

mod events;
mod logger;
mod metrics;
mod scope;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use metrics::{MetricsRegistry, MetricsSnapshot};
pub use scope::{ObservationScope, Timer};

/// Log a lifecycle event
pub fn log_event(event: Event) {
    log_event_with_fields(event, &[]);
}

/// Log a lifecycle event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    let severity = if event.is_fatal() {
        Severity::Fatal
    } else {
        Severity::Info
    };
    Logger::log(severity, event.as_str(), fields);
}
