//! Concrete instantiation of the trace-generation pipeline.

use p3_baby_bear::BabyBear;

use quartz_trace::TraceContainer;
use quartz_tracegen::{EventsContainer, TraceGenError};

/// The base field the proving stack runs over.
pub type Val = BabyBear;

/// Generates the full execution trace over [`Val`].
pub fn generate_trace(events: EventsContainer) -> Result<TraceContainer<Val>, TraceGenError> {
    quartz_tracegen::generate_trace(events)
}

/// Generates only the deterministic columns over [`Val`], e.g. for deriving
/// proving parameters independent of any execution.
pub fn generate_precomputed_columns() -> TraceContainer<Val> {
    quartz_tracegen::generate_precomputed_columns()
}
