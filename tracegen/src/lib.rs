//! Parallel generation of the witness trace.
//!
//! The orchestrator assembles a fixed list of independent jobs — two
//! precomputed-column jobs plus one job per event domain — and distributes
//! them over the worker pool. Every job writes into the one shared
//! [`TraceContainer`] under its per-column locks. Jobs must touch disjoint
//! column sets; the container's locking keeps overlapping writes memory-safe
//! but only disjointness keeps the result deterministic.

use p3_field::PrimeField32;
use p3_maybe_rayon::prelude::*;
use tracing::info;

use quartz_trace::TraceContainer;

pub mod alu;
pub mod error;
pub mod events;
pub mod execution;
pub mod precomputed;

pub use error::TraceGenError;
pub use events::EventsContainer;

use alu::AluTraceBuilder;
use execution::ExecutionTraceBuilder;
use precomputed::PrecomputedTraceBuilder;

/// A unit of trace-generation work, scheduled once over the worker pool.
type Job<'a> = Box<dyn FnOnce() -> Result<(), TraceGenError> + Send + 'a>;

/// A precomputed-column job; takes no event input and cannot fail.
type PrecomputedJob<'a> = Box<dyn FnOnce() + Send + 'a>;

/// Generates the full trace from one simulated execution's events.
///
/// All jobs run concurrently and the call returns only once every job has
/// completed. Each event domain's buffer is consumed by its job and released
/// once folded into the trace. Any job failure aborts the whole generation;
/// a partial trace is never returned.
pub fn generate_trace<F: PrimeField32>(
    events: EventsContainer,
) -> Result<TraceContainer<F>, TraceGenError> {
    let trace = TraceContainer::new();
    let EventsContainer { execution, addressing, alu } = events;

    let mut jobs: Vec<Job<'_>> = Vec::new();
    for job in precomputed_jobs(&trace) {
        jobs.push(Box::new(move || {
            job();
            Ok(())
        }));
    }

    let trace_ref = &trace;
    jobs.push(Box::new(move || {
        ExecutionTraceBuilder::default().process(&execution, &addressing, trace_ref)?;
        // Folded into the trace; release the buffers before the join so
        // peak memory stays bounded.
        drop(execution);
        drop(addressing);
        Ok(())
    }));
    jobs.push(Box::new(move || {
        AluTraceBuilder::default().process(&alu, trace_ref)?;
        drop(alu);
        Ok(())
    }));

    execute_jobs(jobs)?;

    let rows = trace.get_num_rows();
    info!(rows, circuit_size = rows.next_power_of_two(), "generated trace");
    Ok(trace)
}

/// Generates only the deterministic columns.
///
/// Used by callers that need proving parameters independent of any
/// execution; running this and [`generate_trace`] on the same column set
/// yields identical precomputed columns.
pub fn generate_precomputed_columns<F: PrimeField32>() -> TraceContainer<F> {
    let trace = TraceContainer::new();
    precomputed_jobs(&trace).into_par_iter().for_each(|job| job());
    trace
}

fn precomputed_jobs<F: PrimeField32>(
    trace: &TraceContainer<F>,
) -> Vec<PrecomputedJob<'_>> {
    vec![
        Box::new(move || PrecomputedTraceBuilder::default().process_misc(trace)),
        Box::new(move || PrecomputedTraceBuilder::default().process_bitwise(trace)),
    ]
}

fn execute_jobs(jobs: Vec<Job<'_>>) -> Result<(), TraceGenError> {
    jobs.into_par_iter()
        .map(|job| job())
        .collect::<Vec<_>>()
        .into_iter()
        .collect()
}
