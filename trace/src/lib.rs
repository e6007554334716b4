//! Sparse columnar storage for the witness trace.
//!
//! The trace is a rectangular table of field elements, one row per step of
//! computation. Most columns are empty over most of the row range, so each
//! column stores only its nonzero entries and treats absence as zero.

pub mod columns;
pub mod container;

pub use columns::{Column, NUM_TRACE_COLUMNS};
pub use container::TraceContainer;
