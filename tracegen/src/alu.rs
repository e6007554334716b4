//! ALU columns.

use p3_field::PrimeField32;
use quartz_trace::{Column, TraceContainer};

use crate::error::TraceGenError;
use crate::events::AluEvent;

/// Builds the ALU columns from the ALU event stream. Row `k` mirrors
/// event `k`.
#[derive(Default)]
pub struct AluTraceBuilder;

impl AluTraceBuilder {
    pub fn process<F: PrimeField32>(
        &self,
        alu: &[AluEvent],
        trace: &TraceContainer<F>,
    ) -> Result<(), TraceGenError> {
        for (row, event) in alu.iter().enumerate() {
            if event.c != event.op.apply(event.a, event.b) {
                return Err(TraceGenError::MalformedAluEvent { row });
            }
            trace.set_row(
                row as u32,
                &[
                    (Column::AluSel, F::one()),
                    (Column::AluOp, F::from_canonical_u32(event.op.opcode_id())),
                    (Column::AluIa, F::from_canonical_u32(event.a)),
                    (Column::AluIb, F::from_canonical_u32(event.b)),
                    (Column::AluIc, F::from_canonical_u32(event.c)),
                ],
            );
        }
        Ok(())
    }
}
