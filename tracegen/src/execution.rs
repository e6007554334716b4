//! Execution and address-resolution columns.

use p3_field::PrimeField32;
use quartz_trace::{Column, TraceContainer};

use crate::error::TraceGenError;
use crate::events::{AddressingEvent, ExecutionEvent};

/// Builds the execution and address-resolution columns from their event
/// streams. Row `i` of each column set mirrors event `i`.
#[derive(Default)]
pub struct ExecutionTraceBuilder;

impl ExecutionTraceBuilder {
    pub fn process<F: PrimeField32>(
        &self,
        execution: &[ExecutionEvent],
        addressing: &[AddressingEvent],
        trace: &TraceContainer<F>,
    ) -> Result<(), TraceGenError> {
        for (row, event) in execution.iter().enumerate() {
            trace.set_row(
                row as u32,
                &[
                    (Column::ExecutionSel, F::one()),
                    (Column::ExecutionPc, F::from_canonical_u32(event.pc)),
                    (Column::ExecutionNextPc, F::from_canonical_u32(event.next_pc)),
                    (Column::ExecutionOpcode, F::from_canonical_u32(event.opcode)),
                ],
            );
        }

        for (row, event) in addressing.iter().enumerate() {
            if event.resolved != event.base.wrapping_add(event.offset) {
                return Err(TraceGenError::MalformedAddressingEvent {
                    row,
                    base: event.base,
                    offset: event.offset,
                    resolved: event.resolved,
                });
            }
            trace.set_row(
                row as u32,
                &[
                    (Column::AddressingSel, F::one()),
                    (Column::AddressingBase, F::from_canonical_u32(event.base)),
                    (Column::AddressingOffset, F::from_canonical_u32(event.offset)),
                    (Column::AddressingResolved, F::from_canonical_u32(event.resolved)),
                ],
            );
        }

        Ok(())
    }
}
