//! Column identifiers.

/// Identifier for every column in the trace.
///
/// The set is closed: builders address columns by variant, and the container
/// sizes its storage from the variant count. Each generation job owns a
/// disjoint subset of these columns.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Column {
    // Precomputed columns: content depends only on column identity.
    PrecomputedFirstRow,
    PrecomputedClk,
    PrecomputedSelBitwise,
    PrecomputedBitwiseOpId,
    PrecomputedBitwiseInputA,
    PrecomputedBitwiseInputB,
    PrecomputedBitwiseOutput,

    // Execution columns.
    ExecutionSel,
    ExecutionPc,
    ExecutionNextPc,
    ExecutionOpcode,

    // Address-resolution columns.
    AddressingSel,
    AddressingBase,
    AddressingOffset,
    AddressingResolved,

    // ALU columns.
    AluSel,
    AluOp,
    AluIa,
    AluIb,
    AluIc,
}

/// Number of columns in the trace.
pub const NUM_TRACE_COLUMNS: usize = Column::ALL.len();

impl Column {
    /// Every column, in declaration order.
    pub const ALL: [Column; 20] = [
        Column::PrecomputedFirstRow,
        Column::PrecomputedClk,
        Column::PrecomputedSelBitwise,
        Column::PrecomputedBitwiseOpId,
        Column::PrecomputedBitwiseInputA,
        Column::PrecomputedBitwiseInputB,
        Column::PrecomputedBitwiseOutput,
        Column::ExecutionSel,
        Column::ExecutionPc,
        Column::ExecutionNextPc,
        Column::ExecutionOpcode,
        Column::AddressingSel,
        Column::AddressingBase,
        Column::AddressingOffset,
        Column::AddressingResolved,
        Column::AluSel,
        Column::AluOp,
        Column::AluIa,
        Column::AluIb,
        Column::AluIc,
    ];

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_lists_every_column_once_in_order() {
        for (i, col) in Column::ALL.iter().enumerate() {
            assert_eq!(col.index(), i);
        }
        assert_eq!(Column::ALL.len(), NUM_TRACE_COLUMNS);
    }
}
