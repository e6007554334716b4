use p3_field::AbstractField;

use quartz_basic::{generate_precomputed_columns, generate_trace, Val};
use quartz_trace::Column;
use quartz_tracegen::events::{AluEvent, AluOperation, EventsContainer, ExecutionEvent};
use quartz_tracegen::precomputed::{BITWISE_BLOCK_ROWS, CIRCUIT_SIZE, NUM_BITWISE_ROWS};

fn f(value: u32) -> Val {
    Val::from_canonical_u32(value)
}

#[test]
fn single_execution_event_end_to_end() {
    let events = EventsContainer {
        execution: vec![ExecutionEvent { pc: 0, next_pc: 4, opcode: 1 }],
        addressing: vec![],
        alu: vec![],
    };
    let trace = generate_trace(events).unwrap();

    // The trace covers the precomputed bitwise table and the clock ramp.
    let rows = trace.get_num_rows();
    assert!(rows >= NUM_BITWISE_ROWS);
    assert_eq!(rows, CIRCUIT_SIZE);
    assert_eq!(rows.next_power_of_two(), CIRCUIT_SIZE);

    // Precomputed column laws, sampled.
    assert_eq!(trace.get(Column::PrecomputedFirstRow, 0), Val::one());
    assert_eq!(trace.get(Column::PrecomputedFirstRow, 1), Val::zero());
    assert_eq!(trace.get(Column::PrecomputedClk, 12_345), f(12_345));
    let (a, b) = (0xab, 0x5e);
    assert_eq!(
        trace.get(Column::PrecomputedBitwiseOutput, a * 256 + b),
        f(0xab & 0x5e)
    );
    assert_eq!(
        trace.get(Column::PrecomputedBitwiseOutput, BITWISE_BLOCK_ROWS + a * 256 + b),
        f(0xab | 0x5e)
    );
    assert_eq!(
        trace.get(Column::PrecomputedBitwiseOutput, 2 * BITWISE_BLOCK_ROWS + a * 256 + b),
        f(0xab ^ 0x5e)
    );

    // The lone execution event landed on row 0; the other domains are empty.
    assert_eq!(trace.get(Column::ExecutionSel, 0), Val::one());
    assert_eq!(trace.get(Column::ExecutionNextPc, 0), f(4));
    assert_eq!(trace.get_column_size(Column::ExecutionSel), 1);
    assert_eq!(trace.get_column_size(Column::AddressingSel), 0);
    assert_eq!(trace.get_column_size(Column::AluSel), 0);
}

#[test]
fn repeated_generation_is_bitwise_identical() {
    let events = || EventsContainer {
        execution: vec![ExecutionEvent { pc: 0, next_pc: 4, opcode: 9 }],
        addressing: vec![],
        alu: vec![AluEvent { op: AluOperation::Or, a: 1, b: 2, c: 3 }],
    };
    let first = generate_trace(events()).unwrap();
    let second = generate_trace(events()).unwrap();

    for &col in Column::ALL.iter() {
        let mut lhs = Vec::new();
        first.visit_column(col, |row, value| lhs.push((row, *value)));
        let mut rhs = Vec::new();
        second.visit_column(col, |row, value| rhs.push((row, *value)));
        assert_eq!(lhs, rhs, "column {:?} diverged between runs", col);
    }
}

#[test]
fn precomputed_columns_match_between_entry_points() {
    let full = generate_trace(EventsContainer::default()).unwrap();
    let precomputed_only = generate_precomputed_columns();

    for col in [
        Column::PrecomputedFirstRow,
        Column::PrecomputedSelBitwise,
        Column::PrecomputedBitwiseOpId,
        Column::PrecomputedBitwiseInputA,
        Column::PrecomputedBitwiseInputB,
        Column::PrecomputedBitwiseOutput,
    ] {
        let mut lhs = Vec::new();
        full.visit_column(col, |row, value| lhs.push((row, *value)));
        let mut rhs = Vec::new();
        precomputed_only.visit_column(col, |row, value| rhs.push((row, *value)));
        assert_eq!(lhs, rhs, "column {:?} diverged between entry points", col);
    }
    assert_eq!(precomputed_only.get_num_rows(), CIRCUIT_SIZE);
}
