use quartz_basic::generate_trace;
use quartz_tracegen::events::{
    AddressingEvent, AluEvent, AluOperation, EventsContainer, ExecutionEvent,
};

fn main() {
    tracing_subscriber::fmt::init();

    // A small hand-written execution, standing in for the simulator.
    let events = EventsContainer {
        execution: vec![
            ExecutionEvent { pc: 0, next_pc: 4, opcode: 1 },
            ExecutionEvent { pc: 4, next_pc: 8, opcode: 2 },
            ExecutionEvent { pc: 8, next_pc: 12, opcode: 3 },
        ],
        addressing: vec![
            AddressingEvent { base: 1024, offset: 0, resolved: 1024 },
            AddressingEvent { base: 1024, offset: 4, resolved: 1028 },
        ],
        alu: vec![
            AluEvent { op: AluOperation::Add, a: 7, b: 5, c: 12 },
            AluEvent { op: AluOperation::Xor, a: 0xf0, b: 0x3c, c: 0xcc },
        ],
    };

    match generate_trace(events) {
        Ok(trace) => {
            let rows = trace.get_num_rows();
            println!("trace rows: {}", rows);
            println!("circuit size: {}", rows.next_power_of_two());
        }
        Err(err) => {
            eprintln!("trace generation failed: {}", err);
            std::process::exit(1);
        }
    }
}
