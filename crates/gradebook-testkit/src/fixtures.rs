//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use std::io::Cursor;

use gradebook::Session;
use gradebook_core::{RollNumber, StudentRecord};
use gradebook_store::{MemoryStore, Store};

/// Roll 1, `[70, 80, 90]`: averages 80.0 and passes.
pub fn alice() -> StudentRecord {
    make_record(1, "Alice", [70, 80, 90])
}

/// Roll 2, `[30, 50, 60]`: valid, but fails on the first subject.
pub fn bob() -> StudentRecord {
    make_record(2, "Bob", [30, 50, 60])
}

/// Build a record, panicking on an empty name.
pub fn make_record(roll: i32, name: &str, marks: [i32; 3]) -> StudentRecord {
    StudentRecord::new(RollNumber(roll), name, marks).expect("fixture name must not be empty")
}

/// A default-capacity store holding rolls `1..=count`, all passing.
pub fn filled_store(count: usize) -> MemoryStore {
    let mut store = MemoryStore::new();
    for roll in 1..=count as i32 {
        store
            .insert(make_record(roll, &format!("Student {}", roll), [60, 70, 80]))
            .expect("fixture store over capacity");
    }
    store
}

/// Console input that adds `record` through the menu.
pub fn add_script(record: &StudentRecord) -> String {
    let mut script = format!("1\n{}\n{}\n", record.roll_number(), record.name());
    for mark in record.marks().iter() {
        script.push_str(&format!("{}\n", mark));
    }
    script
}

/// Run a whole session over `script`, returning the store and transcript.
pub fn run_script(store: MemoryStore, script: &str) -> (MemoryStore, String) {
    let mut session = Session::new(store, Cursor::new(script.to_string()), Vec::new());
    session.run().expect("in-memory session I/O cannot fail");
    let (store, _, output) = session.into_parts();
    let transcript = String::from_utf8(output).expect("transcript is UTF-8");
    (store, transcript)
}
