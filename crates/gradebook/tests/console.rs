//! End-to-end console sessions driven by scripted input.

use std::io::{self, Cursor, Write};
use std::sync::{Arc, Mutex};

use gradebook::{
    MemoryStore, ResultStatus, RollNumber, Session, Store, StoreError, StudentRecord,
};

const CLOSING: &str = "Session closed. Program terminated.\n";

/// Run a full session over `script` and return the store and transcript.
fn run<S: Store>(store: S, script: impl Into<Vec<u8>>) -> (S, String) {
    let mut session = Session::new(store, Cursor::new(script.into()), Vec::new());
    session.run().unwrap();
    let (store, _, output) = session.into_parts();
    (store, String::from_utf8(output).unwrap())
}

/// A store whose backend fails on every lookup.
struct BrokenStore;

impl Store for BrokenStore {
    fn insert(&mut self, _record: StudentRecord) -> gradebook::store::Result<()> {
        Err(StoreError::Backend("disk unavailable".into()))
    }

    fn find(&self, _roll: RollNumber) -> gradebook::store::Result<Option<StudentRecord>> {
        Err(StoreError::Backend("disk unavailable".into()))
    }

    fn len(&self) -> usize {
        0
    }

    fn capacity(&self) -> usize {
        1
    }
}

/// Log sink shared between the subscriber and the test.
#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_add_then_show() {
    let script = "1\n1\nAlice\n70\n80\n90\n2\n1\n3\n";
    let (store, out) = run(MemoryStore::new(), script);

    assert_eq!(store.len(), 1);
    assert!(out.contains("Student added successfully. Returning to main menu..."));

    let expected = "Roll Number: 1\n\
                    Student Name: Alice\n\
                    Marks: 70 80 90\n\
                    Average: 80.0\n\
                    Result: Pass\n\
                    Search completed.\n";
    assert!(out.contains(expected), "transcript was:\n{}", out);
    assert!(out.ends_with(&format!("Exiting program. Thank you!\n{}", CLOSING)));
}

#[test]
fn test_prompts_in_order() {
    let script = "1\n4\nDee\n10\n20\n30\n3\n";
    let (_, out) = run(MemoryStore::new(), script);

    let prompts = [
        "Enter your choice: ",
        "Enter Roll Number: ",
        "Enter Student Name: ",
        "Enter marks for subject 1: ",
        "Enter marks for subject 2: ",
        "Enter marks for subject 3: ",
    ];
    let mut rest = out.as_str();
    for prompt in prompts {
        let at = rest.find(prompt).unwrap_or_else(|| panic!("missing prompt {:?}", prompt));
        rest = &rest[at + prompt.len()..];
    }
}

#[test]
fn test_failing_student_is_stored() {
    let script = "1\n2\nBob\n30\n50\n60\n2\n2\n3\n";
    let (store, out) = run(MemoryStore::new(), script);

    let bob = store.find(RollNumber(2)).unwrap().unwrap();
    assert_eq!(bob.status(), ResultStatus::Fail);
    assert!(out.contains("Marks: 30 50 60\n"));
    assert!(out.contains("Average: 46.666666666666664\n"));
    assert!(out.contains("Result: Fail\n"));
}

#[test]
fn test_out_of_range_mark_aborts_add() {
    let script = "1\n3\nCarol\n-5\n50\n60\n3\n";
    let (store, out) = run(MemoryStore::new(), script);

    assert!(store.is_empty());
    assert!(out.contains("Error: Invalid marks for subject 1: -5 Returning to main menu..."));
}

#[test]
fn test_empty_roll_aborts_add() {
    let script = "1\n\n3\n";
    let (store, out) = run(MemoryStore::new(), script);

    assert!(store.is_empty());
    assert!(out.contains("Error: Roll number cannot be empty. Returning to main menu..."));
    assert!(!out.contains("Enter Student Name: "));
}

#[test]
fn test_non_numeric_mark_aborts_add() {
    let script = "1\n5\nEve\n70\nseventy\n3\n";
    let (store, out) = run(MemoryStore::new(), script);

    assert!(store.is_empty());
    assert!(out.contains(
        "Error: Invalid number format for marks for subject 2: 'seventy'. Returning to main menu..."
    ));
    assert!(!out.contains("Enter marks for subject 3: "));
}

#[test]
fn test_duplicate_roll_rejected_before_name() {
    let script = "1\n1\nAlice\n70\n80\n90\n1\n1\n3\n";
    let (store, out) = run(MemoryStore::new(), script);

    assert_eq!(store.len(), 1);
    assert!(out.contains(
        "Error: Student with roll number 1 already exists. Returning to main menu..."
    ));
    assert_eq!(out.matches("Enter Student Name: ").count(), 1);
}

#[test]
fn test_store_full() {
    let script = "1\n1\nAlice\n70\n80\n90\n1\n2\nBob\n30\n50\n60\n3\n";
    let (store, out) = run(MemoryStore::with_capacity(1), script);

    assert_eq!(store.len(), 1);
    assert!(out.contains("Error: Student storage full (1 records). Cannot add more students.\n"));
    assert!(store.find(RollNumber(2)).unwrap().is_none());
}

#[test]
fn test_show_not_found() {
    let (_, out) = run(MemoryStore::new(), "2\n42\n3\n");
    assert!(out.contains("Student with roll number 42 not found. Returning to main menu..."));
}

#[test]
fn test_show_bad_roll() {
    let (_, out) = run(MemoryStore::new(), "2\nabc\n2\n\n3\n");
    assert!(out.contains(
        "Error: Invalid number format for roll number: 'abc'. Returning to main menu..."
    ));
    assert!(out.contains("Error: Roll number cannot be empty. Returning to main menu..."));
}

#[test]
fn test_menu_rejections() {
    let (_, out) = run(MemoryStore::new(), "\nfoo\n9\n3\n");

    assert!(out.contains("Invalid choice. Please enter 1, 2 or 3.\n"));
    assert!(out.contains("Please enter a numeric choice (1-3).\n"));
    assert!(out.contains("Invalid choice. Please select 1-3.\n"));
    assert_eq!(out.matches("1. Add Student").count(), 4);
}

#[test]
fn test_end_of_input_at_menu() {
    let (_, out) = run(MemoryStore::new(), "");
    assert!(out.ends_with(&format!("End of input. Exiting program.\n{}", CLOSING)));
}

#[test]
fn test_end_of_input_mid_add() {
    let (store, out) = run(MemoryStore::new(), "1\n8\nFrank\n90\n");
    assert!(store.is_empty());
    assert!(out.ends_with(&format!("End of input. Exiting program.\n{}", CLOSING)));
}

#[test]
fn test_whitespace_is_trimmed() {
    let script = "  1 \n  10\t\n  Grace Hopper  \n 100\n 99 \n98\n 2\n10\n3\n";
    let (store, out) = run(MemoryStore::new(), script);

    let grace = store.find(RollNumber(10)).unwrap().unwrap();
    assert_eq!(grace.name(), "Grace Hopper");
    assert!(out.contains("Student Name: Grace Hopper\n"));
    assert!(out.contains("Average: 99.0\n"));
}

#[test]
fn test_invalid_utf8_name_is_recoverable() {
    let mut script = b"1\n1\n".to_vec();
    script.extend_from_slice(&[0xff, 0xfe, b'\n']);
    script.extend_from_slice(b"70\n80\n90\n2\n1\n3\n");
    let (store, out) = run(MemoryStore::new(), script);

    let record = store.find(RollNumber(1)).unwrap().unwrap();
    assert_eq!(record.name(), "\u{fffd}\u{fffd}");
    assert!(out.contains("Search completed."));
    assert!(out.ends_with(CLOSING));
}

#[test]
fn test_invalid_utf8_roll_is_recoverable() {
    let mut script = b"1\n".to_vec();
    script.extend_from_slice(&[0xff, 0xfe, b'\n']);
    script.extend_from_slice(b"2\n1\n3\n");
    let (store, out) = run(MemoryStore::new(), script);

    assert!(store.is_empty());
    assert!(out.contains("Error: Invalid number format for roll number:"));
    assert!(out.contains("Student with roll number 1 not found."));
    assert!(out.ends_with(CLOSING));
}

#[test]
fn test_lookup_backend_error_is_reported() {
    let (_, out) = run(BrokenStore, "2\n1\n2\n5\n3\n");

    let message = "An unexpected error occurred: backend error: disk unavailable\n";
    assert_eq!(out.matches(message).count(), 2);
    assert!(out.ends_with(&format!("Exiting program. Thank you!\n{}", CLOSING)));
}

#[test]
fn test_oversized_menu_choice_is_not_numeric() {
    let (_, out) = run(MemoryStore::new(), "99999999999\n3\n");
    assert!(out.contains("Please enter a numeric choice (1-3).\n"));
    assert!(!out.contains("Please select 1-3."));
}

#[test]
fn test_rejections_do_not_log_at_default_level() {
    let logs = LogBuffer::default();
    let sink = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_ansi(false)
        .with_writer(move || sink.clone())
        .finish();

    let script = "1\n\n1\n1\nAlice\n70\n80\n90\n1\n1\n1\n2\nBob\n-1\n5\n5\n1\n3\nCy\n50\n50\n50\n\n9\n3\n";
    let (store, _) = tracing::subscriber::with_default(subscriber, || {
        run(MemoryStore::with_capacity(1), script)
    });

    assert_eq!(store.len(), 1);
    assert!(logs.0.lock().unwrap().is_empty());
}
