//! Proptest generators for property-based testing.

use proptest::prelude::*;

use gradebook_core::{Marks, RollNumber, StudentRecord, MAX_MARK, MIN_MARK};

/// A single mark in range.
pub fn valid_mark() -> impl Strategy<Value = i32> {
    MIN_MARK..=MAX_MARK
}

/// A single mark out of range, on either side.
pub fn invalid_mark() -> impl Strategy<Value = i32> {
    prop_oneof![i32::MIN..MIN_MARK, (MAX_MARK + 1)..=i32::MAX]
}

/// Three in-range marks.
pub fn valid_marks() -> impl Strategy<Value = Marks> {
    prop::array::uniform3(valid_mark()).prop_map(Marks)
}

/// Three marks with at least one out of range.
///
/// Yields the marks with the 0-based index of the first bad one.
pub fn invalid_marks() -> impl Strategy<Value = (Marks, usize)> {
    (
        prop::array::uniform3(any::<i32>()),
        0usize..3,
        invalid_mark(),
    )
        .prop_map(|(mut marks, bad, value)| {
            marks[bad] = value;
            let first = marks
                .iter()
                .position(|m| !(MIN_MARK..=MAX_MARK).contains(m))
                .unwrap_or(bad);
            (Marks(marks), first)
        })
}

/// A student name: letters and spaces, never blank.
pub fn name() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{0,11}( [A-Z][a-z]{0,11})?".prop_map(String::from)
}

/// Parameters for generating a record.
#[derive(Debug, Clone)]
pub struct RecordParams {
    pub roll: i32,
    pub name: String,
    pub marks: Marks,
}

impl Arbitrary for RecordParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (any::<i32>(), name(), valid_marks())
            .prop_map(|(roll, name, marks)| RecordParams { roll, name, marks })
            .boxed()
    }
}

/// A valid record.
pub fn record() -> impl Strategy<Value = StudentRecord> {
    any::<RecordParams>().prop_map(|p| record_from_params(&p))
}

/// Build a record from parameters.
pub fn record_from_params(params: &RecordParams) -> StudentRecord {
    StudentRecord::new(RollNumber(params.roll), params.name.clone(), params.marks)
        .expect("generated names are never blank")
}
