//! The interactive session: menu loop plus the add and show flows.
//!
//! A [`Session`] owns a store and a reader/writer pair. Each flow reads its
//! fields one prompt at a time and bails out with `?` on the first bad
//! field; the loop reports the error and shows the menu again. The store is
//! only touched by a successful insert.

use std::io::{BufRead, Write};

use gradebook_core::{Marks, RollNumber, StudentRecord, SUBJECT_COUNT};
use gradebook_store::{Store, StoreError};

use crate::error::{InputError, Result, SessionError};
use crate::input::{parse_int, read_trimmed_line, require_text, Field};
use crate::menu::{MenuChoice, MENU};

/// Format an average so it always shows a decimal point (`80.0`).
pub fn format_average(average: f64) -> String {
    let text = average.to_string();
    if average.is_finite() && !text.contains('.') {
        format!("{}.0", text)
    } else {
        text
    }
}

/// A console session over a store.
pub struct Session<S, R, W> {
    store: S,
    input: R,
    output: W,
}

impl<S: Store, R: BufRead, W: Write> Session<S, R, W> {
    pub fn new(store: S, input: R, output: W) -> Self {
        Self {
            store,
            input,
            output,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Give back the store and I/O handles.
    pub fn into_parts(self) -> (S, R, W) {
        (self.store, self.input, self.output)
    }

    /// Run the menu loop until the exit choice or end of input, then print
    /// a closing line.
    ///
    /// Only I/O failures on the handles are returned; every input, validation
    /// and store error is reported on the output and the loop carries on.
    pub fn run(&mut self) -> Result<()> {
        tracing::info!(capacity = self.store.capacity(), "session started");

        loop {
            self.print_menu()?;
            let line = match self.prompt("Enter your choice: ") {
                Ok(line) => line,
                Err(e) if e.is_end_of_input() => {
                    writeln!(self.output)?;
                    writeln!(self.output, "End of input. Exiting program.")?;
                    break;
                }
                Err(e) => return Err(e),
            };

            let choice = match MenuChoice::parse(&line) {
                Ok(choice) => choice,
                Err(e) => {
                    writeln!(self.output, "{}", e)?;
                    continue;
                }
            };

            let outcome = match choice {
                MenuChoice::Add => self.add_student().map(|_| ()),
                MenuChoice::Show => self.show_student().map(|_| ()),
                MenuChoice::Exit => {
                    writeln!(self.output, "Exiting program. Thank you!")?;
                    break;
                }
            };

            if let Err(e) = outcome {
                if e.is_end_of_input() {
                    writeln!(self.output)?;
                    writeln!(self.output, "End of input. Exiting program.")?;
                    break;
                }
                if !e.is_recoverable() {
                    return Err(e);
                }
                tracing::debug!(?choice, error = %e, "operation aborted");
                self.report(&e)?;
            }
        }

        writeln!(self.output, "Session closed. Program terminated.")?;
        self.output.flush()?;
        tracing::info!(records = self.store.len(), "session ended");
        Ok(())
    }

    /// Prompt for a new student and insert it.
    ///
    /// A roll number that is already taken is refused before the name is
    /// asked for.
    pub fn add_student(&mut self) -> Result<RollNumber> {
        let line = self.prompt("Enter Roll Number: ")?;
        let roll = RollNumber(parse_int(Field::RollNumber, &line)?);
        if self.store.contains(roll)? {
            return Err(StoreError::DuplicateRoll(roll).into());
        }

        let line = self.prompt("Enter Student Name: ")?;
        let name = require_text(Field::Name, line)?;

        let mut marks = [0; SUBJECT_COUNT];
        for (i, mark) in marks.iter_mut().enumerate() {
            let subject = i + 1;
            let line = self.prompt(&format!("Enter marks for subject {}: ", subject))?;
            *mark = parse_int(Field::Mark(subject), &line)?;
        }

        let record = StudentRecord::new(roll, name, Marks(marks))?;
        record.validate()?;
        self.store.insert(record)?;

        tracing::info!(%roll, "student added");
        writeln!(
            self.output,
            "Student added successfully. Returning to main menu..."
        )?;
        Ok(roll)
    }

    /// Prompt for a roll number and print the matching record.
    ///
    /// Returns `None` (after saying so) if no record matches.
    pub fn show_student(&mut self) -> Result<Option<StudentRecord>> {
        let line = self.prompt("Enter Roll Number to search: ")?;
        let roll = RollNumber(parse_int(Field::RollNumber, &line)?);

        let Some(record) = self.store.find(roll)? else {
            writeln!(
                self.output,
                "Student with roll number {} not found. Returning to main menu...",
                roll
            )?;
            return Ok(None);
        };

        self.print_record(&record)?;
        writeln!(self.output, "Search completed.")?;
        Ok(Some(record))
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output)?;
        for line in MENU {
            writeln!(self.output, "{}", line)?;
        }
        Ok(())
    }

    fn print_record(&mut self, record: &StudentRecord) -> Result<()> {
        writeln!(self.output, "Roll Number: {}", record.roll_number())?;
        writeln!(self.output, "Student Name: {}", record.name())?;
        writeln!(self.output, "Marks: {}", record.marks())?;
        writeln!(self.output, "Average: {}", format_average(record.average()))?;
        writeln!(self.output, "Result: {}", record.status())?;
        Ok(())
    }

    /// Write `text` without a newline, then read the trimmed reply.
    fn prompt(&mut self, text: &str) -> Result<String> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        read_trimmed_line(&mut self.input)?.ok_or_else(|| InputError::EndOfInput.into())
    }

    fn report(&mut self, error: &SessionError) -> Result<()> {
        match error {
            SessionError::Store(StoreError::Full { .. }) => {
                writeln!(self.output, "Error: {}", error)?;
            }
            SessionError::Store(StoreError::Backend(_)) => {
                writeln!(self.output, "An unexpected error occurred: {}", error)?;
            }
            _ => {
                writeln!(self.output, "Error: {} Returning to main menu...", error)?;
            }
        }
        Ok(())
    }
}
