//! The main menu and its choices.

use thiserror::Error;

/// The lines printed above the choice prompt.
pub const MENU: &[&str] = &[
    "===== Student Result Management System =====",
    "1. Add Student",
    "2. Show Student Details",
    "3. Exit",
];

/// An action picked from the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Show,
    Exit,
}

/// A menu line that does not name an action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MenuError {
    #[error("Invalid choice. Please enter 1, 2 or 3.")]
    Empty,

    #[error("Please enter a numeric choice (1-3).")]
    NotANumber,

    #[error("Invalid choice. Please select 1-3.")]
    OutOfRange(i32),
}

impl MenuChoice {
    /// Parse a trimmed menu line.
    pub fn parse(line: &str) -> Result<Self, MenuError> {
        if line.is_empty() {
            return Err(MenuError::Empty);
        }
        match line.parse::<i32>().map_err(|_| MenuError::NotANumber)? {
            1 => Ok(MenuChoice::Add),
            2 => Ok(MenuChoice::Show),
            3 => Ok(MenuChoice::Exit),
            other => Err(MenuError::OutOfRange(other)),
        }
    }
}
