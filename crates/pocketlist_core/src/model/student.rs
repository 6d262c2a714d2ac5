//! Student roster record.
//!
//! # Responsibility
//! - Define the `Student` record and its `RollNumber` key.
//! - Normalize user-entered names before they reach the store.
//!
//! # Invariants
//! - `RollNumber` is always positive.
//! - `Student::name` is trimmed and never empty.
//! - Roll numbers render zero-padded to width 2 and are never truncated.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Minimum rendered width of a roll number.
const ROLL_NUMBER_WIDTH: usize = 2;

/// Positive, store-unique student key.
///
/// Assigned by the student controller; callers never pick one for a new record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct RollNumber(u32);

impl RollNumber {
    /// First key handed out by an empty roster.
    pub const FIRST: RollNumber = RollNumber(1);

    /// Wraps a raw value, rejecting zero.
    pub fn new(value: u32) -> Option<Self> {
        if value == 0 {
            None
        } else {
            Some(Self(value))
        }
    }

    /// Returns the raw numeric value.
    pub fn get(self) -> u32 {
        self.0
    }

    /// Returns the key directly after this one, or `None` on overflow.
    pub fn successor(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }

    /// Renders the key zero-padded to two digits (`7` -> `"07"`, `123` -> `"123"`).
    pub fn padded(self) -> String {
        self.to_string()
    }
}

impl Display for RollNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:0width$}", self.0, width = ROLL_NUMBER_WIDTH)
    }
}

impl TryFrom<u32> for RollNumber {
    type Error = String;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| "roll number must be positive".to_string())
    }
}

impl From<RollNumber> for u32 {
    fn from(value: RollNumber) -> Self {
        value.0
    }
}

/// Validation failure for user-entered text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameValidationError {
    /// Input is empty after trimming.
    Empty,
}

impl Display for NameValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "name must not be blank"),
        }
    }
}

impl Error for NameValidationError {}

/// One roster entry.
///
/// Deserialization runs the same name normalization as [`Student::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StudentWire")]
pub struct Student {
    /// Immutable key; survives renames.
    pub roll_number: RollNumber,
    /// Trimmed display name.
    pub name: String,
}

#[derive(Deserialize)]
struct StudentWire {
    roll_number: RollNumber,
    name: String,
}

impl TryFrom<StudentWire> for Student {
    type Error = NameValidationError;

    fn try_from(value: StudentWire) -> Result<Self, Self::Error> {
        Self::new(value.roll_number, &value.name)
    }
}

impl Student {
    /// Builds a student after normalizing `name`.
    ///
    /// # Errors
    /// - Returns `NameValidationError::Empty` when `name` trims to nothing.
    pub fn new(roll_number: RollNumber, name: &str) -> Result<Self, NameValidationError> {
        Ok(Self {
            roll_number,
            name: normalize_name(name)?,
        })
    }

    /// Renders the list line shown for this student at 1-based `position`.
    pub fn display_line(&self, position: usize) -> String {
        format!(
            "{position}. RollNo: {} — {}",
            self.roll_number.padded(),
            self.name
        )
    }
}

/// Trims `input` and rejects blank names.
pub fn normalize_name(input: &str) -> Result<String, NameValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(NameValidationError::Empty);
    }
    Ok(trimmed.to_string())
}
