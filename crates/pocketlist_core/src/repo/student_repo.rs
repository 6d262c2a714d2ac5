//! Student store contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide keyed insert/rename/remove/lookup over the roster.
//! - Expose the current maximum key for roll number assignment.
//!
//! # Invariants
//! - Renames keep the record's key and position.
//! - Removal keeps the relative order of the remaining records.

use crate::model::student::{normalize_name, NameValidationError, RollNumber, Student};
use indexmap::IndexMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Student store error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    Validation(NameValidationError),
    NotFound(RollNumber),
    /// Insert targeted a key that is already present.
    DuplicateKey(RollNumber),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(roll_number) => write!(f, "student not found: {roll_number}"),
            Self::DuplicateKey(roll_number) => {
                write!(f, "student roll number already in use: {roll_number}")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) | Self::DuplicateKey(_) => None,
        }
    }
}

impl From<NameValidationError> for RepoError {
    fn from(value: NameValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Store interface for roster records.
pub trait StudentRepository {
    fn insert(&mut self, student: Student) -> RepoResult<()>;
    fn rename(&mut self, roll_number: RollNumber, name: &str) -> RepoResult<Student>;
    fn remove(&mut self, roll_number: RollNumber) -> Option<Student>;
    fn get(&self, roll_number: RollNumber) -> Option<&Student>;
    fn students(&self) -> Box<dyn Iterator<Item = &Student> + '_>;
    fn max_roll_number(&self) -> Option<RollNumber>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Insertion-ordered roster held in process memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStudentRepository {
    students: IndexMap<RollNumber, Student>,
}

impl InMemoryStudentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from existing records, keeping their order.
    ///
    /// # Errors
    /// - `DuplicateKey` when two records share a roll number.
    /// - `Validation` when a record carries a blank name.
    pub fn from_students(students: impl IntoIterator<Item = Student>) -> RepoResult<Self> {
        let mut repo = Self::new();
        for student in students {
            repo.insert(student)?;
        }
        Ok(repo)
    }
}

impl StudentRepository for InMemoryStudentRepository {
    fn insert(&mut self, student: Student) -> RepoResult<()> {
        let name = normalize_name(&student.name)?;
        if self.students.contains_key(&student.roll_number) {
            return Err(RepoError::DuplicateKey(student.roll_number));
        }
        self.students.insert(
            student.roll_number,
            Student {
                roll_number: student.roll_number,
                name,
            },
        );
        Ok(())
    }

    fn rename(&mut self, roll_number: RollNumber, name: &str) -> RepoResult<Student> {
        let Some(student) = self.students.get_mut(&roll_number) else {
            return Err(RepoError::NotFound(roll_number));
        };
        student.name = normalize_name(name)?;
        Ok(student.clone())
    }

    fn remove(&mut self, roll_number: RollNumber) -> Option<Student> {
        self.students.shift_remove(&roll_number)
    }

    fn get(&self, roll_number: RollNumber) -> Option<&Student> {
        self.students.get(&roll_number)
    }

    fn students(&self) -> Box<dyn Iterator<Item = &Student> + '_> {
        Box::new(self.students.values())
    }

    fn max_roll_number(&self) -> Option<RollNumber> {
        self.students.keys().copied().max()
    }

    fn len(&self) -> usize {
        self.students.len()
    }
}
