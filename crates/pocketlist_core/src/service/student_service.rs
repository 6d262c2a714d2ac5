//! Student roster controller.
//!
//! # Responsibility
//! - Assign roll numbers and apply add/update/remove to the roster.
//! - Track the search text, the input buffer and the single edit target.
//! - Gate deletes behind an explicit confirm/cancel decision.
//!
//! # Invariants
//! - Next roll number is `max(existing) + 1`, or `1` for an empty roster;
//!   keys freed by a delete of the maximum are handed out again.
//! - At most one record is in edit at a time.
//! - Failed saves leave the roster, input buffer and edit target untouched.

use crate::model::student::{normalize_name, NameValidationError, RollNumber, Student};
use crate::repo::student_repo::{InMemoryStudentRepository, RepoError, StudentRepository};
use crate::search::filter::filter_students;
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Notice rendered when the filtered roster is empty.
pub const EMPTY_ROSTER_NOTICE: &str = "No students found.";

const DEMO_ROSTER: [(u32, &str); 5] = [
    (1, "Lakshay Saini"),
    (2, "KamalPreet Singh"),
    (3, "Arpit Dogra"),
    (4, "Sakshi"),
    (5, "Shagun"),
];

/// Errors from roster controller operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StudentServiceError {
    /// Name is blank after trim.
    InvalidName,
    /// Target roll number does not exist.
    StudentNotFound(RollNumber),
    /// The roster already holds `u32::MAX`.
    RollNumbersExhausted,
    /// Store-level failure.
    Repo(RepoError),
}

impl Display for StudentServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidName => write!(f, "Enter a valid name"),
            Self::StudentNotFound(roll_number) => write!(f, "student not found: {roll_number}"),
            Self::RollNumbersExhausted => write!(f, "no roll numbers left to assign"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StudentServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<NameValidationError> for StudentServiceError {
    fn from(_: NameValidationError) -> Self {
        Self::InvalidName
    }
}

impl From<RepoError> for StudentServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::Validation(_) => Self::InvalidName,
            RepoError::NotFound(roll_number) => Self::StudentNotFound(roll_number),
            other => Self::Repo(other),
        }
    }
}

/// Delete prompt bound to one roll number at the time it was shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingRemoval {
    pub roll_number: RollNumber,
}

impl PendingRemoval {
    pub const TITLE: &'static str = "Confirm Delete";
    pub const MESSAGE: &'static str = "Are you sure?";
    pub const CANCEL_LABEL: &'static str = "Cancel";
    pub const DELETE_LABEL: &'static str = "Delete";
}

/// User answer to a delete prompt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RemovalDecision {
    #[default]
    Cancel,
    Delete,
}

/// What happened after a delete prompt was answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemovalOutcome {
    Cancelled,
    Removed(Student),
    /// Delete confirmed, but the record was already gone.
    AlreadyAbsent,
}

/// Outcome of [`StudentService::save`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Added(Student),
    Updated(Student),
}

/// Roster controller and view state.
pub struct StudentService<R: StudentRepository> {
    repo: R,
    search_text: String,
    input_text: String,
    edit_target: Option<RollNumber>,
}

impl StudentService<InMemoryStudentRepository> {
    /// Creates a controller over the built-in five-student roster.
    pub fn with_demo_roster() -> Self {
        let students = DEMO_ROSTER.iter().filter_map(|(value, name)| {
            let roll_number = RollNumber::new(*value)?;
            Student::new(roll_number, name).ok()
        });
        let repo = InMemoryStudentRepository::from_students(students)
            .expect("built-in roster keys are unique");
        Self::new(repo)
    }
}

impl<R: StudentRepository> StudentService<R> {
    /// Creates a controller over `repo` with empty view state.
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            search_text: String::new(),
            input_text: String::new(),
            edit_target: None,
        }
    }

    /// Read access to the underlying store.
    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// All records in store order.
    pub fn students(&self) -> Vec<&Student> {
        self.repo.students().collect()
    }

    pub fn get(&self, roll_number: RollNumber) -> Option<&Student> {
        self.repo.get(roll_number)
    }

    /// Key the next `add` will assign.
    pub fn next_roll_number(&self) -> Result<RollNumber, StudentServiceError> {
        match self.repo.max_roll_number() {
            None => Ok(RollNumber::FIRST),
            Some(max) => max
                .successor()
                .ok_or(StudentServiceError::RollNumbersExhausted),
        }
    }

    /// Appends a new student under the next roll number.
    ///
    /// # Errors
    /// - `InvalidName` when `name` trims to nothing; the roster is unchanged.
    /// - `RollNumbersExhausted` when a valid name finds no key left.
    pub fn add(&mut self, name: &str) -> Result<Student, StudentServiceError> {
        let name = normalize_name(name)?;
        let roll_number = self.next_roll_number()?;
        let student = Student { roll_number, name };
        self.repo.insert(student.clone())?;
        info!(
            "event=student_add module=student status=ok roll_no={} count={}",
            roll_number,
            self.repo.len()
        );
        Ok(student)
    }

    /// Renames one student in place.
    ///
    /// # Errors
    /// - `StudentNotFound` when `roll_number` is absent.
    /// - `InvalidName` when `name` trims to nothing.
    pub fn update(
        &mut self,
        roll_number: RollNumber,
        name: &str,
    ) -> Result<Student, StudentServiceError> {
        match self.repo.rename(roll_number, name) {
            Ok(student) => {
                info!(
                    "event=student_update module=student status=ok roll_no={}",
                    roll_number
                );
                Ok(student)
            }
            Err(err) => {
                warn!(
                    "event=student_update module=student status=error roll_no={} error={}",
                    roll_number, err
                );
                Err(err.into())
            }
        }
    }

    /// Removes one student; absent keys are a no-op.
    ///
    /// UI callers go through [`Self::request_remove`] and
    /// [`Self::resolve_remove`] so a confirmation always precedes this.
    pub fn remove(&mut self, roll_number: RollNumber) -> Option<Student> {
        let removed = self.repo.remove(roll_number);
        if removed.is_some() {
            if self.edit_target == Some(roll_number) {
                self.edit_target = None;
                self.input_text.clear();
            }
            info!(
                "event=student_remove module=student status=ok roll_no={} count={}",
                roll_number,
                self.repo.len()
            );
        } else {
            debug!(
                "event=student_remove module=student status=noop roll_no={}",
                roll_number
            );
        }
        removed
    }

    /// Opens a delete prompt for `roll_number`. Nothing changes yet.
    pub fn request_remove(&self, roll_number: RollNumber) -> PendingRemoval {
        PendingRemoval { roll_number }
    }

    /// Applies the user's answer to a delete prompt.
    pub fn resolve_remove(
        &mut self,
        pending: PendingRemoval,
        decision: RemovalDecision,
    ) -> RemovalOutcome {
        match decision {
            RemovalDecision::Cancel => RemovalOutcome::Cancelled,
            RemovalDecision::Delete => match self.remove(pending.roll_number) {
                Some(student) => RemovalOutcome::Removed(student),
                None => RemovalOutcome::AlreadyAbsent,
            },
        }
    }

    /// Puts `roll_number` in edit and pre-fills the input with its name.
    ///
    /// Replaces any previous edit target.
    pub fn begin_edit(&mut self, roll_number: RollNumber) -> Result<&Student, StudentServiceError> {
        let Some(student) = self.repo.get(roll_number) else {
            return Err(StudentServiceError::StudentNotFound(roll_number));
        };
        self.input_text = student.name.clone();
        self.edit_target = Some(roll_number);
        Ok(student)
    }

    /// Leaves edit mode and clears the input buffer.
    pub fn cancel_edit(&mut self) {
        self.edit_target = None;
        self.input_text.clear();
    }

    pub fn edit_target(&self) -> Option<RollNumber> {
        self.edit_target
    }

    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    pub fn set_input_text(&mut self, text: impl Into<String>) {
        self.input_text = text.into();
    }

    /// Commits the input buffer: updates the edit target if any, else adds.
    ///
    /// On success the input buffer and edit target are cleared. On failure
    /// both are kept so the user can correct the input.
    pub fn save(&mut self) -> Result<SaveOutcome, StudentServiceError> {
        let input = self.input_text.clone();
        let outcome = match self.edit_target {
            Some(roll_number) => SaveOutcome::Updated(self.update(roll_number, &input)?),
            None => SaveOutcome::Added(self.add(&input)?),
        };
        self.cancel_edit();
        Ok(outcome)
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    /// Current Query View, recomputed on every call.
    pub fn filtered(&self) -> Vec<&Student> {
        filter_students(self.repo.students(), &self.search_text)
    }

    /// Rendered list lines for the current Query View.
    pub fn display_lines(&self) -> Vec<String> {
        self.filtered()
            .into_iter()
            .enumerate()
            .map(|(index, student)| student.display_line(index + 1))
            .collect()
    }
}
