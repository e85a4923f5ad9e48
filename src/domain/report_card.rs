use crate::domain::grade::{Grade, NOT_APPLICABLE};
use crate::domain::subject::Subject;
use serde::Serialize;
use std::fmt;

/// Highest mark that can be stored. Larger values are clamped down to it.
pub const MAX_MARKS: i32 = 100;

/// Returned by [`ReportCard::subject_marks_or_sentinel`] when a subject has no entry.
pub const NO_ENTRY_MARKS: i32 = -1;

const SEPARATOR: &str = "--------------------------------------";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SubjectMarks {
    subject: Subject,
    marks: i32,
}

/// One student's marks for one examination year.
///
/// Entries are kept in the order they were first entered. Marks above
/// [`MAX_MARKS`] are clamped; negative marks are stored as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportCard {
    year: i32,
    name: String,
    marks: Vec<SubjectMarks>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubjectResult {
    pub subject: Subject,
    pub marks: i32,
    pub grade: Grade,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportCardSummary {
    pub name: String,
    pub year: i32,
    pub results: Vec<SubjectResult>,
}

impl ReportCard {
    pub fn new(year: i32, name: impl Into<String>) -> Self {
        Self {
            year,
            name: name.into(),
            marks: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn set_year(&mut self, year: i32) {
        self.year = year;
    }

    /// Inserts or overwrites the marks for `subject`. An overwrite keeps the
    /// entry's original position.
    pub fn enter_subject_marks(&mut self, subject: Subject, marks: i32) {
        let stored = if marks > MAX_MARKS {
            tracing::debug!(%subject, marks, "clamping marks to {}", MAX_MARKS);
            MAX_MARKS
        } else {
            marks
        };

        match self.marks.iter_mut().find(|entry| entry.subject == subject) {
            Some(entry) => {
                tracing::debug!(%subject, old = entry.marks, new = stored, "overwriting marks");
                entry.marks = stored;
            }
            None => self.marks.push(SubjectMarks {
                subject,
                marks: stored,
            }),
        }
    }

    pub fn edit_subject_marks(&mut self, subject: Subject, marks: i32) {
        self.enter_subject_marks(subject, marks);
    }

    /// Removes the entry for `subject`. Does nothing when there is none.
    pub fn delete_subject_entry(&mut self, subject: Subject) {
        let before = self.marks.len();
        self.marks.retain(|entry| entry.subject != subject);
        if self.marks.len() != before {
            tracing::debug!(%subject, "deleted marks entry");
        }
    }

    pub fn subject_marks(&self, subject: Subject) -> Option<i32> {
        self.marks
            .iter()
            .find(|entry| entry.subject == subject)
            .map(|entry| entry.marks)
    }

    /// Like [`subject_marks`](Self::subject_marks) but reports a missing entry
    /// as [`NO_ENTRY_MARKS`]. A stored negative mark is indistinguishable from
    /// a missing one here; prefer the `Option` form.
    pub fn subject_marks_or_sentinel(&self, subject: Subject) -> i32 {
        self.subject_marks(subject).unwrap_or(NO_ENTRY_MARKS)
    }

    pub fn subject_grade(&self, subject: Subject) -> Option<Grade> {
        self.subject_marks(subject).map(Grade::from_marks)
    }

    /// Grade label for `subject`, or `"Not Applicable"` when there is no entry.
    pub fn subject_grade_label(&self, subject: Subject) -> &'static str {
        self.subject_grade(subject)
            .map(Grade::label)
            .unwrap_or(NOT_APPLICABLE)
    }

    pub fn entries(&self) -> impl Iterator<Item = (Subject, i32)> + '_ {
        self.marks.iter().map(|entry| (entry.subject, entry.marks))
    }

    pub fn len(&self) -> usize {
        self.marks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    pub fn summary(&self) -> ReportCardSummary {
        ReportCardSummary {
            name: self.name.clone(),
            year: self.year,
            results: self
                .entries()
                .map(|(subject, marks)| SubjectResult {
                    subject,
                    marks,
                    grade: Grade::from_marks(marks),
                })
                .collect(),
        }
    }

    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ReportCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Year: {}", self.year)?;
        writeln!(f, "{}", SEPARATOR)?;
        for (subject, marks) in self.entries() {
            writeln!(f, "{}: {}", subject, Grade::from_marks(marks))?;
        }
        writeln!(f, "{}", SEPARATOR)
    }
}
