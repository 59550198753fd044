//! Domain model that mirrors the `students` table. Rows are fetched, printed
//! and dropped again within one menu action, so the type stays a plain data
//! holder with no behaviour beyond formatting.

use std::fmt;

use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
/// One row of the `students` table.
pub struct Student {
    /// Primary key assigned by the database on insert. Update and delete
    /// flows ask the user for this value.
    pub id: i64,
    /// Contact address; the only column the menu can change after insert.
    pub email: String,
    /// Given name as typed at the prompt.
    pub first_name: String,
    /// Family name as typed at the prompt.
    pub last_name: String,
    /// Stored as ISO `YYYY-MM-DD` text. Rows written by other tools may leave
    /// the column empty, hence the `Option`.
    pub enrollment_date: Option<NaiveDate>,
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {} {} | ",
            self.id, self.email, self.first_name, self.last_name
        )?;
        match self.enrollment_date {
            Some(date) => write!(f, "{date}"),
            None => f.write_str("-"),
        }
    }
}

/// Field values collected from the user before the row exists. There is no
/// id yet; the store hands one out on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    /// Contact address, stored verbatim.
    pub email: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Always a real calendar date; the prompt re-asks until it gets one.
    pub enrollment_date: NaiveDate,
}

/// Result of a write keyed by student id. A miss is not an error: the menu
/// reports it and carries on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// At least one row matched the id and was changed.
    Applied,
    /// No row carries the id; the table is untouched.
    NotFound,
}

impl WriteOutcome {
    pub(crate) fn from_affected(rows: usize) -> Self {
        if rows > 0 {
            WriteOutcome::Applied
        } else {
            WriteOutcome::NotFound
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_joins_columns() {
        let student = Student {
            id: 7,
            email: "ada@example.com".into(),
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            enrollment_date: NaiveDate::from_ymd_opt(2024, 9, 1),
        };
        assert_eq!(
            student.to_string(),
            "7 | ada@example.com | Ada Lovelace | 2024-09-01"
        );
    }

    #[test]
    fn display_marks_missing_date() {
        let student = Student {
            id: 1,
            email: String::new(),
            first_name: "A".into(),
            last_name: "B".into(),
            enrollment_date: None,
        };
        assert!(student.to_string().ends_with("| -"));
    }

    #[test]
    fn outcome_follows_row_count() {
        assert_eq!(WriteOutcome::from_affected(0), WriteOutcome::NotFound);
        assert_eq!(WriteOutcome::from_affected(1), WriteOutcome::Applied);
        assert_eq!(WriteOutcome::from_affected(3), WriteOutcome::Applied);
    }
}
