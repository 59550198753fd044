use anyhow::{Context, Result};
use rusqlite::{params, Connection};

use crate::models::{NewStudent, Student, WriteOutcome};

/// Retrieve every student ordered by id, which is also insertion order. The
/// whole table is loaded at once; the menu prints it straight away and keeps
/// nothing afterwards.
pub fn fetch_students(conn: &Connection) -> Result<Vec<Student>> {
    let mut stmt = conn
        .prepare(
            "SELECT student_id, email, first_name, last_name, enrollment_date
             FROM students
             ORDER BY student_id",
        )
        .context("failed to prepare student query")?;

    let students = stmt
        .query_map([], |row| {
            Ok(Student {
                id: row.get(0)?,
                email: row.get(1)?,
                first_name: row.get(2)?,
                last_name: row.get(3)?,
                enrollment_date: row.get(4)?,
            })
        })
        .context("failed to load students")?
        .collect::<Result<Vec<_>, _>>()
        .context("failed to collect students")?;

    Ok(students)
}

/// Insert a new student row, returning it with the id the store assigned so
/// the menu can confirm which record was created. Autocommit means the row
/// is durable as soon as this returns.
pub fn create_student(conn: &Connection, student: &NewStudent) -> Result<Student> {
    conn.execute(
        "INSERT INTO students (email, first_name, last_name, enrollment_date)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            student.email,
            student.first_name,
            student.last_name,
            student.enrollment_date
        ],
    )
    .context("failed to insert student")?;

    let id = conn.last_insert_rowid();
    Ok(Student {
        id,
        email: student.email.clone(),
        first_name: student.first_name.clone(),
        last_name: student.last_name.clone(),
        enrollment_date: Some(student.enrollment_date),
    })
}

/// Replace the email of one student. Zero affected rows is reported as
/// [`WriteOutcome::NotFound`] rather than an error.
pub fn update_student_email(conn: &Connection, id: i64, email: &str) -> Result<WriteOutcome> {
    let updated = conn
        .execute(
            "UPDATE students SET email = ?1 WHERE student_id = ?2",
            params![email, id],
        )
        .context("failed to update student email")?;

    Ok(WriteOutcome::from_affected(updated))
}

/// Remove one student by id. Like the email update, a missing id comes back
/// as [`WriteOutcome::NotFound`] so the menu can say so and carry on.
pub fn delete_student(conn: &Connection, id: i64) -> Result<WriteOutcome> {
    let deleted = conn
        .execute("DELETE FROM students WHERE student_id = ?1", params![id])
        .context("failed to delete student")?;

    Ok(WriteOutcome::from_affected(deleted))
}
