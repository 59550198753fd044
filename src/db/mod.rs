//! Persistence module split across logical submodules.

mod connection;
mod students;

pub use connection::{connect, ensure_schema};
pub use students::{create_student, delete_student, fetch_students, update_student_email};
