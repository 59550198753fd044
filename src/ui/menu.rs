use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use rusqlite::Connection;
use tracing::{debug, info, warn};

use crate::db::{create_student, delete_student, fetch_students, update_student_email};
use crate::error::PromptError;
use crate::models::WriteOutcome;

use super::console::Console;
use super::helpers::{surface_error, MENU_FOOTER, MENU_HEADER, MENU_LINES};

const NOT_FOUND_MESSAGE: &str = "No student found with the specified ID.";

/// What the user asked for at the menu prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ListAll,
    Insert,
    UpdateEmail,
    Delete,
    Exit,
}

impl MenuChoice {
    /// `1` to `4` select an action. Anything else, blank input included,
    /// leaves the menu.
    pub fn parse(input: &str) -> Self {
        match input.trim() {
            "1" => MenuChoice::ListAll,
            "2" => MenuChoice::Insert,
            "3" => MenuChoice::UpdateEmail,
            "4" => MenuChoice::Delete,
            _ => MenuChoice::Exit,
        }
    }
}

/// Run the menu until the user leaves, then close the connection. Taking the
/// connection by value means it is closed here and nowhere else.
pub fn run_session<R: BufRead, W: Write>(
    conn: Connection,
    console: &mut Console<R, W>,
    pause: Duration,
) -> Result<usize> {
    let outcome = run_menu(&conn, console, pause);

    conn.close()
        .map_err(|(_, err)| err)
        .context("failed to close database connection")?;
    debug!("database connection closed");

    outcome
}

/// Show the menu, dispatch the choice, repeat. Returns how many record
/// operations were dispatched. A failed operation is reported and the menu
/// comes back; only terminal I/O failures end the loop with an error.
pub fn run_menu<R: BufRead, W: Write>(
    conn: &Connection,
    console: &mut Console<R, W>,
    pause: Duration,
) -> Result<usize> {
    let mut dispatched = 0;

    loop {
        show_menu(console)?;
        let choice = match console.menu_choice() {
            Ok(raw) => MenuChoice::parse(&raw),
            Err(PromptError::Cancelled) => MenuChoice::Exit,
            Err(err) => return Err(err.into()),
        };

        if choice == MenuChoice::Exit {
            console.say("Exiting!!")?;
            break;
        }

        debug!(?choice, "dispatching menu choice");
        match dispatch(conn, console, choice) {
            Ok(()) => {}
            Err(err) => {
                let prompt_error = err.downcast_ref::<PromptError>();
                if matches!(prompt_error, Some(PromptError::Cancelled)) {
                    console.say("Exiting!!")?;
                    break;
                }
                if prompt_error.is_some() {
                    return Err(err);
                }
                warn!(?choice, error = format_args!("{err:#}"), "record operation failed");
                console.warn(format_args!("Error: {}", surface_error(&err)))?;
            }
        }
        dispatched += 1;

        if !pause.is_zero() {
            thread::sleep(pause);
        }
    }

    info!(dispatched, "menu loop finished");
    Ok(dispatched)
}

fn show_menu<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<()> {
    console.say("")?;
    console.heading(MENU_HEADER)?;
    for line in MENU_LINES {
        console.say(line)?;
    }
    console.heading(MENU_FOOTER)?;
    Ok(())
}

fn dispatch<R: BufRead, W: Write>(
    conn: &Connection,
    console: &mut Console<R, W>,
    choice: MenuChoice,
) -> Result<()> {
    match choice {
        MenuChoice::ListAll => list_students(conn, console),
        MenuChoice::Insert => {
            console.say("Enter Student Records:")?;
            let student = console.new_student()?;
            console.say("Adding student")?;
            let created = create_student(conn, &student)?;
            console.say(format_args!("Student added with id {}.", created.id))?;
            Ok(())
        }
        MenuChoice::UpdateEmail => {
            console.say("Enter Student to find and email to replace.")?;
            let id = console.student_id()?;
            let email = console.email()?;
            console.say("Updating student email")?;
            match update_student_email(conn, id, &email)? {
                WriteOutcome::Applied => console.say("Student email updated successfully.")?,
                WriteOutcome::NotFound => console.say(NOT_FOUND_MESSAGE)?,
            }
            Ok(())
        }
        MenuChoice::Delete => {
            console.say("Enter Student ID to delete.")?;
            let id = console.student_id()?;
            console.say("Deleting Student")?;
            match delete_student(conn, id)? {
                WriteOutcome::Applied => console.say("Student Record deleted successfully.")?,
                WriteOutcome::NotFound => console.say(NOT_FOUND_MESSAGE)?,
            }
            Ok(())
        }
        MenuChoice::Exit => Ok(()),
    }
}

fn list_students<R: BufRead, W: Write>(
    conn: &Connection,
    console: &mut Console<R, W>,
) -> Result<()> {
    console.say("Getting all student records")?;
    let students = fetch_students(conn)?;
    if students.is_empty() {
        console.say("No student records found.")?;
    }
    for student in &students {
        console.say(student)?;
    }
    Ok(())
}
