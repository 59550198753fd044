use std::io;

use anyhow::Error;
use crossterm::style::force_color_output;
use crossterm::tty::IsTty;

/// Menu body, one line per choice.
pub(crate) const MENU_LINES: &[&str] = &[
    " Enter 1: View all the student records",
    " Enter 2: Add a new student Record",
    " Enter 3: Update Student Email",
    " Enter 4: Delete student",
    " Enter 5 or other number: Exit Program",
];

pub(crate) const MENU_HEADER: &str = "================ Menu ================";
pub(crate) const MENU_FOOTER: &str = "=============== ---- ================";

/// Extract the most relevant error message from a chained error.
pub(crate) fn surface_error(err: &Error) -> String {
    err.chain()
        .last()
        .map(|cause| cause.to_string())
        .unwrap_or_else(|| err.to_string())
}

/// Drop ANSI styling when stdout is piped or redirected.
pub fn configure_colors() {
    if !io::stdout().is_tty() {
        force_color_output(false);
    }
}
