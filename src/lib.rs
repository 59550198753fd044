//! Core library surface for the student records menu.
//!
//! The binary is a thin wrapper: it parses flags, loads the connection
//! section, opens the database and hands the connection to the menu loop.
//! Everything it calls is exposed here so tests can drive the same pieces
//! with in-memory input.
pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod models;
pub mod ui;

/// Startup configuration and the INI loader.
pub use config::{load_config, AppConfig, ConnectionParams};

/// Persistence entry points used by `main.rs` and the menu.
pub use db::{
    connect, create_student, delete_student, ensure_schema, fetch_students, update_student_email,
};

pub use error::{ConfigError, ConnectError, DateError, PromptError};

/// The single domain type plus the value types that travel with it.
pub use models::{NewStudent, Student, WriteOutcome};

/// The interactive menu and the console it reads from.
pub use ui::{run_menu, run_session, Console, MenuChoice};
