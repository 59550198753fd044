//! Typed errors for the three places where callers need to branch on the kind
//! of failure: loading the config, opening the connection, and reading from
//! the terminal. Query helpers stay on `anyhow` because the menu only ever
//! reports them.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: ini::Error,
    },

    #[error("Section {section} not found in the {} file", .path.display())]
    SectionNotFound { section: String, path: PathBuf },
}

#[derive(Error, Debug)]
pub enum ConnectError {
    #[error("missing connection parameter: {0}")]
    MissingParameter(&'static str),

    #[error("failed to open database {target}: {source}")]
    Open {
        target: String,
        #[source]
        source: rusqlite::Error,
    },

    #[error("failed to prepare students table: {0}")]
    Schema(#[source] rusqlite::Error),
}

#[derive(Error, Debug)]
pub enum PromptError {
    /// Input ended before a valid value was supplied.
    #[error("input cancelled")]
    Cancelled,

    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Why three day/month/year answers do not make a calendar date.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    #[error("invalid day: {0:?}")]
    Day(String),

    #[error("invalid month: {0:?}")]
    Month(String),

    #[error("invalid year: {0:?}")]
    Year(String),

    #[error("year {0} is outside 1 - 9999")]
    YearOutOfRange(i32),

    #[error("{year:04}-{month:02}-{day:02} is not a valid date")]
    NoSuchDate { year: i32, month: u32, day: u32 },

    #[error("input was not valid text")]
    Unreadable,
}
