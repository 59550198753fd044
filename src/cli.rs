//! Command-line flags. All of them are optional; with none given the program
//! reads `database.ini`, section `postgresql`, and goes straight to the menu.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::config::AppConfig;

/// Interactive menu for listing, adding, updating and deleting student records
#[derive(Parser, Debug)]
#[command(name = "student-records")]
#[command(version)]
pub struct Cli {
    /// INI file holding the connection section
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Section of the INI file to read [default: postgresql]
    #[arg(long, value_name = "NAME")]
    pub section: Option<String>,

    /// Pause after each menu action, in milliseconds [default: 1000]
    #[arg(long, value_name = "MS")]
    pub pause_ms: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn app_config(&self) -> AppConfig {
        AppConfig::new(
            self.config.clone(),
            self.section.clone(),
            self.pause_ms.map(Duration::from_millis),
        )
    }
}
