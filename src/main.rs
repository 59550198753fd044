//! Binary entry point: load the connection section, open the database, and
//! run the menu until the user leaves.
use clap::Parser;
use tracing::{error, info};

use student_records::cli::Cli;
use student_records::{connect, logging, run_session, ui, Console};

/// A missing config section aborts with an error. A failed connection is
/// reported and the program ends normally.
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    ui::configure_colors();

    let config = cli.app_config();
    println!("Starting Program");
    let params = config.load_connection_params()?;

    let conn = match connect(&params) {
        Ok(conn) => {
            println!("Connected to the database.");
            conn
        }
        Err(err) => {
            error!(error = %err, "connection failed");
            println!("{err}");
            println!("ERROR: Failed to connect to db. Exiting....");
            return Ok(());
        }
    };

    let mut console = Console::stdio();
    let dispatched = run_session(conn, &mut console, config.pause)?;
    info!(dispatched, "session finished");
    Ok(())
}
