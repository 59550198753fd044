use rusqlite::Connection;
use tracing::{debug, info};

use crate::config::ConnectionParams;
use crate::error::ConnectError;

/// Keys that only matter to networked servers. They are tolerated so one INI
/// file can serve both kinds of deployment.
const SERVER_ONLY_KEYS: &[&str] = &["host", "port", "user", "password"];

/// Open the database named by `dbname` (or its alias `database`) and make sure
/// the `students` table exists. `:memory:` opens a throwaway in-memory store.
pub fn connect(params: &ConnectionParams) -> Result<Connection, ConnectError> {
    let db_name = params
        .get("dbname")
        .or_else(|| params.get("database"))
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .ok_or(ConnectError::MissingParameter("dbname"))?;

    for key in SERVER_ONLY_KEYS {
        if params.get(key).is_some() {
            debug!(key = *key, "parameter not used by the embedded engine");
        }
    }

    let conn = Connection::open(db_name).map_err(|source| ConnectError::Open {
        target: db_name.to_string(),
        source,
    })?;
    ensure_schema(&conn)?;

    info!(db_name, "connected to database");
    Ok(conn)
}

/// Create the `students` table when it is missing. Existing tables are left
/// alone, so a hand-made schema with the same column names keeps working.
pub fn ensure_schema(conn: &Connection) -> Result<(), ConnectError> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS students (
            student_id INTEGER PRIMARY KEY AUTOINCREMENT,
            email TEXT NOT NULL,
            first_name TEXT NOT NULL,
            last_name TEXT NOT NULL,
            enrollment_date TEXT
        )",
        [],
    )
    .map_err(ConnectError::Schema)?;
    Ok(())
}
