use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

fn write_config(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("database.ini");
    fs::write(&path, contents).expect("write temp config");
    path
}

fn sqlite_config(dir: &TempDir) -> PathBuf {
    let db = dir.path().join("students.sqlite");
    write_config(
        dir.path(),
        &format!(
            "[postgresql]\nhost=localhost\nport=5432\nuser=admin\npassword=secret\ndbname={}\n",
            db.display()
        ),
    )
}

fn run(config: &Path, extra: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_student-records"))
        .arg("--config")
        .arg(config)
        .args(["--pause-ms", "0"])
        .args(extra)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn student-records");

    // The child may exit before reading everything (startup failures).
    let mut handle = child.stdin.take().expect("stdin handle");
    let _ = handle.write_all(stdin.as_bytes());
    drop(handle);

    child.wait_with_output().expect("wait for student-records")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn insert_then_list_shows_row() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = sqlite_config(&dir);

    let output = run(
        &config,
        &[],
        "2\nada@example.com\nAda\nLovelace\n10\n12\n2023\n1\n5\n",
    );

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("Starting Program"));
    assert!(out.contains("Connected to the database."));
    assert!(out.contains("Student added with id 1."));
    assert!(out.contains("1 | ada@example.com | Ada Lovelace | 2023-12-10"));
    assert!(out.contains("Exiting!!"));
}

#[test]
fn records_persist_between_runs() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = sqlite_config(&dir);

    let first = run(&config, &[], "2\nkeep@x\nK\nEep\n1\n1\n2024\n5\n");
    assert!(first.status.success());

    let second = run(&config, &[], "3\n1\nchanged@x\n1\n4\n1\n1\n\n");
    assert!(second.status.success());
    let out = stdout(&second);
    assert!(out.contains("Student email updated successfully."));
    assert!(out.contains("changed@x"));
    assert!(out.contains("Student Record deleted successfully."));
    assert!(out.contains("No student records found."));
}

#[test]
fn invalid_input_is_retried() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = sqlite_config(&dir);

    let output = run(&config, &[], "4\nnope\n77\n5\n");

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("Error: Enter again!"));
    assert!(out.contains("No student found with the specified ID."));
}

#[test]
fn missing_section_fails_startup() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = write_config(dir.path(), "[mysql]\nhost=localhost\n");

    let output = run(&config, &[], "");

    assert!(!output.status.success(), "Expected nonzero exit code");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Section postgresql not found"));
    assert!(!stdout(&output).contains("Menu"));
}

#[test]
fn section_flag_selects_other_section() {
    let dir = tempfile::tempdir().expect("temp dir");
    let db = dir.path().join("alt.sqlite");
    let config = write_config(
        dir.path(),
        &format!("[postgresql]\nhost=localhost\n\n[local]\ndbname={}\n", db.display()),
    );

    let output = run(&config, &["--section", "local"], "1\n5\n");

    assert!(output.status.success());
    assert!(stdout(&output).contains("Getting all student records"));
    assert!(db.exists());
}

#[test]
fn connection_failure_exits_gracefully() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = write_config(dir.path(), "[postgresql]\nhost=localhost\nuser=admin\n");

    let output = run(&config, &[], "1\n");

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("missing connection parameter: dbname"));
    assert!(out.contains("ERROR: Failed to connect to db. Exiting...."));
    assert!(!out.contains("Getting all student records"));
}
