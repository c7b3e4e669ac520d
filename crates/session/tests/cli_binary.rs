//! Black-box tests running the `fridgekeep` binary as a child process.

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn fridgekeep(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_fridgekeep"))
        .args(args)
        .env("RUST_LOG", "info")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn fridgekeep");

    // The child may exit before reading stdin (e.g. on a config error).
    let mut pipe = child.stdin.take().expect("stdin is piped");
    let _ = pipe.write_all(stdin.as_bytes());
    drop(pipe);

    child.wait_with_output().expect("fridgekeep did not finish")
}

fn csv_rows(stdout: &[u8]) -> (Vec<String>, Vec<Vec<String>>) {
    let mut reader = csv::Reader::from_reader(stdout);
    let headers = reader.headers().unwrap().iter().map(str::to_string).collect();
    let rows = reader
        .records()
        .map(|r| r.unwrap().iter().map(str::to_string).collect())
        .collect();
    (headers, rows)
}

#[test]
fn default_json_logs_stay_out_of_stdout_export() {
    let output = fridgekeep(&["--today", "2026-10-18"], "mleko\n\nSer\n");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout.clone()).unwrap();
    assert!(stdout.starts_with("Nazwa,Ilość,Jednostka,Data ważności,Status\n"));

    let (headers, rows) = csv_rows(&output.stdout);
    assert_eq!(headers.len(), 5);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0][0], "mleko");
    assert_eq!(rows[1][0], "Ser");

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("\"receipt ingested\""));
}

#[test]
fn pretty_logs_stay_out_of_stdout_export() {
    let output = fridgekeep(&["--today", "2026-10-18", "--pretty"], "Jajka\n");
    assert!(output.status.success());

    let (_, rows) = csv_rows(&output.stdout);
    assert_eq!(rows, vec![vec!["Jajka", "1", "szt.", "2026-10-25", "✅ OK"]]);
    assert!(String::from_utf8(output.stderr).unwrap().contains("receipt ingested"));
}

#[test]
fn unreadable_config_fails_without_output() {
    let output = fridgekeep(&["--config", "/nonexistent/fridgekeep.json"], "Ser\n");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
