// Shared test helpers for integration tests: spawn the real binary,
// feed it stdin, and capture stdout/stderr/exit code.
#![allow(dead_code)]

use std::path::PathBuf;
use std::process::Command;

pub fn binary_path() -> PathBuf {
    let path = PathBuf::from(env!("CARGO_BIN_EXE_go-docker-hook"));
    assert!(path.exists(), "binary not found at {}", path.display());
    path
}

/// Runs the binary's `hook` subcommand with the given stdin.
/// Returns (stdout, stderr, exit_code).
pub fn run_hook(stdin_input: &str) -> (String, String, i32) {
    let output = Command::new(binary_path())
        .arg("hook")
        .stdin(std::process::Stdio::piped())
        .stdout(std::process::Stdio::piped())
        .stderr(std::process::Stdio::piped())
        .spawn()
        .and_then(|mut child| {
            use std::io::{ErrorKind, Write};
            let write_result = child
                .stdin
                .take()
                .unwrap()
                .write_all(stdin_input.as_bytes());
            if let Err(e) = write_result {
                if e.kind() != ErrorKind::BrokenPipe {
                    return Err(e);
                }
            }
            child.wait_with_output()
        })
        .expect("failed to execute binary");

    let stdout = String::from_utf8(output.stdout).expect("stdout not valid UTF-8");
    let stderr = String::from_utf8(output.stderr).expect("stderr not valid UTF-8");
    let exit_code = output.status.code().unwrap_or(-1);
    (stdout, stderr, exit_code)
}

/// A full-shaped PreToolUse input with all the fields Claude Code sends.
pub fn make_input_json(tool_name: &str, tool_input: serde_json::Value) -> String {
    serde_json::json!({
        "session_id": "sess-e2e-test",
        "transcript_path": "/tmp/transcript.json",
        "cwd": "/tmp/test",
        "permission_mode": "default",
        "hook_event_name": "PreToolUse",
        "tool_name": tool_name,
        "tool_input": tool_input,
        "tool_use_id": "toolu_e2e"
    })
    .to_string()
}

pub fn bash_input_json(command: &str) -> String {
    make_input_json("Bash", serde_json::json!({"command": command}))
}

/// Parses the hook output JSON printed on stdout.
pub fn parse_hook_output(stdout: &str) -> serde_json::Value {
    serde_json::from_str(stdout.trim()).expect("stdout should be valid JSON")
}
