use std::io::Read;

use crate::decision;
use crate::protocol::HookOutput;

/// Errors that can occur while reading the hook input.
///
/// Neither variant is ever surfaced: both collapse into the silent
/// no-output branch in [`run`].
#[derive(Debug, thiserror::Error)]
enum InputError {
    #[error("failed to read stdin: {0}")]
    Read(#[from] std::io::Error),
    #[error("malformed hook input: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Execute the hook subcommand: read JSON from stdin, evaluate, write JSON to stdout.
///
/// Fail-open: malformed or unreadable input means the hook has nothing to
/// say, so nothing is printed and the process exits 0. A matching Bash
/// command produces exactly one JSON object on stdout; every other branch
/// produces no output at all.
pub fn run() {
    match execute_from_stdin() {
        Ok(Some(output)) => output_json(&output),
        Ok(None) | Err(_) => {}
    }
}

fn execute_from_stdin() -> Result<Option<HookOutput>, InputError> {
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    let hook_input = serde_json::from_str(&input)?;
    Ok(decision::evaluate(&hook_input))
}

/// Serialize a HookOutput to JSON and print to stdout.
///
/// # Panics
///
/// Panics if serialization fails, which cannot happen with the derived
/// `Serialize` impl on strings and enums. This is an invariant, not a
/// runtime error — failure here indicates a programming bug.
fn output_json(output: &HookOutput) {
    let json = serde_json::to_string(output).expect("HookOutput serialization cannot fail");
    println!("{json}");
}
