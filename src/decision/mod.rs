mod bash;

use crate::protocol::{HookInput, HookOutput, ToolUse};

/// Evaluate a hook input and return the command substitution, if any.
///
/// Returns `None` when the hook has no opinion (non-Bash tools, or Bash
/// commands that do not invoke the `go` toolchain); the caller prints
/// nothing in that case. Returns `Some(output)` with an allow decision
/// carrying the container-wrapped command otherwise.
///
/// # Examples
///
/// ```
/// use go_docker_hook::decision::evaluate;
/// use go_docker_hook::protocol::{Decision, HookInput};
///
/// let input: HookInput = serde_json::from_str(
///     r#"{"tool_name":"Bash","tool_input":{"command":"go test ./..."}}"#,
/// ).unwrap();
///
/// let output = evaluate(&input).unwrap();
/// assert_eq!(
///     output.hook_specific_output.permission_decision,
///     Decision::Allow
/// );
/// ```
pub fn evaluate(input: &HookInput) -> Option<HookOutput> {
    let tool_use = ToolUse::parse(&input.tool_name, &input.tool_input);
    match &tool_use {
        ToolUse::Bash { command } => bash::evaluate_bash(command.as_deref()),
        ToolUse::Unknown { .. } => None,
    }
}
