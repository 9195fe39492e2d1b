use crate::command::GoInvocation;
use crate::container;
use crate::protocol::HookOutput;

/// Evaluate a Bash tool invocation.
///
/// Receives the already-extracted `command` from `ToolUse::parse()`.
/// `None` means the command field was missing or not a string; it is
/// treated as the empty string, which never matches.
pub(super) fn evaluate_bash(command: Option<&str>) -> Option<HookOutput> {
    let command = command.unwrap_or("");

    if !GoInvocation::new().matches(command) {
        return None;
    }

    Some(HookOutput::allow_rewrite(
        container::wrap_command(command),
        container::rewrite_reason(),
    ))
}
