use serde::Serialize;

/// The output returned to Claude Code on stdout.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HookOutput {
    pub hook_specific_output: PreToolUseOutput,
}

/// PreToolUse-specific output carrying the permission decision and the
/// substituted tool input.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreToolUseOutput {
    pub hook_event_name: HookEvent,
    pub permission_decision: Decision,
    pub updated_input: UpdatedInput,
    pub permission_decision_reason: String,
}

/// The hook event this output responds to.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub enum HookEvent {
    PreToolUse,
}

/// The permission decision: allow, ask, or deny.
///
/// This hook only ever emits `Allow`; the other variants are part of the
/// PreToolUse wire protocol.
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Allow,
    Ask,
    Deny,
}

/// Replacement fields for the intercepted tool call.
#[derive(Debug, Serialize)]
pub struct UpdatedInput {
    pub command: String,
}

impl HookOutput {
    /// Build an allow decision that substitutes `command` for the original.
    pub fn allow_rewrite(command: impl Into<String>, reason: impl Into<String>) -> Self {
        HookOutput {
            hook_specific_output: PreToolUseOutput {
                hook_event_name: HookEvent::PreToolUse,
                permission_decision: Decision::Allow,
                updated_input: UpdatedInput {
                    command: command.into(),
                },
                permission_decision_reason: reason.into(),
            },
        }
    }
}
