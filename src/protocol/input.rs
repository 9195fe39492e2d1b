use serde::Deserialize;
use serde_json::Value;

/// The input received from Claude Code on stdin for a PreToolUse hook.
///
/// Only the fields this hook consults are modeled. Claude Code sends more
/// (session_id, cwd, permission_mode, ...); unknown fields are silently
/// ignored and missing fields take their defaults, so the minimal
/// `{"tool_name": ..., "tool_input": ...}` shape parses.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct HookInput {
    pub tool_name: String,
    pub tool_input: Value,
}
