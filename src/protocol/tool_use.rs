use serde_json::Value;

/// Typed representation of a tool invocation, parsed at the protocol boundary.
///
/// Replaces stringly-typed `tool_name` matching. Each variant carries
/// the tool-specific fields extracted from `tool_input`.
pub enum ToolUse {
    /// Bash command execution.
    Bash {
        /// Raw command string from tool_input["command"].
        /// `None` when the field is missing or not a string.
        command: Option<String>,
    },
    /// Unrecognized tool — hook has no opinion.
    Unknown { tool_name: String },
}

impl ToolUse {
    /// Parse from raw hook input fields.
    ///
    /// This is the single point where JSON field knowledge lives. A
    /// `tool_input` that is not an object yields `Bash { command: None }`
    /// rather than an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use go_docker_hook::protocol::ToolUse;
    ///
    /// let tool_use = ToolUse::parse("Bash", &serde_json::json!({"command": "go test"}));
    /// match tool_use {
    ///     ToolUse::Bash { command } => assert_eq!(command.as_deref(), Some("go test")),
    ///     _ => unreachable!(),
    /// }
    /// ```
    pub fn parse(tool_name: &str, tool_input: &Value) -> Self {
        match tool_name {
            "Bash" => {
                let command = tool_input
                    .get("command")
                    .and_then(|v| v.as_str())
                    .map(|s| s.to_string());
                ToolUse::Bash { command }
            }
            _ => ToolUse::Unknown {
                tool_name: tool_name.to_string(),
            },
        }
    }
}
