pub mod input;
pub mod output;
pub mod tool_use;

pub use input::HookInput;
pub use output::{Decision, HookEvent, HookOutput, PreToolUseOutput, UpdatedInput};
pub use tool_use::ToolUse;
