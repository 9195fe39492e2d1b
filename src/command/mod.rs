use regex::Regex;

/// Anchored prefix pattern for a direct `go` toolchain invocation:
/// optional leading whitespace, the literal token `go`, then at least one
/// whitespace character before the subcommand.
///
/// This is a byte-level prefix test on the raw command string, not a shell
/// parse: `gofmt -l .` does not match (no whitespace after `go`), and
/// neither does `VAR=1 go test` (the token is not at the start).
const GO_INVOCATION_PATTERN: &str = r"^\s*go\s+";

/// Matcher for Bash commands that invoke the `go` toolchain directly.
#[derive(Debug)]
pub(crate) struct GoInvocation {
    pattern: Regex,
}

impl GoInvocation {
    /// Compile the matcher.
    ///
    /// # Panics
    ///
    /// Panics if [`GO_INVOCATION_PATTERN`] fails to compile, which cannot
    /// happen with a fixed valid pattern. This is an invariant, not a
    /// runtime error — failure here indicates a programming bug.
    pub(crate) fn new() -> Self {
        GoInvocation {
            pattern: Regex::new(GO_INVOCATION_PATTERN).expect("fixed pattern must compile"),
        }
    }

    /// Test whether `command` starts with a `go` invocation.
    pub(crate) fn matches(&self, command: &str) -> bool {
        self.pattern.is_match(command)
    }
}
