//! Docker invocation template for rerouted Go commands.

/// Image used to run rerouted Go commands.
pub(crate) const GO_IMAGE: &str = "golang:1.25";

/// In-container mount point and working directory for the host cwd.
const WORKDIR: &str = "/app";

/// Wrap a command in an ephemeral-container invocation.
///
/// The host working directory is mounted read-write at [`WORKDIR`], which
/// is also the container working directory, and the original command is
/// appended verbatim — byte-for-byte, leading whitespace included.
pub(crate) fn wrap_command(command: &str) -> String {
    format!(r#"docker run --rm -v "$(pwd):{WORKDIR}" -w {WORKDIR} {GO_IMAGE} {command}"#)
}

/// Human-readable reason naming the container image.
pub(crate) fn rewrite_reason() -> String {
    format!("Running Go command in {GO_IMAGE} container")
}
