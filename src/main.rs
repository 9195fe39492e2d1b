use clap::{Parser, Subcommand};

/// Claude Code PreToolUse hook that reroutes Go toolchain commands into a Docker container.
#[derive(Debug, Parser)]
#[command(name = "go-docker-hook", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run as a Claude Code PreToolUse hook (reads stdin, writes stdout)
    Hook,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Hook => go_docker_hook::run_hook(),
    }
}
