//! Clap derive structures for the `catalyst` binary.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// catalyst -- Catalyst Center for AI assistants and HTTP clients
#[derive(Debug, Parser)]
#[command(
    name = "catalyst",
    version,
    about = "Expose Cisco Catalyst Center as MCP tools or a JSON HTTP API",
    long_about = "Thin gateway in front of the Catalyst Center intent API.\n\n\
        `catalyst mcp` speaks the Model Context Protocol over stdio;\n\
        `catalyst serve` exposes the same operations as HTTP routes.\n\
        The API token is read from CATALYST_API_TOKEN.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Config file (TOML). Defaults to the platform config directory.
    #[arg(long, env = "CATALYST_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Intent API base URL (overrides CATALYST_API_BASE_URL)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Skip TLS certificate verification (unsafe)
    #[arg(long, short = 'k', global = true)]
    pub insecure: bool,

    /// Request timeout in seconds (overrides CATALYST_TIMEOUT)
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

// ── Commands ─────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Serve the MCP tool surface over stdio
    Mcp,

    /// Serve the HTTP route surface
    Serve(ServeArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Bind address (overrides CATALYST_LISTEN)
    #[arg(long, short = 'l')]
    pub listen: Option<String>,
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell
    pub shell: clap_complete::Shell,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }
}
