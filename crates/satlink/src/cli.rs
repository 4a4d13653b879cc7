//! Clap derive structures for the `satlink` CLI.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// satlink -- satellite catalogue and live position tracking
#[derive(Debug, Parser)]
#[command(
    name = "satlink",
    version,
    about = "Browse satellites and follow their live positions",
    long_about = "Reads satellite data from a REST service or a directory of bundled\n\
        JSON assets. `detail` keeps polling the satellite's position until\n\
        interrupted.",
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
    /// Satellite service base URL (overrides config)
    #[arg(long, short = 'u', env = "SATLINK_URL", global = true, conflicts_with = "assets")]
    pub url: Option<String>,

    /// Directory of bundled JSON assets (overrides config)
    #[arg(long, short = 'a', env = "SATLINK_ASSETS", global = true)]
    pub assets: Option<PathBuf>,

    /// Output format [default: from config, else table]
    #[arg(long, short = 'o', env = "SATLINK_OUTPUT", global = true)]
    pub output: Option<OutputFormat>,

    /// When to use color output [default: from config, else auto]
    #[arg(long, global = true)]
    pub color: Option<ColorMode>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Accept invalid TLS certificates
    #[arg(long, short = 'k', env = "SATLINK_INSECURE", global = true)]
    pub insecure: bool,

    /// Request timeout in seconds
    #[arg(long, env = "SATLINK_TIMEOUT", global = true)]
    pub timeout: Option<u64>,

    /// Delay between position updates, in milliseconds
    #[arg(long, global = true)]
    pub interval_ms: Option<u64>,

    /// Seed for position selection (reproducible output)
    #[arg(long, global = true)]
    pub seed: Option<u64>,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Commands ─────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List every satellite in the catalogue
    #[command(alias = "ls")]
    List,

    /// Show one satellite and follow its live position
    #[command(alias = "show")]
    Detail(DetailArgs),

    /// Manage CLI configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Debug, Args)]
pub struct DetailArgs {
    /// Satellite identifier
    pub id: String,

    /// Stop after this many position updates (default: until Ctrl-C)
    #[arg(long, short = 'n')]
    pub updates: Option<usize>,
}

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the config file location
    Path,

    /// Print the effective configuration (file + environment)
    Show,

    /// Write a config file seeded from the global flags
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell
    pub shell: clap_complete::Shell,
}
