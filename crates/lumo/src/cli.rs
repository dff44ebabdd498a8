//! Clap derive structures for the `lumo` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// lumo -- control cloud-connected light bulbs from the command line
#[derive(Debug, Parser)]
#[command(
    name = "lumo",
    version,
    about = "Control LIFX light bulbs from the command line",
    long_about = "A small CLI for LIFX cloud-connected bulbs.\n\n\
        Talks to the vendor's HTTP API (api.lifx.com/v1) using an OAuth\n\
        access token from --token, LUMO_TOKEN, or the config file.",
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
    /// OAuth access token for the lights API
    #[arg(long, short = 't', env = "LUMO_TOKEN", global = true, hide_env = true)]
    pub token: Option<String>,

    /// Base URL of the lights API (overrides config)
    #[arg(long, env = "LUMO_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "LUMO_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Request timeout in seconds
    #[arg(long, env = "LUMO_TIMEOUT", default_value = "30", global = true)]
    pub timeout: u64,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one bulb ID per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List bulbs and their reported state
    #[command(alias = "ls")]
    List {
        /// Bulb ID or selector (defaults to every visible bulb)
        bulb: Option<String>,
    },

    /// Toggle power on one or more bulbs
    Toggle {
        /// Bulb IDs, toggled independently in the order given
        #[arg(value_name = "BULB", required = true)]
        bulbs: Vec<String>,
    },

    /// Set a bulb's brightness
    Bri {
        /// Bulb ID
        bulb: String,

        /// Brightness as a 0.0-1.0 fraction (forwarded unvalidated)
        value: String,
    },

    /// Adjust hue (reserved; acknowledged without effect)
    Hue(ReservedArgs),

    /// Adjust color temperature (reserved; acknowledged without effect)
    Kel(ReservedArgs),

    /// Adjust saturation (reserved; acknowledged without effect)
    Sat(ReservedArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Reserved color controls ──────────────────────────────────────────

/// Arguments to a reserved command. Accepted but unused until the
/// command is implemented.
#[derive(Debug, Args)]
pub struct ReservedArgs {
    #[arg(value_name = "ARGS", trailing_var_arg = true)]
    pub args: Vec<String>,
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
