//! Clap derive structures for the `foodlist` CLI.
//!
//! Defines the command tree, global flags, and shared types.

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

// ── Top-Level CLI ────────────────────────────────────────────────────

/// foodlist -- browse and curate a food catalog backed by a REST collection
#[derive(Debug, Parser)]
#[command(
    name = "foodlist",
    version,
    about = "Browse and manage a food catalog from the command line",
    long_about = "Lists, searches, and edits food records stored in a REST collection.\n\n\
        Records of any shape are normalized before display; writes always use\n\
        the canonical nested payload.",
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
    /// Configuration profile to use
    #[arg(long, short = 'p', env = "FOODLIST_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Base URL of the REST service (overrides profile)
    #[arg(long, short = 'u', env = "FOODLIST_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Output format [default: from config, else table]
    #[arg(long, short = 'o', env = "FOODLIST_OUTPUT", global = true)]
    pub output: Option<OutputFormat>,

    /// When to use color output
    #[arg(long, env = "FOODLIST_COLOR", global = true)]
    pub color: Option<ColorMode>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Request timeout in seconds (overrides profile)
    #[arg(long, env = "FOODLIST_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

impl GlobalOpts {
    pub fn format(&self) -> OutputFormat {
        self.output.unwrap_or_default()
    }

    pub fn color_mode(&self) -> ColorMode {
        self.color.unwrap_or_default()
    }
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    #[default]
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

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    #[default]
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List catalog items, optionally filtered by name
    #[command(alias = "ls")]
    List(ListArgs),

    /// Add a new catalog item
    Add(AddArgs),

    /// Edit an existing catalog item
    Edit(EditArgs),

    /// Delete a catalog item
    #[command(alias = "rm")]
    Delete(DeleteArgs),

    /// Manage CLI configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Catalog commands ─────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Case-insensitive substring to match against food names
    #[arg(long, short = 's')]
    pub search: Option<String>,

    /// Number of pages to reveal
    #[arg(long, short = 'n', default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
    pub pages: u32,

    /// Reveal every matching item
    #[arg(long, short = 'a', conflicts_with = "pages")]
    pub all: bool,
}

/// Form fields shared by `add` and `edit`.
///
/// Everything is optional at parse time; the form validator reports
/// every missing or invalid field at once.
#[derive(Debug, Default, Args)]
pub struct FoodFields {
    /// Food name
    #[arg(long)]
    pub name: Option<String>,

    /// Rating between 1 and 5
    #[arg(long)]
    pub rating: Option<f64>,

    /// Food image URL
    #[arg(long)]
    pub image: Option<String>,

    /// Restaurant name
    #[arg(long)]
    pub restaurant_name: Option<String>,

    /// Restaurant logo URL
    #[arg(long)]
    pub restaurant_logo: Option<String>,

    /// Restaurant status: "Open Now" or "Closed"
    #[arg(long)]
    pub status: Option<String>,
}

#[derive(Debug, Args)]
pub struct AddArgs {
    #[command(flatten)]
    pub fields: FoodFields,
}

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Item ID
    pub id: String,

    #[command(flatten)]
    pub fields: FoodFields,
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Item ID
    pub id: String,
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Interactive configuration wizard
    Init,

    /// Display the effective configuration
    Show,

    /// Print the config file location
    Path,

    /// List configured profiles
    Profiles,

    /// Set the default profile
    Use {
        /// Profile name
        name: String,
    },
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}
