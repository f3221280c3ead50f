use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "hapngx-convert")]
#[command(about = "Translate HAProxy load-balancer configurations into nginx configurations")]
pub struct Cli {
    /// Log per-line classification detail to stderr (overrides RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Translate one HAProxy config into nginx syntax.
    Convert(ConvertArgs),
    /// Show how each line of a HAProxy config is classified.
    Inspect(InspectArgs),
    /// Print the effective timeout, balance and condition mapping tables.
    Mappings(MappingsArgs),
}

#[derive(Parser, Debug)]
pub struct ConvertArgs {
    /// HAProxy config file to translate (`-` reads stdin).
    pub input: PathBuf,
    /// Write the nginx config here instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// How many closing braces end the output.
    #[arg(long, value_enum, default_value_t = CloseBlocks::Single)]
    pub close_blocks: CloseBlocks,
    /// Include SSL directives derived from `bind` lines (withheld by default).
    #[arg(long)]
    pub emit_ssl: bool,
    /// Keep timeout values that already carry a unit (`10s`) instead of appending `ms`.
    #[arg(long)]
    pub keep_time_units: bool,
    /// Optional mappings TOML file replacing the embedded tables.
    #[arg(long)]
    pub mappings_file: Option<PathBuf>,
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Print conversion counts.
    #[arg(long)]
    pub summary: bool,
    /// Fail when any directive is malformed.
    #[arg(long)]
    pub strict: bool,
}

#[derive(Parser, Debug)]
pub struct InspectArgs {
    /// HAProxy config file to classify (`-` reads stdin).
    pub input: PathBuf,
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Parser, Debug)]
pub struct MappingsArgs {
    /// Optional mappings TOML file to validate and print.
    #[arg(long)]
    pub mappings_file: Option<PathBuf>,
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, ValueEnum, PartialEq, Eq)]
pub enum CloseBlocks {
    /// One `}` regardless of how many blocks were opened.
    Single,
    /// One `}` per `http`/`upstream` block opened.
    PerBlock,
}
