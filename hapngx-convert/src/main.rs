use anyhow::{Context, Result};
use clap::Parser;
use hapngx_convert::inspect::inspect;
use hapngx_convert::known_mappings::{default_mappings, load_mappings};
use hapngx_convert::report::render_inspect;
use tracing_subscriber::EnvFilter;

mod cli;
mod convert;
mod path_guard;
mod source;

use cli::{Cli, Command, InspectArgs, MappingsArgs, OutputFormat};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Convert(args) => convert::run_convert(args),
        Command::Inspect(args) => run_inspect(args),
        Command::Mappings(args) => run_mappings(args),
    }
}

/// Logs go to stderr so stdout only ever carries the translated config.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run_inspect(args: InspectArgs) -> Result<()> {
    let lines = source::read_source(&args.input)?;
    let entries = inspect(&lines);
    match args.format {
        OutputFormat::Text => println!("{}", render_inspect(&entries)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&entries)?),
    }
    Ok(())
}

fn run_mappings(args: MappingsArgs) -> Result<()> {
    // Unlike `convert`, a bad file is an error here rather than a fallback.
    let (mappings, source) = match &args.mappings_file {
        Some(path) => (
            load_mappings(path)
                .with_context(|| format!("invalid mappings file {}", path.display()))?,
            format!("file:{}", path.display()),
        ),
        None => (default_mappings(), "embedded".to_string()),
    };
    match args.format {
        OutputFormat::Text => {
            println!("mappings source={source}");
            println!("timeouts");
            for t in &mappings.timeouts {
                println!("- {} -> {}", t.key, t.directive);
            }
            println!("balance_methods");
            for m in &mappings.balance_methods {
                println!("- {m}");
            }
            println!("condition_substitutions");
            for s in &mappings.substitutions {
                println!("- {} -> {}", s.from, s.to);
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&mappings)?),
    }
    Ok(())
}
