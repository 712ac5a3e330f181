use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;

use yamlfilter::config::{Config, OutputFormat};
use yamlfilter::file::loader::{load_yaml_file, load_yaml_from_stdin};
use yamlfilter::filter::Filter;
use yamlfilter::output::{write_results, OutputOptions};

/// yamlfilter - filter YAML and JSON documents with a jq-style expression
#[derive(Parser)]
#[command(name = "yamlfilter")]
#[command(version)]
#[command(about = "Filter YAML and JSON documents with a jq-style expression", long_about = None)]
struct Cli {
    /// Filter expression, enclosed in single quotes (e.g. "'.items[] | select(.id == 3)'")
    expression: String,

    /// YAML file to read (omit to read from stdin)
    file: Option<PathBuf>,

    /// Output format (overrides the config file)
    #[arg(short, long, value_enum)]
    output: Option<OutputFormat>,

    /// Print scalar results as plain text, one per line
    #[arg(short, long)]
    raw_output: bool,

    /// The expression is given without its enclosing single quotes
    #[arg(short, long)]
    bare: bool,

    /// Maximum state transitions per document (overrides the config file)
    #[arg(long)]
    step_limit: Option<usize>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load();

    let parsed = if cli.bare {
        Filter::parse_bare(&cli.expression)
    } else {
        Filter::parse(&cli.expression)
    };
    let mut filter = parsed.context("Invalid filter expression")?;
    if let Some(limit) = cli.step_limit.or(config.step_limit) {
        filter = filter.with_step_limit(limit);
    }

    let documents = match &cli.file {
        Some(path) => load_yaml_file(path)?,
        None => load_yaml_from_stdin()?,
    };
    log::debug!("applying {} to {} documents", filter.expression(), documents.len());

    let mut options = OutputOptions::from_config(&config);
    options.raw = cli.raw_output;
    if let Some(format) = cli.output {
        options.format = format;
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_results(&mut out, &filter, &documents, &options)?;
    out.flush()?;
    Ok(())
}
