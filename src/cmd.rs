//! CLI interface for the `indices-status` binary.
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use anyhow::Context;
use anyhow::Result;
use clap::Args;
use clap::Parser;
use clap::Subcommand;
use slog::info;
use slog::Logger;

use crate::conf::ReportConf;
use crate::logging::LogLevel;
use crate::reporter::StatusReporter;

/// Inspect indices status responses dumped in their binary wire format.
#[derive(Debug, Parser)]
#[command(about)]
#[command(propagate_version = true)]
#[command(version)]
pub struct Cli {
    /// Configuration file to load, defaults are used when not set.
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<String>,

    /// Logging verbosity.
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::default())]
    pub log_level: LogLevel,

    /// Select the command to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Select the command to run.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render a response as a JSON document.
    Render(RenderArgs),

    /// Print a one line description of each index in a response.
    Summary(SummaryArgs),
}

/// Arguments to the `render` command.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// File with the encoded response.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Additional settings key patterns to redact (exact keys or `prefix*`).
    #[arg(long, value_name = "PATTERN")]
    pub redact: Vec<String>,
}

/// Arguments to the `summary` command.
#[derive(Args, Debug)]
pub struct SummaryArgs {
    /// File with the encoded response.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

/// Decode the response in the file and write its rendered document out.
pub fn render<W: Write>(
    logger: &Logger,
    mut conf: ReportConf,
    args: &RenderArgs,
    out: &mut W,
) -> Result<()> {
    conf.settings_filter.extend(args.redact.iter().cloned());
    let reporter = StatusReporter::new(logger.clone(), &conf);
    let bytes = read(&args.file)?;
    let response = reporter.decode(&bytes)?;
    let document = reporter.render_to_string(&response)?;
    writeln!(out, "{}", document)?;
    info!(
        logger, "Rendered indices status";
        "file" => args.file.display().to_string(),
        "indices" => response.indices().len(),
    );
    Ok(())
}

/// Decode the response in the file and write its summary out.
pub fn summary<W: Write>(
    logger: &Logger,
    conf: ReportConf,
    args: &SummaryArgs,
    out: &mut W,
) -> Result<()> {
    let reporter = StatusReporter::new(logger.clone(), &conf);
    let bytes = read(&args.file)?;
    let response = reporter.decode(&bytes)?;
    write!(out, "{}", reporter.summary(&response)?)?;
    Ok(())
}

fn read(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path)
        .with_context(|| format!("unable to read indices status from '{}'", path.display()))
}
