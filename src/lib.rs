//! Status of index shards across a cluster.
//!
//! Shard copies reported by cluster nodes are collected into an [`IndicesStatusResponse`].
//! The response can be sent between processes with a compact binary encoding,
//! groups shards by index on demand and renders the result as a nested document.
use anyhow::Result;
use clap::Parser;
use slog::debug;

mod cmd;
mod reporter;

pub mod conf;
pub mod errors;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod report;
pub mod response;
pub mod settings;
pub mod wire;

#[cfg(test)]
mod fixture;

pub use self::cmd::Cli;
pub use self::conf::Conf;
pub use self::report::DocumentBuilder;
pub use self::reporter::StatusReporter;
pub use self::response::ClusterMetadata;
pub use self::response::IndexShardStatus;
pub use self::response::IndexStatus;
pub use self::response::IndicesStatusResponse;
pub use self::settings::KeyPatternFilter;
pub use self::settings::Settings;
pub use self::settings::SettingsFilter;

/// Parse command line arguments and run the selected command.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let logger = logging::configure(cli.log_level);
    metrics::register_metrics(&logger, prometheus::default_registry());

    let conf = match &cli.config {
        Some(path) => conf::load(path)?,
        None => Conf::default(),
    };
    debug!(logger, "Configuration loaded"; "path" => ?cli.config);

    let mut out = std::io::stdout().lock();
    match &cli.command {
        cmd::Command::Render(args) => cmd::render(&logger, conf.report, args, &mut out),
        cmd::Command::Summary(args) => cmd::summary(&logger, conf.report, args, &mut out),
    }
}
