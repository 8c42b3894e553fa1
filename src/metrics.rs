use prometheus::Counter;
use prometheus::Histogram;
use prometheus::HistogramOpts;
use prometheus::Opts;
use prometheus::Registry;
use slog::debug;
use slog::Logger;

lazy_static::lazy_static! {
    pub static ref DECODE_ERRORS: Counter = Counter::with_opts(Opts::new(
        "replicore_indices_status_decode_errors",
        "Number of indices status responses that failed to decode",
    ))
    .expect("Failed to create DECODE_ERRORS");
    pub static ref ENCODED_BYTES: Counter = Counter::with_opts(Opts::new(
        "replicore_indices_status_encoded_bytes",
        "Total number of bytes produced by encoding indices status responses",
    ))
    .expect("Failed to create ENCODED_BYTES");
    pub static ref GROUPING_DURATION: Histogram = Histogram::with_opts(
        HistogramOpts::new(
            "replicore_indices_status_grouping_duration",
            "Duration (in seconds) of grouping shard status records by index",
        )
        .buckets(vec![0.0001, 0.001, 0.01, 0.1, 1.0, 10.0])
    )
    .expect("Failed to create GROUPING_DURATION");
    pub static ref RENDER_DURATION: Histogram = Histogram::with_opts(
        HistogramOpts::new(
            "replicore_indices_status_render_duration",
            "Duration (in seconds) of rendering indices status documents",
        )
        .buckets(vec![0.0001, 0.001, 0.01, 0.1, 1.0, 10.0])
    )
    .expect("Failed to create RENDER_DURATION");
}

/// Register status metrics with the given registry.
///
/// Metrics that fail to register are logged and ignored.
pub fn register_metrics(logger: &Logger, registry: &Registry) {
    if let Err(error) = registry.register(Box::new(DECODE_ERRORS.clone())) {
        debug!(logger, "Failed to register DECODE_ERRORS"; "error" => ?error);
    }
    if let Err(error) = registry.register(Box::new(ENCODED_BYTES.clone())) {
        debug!(logger, "Failed to register ENCODED_BYTES"; "error" => ?error);
    }
    if let Err(error) = registry.register(Box::new(GROUPING_DURATION.clone())) {
        debug!(logger, "Failed to register GROUPING_DURATION"; "error" => ?error);
    }
    if let Err(error) = registry.register(Box::new(RENDER_DURATION.clone())) {
        debug!(logger, "Failed to register RENDER_DURATION"; "error" => ?error);
    }
}
