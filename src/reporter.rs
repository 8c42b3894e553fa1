//! Decode, summarise and render indices status responses on behalf of callers.
use std::fmt::Write;

use anyhow::Context;
use anyhow::Result;
use serde_json::Value as Json;
use slog::debug;
use slog::Logger;

use crate::conf::ReportConf;
use crate::metrics::DECODE_ERRORS;
use crate::metrics::ENCODED_BYTES;
use crate::metrics::RENDER_DURATION;
use crate::response::IndicesStatusResponse;
use crate::settings::KeyPatternFilter;
use crate::settings::SettingsFilter;

/// Turn indices status responses into bytes, documents or text.
pub struct StatusReporter {
    filter: KeyPatternFilter,
    logger: Logger,
    pretty: bool,
}

impl StatusReporter {
    pub fn new(logger: Logger, conf: &ReportConf) -> StatusReporter {
        let filter = KeyPatternFilter::new(conf.settings_filter.iter().cloned());
        StatusReporter {
            filter,
            logger,
            pretty: conf.pretty,
        }
    }

    /// Decode a response received over the wire.
    pub fn decode(&self, bytes: &[u8]) -> Result<IndicesStatusResponse> {
        let response = match IndicesStatusResponse::decode(bytes) {
            Ok(response) => response,
            Err(error) => {
                DECODE_ERRORS.inc();
                debug!(self.logger, "Failed to decode indices status"; "bytes" => bytes.len());
                return Err(error);
            }
        };
        debug!(
            self.logger, "Decoded indices status";
            "bytes" => bytes.len(),
            "shards" => response.shards().len(),
        );
        Ok(response)
    }

    /// Encode a response to send it over the wire.
    pub fn encode(&self, response: &IndicesStatusResponse) -> Result<Vec<u8>> {
        let bytes = response.encode()?;
        ENCODED_BYTES.inc_by(bytes.len() as f64);
        debug!(
            self.logger, "Encoded indices status";
            "bytes" => bytes.len(),
            "shards" => response.shards().len(),
        );
        Ok(bytes)
    }

    /// Render a response into a document with configured settings redacted.
    pub fn render(&self, response: &IndicesStatusResponse) -> Result<Json> {
        let timer = RENDER_DURATION.start_timer();
        let filter: Option<&dyn SettingsFilter> = if self.filter.is_empty() {
            None
        } else {
            Some(&self.filter)
        };
        let document = response
            .render(filter)
            .context("unable to render indices status document")?;
        timer.observe_duration();
        debug!(
            self.logger, "Rendered indices status";
            "indices" => response.indices().len(),
            "shards" => response.shards().len(),
        );
        Ok(document)
    }

    /// Render a response and serialise the document to text.
    pub fn render_to_string(&self, response: &IndicesStatusResponse) -> Result<String> {
        let document = self.render(response)?;
        let text = if self.pretty {
            serde_json::to_string_pretty(&document)?
        } else {
            serde_json::to_string(&document)?
        };
        Ok(text)
    }

    /// Describe the response with one line for the broadcast outcome and one per index.
    pub fn summary(&self, response: &IndicesStatusResponse) -> Result<String> {
        let broadcast = response.broadcast();
        let mut summary = String::new();
        writeln!(
            summary,
            "shards: total={} successful={} failed={}",
            broadcast.total_shards, broadcast.successful_shards, broadcast.failed_shards,
        )?;
        for (name, index) in response.indices() {
            let size = index
                .store_size()
                .map(|size| size.to_string())
                .unwrap_or_else(|| "-".to_string());
            writeln!(
                summary,
                "{}: shards={} copies={} size={}",
                name,
                index.shard_groups().len(),
                index.shards().len(),
                size,
            )?;
        }
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use slog::o;
    use slog::Discard;
    use slog::Logger;

    use super::StatusReporter;
    use crate::conf::ReportConf;
    use crate::errors::WireError;
    use crate::fixture;

    fn reporter(settings_filter: Vec<&str>, pretty: bool) -> StatusReporter {
        let logger = Logger::root(Discard, o!());
        let conf = ReportConf {
            pretty,
            settings_filter: settings_filter.into_iter().map(String::from).collect(),
        };
        StatusReporter::new(logger, &conf)
    }

    #[test]
    fn decode_encoded_response() {
        let reporter = reporter(vec![], false);
        let response = fixture::response();
        let bytes = reporter.encode(&response).unwrap();
        let decoded = reporter.decode(&bytes).unwrap();
        assert_eq!(decoded, response);
    }

    #[test]
    fn decode_failure_keeps_error_tag() {
        let reporter = reporter(vec![], false);
        let bytes = reporter.encode(&fixture::response()).unwrap();
        let error = reporter.decode(&bytes[..bytes.len() - 1]).unwrap_err();
        match error.downcast_ref::<WireError>() {
            Some(WireError::Truncated) => (),
            _ => panic!("expected truncated stream error, got {:?}", error),
        }
    }

    #[test]
    fn render_applies_configured_filter() {
        let reporter = reporter(vec!["index.secret", "index.number_*"], false);
        let document = reporter.render(&fixture::response()).unwrap();
        assert_eq!(document["indices"]["a"]["settings"], json!({"index.aliases.0": "alias-a"}));
        assert_eq!(document["indices"]["b"]["settings"], json!({}));
    }

    #[test]
    fn render_without_filter() {
        let reporter = reporter(vec![], false);
        let document = reporter.render(&fixture::response()).unwrap();
        assert_eq!(document["indices"]["a"]["settings"]["index.secret"], json!("s3cr3t"));
    }

    #[test]
    fn render_to_string_compact_and_pretty() {
        let response = fixture::response();
        let compact = reporter(vec![], false).render_to_string(&response).unwrap();
        assert!(compact.starts_with(r#"{"indices":{"a":{"aliases":["alias-a"],"#));
        assert!(!compact.contains('\n'));

        let pretty = reporter(vec![], true).render_to_string(&response).unwrap();
        assert!(pretty.starts_with("{\n  \"indices\": {\n"));
    }

    #[test]
    fn summary_lines() {
        let reporter = reporter(vec![], false);
        let summary = reporter.summary(&fixture::response()).unwrap();
        let lines: Vec<&str> = summary.lines().collect();
        assert_eq!(
            lines,
            vec![
                "shards: total=4 successful=3 failed=1",
                "a: shards=2 copies=2 size=3kb",
                "b: shards=1 copies=1 size=512b",
            ],
        );
    }
}
