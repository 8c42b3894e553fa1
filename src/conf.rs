//! Configuration for the indices status reporter.
use std::fs::File;
use std::path::Path;

use anyhow::Context;
use anyhow::Result;
use serde::Deserialize;
use serde::Serialize;

/// Reasons the configuration file could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("configuration at '{0}' is not valid YAML for this tool")]
    Decode(String),

    #[error("could not open configuration at '{0}'")]
    Open(String),

    #[error("no configuration file at '{0}'")]
    PathNotFound(String),
}

/// Settings for the `indices-status` tool.
#[derive(Clone, Default, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub struct Conf {
    #[serde(default)]
    pub report: ReportConf,
}

/// How status documents are rendered.
#[derive(Clone, Default, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub struct ReportConf {
    /// Indent the JSON output.
    #[serde(default)]
    pub pretty: bool,

    /// Settings keys (or `prefix*` patterns) removed from every index before rendering.
    #[serde(default)]
    pub settings_filter: Vec<String>,
}

/// Read a YAML [`Conf`] from `path`.
///
/// Fields missing from the file take their default value.
pub fn load(path: &str) -> Result<Conf> {
    if !Path::new(path).is_file() {
        anyhow::bail!(Error::PathNotFound(path.to_string()));
    }
    let file = File::open(path).with_context(|| Error::Open(path.to_string()))?;
    let conf = serde_yaml::from_reader(file).with_context(|| Error::Decode(path.to_string()))?;
    Ok(conf)
}
