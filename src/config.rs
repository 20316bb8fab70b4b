//! Loading `GraphParams` from YAML.
//!
//! Every field is optional; missing ones keep the page defaults.
//!
//! ```yaml
//! labels: ["Rust", "Go", "SQL"]
//! edge_threshold: 150.0
//! base_alpha: 0.3
//! max_axis_speed: 0.5
//! text_color: "#1e293b"
//! edge_color: "#500000"
//! background: "#ffffff"
//! ```

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::params::GraphParams;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

pub fn from_reader<R: Read>(reader: R) -> Result<GraphParams, ConfigError> {
    let params: GraphParams = serde_yaml::from_reader(reader)?;
    validate(&params)?;
    Ok(params)
}

pub fn from_str(yaml: &str) -> Result<GraphParams, ConfigError> {
    from_reader(yaml.as_bytes())
}

pub fn load(path: &Path) -> Result<GraphParams, ConfigError> {
    let file = File::open(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    from_reader(BufReader::new(file))
}

/// Load `path` if it exists, otherwise fall back to defaults. A file that
/// exists but is broken is reported and also falls back.
pub fn load_or_default(path: &Path) -> GraphParams {
    if !path.exists() {
        log::info!("no config at {}, using defaults", path.display());
        return GraphParams::default();
    }

    match load(path) {
        Ok(params) => {
            log::info!("loaded config from {}", path.display());
            params
        }
        Err(err) => {
            log::error!("{err}; using defaults");
            GraphParams::default()
        }
    }
}

pub fn validate(params: &GraphParams) -> Result<(), ConfigError> {
    if !(params.edge_threshold > 0.0) {
        return Err(ConfigError::Invalid(format!(
            "edge_threshold must be positive, got {}",
            params.edge_threshold
        )));
    }
    if !(0.0..=1.0).contains(&params.base_alpha) {
        return Err(ConfigError::Invalid(format!(
            "base_alpha must be within [0, 1], got {}",
            params.base_alpha
        )));
    }
    if !(params.max_axis_speed >= 0.0) || !params.max_axis_speed.is_finite() {
        return Err(ConfigError::Invalid(format!(
            "max_axis_speed must be a finite non-negative number, got {}",
            params.max_axis_speed
        )));
    }
    if params.font_size == 0 {
        return Err(ConfigError::Invalid("font_size must be at least 1".to_string()));
    }
    Ok(())
}
