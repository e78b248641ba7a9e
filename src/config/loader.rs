//! Configuration loading from disk.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use serde_json::error::Category;
use thiserror::Error;

use crate::config::schema::AppConfig;
use crate::config::shared::SharedConfig;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be opened or read.
    #[error("failed to read configuration file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file is not syntactically valid JSON. The parser diagnostic is
    /// kept as the source but not shown to the user.
    #[error("configuration file is not valid JSON")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Valid JSON that does not fit the schema; the diagnostic is shown as is.
    #[error("{source}")]
    Schema {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl ConfigError {
    /// Short failure class for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            ConfigError::Io { .. } => "io",
            ConfigError::Malformed { .. } => "malformed_config",
            ConfigError::Schema { .. } => "schema",
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Io { path, .. }
            | ConfigError::Malformed { path, .. }
            | ConfigError::Schema { path, .. } => path,
        }
    }

    fn from_json(path: &Path, err: serde_json::Error) -> Self {
        let path = path.to_path_buf();
        match err.classify() {
            Category::Syntax | Category::Eof => ConfigError::Malformed { path, source: err },
            Category::Data => ConfigError::Schema { path, source: err },
            Category::Io => ConfigError::Io {
                path,
                source: err.into(),
            },
        }
    }
}

/// Decode exactly one JSON document from `path`.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let file = File::open(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_reader(BufReader::new(file)).map_err(|e| ConfigError::from_json(path, e))
}

/// Load `path` and publish it through `shared`.
///
/// `shared` is only touched once the whole document has decoded; on error
/// it keeps whatever it held before.
pub fn load_into(shared: &SharedConfig, path: &Path) -> Result<(), ConfigError> {
    let config = load_config(path)?;
    shared.store(config);
    Ok(())
}
