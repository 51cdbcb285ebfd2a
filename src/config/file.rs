//! Decoding JSON documents from text and files.

use std::io::ErrorKind;
use std::path::Path;

use log::debug;

use super::value::Map;
use super::ConfigError;

/// Decodes a JSON document whose root must be an object.
pub(super) fn parse_json(text: &str) -> Result<Map, serde_json::Error> {
    serde_json::from_str(text)
}

/// Reads and decodes a JSON config file.
///
/// Every I/O failure, including a missing file, is reported as
/// [`ConfigError::ReadError`] carrying the underlying `io::Error`.
pub(super) fn read_config_file(path: &Path) -> Result<Map, ConfigError> {
    debug!("loading config file (path={})", path.display());
    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_json(&contents).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Loads a config file that may be optional.
///
/// Returns `Ok(None)` if the file doesn't exist and `required` is false.
pub(super) fn load_config_file(path: &Path, required: bool) -> Result<Option<Map>, ConfigError> {
    match read_config_file(path) {
        Ok(map) => Ok(Some(map)),
        Err(ConfigError::ReadError { path, source }) if source.kind() == ErrorKind::NotFound => {
            if required {
                Err(ConfigError::FileNotFound(path))
            } else {
                debug!("optional config file missing (path={})", path.display());
                Ok(None)
            }
        }
        Err(e) => Err(e),
    }
}
