use std::path::{Path, PathBuf};

use log::debug;

use super::file::{load_config_file, parse_json};
use super::{Config, ConfigError};

/// A document in the loading pipeline.
#[derive(Debug)]
enum ConfigLayer {
    File { path: PathBuf, required: bool },
    Json(String),
}

/// Builder for layering several JSON documents into one [`Config`].
///
/// Layers are applied in registration order with [`Config::extend`], so a
/// later layer replaces each top-level key it defines. Nested maps are not
/// merged: an override's `database` map replaces the base `database` map
/// entirely.
///
/// ## Example
///
/// ```no_run
/// use treeconf::Config;
///
/// let config = Config::builder()
///     .with_file("config/default.json", true)
///     .with_file("config/production.json", false)
///     .build()?;
///
/// let debug = config.must_bool("debug", Some(false));
/// # Ok::<(), treeconf::ConfigError>(())
/// ```
#[derive(Debug, Default)]
#[must_use = "builders do nothing until .build() is called"]
pub struct ConfigBuilder {
    layers: Vec<ConfigLayer>,
}

impl ConfigBuilder {
    /// Adds a JSON file to be loaded.
    ///
    /// If `required` is `true`, the build will fail if the file doesn't exist.
    /// Optional files that are missing are skipped.
    pub fn with_file(mut self, path: impl AsRef<Path>, required: bool) -> Self {
        self.layers.push(ConfigLayer::File {
            path: path.as_ref().to_path_buf(),
            required,
        });
        self
    }

    /// Adds an inline JSON document.
    pub fn with_json(mut self, text: impl Into<String>) -> Self {
        self.layers.push(ConfigLayer::Json(text.into()));
        self
    }

    /// Loads every layer and folds them together in registration order.
    ///
    /// With no layers, the result is an empty config.
    pub fn build(self) -> Result<Config, ConfigError> {
        let mut merged = Config::default();

        for layer in self.layers {
            let layer = match layer {
                ConfigLayer::File { path, required } => load_config_file(&path, required)?,
                ConfigLayer::Json(text) => Some(parse_json(&text)?),
            };
            if let Some(root) = layer {
                merged.extend(Some(&Config::from(root)));
            }
        }

        debug!("built config with {} top-level keys", merged.root().len());
        Ok(merged)
    }
}
