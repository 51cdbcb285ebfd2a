//! Typed, path-based access to a decoded JSON document.

use std::path::Path;
use std::str::FromStr;

use log::debug;
use serde::Deserialize;

use super::builder::ConfigBuilder;
use super::file::{parse_json, read_config_file};
use super::resolve::resolve_in;
use super::value::{Map, Value, ValueKind};
use super::ConfigError;

static EMPTY_MAP: Map = Map::new();

/// A JSON document with typed accessors addressed by dotted paths.
///
/// Paths walk maps by key and lists by index, so `"nested.1.2.3.0.b"` reads
/// key `b` of the first element of the list at `nested.1.2.3`.
///
/// Each type has two accessors. The fallible form (`string`, `int`, ...)
/// reports missing paths and kind mismatches as [`ConfigError`]. The
/// defaulting form (`must_string`, `must_int`, ...) never fails: it returns
/// the caller's default, or a built-in fallback when none is given.
///
/// No conversion happens between kinds: a numeric string is not a number,
/// and a boolean is not 0 or 1.
///
/// ## Example
///
/// ```
/// use treeconf::Config;
///
/// let config = Config::from_json(r#"{"server": {"port": 8080, "hosts": ["a", "b"]}}"#)?;
///
/// assert_eq!(config.int("server.port")?, 8080);
/// assert_eq!(config.string("server.hosts.1")?, "b");
/// assert_eq!(config.must_int("server.timeout", Some(30)), 30);
/// # Ok::<(), treeconf::ConfigError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(transparent)]
pub struct Config {
    root: Map,
}

impl Config {
    /// Decodes a config from JSON text. The document root must be an object.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(parse_json(text)?.into())
    }

    /// Reads and decodes a config from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Ok(read_config_file(path.as_ref())?.into())
    }

    /// Creates a builder that layers several documents into one config.
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Returns the top-level map of the document.
    pub fn root(&self) -> &Map {
        &self.root
    }

    pub fn into_root(self) -> Map {
        self.root
    }

    /// Returns the raw value at `path`, whatever its kind.
    ///
    /// A path without any non-empty segment names the root map, which is not
    /// a [`Value`]; it fails with [`ConfigError::EmptyPath`]. Read the root
    /// through [`root`](Self::root) or `map("")` instead.
    pub fn get(&self, path: &str) -> Result<&Value, ConfigError> {
        resolve_in(&self.root, path)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.get(path).is_ok()
    }

    pub fn string(&self, path: &str) -> Result<&str, ConfigError> {
        self.typed(path, ValueKind::String, Value::as_str)
    }

    pub fn bool(&self, path: &str) -> Result<bool, ConfigError> {
        self.typed(path, ValueKind::Bool, Value::as_bool)
    }

    /// Reads a number and truncates it toward zero.
    pub fn int(&self, path: &str) -> Result<i64, ConfigError> {
        self.typed(path, ValueKind::Number, Value::as_i64)
    }

    pub fn float(&self, path: &str) -> Result<f64, ConfigError> {
        self.typed(path, ValueKind::Number, Value::as_f64)
    }

    /// Reads a map. An empty path returns the root map.
    pub fn map(&self, path: &str) -> Result<&Map, ConfigError> {
        match self.typed(path, ValueKind::Map, Value::as_map) {
            Err(ConfigError::EmptyPath { .. }) => Ok(&self.root),
            result => result,
        }
    }

    pub fn list(&self, path: &str) -> Result<&[Value], ConfigError> {
        self.typed(path, ValueKind::List, Value::as_list)
    }

    /// Reads a string, falling back to `default` or `""`.
    pub fn must_string<'a>(&'a self, path: &str, default: Option<&'a str>) -> &'a str {
        or_default(path, self.string(path), default, "")
    }

    /// Reads a bool, falling back to `default` or `false`.
    pub fn must_bool(&self, path: &str, default: Option<bool>) -> bool {
        or_default(path, self.bool(path), default, false)
    }

    /// Reads an integer, falling back to `default` or `-1`.
    ///
    /// `-1` may also be a legitimate value; use [`int`](Self::int) to tell
    /// the two apart.
    pub fn must_int(&self, path: &str, default: Option<i64>) -> i64 {
        or_default(path, self.int(path), default, -1)
    }

    /// Reads a float, falling back to `default` or `-1.0`.
    pub fn must_float(&self, path: &str, default: Option<f64>) -> f64 {
        or_default(path, self.float(path), default, -1.0)
    }

    /// Reads a map, falling back to `default` or an empty map.
    pub fn must_map<'a>(&'a self, path: &str, default: Option<&'a Map>) -> &'a Map {
        or_default(path, self.map(path), default, &EMPTY_MAP)
    }

    /// Reads a list, falling back to `default` or an empty list.
    pub fn must_list<'a>(&'a self, path: &str, default: Option<&'a [Value]>) -> &'a [Value] {
        or_default(path, self.list(path), default, Default::default())
    }

    /// Shallow-merges `other` into this config in place.
    ///
    /// Every top-level key of `other` replaces the key of the same name here.
    /// Nested maps are replaced wholesale, not merged field by field. Keys
    /// absent from `other` are left untouched, and `None` is a no-op.
    ///
    /// Values are cloned out of `other`, so the two configs stay independent.
    pub fn extend(&mut self, other: Option<&Config>) -> &mut Self {
        if let Some(other) = other {
            debug!("extending config with {} top-level keys", other.root.len());
            for (key, value) in &other.root {
                self.root.insert(key.clone(), value.clone());
            }
        }
        self
    }

    /// Like [`extend`](Self::extend), but returns a new config and leaves
    /// `self` unchanged.
    #[must_use]
    pub fn extended(&self, other: Option<&Config>) -> Config {
        let mut merged = self.clone();
        merged.extend(other);
        merged
    }

    fn typed<'a, T>(
        &'a self,
        path: &str,
        expected: ValueKind,
        cast: impl FnOnce(&'a Value) -> Option<T>,
    ) -> Result<T, ConfigError> {
        let value = self.get(path)?;
        cast(value).ok_or_else(|| ConfigError::TypeMismatch {
            path: path.to_string(),
            expected,
            found: value.kind(),
        })
    }
}

fn or_default<T>(path: &str, result: Result<T, ConfigError>, default: Option<T>, fallback: T) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            debug!("using default for '{}': {}", path, e);
            default.unwrap_or(fallback)
        }
    }
}

impl From<Map> for Config {
    fn from(root: Map) -> Self {
        Self { root }
    }
}

impl FromStr for Config {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_json(s)
    }
}
