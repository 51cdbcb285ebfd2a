pub mod config;

pub use config::{Config, ConfigBuilder, ConfigError, Map, Value, ValueKind};
