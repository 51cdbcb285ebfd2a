//! Configuration trees and dotted-path access.

mod builder;
mod error;
mod file;
mod resolve;
mod typed;
mod value;

pub use builder::ConfigBuilder;
pub use error::ConfigError;
pub use resolve::{resolve, resolve_in};
pub use typed::Config;
pub use value::{Map, Value, ValueKind};
