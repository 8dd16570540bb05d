//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → AppConfig (validated, immutable)
//!     → compiled once into the Router and Application root
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; no runtime route registration
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::AppConfig;
pub use schema::HttpResourceConfig;
pub use schema::I18nConfig;
pub use schema::RouteConfig;
