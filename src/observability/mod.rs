//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! routing / app / config produce:
//!     → logging.rs (structured log events via tracing)
//!
//! Consumers:
//!     → stderr (fmt layer), filtered by RUST_LOG or config
//! ```

pub mod logging;
