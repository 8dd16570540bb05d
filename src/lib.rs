//! Client-side route resolution for single-page applications.

pub mod app;
pub mod config;
pub mod observability;
pub mod routing;

pub use app::{Application, Renderer};
pub use config::AppConfig;
pub use routing::{ResolvedNavigation, RouteError, Router};
