//! Routing error types.

use thiserror::Error;

/// Errors returned by `resolve`, `reverse` and `navigate`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// Path was empty or did not begin with `/`.
    #[error("invalid path '{0}': must be non-empty and start with '/'")]
    InvalidPath(String),

    /// No route matched. Callers render a fallback view.
    #[error("no route matches '{0}'")]
    NotFound(String),

    #[error("unknown route name '{0}'")]
    UnknownRoute(String),

    #[error("route '{route}' requires parameter '{param}'")]
    MissingParameter { route: String, param: String },

    #[error("route '{route}': value '{value}' for parameter '{param}' is not a single path segment")]
    InvalidParameter {
        route: String,
        param: String,
        value: String,
    },
}

impl RouteError {
    /// True for the recoverable "show the fallback view" case.
    pub fn is_not_found(&self) -> bool {
        matches!(self, RouteError::NotFound(_))
    }
}

/// A route template that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid route pattern '{pattern}': {reason}")]
pub struct PatternError {
    pub pattern: String,
    pub reason: String,
}

impl PatternError {
    pub fn new(pattern: &str, reason: impl Into<String>) -> Self {
        Self {
            pattern: pattern.to_string(),
            reason: reason.into(),
        }
    }
}

/// Errors raised while building a route table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error(transparent)]
    Pattern(#[from] PatternError),

    /// Two patterns (or aliases) collide after trailing-slash and case folding.
    #[error("pattern '{pattern}' of view '{view}' duplicates '{existing}'")]
    DuplicatePattern {
        pattern: String,
        existing: String,
        view: String,
    },

    #[error("route name '{0}' is registered twice")]
    DuplicateName(String),
}
