//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check every route pattern and alias parses
//! - Detect ambiguous routes and duplicate route names
//! - Validate plugin and router settings
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashMap;

use thiserror::Error;

use crate::config::schema::AppConfig;
use crate::routing::{PatternError, RoutePattern};

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("route #{index}: {source}")]
    Pattern {
        index: usize,
        #[source]
        source: PatternError,
    },

    #[error("route #{index}: view must not be empty")]
    EmptyView { index: usize },

    #[error("route #{index}: pattern '{pattern}' duplicates '{existing}'")]
    DuplicatePattern {
        index: usize,
        pattern: String,
        existing: String,
    },

    #[error("route #{index}: name '{name}' already used by route #{first}")]
    DuplicateName {
        index: usize,
        name: String,
        first: usize,
    },

    #[error("router.base '{0}' must start with '/'")]
    InvalidBase(String),

    #[error("app.mount must not be empty")]
    EmptyMount,

    #[error("app.i18n.locale must not be empty")]
    EmptyLocale,

    #[error("observability.log_level '{0}' is not one of trace, debug, info, warn, error")]
    InvalidLogLevel(String),
}

/// Validate a parsed configuration, collecting every error.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut patterns: HashMap<String, String> = HashMap::new();
    let mut names: HashMap<&str, usize> = HashMap::new();

    for (index, route) in config.routes.iter().enumerate() {
        if route.view.trim().is_empty() {
            errors.push(ValidationError::EmptyView { index });
        }

        for raw in std::iter::once(&route.path).chain(route.alias.iter()) {
            match RoutePattern::parse(raw) {
                Ok(pattern) => {
                    if let Some(existing) =
                        patterns.insert(pattern.normalized_key(), pattern.as_str().to_string())
                    {
                        errors.push(ValidationError::DuplicatePattern {
                            index,
                            pattern: raw.clone(),
                            existing,
                        });
                    }
                }
                Err(source) => errors.push(ValidationError::Pattern { index, source }),
            }
        }

        if let Some(name) = route.name.as_deref() {
            if let Some(&first) = names.get(name) {
                errors.push(ValidationError::DuplicateName {
                    index,
                    name: name.to_string(),
                    first,
                });
            } else {
                names.insert(name, index);
            }
        }
    }

    if !config.router.base.starts_with('/') {
        errors.push(ValidationError::InvalidBase(config.router.base.clone()));
    }
    if config.app.mount.trim().is_empty() {
        errors.push(ValidationError::EmptyMount);
    }
    if let Some(i18n) = &config.app.i18n {
        if i18n.locale.trim().is_empty() {
            errors.push(ValidationError::EmptyLocale);
        }
    }
    if !LOG_LEVELS.contains(&config.observability.log_level.to_ascii_lowercase().as_str()) {
        errors.push(ValidationError::InvalidLogLevel(config.observability.log_level.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::{I18nConfig, RouteConfig};

    fn route(path: &str, view: &str, name: Option<&str>) -> RouteConfig {
        RouteConfig {
            path: path.into(),
            view: view.into(),
            name: name.map(Into::into),
            alias: Vec::new(),
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&AppConfig::default()).is_ok());
    }

    #[test]
    fn test_reports_all_errors() {
        let mut config = AppConfig::default();
        config.routes.push(route("/", "home", Some("home")));
        config.routes.push(route("login", "login", None));
        config.routes.push(route("/HOME/", "", Some("home")));
        config.routes.push(route("/home", "other", None));
        config.router.base = "app".into();
        config.app.mount = " ".into();
        config.app.i18n = Some(I18nConfig { locale: String::new(), fallback_locale: None });
        config.observability.log_level = "loud".into();

        let errors = validate_config(&config).unwrap_err();
        assert!(errors.contains(&ValidationError::EmptyView { index: 2 }));
        assert!(errors.iter().any(|e| matches!(e, ValidationError::Pattern { index: 1, .. })));
        assert!(errors.contains(&ValidationError::DuplicateName {
            index: 2,
            name: "home".into(),
            first: 0,
        }));
        assert!(errors.iter().any(|e| matches!(e, ValidationError::DuplicatePattern { index: 3, .. })));
        assert!(errors.contains(&ValidationError::InvalidBase("app".into())));
        assert!(errors.contains(&ValidationError::EmptyMount));
        assert!(errors.contains(&ValidationError::EmptyLocale));
        assert!(errors.contains(&ValidationError::InvalidLogLevel("loud".into())));
    }

    #[test]
    fn test_alias_duplicate_detected() {
        let mut config = AppConfig::default();
        config.routes.push(route("/user/:user", "profile", Some("profile")));
        let mut other = route("/people/:id", "people", None);
        other.alias.push("/User/:user/".into());
        config.routes.push(other);

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(matches!(&errors[0], ValidationError::DuplicatePattern { index: 1, existing, .. } if existing == "/user/:user"));
    }
}
