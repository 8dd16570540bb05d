//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::AppConfig;
use crate::config::validation::{validate_config, ValidationError};
use crate::routing::TableError;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join(.0))]
    Validation(Vec<ValidationError>),

    #[error("Route table rejected: {0}")]
    Table(#[from] TableError),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<AppConfig, ConfigError> {
    let config: AppConfig = toml::from_str(content)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config = parse_config(&content)?;

    tracing::info!(path = %path.display(), routes = config.routes.len(), "Configuration loaded");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::RouterMode;

    #[test]
    fn test_parse_full_config() {
        let config = parse_config(
            r##"
            [router]
            mode = "hash"
            base = "/app/"

            [[routes]]
            path = "/"
            view = "home"
            name = "home"

            [[routes]]
            path = "/user/:user"
            view = "profile"
            name = "profile"
            alias = ["/@:user"]

            [app]
            mount = "#root"

            [app.i18n]
            locale = "fr"
            "##,
        )
        .unwrap();

        assert_eq!(config.router.mode, RouterMode::Hash);
        assert_eq!(config.routes.len(), 2);
        assert_eq!(config.routes[1].alias, vec!["/@:user".to_string()]);
        assert_eq!(config.app.mount, "#root");
        assert_eq!(config.app.i18n.as_ref().map(|i| i.locale.as_str()), Some("fr"));
        assert!(config.app.http_resource.is_none());
        assert_eq!(config.observability.log_level, "info");
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(parse_config("routes = 3"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_validation_error_lists_all() {
        let err = parse_config(
            r#"
            [[routes]]
            path = "nope"
            view = "a"

            [observability]
            log_level = "chatty"
            "#,
        )
        .unwrap_err();
        match err {
            ConfigError::Validation(errors) => assert_eq!(errors.len(), 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_file() {
        let err = load_config(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
