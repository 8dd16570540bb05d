//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the application root.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::routing::{RouteDefinition, RouterOptions, ViewId};

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// History mode and base path.
    pub router: RouterOptions,

    /// Route table, in priority order.
    pub routes: Vec<RouteConfig>,

    /// Application root: mount target and plugins.
    pub app: RootConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// A single route entry.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct RouteConfig {
    /// Path template, e.g. `/user/:user`.
    pub path: String,

    /// View rendered for this route.
    pub view: String,

    /// Symbolic name for reverse routing.
    #[serde(default)]
    pub name: Option<String>,

    /// Additional templates resolving to the same view.
    #[serde(default)]
    pub alias: Vec<String>,
}

impl From<&RouteConfig> for RouteDefinition {
    fn from(route: &RouteConfig) -> Self {
        RouteDefinition {
            pattern: route.path.clone(),
            view: ViewId::new(route.view.clone()),
            name: route.name.clone(),
            aliases: route.alias.clone(),
        }
    }
}

/// Application root configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RootConfig {
    /// DOM selector the root mounts into.
    pub mount: String,

    /// Internationalization plugin. Absent = not installed.
    pub i18n: Option<I18nConfig>,

    /// HTTP-resource plugin. Absent = not installed.
    pub http_resource: Option<HttpResourceConfig>,
}

impl Default for RootConfig {
    fn default() -> Self {
        Self {
            mount: "#app".to_string(),
            i18n: None,
            http_resource: None,
        }
    }
}

/// Internationalization plugin settings.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct I18nConfig {
    /// Active locale.
    pub locale: String,

    /// Locale used when a message is missing in the active one.
    pub fallback_locale: Option<String>,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            locale: "en".to_string(),
            fallback_locale: None,
        }
    }
}

/// HTTP-resource plugin settings.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct HttpResourceConfig {
    /// Root URL prepended to relative resource paths.
    pub root: Option<String>,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Route definitions in table order.
    pub fn route_definitions(&self) -> Vec<RouteDefinition> {
        self.routes.iter().map(RouteDefinition::from).collect()
    }
}
