//! Application root.
//!
//! # Responsibilities
//! - Own the router and the installed plugin capabilities
//! - Resolve the starting location once, without recording it
//! - Forward every resolved navigation to the renderer
//!
//! # Design Decisions
//! - Plugins are constructor arguments; nothing is registered globally
//! - Last request wins: each navigation replaces the current target
//! - `NotFound` renders the fallback view; other errors propagate

pub mod render;

pub use render::{AppContext, Renderer};

use crate::config::{AppConfig, ConfigError, HttpResourceConfig, I18nConfig};
use crate::routing::{
    History, NavigationRequest, ResolvedNavigation, RouteError, RouteTable, Router,
};

/// Outcome of a navigation as seen by the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    View(ResolvedNavigation),
    NotFound(String),
}

/// The application root.
#[derive(Debug)]
pub struct Application {
    router: Router,
    context: AppContext,
    current: Option<Rendered>,
    sequence: u64,
}

/// Builder for [`Application`].
#[derive(Debug)]
pub struct ApplicationBuilder {
    router: Router,
    mount: String,
    i18n: Option<I18nConfig>,
    http: Option<HttpResourceConfig>,
}

impl ApplicationBuilder {
    pub fn mount(mut self, target: impl Into<String>) -> Self {
        self.mount = target.into();
        self
    }

    pub fn i18n(mut self, config: I18nConfig) -> Self {
        self.i18n = Some(config);
        self
    }

    pub fn http_resource(mut self, config: HttpResourceConfig) -> Self {
        self.http = Some(config);
        self
    }

    pub fn build(self) -> Application {
        Application {
            router: self.router,
            context: AppContext {
                mount: self.mount,
                i18n: self.i18n,
                http: self.http,
            },
            current: None,
            sequence: 0,
        }
    }
}

impl Application {
    pub fn builder(router: Router) -> ApplicationBuilder {
        ApplicationBuilder {
            router,
            mount: "#app".to_string(),
            i18n: None,
            http: None,
        }
    }

    /// Build the root from a validated configuration.
    pub fn from_config(config: &AppConfig) -> Result<Self, ConfigError> {
        let table = RouteTable::new(config.route_definitions())?;
        let router = Router::with_options(table, config.router.clone());

        let mut builder = Self::builder(router).mount(config.app.mount.clone());
        if let Some(i18n) = &config.app.i18n {
            builder = builder.i18n(i18n.clone());
        }
        if let Some(http) = &config.app.http_resource {
            builder = builder.http_resource(http.clone());
        }
        Ok(builder.build())
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn context(&self) -> &AppContext {
        &self.context
    }

    /// The most recently rendered target.
    pub fn current(&self) -> Option<&Rendered> {
        self.current.as_ref()
    }

    /// Number of navigations rendered so far.
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// Resolve the history's current location and render it.
    pub fn start<H, R>(&mut self, history: &mut H, renderer: &mut R) -> Result<&Rendered, RouteError>
    where
        H: History + ?Sized,
        R: Renderer + ?Sized,
    {
        let location = history.current();
        tracing::info!(
            mount = %self.context.mount,
            location = %location,
            routes = self.router.table().len(),
            locale = self.context.locale().unwrap_or("-"),
            "Application starting"
        );
        self.navigate(&NavigationRequest::initial(location), history, renderer)
    }

    /// Navigate and render, superseding any earlier target.
    pub fn navigate<H, R>(
        &mut self,
        request: &NavigationRequest,
        history: &mut H,
        renderer: &mut R,
    ) -> Result<&Rendered, RouteError>
    where
        H: History + ?Sized,
        R: Renderer + ?Sized,
    {
        let rendered = match self.router.navigate(request, history) {
            Ok(nav) => {
                renderer.render(&nav, &self.context);
                Rendered::View(nav)
            }
            Err(RouteError::NotFound(path)) => {
                renderer.render_not_found(&path, &self.context);
                Rendered::NotFound(path)
            }
            Err(e) => return Err(e),
        };

        self.sequence += 1;
        Ok(self.current.insert(rendered))
    }
}
