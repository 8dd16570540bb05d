//! Route lookup, reverse routing and navigation.
//!
//! # Responsibilities
//! - Resolve a path to the first matching route in table order
//! - Build paths from route names and parameters
//! - Apply a navigation to the history collaborator
//!
//! # Design Decisions
//! - Immutable after construction (shareable without locks)
//! - Explicit `NotFound` rather than a silent default route
//! - `resolve` is pure; only `navigate` has side effects

use serde::{Deserialize, Serialize};

use crate::routing::error::RouteError;
use crate::routing::history::{History, NavigationMode, NavigationRequest};
use crate::routing::matcher::{normalize, Params};
use crate::routing::table::{RouteTable, ViewId};

/// Query-string pairs. Repeated keys keep the last value.
pub type Query = std::collections::BTreeMap<String, String>;

/// How app paths appear in the browser address bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RouterMode {
    /// Plain paths: `/base/login`.
    #[default]
    History,
    /// Fragment paths: `/base/#/login`.
    Hash,
}

/// Router-wide options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterOptions {
    pub mode: RouterMode,
    /// Prefix the application is served under.
    pub base: String,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            mode: RouterMode::History,
            base: "/".to_string(),
        }
    }
}

/// A successful resolution, handed to the render collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedNavigation {
    pub view: ViewId,
    pub name: Option<String>,
    pub params: Params,
    pub query: Query,
    pub matched_pattern: String,
    /// Normalized path that was matched, without query or fragment.
    pub path: String,
}

/// A requested location split into its parts.
struct Target<'a> {
    path: &'a str,
    query: Option<&'a str>,
    fragment: Option<&'a str>,
}

impl<'a> Target<'a> {
    fn parse(location: &'a str) -> Result<Self, RouteError> {
        if location.is_empty() || !location.starts_with('/') {
            return Err(RouteError::InvalidPath(location.to_string()));
        }

        let (rest, fragment) = match location.split_once('#') {
            Some((rest, frag)) => (rest, Some(frag)),
            None => (location, None),
        };
        let (path, query) = match rest.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (rest, None),
        };

        Ok(Self {
            path: normalize(path),
            query,
            fragment,
        })
    }

    fn query(&self) -> Query {
        self.query
            .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
            .unwrap_or_default()
    }

    /// Location as recorded in history: normalized path plus suffixes.
    fn url(&self) -> String {
        let mut url = self.path.to_string();
        if let Some(q) = self.query {
            url.push('?');
            url.push_str(q);
        }
        if let Some(f) = self.fragment {
            url.push('#');
            url.push_str(f);
        }
        url
    }
}

/// The route resolver: an immutable table plus router options.
#[derive(Debug, Clone, Default)]
pub struct Router {
    table: RouteTable,
    options: RouterOptions,
}

impl Router {
    pub fn new(table: RouteTable) -> Self {
        Self::with_options(table, RouterOptions::default())
    }

    pub fn with_options(table: RouteTable, options: RouterOptions) -> Self {
        Self { table, options }
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn options(&self) -> &RouterOptions {
        &self.options
    }

    /// Resolve an app-relative path against the table.
    pub fn resolve(&self, path: &str) -> Result<ResolvedNavigation, RouteError> {
        let target = Target::parse(path)?;
        self.resolve_target(&target)
    }

    fn resolve_target(&self, target: &Target<'_>) -> Result<ResolvedNavigation, RouteError> {
        for route in self.table.routes() {
            if let Some((pattern, params)) = route.matches(target.path) {
                tracing::trace!(path = target.path, pattern = %pattern, view = %route.view, "Route matched");
                return Ok(ResolvedNavigation {
                    view: route.view.clone(),
                    name: route.name.clone(),
                    params,
                    query: target.query(),
                    matched_pattern: pattern.as_str().to_string(),
                    path: target.path.to_string(),
                });
            }
        }
        Err(RouteError::NotFound(target.path.to_string()))
    }

    /// Build the path of a named route from parameter values.
    ///
    /// Parameters the primary pattern does not name are ignored.
    pub fn reverse(&self, name: &str, params: &Params) -> Result<String, RouteError> {
        let route = self
            .table
            .by_name(name)
            .ok_or_else(|| RouteError::UnknownRoute(name.to_string()))?;
        route.pattern.render(name, params)
    }

    /// Resolve a navigation and record it in `history` according to its mode.
    ///
    /// History is updated for unmatched paths too: the fallback view is shown
    /// at the requested URL. Malformed paths touch nothing.
    pub fn navigate<H: History + ?Sized>(
        &self,
        request: &NavigationRequest,
        history: &mut H,
    ) -> Result<ResolvedNavigation, RouteError> {
        let target = Target::parse(&request.path)?;
        let result = self.resolve_target(&target);

        match request.mode {
            NavigationMode::Push => history.push(&target.url()),
            NavigationMode::Replace => history.replace(&target.url()),
            NavigationMode::Initial => {}
        }

        match &result {
            Ok(nav) => tracing::debug!(
                path = %nav.path,
                view = %nav.view,
                mode = ?request.mode,
                "Navigation resolved"
            ),
            Err(e) => tracing::warn!(path = %request.path, mode = ?request.mode, error = %e, "Navigation unresolved"),
        }
        result
    }

    /// Browser-facing URL for an app-relative path.
    pub fn href(&self, path: &str) -> String {
        let base = self.options.base.trim_end_matches('/');
        match self.options.mode {
            RouterMode::History if base.is_empty() => path.to_string(),
            RouterMode::History => format!("{}{}", base, path),
            RouterMode::Hash => format!("{}/#{}", base, path),
        }
    }

    /// App-relative path for a browser location; the inverse of [`Router::href`].
    pub fn location_path(&self, location: &str) -> String {
        let base = self.options.base.trim_end_matches('/');
        let path = match self.options.mode {
            RouterMode::Hash => location.split_once('#').map(|(_, f)| f).unwrap_or(""),
            RouterMode::History => match location.strip_prefix(base) {
                Some(rest) if rest.is_empty() || rest.starts_with(['/', '?', '#']) => rest,
                _ => location,
            },
        };
        if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{}", path)
        }
    }
}
