//! Render collaborator.

use crate::config::{HttpResourceConfig, I18nConfig};
use crate::routing::ResolvedNavigation;

/// Capabilities installed on the application root, passed to every render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppContext {
    /// DOM selector the root is mounted into.
    pub mount: String,
    pub i18n: Option<I18nConfig>,
    pub http: Option<HttpResourceConfig>,
}

impl AppContext {
    /// Active locale, if the i18n plugin is installed.
    pub fn locale(&self) -> Option<&str> {
        self.i18n.as_ref().map(|i| i.locale.as_str())
    }
}

/// Instantiates and renders views. The router never touches presentation.
pub trait Renderer {
    fn render(&mut self, target: &ResolvedNavigation, ctx: &AppContext);

    /// Show the fallback view for an unmatched path.
    fn render_not_found(&mut self, path: &str, ctx: &AppContext);
}
