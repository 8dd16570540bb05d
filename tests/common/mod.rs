//! Shared fixtures for integration tests.

use route_resolver::app::{AppContext, Renderer};
use route_resolver::routing::{History, ResolvedNavigation, RouteDefinition, RouteTable, Router};

/// The table used by the literal scenarios.
pub fn sample_router() -> Router {
    let table = RouteTable::new(vec![
        RouteDefinition::new("/", "home").named("home"),
        RouteDefinition::new("/login", "login").named("login"),
        RouteDefinition::new("/logout", "logout").named("logout"),
        RouteDefinition::new("/user/:user", "profile").named("profile").alias("/@:user"),
        RouteDefinition::new("/books/:shelf/:page?", "books").named("books"),
    ])
    .expect("sample table is valid");
    Router::new(table)
}

/// History that records every call made to it.
#[derive(Debug, Default)]
pub struct RecordingHistory {
    pub location: String,
    pub pushes: Vec<String>,
    pub replaces: Vec<String>,
}

#[allow(dead_code)]
impl RecordingHistory {
    pub fn at(location: &str) -> Self {
        Self {
            location: location.to_string(),
            ..Self::default()
        }
    }
}

impl History for RecordingHistory {
    fn push(&mut self, path: &str) {
        self.pushes.push(path.to_string());
        self.location = path.to_string();
    }

    fn replace(&mut self, path: &str) {
        self.replaces.push(path.to_string());
        self.location = path.to_string();
    }

    fn current(&self) -> String {
        self.location.clone()
    }
}

/// Renderer that keeps what it was asked to show.
#[derive(Debug, Default)]
#[allow(dead_code)]
pub struct RecordingRenderer {
    pub views: Vec<ResolvedNavigation>,
    pub not_found: Vec<String>,
    pub locales: Vec<Option<String>>,
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, target: &ResolvedNavigation, ctx: &AppContext) {
        self.views.push(target.clone());
        self.locales.push(ctx.locale().map(str::to_string));
    }

    fn render_not_found(&mut self, path: &str, _ctx: &AppContext) {
        self.not_found.push(path.to_string());
    }
}
