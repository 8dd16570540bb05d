//! Route definitions and the compiled, immutable route table.
//!
//! # Responsibilities
//! - Hold route definitions in priority (insertion) order
//! - Compile primary patterns and aliases once, at construction
//! - Reject ambiguous tables: duplicate patterns or duplicate names

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::routing::error::TableError;
use crate::routing::matcher::{Params, RoutePattern};

/// Opaque identifier of the view a route renders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViewId(String);

impl ViewId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ViewId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A single route, as declared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDefinition {
    pub pattern: String,
    pub view: ViewId,
    pub name: Option<String>,
    pub aliases: Vec<String>,
}

impl RouteDefinition {
    pub fn new(pattern: impl Into<String>, view: impl Into<ViewId>) -> Self {
        Self {
            pattern: pattern.into(),
            view: view.into(),
            name: None,
            aliases: Vec::new(),
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }
}

/// A definition with its patterns parsed.
#[derive(Debug, Clone)]
pub struct CompiledRoute {
    pub view: ViewId,
    pub name: Option<String>,
    pub pattern: RoutePattern,
    pub aliases: Vec<RoutePattern>,
}

impl CompiledRoute {
    /// Try the primary pattern, then each alias.
    pub fn matches(&self, path: &str) -> Option<(&RoutePattern, Params)> {
        std::iter::once(&self.pattern)
            .chain(self.aliases.iter())
            .find_map(|p| p.matches(path).map(|params| (p, params)))
    }
}

/// Ordered, immutable route table. Earlier routes win.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<CompiledRoute>,
    by_name: HashMap<String, usize>,
}

impl RouteTable {
    /// Compile a table, rejecting ambiguous or malformed definitions.
    pub fn new(definitions: Vec<RouteDefinition>) -> Result<Self, TableError> {
        let mut routes = Vec::with_capacity(definitions.len());
        let mut by_name = HashMap::new();
        let mut seen: HashMap<String, String> = HashMap::new();

        for def in definitions {
            let pattern = RoutePattern::parse(&def.pattern)?;
            let aliases = def
                .aliases
                .iter()
                .map(|a| RoutePattern::parse(a))
                .collect::<Result<Vec<_>, _>>()?;

            for p in std::iter::once(&pattern).chain(aliases.iter()) {
                if let Some(existing) = seen.insert(p.normalized_key(), p.as_str().to_string()) {
                    return Err(TableError::DuplicatePattern {
                        pattern: p.as_str().to_string(),
                        existing,
                        view: def.view.to_string(),
                    });
                }
            }

            if let Some(name) = &def.name {
                if by_name.insert(name.clone(), routes.len()).is_some() {
                    return Err(TableError::DuplicateName(name.clone()));
                }
            }

            routes.push(CompiledRoute {
                view: def.view,
                name: def.name,
                pattern,
                aliases,
            });
        }

        tracing::debug!(routes = routes.len(), named = by_name.len(), "Route table compiled");
        Ok(Self { routes, by_name })
    }

    pub fn routes(&self) -> &[CompiledRoute] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn by_name(&self, name: &str) -> Option<&CompiledRoute> {
        self.by_name.get(name).map(|&i| &self.routes[i])
    }
}
