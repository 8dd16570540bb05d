//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Navigation (path, mode)
//!     → router.rs (split query/fragment, normalize, table scan)
//!     → table.rs → matcher.rs (pattern, then aliases)
//!     → Return: ResolvedNavigation or NotFound
//!     → history.rs (push / replace / nothing)
//!
//! Table Compilation (at startup):
//!     RouteDefinition[]
//!     → Parse patterns and aliases
//!     → Reject duplicates (case and trailing slash folded)
//!     → Freeze as immutable Router
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - No regex: segment-by-segment matching
//! - Deterministic: same input always matches same route
//! - First match wins (table order)

pub mod error;
pub mod history;
pub mod matcher;
pub mod router;
pub mod table;

pub use error::{PatternError, RouteError, TableError};
pub use history::{History, MemoryHistory, NavigationMode, NavigationRequest};
pub use matcher::{Params, RoutePattern};
pub use router::{Query, ResolvedNavigation, Router, RouterMode, RouterOptions};
pub use table::{RouteDefinition, RouteTable, ViewId};
