//! Route pattern parsing and matching.
//!
//! # Responsibilities
//! - Parse path templates (`/user/:user`, `/@:user`, `/posts/:page?`)
//! - Match a normalized path segment-by-segment
//! - Render a pattern back into a concrete path (reverse routing)
//!
//! # Design Decisions
//! - Literal matching is case-sensitive
//! - A capture binds exactly one non-empty segment
//! - Optional captures only as a trailing run, so segment counts stay bounded
//! - No regex, no wildcards: matching is O(segments)

use std::collections::BTreeMap;
use std::fmt;

use crate::routing::error::{PatternError, RouteError};

/// Captured path parameters, keyed by capture name.
pub type Params = BTreeMap<String, String>;

/// One segment of a route pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Must equal the path segment exactly.
    Literal(String),
    /// Binds the remainder of the segment after `prefix` under `name`.
    Capture {
        prefix: String,
        name: String,
        optional: bool,
    },
}

impl Segment {
    fn parse(raw: &str, pattern: &str) -> Result<Self, PatternError> {
        let Some(colon) = raw.find(':') else {
            if raw.contains('?') {
                return Err(PatternError::new(pattern, "'?' is only allowed after a capture name"));
            }
            return Ok(Segment::Literal(raw.to_string()));
        };

        let prefix = &raw[..colon];
        let mut name = &raw[colon + 1..];
        let optional = name.ends_with('?');
        if optional {
            name = &name[..name.len() - 1];
        }

        if name.is_empty() {
            return Err(PatternError::new(pattern, "capture name is empty"));
        }
        if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(PatternError::new(
                pattern,
                format!("capture name '{}' must be alphanumeric or '_'", name),
            ));
        }
        if optional && !prefix.is_empty() {
            return Err(PatternError::new(pattern, "optional captures cannot carry a literal prefix"));
        }

        Ok(Segment::Capture {
            prefix: prefix.to_string(),
            name: name.to_string(),
            optional,
        })
    }

    fn is_optional(&self) -> bool {
        matches!(self, Segment::Capture { optional: true, .. })
    }

    /// Match one path segment, binding into `params` on success.
    fn matches(&self, segment: &str, params: &mut Params) -> bool {
        match self {
            Segment::Literal(lit) => lit == segment,
            Segment::Capture { prefix, name, .. } => match segment.strip_prefix(prefix.as_str()) {
                Some(value) if !value.is_empty() => {
                    params.insert(name.clone(), value.to_string());
                    true
                }
                _ => false,
            },
        }
    }
}

/// A parsed path template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    source: String,
    segments: Vec<Segment>,
    required: usize,
}

impl RoutePattern {
    /// Parse a path template.
    pub fn parse(source: &str) -> Result<Self, PatternError> {
        if !source.starts_with('/') {
            return Err(PatternError::new(source, "must start with '/'"));
        }
        if source.contains('#') {
            return Err(PatternError::new(source, "must not contain a fragment"));
        }

        let trimmed = normalize(source);
        let mut segments = Vec::new();
        if trimmed != "/" {
            for raw in trimmed[1..].split('/') {
                if raw.is_empty() {
                    return Err(PatternError::new(source, "contains an empty segment"));
                }
                segments.push(Segment::parse(raw, source)?);
            }
        }

        let required = segments.iter().take_while(|s| !s.is_optional()).count();
        if segments[required..].iter().any(|s| !s.is_optional()) {
            return Err(PatternError::new(source, "optional captures must be trailing"));
        }

        let mut seen = Vec::new();
        for seg in &segments {
            if let Segment::Capture { name, .. } = seg {
                if seen.contains(&name) {
                    return Err(PatternError::new(source, format!("capture '{}' appears twice", name)));
                }
                seen.push(name);
            }
        }

        Ok(Self {
            source: trimmed.to_string(),
            segments,
            required,
        })
    }

    /// The template text, trailing slash removed.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Key used to detect ambiguous patterns: trailing slash and case folded.
    pub fn normalized_key(&self) -> String {
        self.source.to_ascii_lowercase()
    }

    /// Names of every capture, required first.
    pub fn capture_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Capture { name, .. } => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Match a normalized path (leading `/`, no trailing slash, no query).
    pub fn matches(&self, path: &str) -> Option<Params> {
        let parts: Vec<&str> = if path == "/" {
            Vec::new()
        } else {
            path[1..].split('/').collect()
        };

        if parts.len() < self.required || parts.len() > self.segments.len() {
            return None;
        }

        let mut params = Params::new();
        for (seg, part) in self.segments.iter().zip(parts.iter()) {
            if !seg.matches(part, &mut params) {
                return None;
            }
        }
        Some(params)
    }

    /// Build a concrete path from parameter values.
    pub fn render(&self, route: &str, params: &Params) -> Result<String, RouteError> {
        let mut out = String::new();
        let mut skipped_optional: Option<&str> = None;

        for seg in &self.segments {
            match seg {
                Segment::Literal(lit) => {
                    out.push('/');
                    out.push_str(lit);
                }
                Segment::Capture { prefix, name, optional } => match params.get(name) {
                    Some(value) => {
                        validate_param(route, name, value)?;
                        if let Some(earlier) = skipped_optional {
                            return Err(RouteError::MissingParameter {
                                route: route.to_string(),
                                param: earlier.to_string(),
                            });
                        }
                        out.push('/');
                        out.push_str(prefix);
                        out.push_str(value);
                    }
                    None if *optional => {
                        skipped_optional.get_or_insert(name.as_str());
                    }
                    None => {
                        return Err(RouteError::MissingParameter {
                            route: route.to_string(),
                            param: name.clone(),
                        });
                    }
                },
            }
        }

        if out.is_empty() {
            out.push('/');
        }
        Ok(out)
    }
}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Values that would change the segment structure cannot round-trip.
fn validate_param(route: &str, name: &str, value: &str) -> Result<(), RouteError> {
    if value.is_empty() || value.contains(['/', '?', '#']) {
        return Err(RouteError::InvalidParameter {
            route: route.to_string(),
            param: name.to_string(),
            value: value.to_string(),
        });
    }
    Ok(())
}

/// Strip trailing slashes, keeping the root path intact.
pub fn normalize(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> Params {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_literal_match_is_case_sensitive() {
        let p = RoutePattern::parse("/login").unwrap();
        assert_eq!(p.matches("/login"), Some(Params::new()));
        assert_eq!(p.matches("/Login"), None);
        assert_eq!(p.matches("/login/extra"), None);
    }

    #[test]
    fn test_root_pattern() {
        let p = RoutePattern::parse("/").unwrap();
        assert!(p.segments().is_empty());
        assert_eq!(p.matches("/"), Some(Params::new()));
        assert_eq!(p.matches("/home"), None);
    }

    #[test]
    fn test_capture_binds_segment() {
        let p = RoutePattern::parse("/user/:user").unwrap();
        assert_eq!(p.matches("/user/alice"), Some(params(&[("user", "alice")])));
        assert_eq!(p.matches("/user"), None);
    }

    #[test]
    fn test_prefixed_capture() {
        let p = RoutePattern::parse("/@:user").unwrap();
        assert_eq!(p.matches("/@alice"), Some(params(&[("user", "alice")])));
        // Prefix alone leaves an empty capture.
        assert_eq!(p.matches("/@"), None);
        assert_eq!(p.matches("/alice"), None);
    }

    #[test]
    fn test_optional_trailing_capture() {
        let p = RoutePattern::parse("/books/:page?").unwrap();
        assert_eq!(p.matches("/books"), Some(Params::new()));
        assert_eq!(p.matches("/books/3"), Some(params(&[("page", "3")])));
        assert_eq!(p.matches("/books/3/4"), None);
    }

    #[test]
    fn test_pattern_trailing_slash_normalized() {
        let p = RoutePattern::parse("/login/").unwrap();
        assert_eq!(p.as_str(), "/login");
        assert_eq!(p.normalized_key(), RoutePattern::parse("/LOGIN").unwrap().normalized_key());
    }

    #[test]
    fn test_invalid_patterns() {
        assert!(RoutePattern::parse("login").is_err());
        assert!(RoutePattern::parse("/a//b").is_err());
        assert!(RoutePattern::parse("/user/:").is_err());
        assert!(RoutePattern::parse("/:a/:a").is_err());
        assert!(RoutePattern::parse("/:a?/b").is_err());
        assert!(RoutePattern::parse("/x#y").is_err());
        assert!(RoutePattern::parse("/:user-id").is_err());
    }

    #[test]
    fn test_render_fills_captures() {
        let p = RoutePattern::parse("/user/:user").unwrap();
        assert_eq!(p.render("profile", &params(&[("user", "bob")])).unwrap(), "/user/bob");
        assert_eq!(RoutePattern::parse("/").unwrap().render("home", &Params::new()).unwrap(), "/");
    }

    #[test]
    fn test_render_missing_and_invalid() {
        let p = RoutePattern::parse("/user/:user").unwrap();
        assert!(matches!(
            p.render("profile", &Params::new()),
            Err(RouteError::MissingParameter { param, .. }) if param == "user"
        ));
        assert!(matches!(
            p.render("profile", &params(&[("user", "a/b")])),
            Err(RouteError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_render_optional_gap_rejected() {
        let p = RoutePattern::parse("/archive/:year?/:month?").unwrap();
        assert_eq!(p.render("archive", &Params::new()).unwrap(), "/archive");
        assert_eq!(p.render("archive", &params(&[("year", "2024")])).unwrap(), "/archive/2024");
        assert!(p.render("archive", &params(&[("month", "05")])).is_err());
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("/"), "/");
        assert_eq!(normalize("//"), "/");
        assert_eq!(normalize("/login/"), "/login");
        assert_eq!(normalize("/login"), "/login");
    }
}
