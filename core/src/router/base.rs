//! Base path handling
//!
//! A deployment may serve the board under a prefix such as `/app/`. The
//! prefix is applied uniformly: table paths stay literal (`/bs`) and the
//! prefix is stripped from incoming locations before resolution.

use std::fmt;

/// Normalized prefix shared by every registered path
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BasePath {
    /// Normalized prefix without trailing slash; empty for the root
    prefix: String,
}

impl BasePath {
    /// The root base path (no prefix)
    pub fn root() -> Self {
        Self::default()
    }

    /// Normalize a configured base path
    ///
    /// `""`, `"/"` map to the root; a missing leading slash is added and
    /// trailing slashes are removed, so `"app/"`, `"/app"` and `"/app/"` are
    /// all the same prefix.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim().trim_matches('/');
        if trimmed.is_empty() {
            return Self::root();
        }

        Self {
            prefix: format!("/{}", trimmed),
        }
    }

    /// Whether this is the root base path
    pub fn is_root(&self) -> bool {
        self.prefix.is_empty()
    }

    /// Map a full location onto a table path
    ///
    /// Query strings and fragments are dropped. Returns `None` when the
    /// location lies outside the prefix.
    pub fn strip(&self, location: &str) -> Option<String> {
        let location = location
            .split(['?', '#'])
            .next()
            .unwrap_or_default();

        let rest = if self.is_root() {
            location
        } else {
            let rest = location.strip_prefix(self.prefix.as_str())?;
            // "/app" must not claim "/application"
            if !rest.is_empty() && !rest.starts_with('/') {
                return None;
            }
            rest
        };

        if rest.is_empty() {
            Some("/".to_string())
        } else if rest.starts_with('/') {
            Some(rest.to_string())
        } else {
            None
        }
    }

    /// Full location for a table path; the inverse of [`BasePath::strip`]
    pub fn href(&self, path: &str) -> String {
        let path = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{}", path)
        };
        format!("{}{}", self.prefix, path)
    }
}

impl fmt::Display for BasePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/", self.prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_normalizes_prefix() {
        assert_eq!(BasePath::parse("/app/"), BasePath::parse("app"));
        assert_eq!(BasePath::parse("/app"), BasePath::parse("/app//"));
        assert!(BasePath::parse("/").is_root());
        assert!(BasePath::parse("").is_root());
        assert_eq!(BasePath::parse("/app/").to_string(), "/app/");
        assert_eq!(BasePath::root().to_string(), "/");
    }

    #[test]
    fn test_strip_with_prefix() {
        let base = BasePath::parse("/app/");

        assert_eq!(base.strip("/app/bs").as_deref(), Some("/bs"));
        assert_eq!(base.strip("/app/").as_deref(), Some("/"));
        assert_eq!(base.strip("/app").as_deref(), Some("/"));
        assert_eq!(base.strip("/app/cq?stop=1#top").as_deref(), Some("/cq"));
        assert_eq!(base.strip("/application"), None);
        assert_eq!(base.strip("/bs"), None);
    }

    #[test]
    fn test_strip_at_root() {
        let base = BasePath::root();

        assert_eq!(base.strip("/cq").as_deref(), Some("/cq"));
        assert_eq!(base.strip("").as_deref(), Some("/"));
        assert_eq!(base.strip("cq"), None);
    }

    #[test]
    fn test_href_round_trips_strip() {
        let base = BasePath::parse("/app/");

        assert_eq!(base.href("/"), "/app/");
        assert_eq!(base.href("/bs"), "/app/bs");
        assert_eq!(base.strip(&base.href("/cq")).as_deref(), Some("/cq"));
        assert_eq!(BasePath::root().href("/"), "/");
    }
}
