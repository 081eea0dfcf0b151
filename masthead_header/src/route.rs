// Copyright 2025 the Masthead Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Route classification for the header.

/// Path of the home page.
pub const ROOT: &str = "/";

/// Default prefix of detail pages.
pub const DEFAULT_DETAIL_PREFIX: &str = "/projects/";

/// How the header treats the current route.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum RouteKind<'a> {
    /// The home page: the name renders as plain text.
    Root,
    /// A detail page such as `/projects/foo`: a breadcrumb may show.
    Detail {
        /// The single path segment after the prefix.
        slug: &'a str,
    },
    /// Any other page.
    Other,
}

/// Matches `<prefix><slug>` with exactly one non-empty slug segment.
///
/// A trailing slash, a query string and a fragment are tolerated.
///
/// ```
/// use masthead_header::route::{DetailPattern, RouteKind};
///
/// let p = DetailPattern::default();
/// assert_eq!(p.classify("/"), RouteKind::Root);
/// assert_eq!(p.classify("/projects"), RouteKind::Other);
/// assert_eq!(p.classify("/projects/foo"), RouteKind::Detail { slug: "foo" });
/// assert_eq!(p.classify("/projects/foo/"), RouteKind::Detail { slug: "foo" });
/// assert_eq!(p.classify("/projects/foo/bar"), RouteKind::Other);
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DetailPattern<'p> {
    prefix: &'p str,
}

impl Default for DetailPattern<'static> {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_DETAIL_PREFIX,
        }
    }
}

impl<'p> DetailPattern<'p> {
    /// A pattern for detail pages under `prefix` (for example `/work/`).
    pub fn new(prefix: &'p str) -> Self {
        Self { prefix }
    }

    /// Classify `path`.
    pub fn classify<'a>(&self, path: &'a str) -> RouteKind<'a> {
        let path = strip_suffixes(path);
        if path.is_empty() || path == ROOT {
            return RouteKind::Root;
        }
        let Some(rest) = path.strip_prefix(self.prefix) else {
            return RouteKind::Other;
        };
        let slug = rest.strip_suffix('/').unwrap_or(rest);
        if slug.is_empty() || slug.contains('/') {
            RouteKind::Other
        } else {
            RouteKind::Detail { slug }
        }
    }

    /// Whether `path` is a detail page.
    pub fn is_detail(&self, path: &str) -> bool {
        matches!(self.classify(path), RouteKind::Detail { .. })
    }
}

/// Whether `path` is the home page.
pub fn is_root(path: &str) -> bool {
    matches!(strip_suffixes(path), "" | ROOT)
}

fn strip_suffixes(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    &path[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_variants() {
        assert!(is_root("/"));
        assert!(is_root(""));
        assert!(is_root("/?ref=home"));
        assert!(is_root("/#top"));
        assert!(!is_root("/projects"));
    }

    #[test]
    fn detail_requires_slug() {
        let p = DetailPattern::default();
        assert!(!p.is_detail("/projects/"));
        assert!(!p.is_detail("/projects//"));
        assert!(p.is_detail("/projects/skye-2.0"));
        assert!(p.is_detail("/projects/skye-2.0#outcomes"));
        assert_eq!(
            p.classify("/projects/cdp?x=1"),
            RouteKind::Detail { slug: "cdp" }
        );
    }

    #[test]
    fn custom_prefix() {
        let p = DetailPattern::new("/work/");
        assert!(p.is_detail("/work/chatgpt-app"));
        assert!(!p.is_detail("/projects/chatgpt-app"));
    }
}
