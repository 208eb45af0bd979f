//! Site route table
//!
//! An ordered list of (pattern, page, name) entries, scanned top-to-bottom
//! with first-match-wins semantics. The table is built once at startup and
//! never modified; matching is ASCII case-insensitive and operates on the
//! request path only (hyper strips the query string from `uri().path()`).

/// Path matching expression for a single route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathPattern {
    /// Matches the bare root path, or any path starting with the literal.
    RootOrPrefix(&'static str),
    /// Matches when the whole path equals the literal.
    Exact(&'static str),
    /// Matches any path starting with the literal, trailing characters allowed.
    Prefix(&'static str),
}

impl PathPattern {
    /// Check whether a request path (leading slash included) matches.
    pub fn matches(self, path: &str) -> bool {
        let rest = path.strip_prefix('/').unwrap_or(path);
        match self {
            Self::RootOrPrefix(lit) => rest.is_empty() || starts_with_ignore_case(rest, lit),
            Self::Exact(lit) => rest.eq_ignore_ascii_case(lit),
            Self::Prefix(lit) => starts_with_ignore_case(rest, lit),
        }
    }

    /// Canonical path this pattern reverse-resolves to.
    pub fn canonical_path(self) -> String {
        match self {
            Self::RootOrPrefix(_) => "/".to_string(),
            Self::Exact(lit) | Self::Prefix(lit) => format!("/{lit}"),
        }
    }
}

/// ASCII case-insensitive prefix test
fn starts_with_ignore_case(s: &str, prefix: &str) -> bool {
    s.len() >= prefix.len() && s.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
}

/// Pages the table can dispatch to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Index,
    Contact,
    Devices,
    Faq,
    Success,
}

/// A single routing rule: pattern, target page, symbolic name.
///
/// The name identifies the route for reverse lookup; it is not required to
/// be unique across the table (the first entry bearing a name wins).
#[derive(Debug, Clone, Copy)]
pub struct Route {
    pub pattern: PathPattern,
    pub page: Page,
    pub name: &'static str,
}

/// Ordered, immutable route table.
#[derive(Debug)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// The site's route table.
    ///
    /// The trailing "contact" entry repeats the name of entry 2. Entry 2
    /// shadows it for the exact path and for reverse lookup; the prefix
    /// pattern still catches "contact..." tails.
    pub fn site() -> Self {
        Self {
            routes: vec![
                Route {
                    pattern: PathPattern::RootOrPrefix("index"),
                    page: Page::Index,
                    name: "index",
                },
                Route {
                    pattern: PathPattern::Exact("contact"),
                    page: Page::Contact,
                    name: "contact",
                },
                Route {
                    pattern: PathPattern::Prefix("devices"),
                    page: Page::Devices,
                    name: "devices",
                },
                Route {
                    pattern: PathPattern::Prefix("faq"),
                    page: Page::Faq,
                    name: "faq",
                },
                Route {
                    pattern: PathPattern::Prefix("success"),
                    page: Page::Success,
                    name: "success",
                },
                Route {
                    pattern: PathPattern::Prefix("contact"),
                    page: Page::Contact,
                    name: "contact",
                },
            ],
        }
    }

    /// Find the first route matching a request path.
    pub fn match_route(&self, path: &str) -> Option<&Route> {
        self.routes.iter().find(|route| route.pattern.matches(path))
    }

    /// Resolve a route name back to its canonical path.
    ///
    /// The first entry bearing the name wins, so later duplicates are
    /// unreachable through this lookup.
    pub fn path_for(&self, name: &str) -> Option<String> {
        self.routes
            .iter()
            .find(|route| route.name == name)
            .map(|route| route.pattern.canonical_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_root_and_variants() {
        let table = RouteTable::site();
        for path in ["/", "/index", "/INDEX", "/Index.html", "/indexing"] {
            let route = table.match_route(path).expect(path);
            assert_eq!(route.page, Page::Index, "path {path}");
        }
    }

    #[test]
    fn test_index_requires_full_literal() {
        let table = RouteTable::site();
        // "inde" is neither empty nor an "index" prefix
        assert!(table.match_route("/inde").is_none());
    }

    #[test]
    fn test_exact_contact_wins_over_trailing_duplicate() {
        let table = RouteTable::site();
        let route = table.match_route("/contact").unwrap();
        assert_eq!(route.page, Page::Contact);
        assert_eq!(route.pattern, PathPattern::Exact("contact"));

        let route = table.match_route("/CONTACT").unwrap();
        assert_eq!(route.pattern, PathPattern::Exact("contact"));
    }

    #[test]
    fn test_contact_tails_fall_through_to_prefix_entry() {
        let table = RouteTable::site();
        for path in ["/contact/", "/contact/form", "/contact-us", "/Contacts"] {
            let route = table.match_route(path).expect(path);
            assert_eq!(route.page, Page::Contact, "path {path}");
            assert_eq!(route.pattern, PathPattern::Prefix("contact"), "path {path}");
        }
    }

    #[test]
    fn test_prefix_routes_allow_trailing_characters() {
        let table = RouteTable::site();
        let cases = [
            ("/devices", Page::Devices),
            ("/devices/n64", Page::Devices),
            ("/DEVICES.html", Page::Devices),
            ("/faq", Page::Faq),
            ("/faq#shipping", Page::Faq),
            ("/success", Page::Success),
            ("/success/", Page::Success),
            ("/SuCcEsS", Page::Success),
        ];
        for (path, page) in cases {
            let route = table.match_route(path).expect(path);
            assert_eq!(route.page, page, "path {path}");
        }
    }

    #[test]
    fn test_unmatched_path_yields_none() {
        let table = RouteTable::site();
        assert!(table.match_route("/about").is_none());
        assert!(table.match_route("/dev").is_none());
        assert!(table.match_route("/fa").is_none());
    }

    #[test]
    fn test_match_order_is_top_to_bottom() {
        // An earlier broader entry must shadow a later one
        let table = RouteTable {
            routes: vec![
                Route {
                    pattern: PathPattern::Prefix("devices"),
                    page: Page::Devices,
                    name: "devices",
                },
                Route {
                    pattern: PathPattern::Exact("devices"),
                    page: Page::Index,
                    name: "devices-exact",
                },
            ],
        };
        let route = table.match_route("/devices").unwrap();
        assert_eq!(route.page, Page::Devices);
    }

    #[test]
    fn test_reverse_lookup_canonical_paths() {
        let table = RouteTable::site();
        assert_eq!(table.path_for("index").as_deref(), Some("/"));
        assert_eq!(table.path_for("devices").as_deref(), Some("/devices"));
        assert_eq!(table.path_for("faq").as_deref(), Some("/faq"));
        assert_eq!(table.path_for("success").as_deref(), Some("/success"));
        assert!(table.path_for("about").is_none());
    }

    #[test]
    fn test_reverse_lookup_contact_returns_first_entry() {
        let table = RouteTable::site();
        // Both "contact" entries carry the name; the exact entry comes first
        // and is the one reverse lookup reports.
        assert_eq!(table.path_for("contact").as_deref(), Some("/contact"));
    }

    #[test]
    fn test_case_insensitive_prefix_is_ascii_only() {
        assert!(starts_with_ignore_case("DeViCeS/x", "devices"));
        assert!(!starts_with_ignore_case("dev", "devices"));
    }
}
