//! Routing module
//!
//! Provides the site's routing capabilities:
//! - Ordered path matching (first match wins, case-insensitive)
//! - Reverse lookup from route name to canonical path

mod table;

pub use table::{Page, PathPattern, Route, RouteTable};
