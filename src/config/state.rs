// Application state module
// Configuration plus the route table, shared read-only across connections

use crate::routing::RouteTable;

use super::types::Config;

/// Application state
///
/// Built once at startup and never mutated afterwards, so it can be shared
/// between connection tasks without locks.
pub struct AppState {
    pub config: Config,
    pub routes: RouteTable,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            routes: RouteTable::site(),
        }
    }
}
