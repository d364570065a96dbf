use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct RouteInfo {
    pub method: &'static str,
    pub path: &'static str,
    pub source: &'static str,
}

include!(concat!(env!("OUT_DIR"), "/routes_generated.rs"));

/// Every registered route, collected from `src/routes` at build time.
pub fn routes() -> &'static [RouteInfo] {
    ROUTES
}
