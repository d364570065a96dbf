use axum::{Router, routing::get};
use serde::Serialize;

use crate::response::{ApiResult, JsonResponse};
use crate::routes::route_list::{RouteInfo, routes};

#[derive(Debug, Serialize)]
pub struct Sitemap {
    pub routes: &'static [RouteInfo],
}

pub fn router() -> Router {
    Router::new().route("/", get(sitemap))
}

async fn sitemap() -> ApiResult<Sitemap> {
    JsonResponse::ok(Sitemap { routes: routes() })
}
