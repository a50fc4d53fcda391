//! CORS policy for the dashboard and other browser clients.
//!
//! Policy:
//! - Default: any origin, method and header, WITH credentials. Origin, methods and
//!   headers are mirrored from the request, since a literal `*` is not allowed
//!   together with credentials.
//! - `CORS_ALLOWED_ORIGINS` set: only those origins (exact match, validated in
//!   `Config`) are allowed.

use std::time::Duration;

use axum::Router;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use crate::config::Config;

pub fn apply(router: Router, config: &Config) -> Router {
    let allow_origin = if config.cors_allowed_origins.is_empty() {
        AllowOrigin::mirror_request()
    } else {
        AllowOrigin::list(config.cors_allowed_origins.clone())
    };

    let cors = CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
        .max_age(Duration::from_secs(60 * 10));

    router.layer(cors)
}
