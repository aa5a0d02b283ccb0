use std::time::Duration;

use tower_http::cors::{Any, CorsLayer};
use http::{Method, header::CONTENT_TYPE};

/// Permissive CORS for every response. `OPTIONS` requests are answered by the
/// layer itself with an empty body.
pub fn create_cors() -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::HEAD, Method::POST, Method::OPTIONS, Method::DELETE])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(86400));
    cors
}
