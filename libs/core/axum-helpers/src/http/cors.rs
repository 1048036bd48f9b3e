use axum::http::{HeaderValue, Method, header};
use std::io;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::info;

const ALLOWED_METHODS: [Method; 6] = [
    Method::GET,
    Method::POST,
    Method::PUT,
    Method::DELETE,
    Method::PATCH,
    Method::OPTIONS,
];

/// CORS for an explicit list of origins, with credentials allowed.
pub fn create_cors_layer(allowed_origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins))
        .allow_methods(ALLOWED_METHODS)
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600))
}

/// Any origin, any header. Credentials cannot be combined with a wildcard.
pub fn create_permissive_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(ALLOWED_METHODS)
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600))
}

/// Build the CORS layer from configured origin strings.
///
/// A `*` entry selects [`create_permissive_cors_layer`]. An empty list or an
/// origin that is not a valid header value is an error.
pub fn cors_layer_from_origins(origins: &[String]) -> io::Result<CorsLayer> {
    let origins: Vec<&str> = origins
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();

    if origins.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "at least one CORS origin is required",
        ));
    }

    if origins.contains(&"*") {
        info!("CORS configured to allow any origin");
        return Ok(create_permissive_cors_layer());
    }

    let values = origins
        .iter()
        .map(|s| s.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid CORS origin: {e}"),
            )
        })?;

    info!(origins = ?origins, "CORS configured with allowed origins");
    Ok(create_cors_layer(values))
}
