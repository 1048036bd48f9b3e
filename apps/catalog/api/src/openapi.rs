//! OpenAPI documentation configuration

use axum_helpers::{ErrorResponse, HealthResponse};
use utoipa::OpenApi;

/// Combined OpenAPI documentation for all APIs
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Catalog API",
        version = "0.1.0",
        description = "MongoDB-based REST API for managing catalog products",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/products", api = domain_products::ApiDoc)
    ),
    components(schemas(ErrorResponse, HealthResponse)),
    tags(
        (name = "Products", description = "Product catalog endpoints (MongoDB)")
    )
)]
pub struct ApiDoc;
