//! OpenAPI / Swagger UI Documentation
//!
//! - Swagger UI: `http://localhost:8000/docs`
//! - OpenAPI JSON: `http://localhost:8000/api-docs/openapi.json`

use utoipa::OpenApi;

use crate::gateway::types::{
    CakeListResponse, CreateCakeOrder, CreateCakeResponse, DiagnosticsReport, ErrorBody,
    RootResponse,
};
use crate::models::CakeSize;

/// Main API Documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Divine Flavours Bakery API",
        version = "1.0.0",
        description = "Submit and list custom cake orders.",
        license(
            name = "MIT"
        )
    ),
    servers(
        (url = "http://localhost:8000", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::root::read_root,
        crate::gateway::handlers::cakes::create_cake,
        crate::gateway::handlers::cakes::list_cakes,
        crate::gateway::handlers::diagnostics::test_database,
    ),
    components(
        schemas(
            CakeSize,
            CreateCakeOrder,
            CreateCakeResponse,
            CakeListResponse,
            DiagnosticsReport,
            ErrorBody,
            RootResponse,
        )
    ),
    tags(
        (name = "Orders", description = "Cake order submission and listing"),
        (name = "System", description = "Liveness and diagnostics")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::OpenApi;

    #[test]
    fn test_openapi_spec_generates() {
        let spec = ApiDoc::openapi();
        assert_eq!(spec.info.title, "Divine Flavours Bakery API");
        assert_eq!(spec.info.version, "1.0.0");
    }

    #[test]
    fn test_openapi_json_serializable() {
        let spec = ApiDoc::openapi();
        let json = spec.to_json();
        assert!(json.is_ok());
        assert!(json.unwrap().contains("Divine Flavours Bakery API"));
    }

    #[test]
    fn test_endpoints_registered() {
        let spec = ApiDoc::openapi();
        let paths = spec.paths;
        assert!(paths.paths.contains_key("/"));
        assert!(paths.paths.contains_key("/api/cakes"));
        assert!(paths.paths.contains_key("/test"));
    }

    #[test]
    fn test_schemas_registered() {
        let spec = ApiDoc::openapi();
        let components = spec.components.expect("should have components");
        assert!(components.schemas.contains_key("CreateCakeOrder"));
        assert!(components.schemas.contains_key("DiagnosticsReport"));
    }
}
