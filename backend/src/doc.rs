//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] generates the OpenAPI specification for the REST surface:
//! the cart endpoints, the health probes, and the shared wire schemas. The
//! document backs Swagger UI in debug builds.

use utoipa::OpenApi;

use crate::inbound::http::carts::{
    CartBody, CreateCartRequestBody, CreateCartResponseBody, ItemBody,
};
use crate::inbound::http::error::ErrorBody;

/// OpenAPI document for the carts REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Carts API",
        description = "API for managing shopping carts"
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::carts::create_cart,
        crate::inbound::http::carts::get_cart,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        CreateCartRequestBody,
        CreateCartResponseBody,
        CartBody,
        ItemBody,
        ErrorBody,
    )),
    tags(
        (name = "carts", description = "Shopping cart operations"),
        (name = "health", description = "Liveness and readiness probes")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_covers_the_rest_surface() {
        let doc = ApiDoc::openapi();
        let paths: Vec<_> = doc.paths.paths.keys().cloned().collect();

        assert!(paths.contains(&"/carts".to_owned()));
        assert!(paths.contains(&"/carts/{cart_id}".to_owned()));
        assert!(paths.contains(&"/health/ready".to_owned()));
        assert!(paths.contains(&"/health/live".to_owned()));
    }
}
