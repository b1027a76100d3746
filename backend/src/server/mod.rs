//! Server construction and wiring.

mod config;

pub use config::{AppConfig, ConfigError};

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::domain::CartService;
use crate::inbound::http::carts::{create_cart, get_cart};
use crate::inbound::http::error::json_error_handler;
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::state::HttpState;
use crate::middleware::Trace;
use crate::outbound::persistence::MongoCartRepository;

/// Assemble the actix application: state, JSON error handling, the request
/// context middleware, and all routes. Swagger UI is mounted in debug builds
/// only.
pub fn build_app(
    http_state: web::Data<HttpState>,
    health_state: web::Data<HealthState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(http_state)
        .app_data(health_state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .wrap(Trace)
        .service(create_cart)
        .service(get_cart)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(
        SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    );

    app
}

/// Connect to the store, wire the hexagon, and serve until shutdown.
pub async fn run(config: AppConfig) -> std::io::Result<()> {
    let client = mongodb::Client::with_uri_str(&config.mongodb_uri)
        .await
        .map_err(|e| std::io::Error::other(format!("failed to initialise MongoDB client: {e}")))?;

    let cart_repo = Arc::new(MongoCartRepository::new(&client, &config.database));
    let service = Arc::new(CartService::new(cart_repo));
    let http_state = web::Data::new(HttpState::new(service.clone(), service));
    let health_state = web::Data::new(HealthState::new());

    let server_http_state = http_state.clone();
    let server_health_state = health_state.clone();
    let server = HttpServer::new(move || {
        build_app(server_http_state.clone(), server_health_state.clone())
    })
    .bind(config.bind_addr)?;

    health_state.mark_ready();
    info!(addr = %config.bind_addr, database = %config.database, "carts backend listening");
    server.run().await
}
