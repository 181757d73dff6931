//! Server construction and middleware wiring.

mod config;

pub use config::{AppSettings, ServerConfig};

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::body::MessageBody;
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use mockable::DefaultClock;
use tracing::info;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use spendwise_backend::Trace;
#[cfg(debug_assertions)]
use spendwise_backend::doc::ApiDoc;
use spendwise_backend::domain::ExpenseService;
use spendwise_backend::inbound::http::expenses;
use spendwise_backend::inbound::http::health::{HealthState, live, ready};
use spendwise_backend::inbound::http::state::HttpState;
use spendwise_backend::outbound::memory::InMemoryExpenseRepository;

/// Build the expense store and the service over it.
///
/// # Errors
/// Returns [`std::io::Error`] if the sample expenses fail validation.
fn build_http_state(config: &ServerConfig) -> std::io::Result<web::Data<HttpState>> {
    let repository = if config.seed_data {
        InMemoryExpenseRepository::seeded()
            .map_err(|e| std::io::Error::other(format!("sample expenses rejected: {e}")))?
    } else {
        InMemoryExpenseRepository::new()
    };
    let service = Arc::new(ExpenseService::new(
        Arc::new(repository),
        Arc::new(DefaultClock),
    ));
    Ok(web::Data::new(HttpState::new(service.clone(), service)))
}

/// Any origin with credentials unless narrowed to a single origin.
fn cors_policy(allowed_origin: Option<&str>) -> Cors {
    match allowed_origin {
        Some(origin) => Cors::default()
            .allowed_origin(origin)
            .allow_any_method()
            .allow_any_header()
            .supports_credentials(),
        None => Cors::permissive(),
    }
}

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
    cors_allowed_origin: Option<String>,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
        cors_allowed_origin,
    } = deps;

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(cors_policy(cors_allowed_origin.as_deref()))
        .wrap(Trace)
        .configure(expenses::configure)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    #[cfg(not(debug_assertions))]
    let app = app;

    app
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// # Parameters
/// - `health_state`: shared readiness state updated once the server is initialised.
/// - `config`: pre-built [`ServerConfig`] with the bind address, seeding, and CORS settings.
///
/// # Returns
/// A spawned [`Server`] that must be awaited to drive the listener.
///
/// # Errors
/// Propagates [`std::io::Error`] when seeding the store or binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = build_http_state(&config)?;
    let ServerConfig {
        bind_addr,
        seed_data,
        cors_allowed_origin,
    } = config;

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
            cors_allowed_origin: cors_allowed_origin.clone(),
        })
    })
    .bind(bind_addr)?
    .run();

    info!(%bind_addr, seed_data, "expense server listening");
    health_state.mark_ready();
    Ok(server)
}
