//! API handlers for Bigoton REST endpoints

pub mod appointments;
pub mod barbers;
pub mod catalog;
pub mod clients;
pub mod health;
pub mod openapi;

use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    routing::get,
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{config::CorsConfig, error::AppError, AppResult, AppState};

/// CORS policy admitting the single configured front-end origin
pub fn cors_layer(config: &CorsConfig) -> AppResult<CorsLayer> {
    let origin = config
        .allowed_origin
        .parse::<HeaderValue>()
        .map_err(|e| {
            AppError::Internal(format!(
                "Invalid CORS origin {:?}: {}",
                config.allowed_origin, e
            ))
        })?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE]))
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> AppResult<Router> {
    let cors = cors_layer(&state.config.cors)?;

    let api = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Barbers
        .route(
            "/barberos",
            get(barbers::list_barbers).post(barbers::create_barber),
        )
        .route(
            "/barberos/:id",
            get(barbers::get_barber)
                .put(barbers::update_barber)
                .delete(barbers::delete_barber),
        )
        .route(
            "/barberos/:id/citas",
            get(barbers::list_barber_appointments),
        )
        // Clients
        .route(
            "/clientes",
            get(clients::list_clients).post(clients::create_client),
        )
        .route(
            "/clientes/:id",
            get(clients::get_client)
                .put(clients::update_client)
                .delete(clients::delete_client),
        )
        .route(
            "/clientes/:id/citas",
            get(clients::list_client_appointments),
        )
        // Services
        .route(
            "/servicios",
            get(catalog::list_services).post(catalog::create_service),
        )
        .route(
            "/servicios/:id",
            get(catalog::get_service)
                .put(catalog::update_service)
                .delete(catalog::delete_service),
        )
        .route(
            "/servicios/:id/citas",
            get(catalog::list_service_appointments),
        )
        // Appointments
        .route(
            "/citas",
            get(appointments::list_appointments).post(appointments::create_appointment),
        )
        .route(
            "/citas/:id",
            get(appointments::get_appointment)
                .put(appointments::update_appointment)
                .delete(appointments::delete_appointment),
        )
        .with_state(state);

    // OpenAPI documentation
    let openapi = openapi::create_openapi_router();

    Ok(Router::new()
        .merge(api)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors))
}
