//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{appointments, barbers, catalog, clients, health};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Mapache Bigoton API",
        version = "1.0.0",
        description = "Barbershop appointment booking REST API"
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Barbers
        barbers::list_barbers,
        barbers::get_barber,
        barbers::create_barber,
        barbers::update_barber,
        barbers::delete_barber,
        barbers::list_barber_appointments,
        // Clients
        clients::list_clients,
        clients::get_client,
        clients::create_client,
        clients::update_client,
        clients::delete_client,
        clients::list_client_appointments,
        // Services
        catalog::list_services,
        catalog::get_service,
        catalog::create_service,
        catalog::update_service,
        catalog::delete_service,
        catalog::list_service_appointments,
        // Appointments
        appointments::list_appointments,
        appointments::get_appointment,
        appointments::create_appointment,
        appointments::update_appointment,
        appointments::delete_appointment,
    ),
    components(
        schemas(
            crate::models::Barber,
            crate::models::Client,
            crate::models::Service,
            crate::models::Appointment,
            crate::models::BarberRef,
            crate::models::ClientRef,
            crate::models::ServiceRef,
            health::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "barberos", description = "Barbers"),
        (name = "clientes", description = "Clients"),
        (name = "servicios", description = "Services offered by the shop"),
        (name = "citas", description = "Appointments")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_resource() {
        let doc = ApiDoc::openapi();
        for path in ["/barberos/{id}", "/clientes/{id}", "/servicios/{id}", "/citas/{id}"] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }
}
