//! Service catalog API endpoints (`/servicios`)

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::{Appointment, Service},
    repository::Owner,
    AppState,
};

/// List all services
#[utoipa::path(
    get,
    path = "/servicios",
    tag = "servicios",
    responses(
        (status = 200, description = "Service list", body = Vec<Service>)
    )
)]
pub async fn list_services(State(state): State<AppState>) -> AppResult<Json<Vec<Service>>> {
    let services = state.services.catalog.list().await?;
    Ok(Json(services))
}

/// Get service by ID
#[utoipa::path(
    get,
    path = "/servicios/{id}",
    tag = "servicios",
    params(("id" = i32, Path, description = "Service ID")),
    responses(
        (status = 200, description = "Service details", body = Service),
        (status = 404, description = "Service not found")
    )
)]
pub async fn get_service(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Service>> {
    let service = state.services.catalog.get_by_id(id).await?;
    Ok(Json(service))
}

/// Create a service
#[utoipa::path(
    post,
    path = "/servicios",
    tag = "servicios",
    request_body = Service,
    responses(
        (status = 200, description = "Service created", body = Service)
    )
)]
pub async fn create_service(
    State(state): State<AppState>,
    Json(data): Json<Service>,
) -> AppResult<Json<Service>> {
    let service = state.services.catalog.create(data).await?;
    Ok(Json(service))
}

/// Replace a service
#[utoipa::path(
    put,
    path = "/servicios/{id}",
    tag = "servicios",
    params(("id" = i32, Path, description = "Service ID")),
    request_body = Service,
    responses(
        (status = 200, description = "Service updated", body = Service),
        (status = 404, description = "Service not found")
    )
)]
pub async fn update_service(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(data): Json<Service>,
) -> AppResult<Json<Service>> {
    let service = state.services.catalog.update(id, data).await?;
    Ok(Json(service))
}

/// Delete a service
#[utoipa::path(
    delete,
    path = "/servicios/{id}",
    tag = "servicios",
    params(("id" = i32, Path, description = "Service ID")),
    responses(
        (status = 204, description = "Service deleted"),
        (status = 404, description = "Service not found"),
        (status = 409, description = "Service still booked in appointments")
    )
)]
pub async fn delete_service(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.catalog.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// List appointments booking a service
#[utoipa::path(
    get,
    path = "/servicios/{id}/citas",
    tag = "servicios",
    params(("id" = i32, Path, description = "Service ID")),
    responses(
        (status = 200, description = "Appointments for the service", body = Vec<Appointment>),
        (status = 404, description = "Service not found")
    )
)]
pub async fn list_service_appointments(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Vec<Appointment>>> {
    let appointments = state
        .services
        .appointments
        .list_for(Owner::Service, id)
        .await?;
    Ok(Json(appointments))
}
