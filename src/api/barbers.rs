//! Barber API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::{Appointment, Barber},
    repository::Owner,
    AppState,
};

/// List all barbers
#[utoipa::path(
    get,
    path = "/barberos",
    tag = "barberos",
    responses(
        (status = 200, description = "Barber list", body = Vec<Barber>)
    )
)]
pub async fn list_barbers(State(state): State<AppState>) -> AppResult<Json<Vec<Barber>>> {
    let barbers = state.services.barbers.list().await?;
    Ok(Json(barbers))
}

/// Get barber by ID
#[utoipa::path(
    get,
    path = "/barberos/{id}",
    tag = "barberos",
    params(("id" = i32, Path, description = "Barber ID")),
    responses(
        (status = 200, description = "Barber details", body = Barber),
        (status = 404, description = "Barber not found")
    )
)]
pub async fn get_barber(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Barber>> {
    let barber = state.services.barbers.get_by_id(id).await?;
    Ok(Json(barber))
}

/// Create a barber
#[utoipa::path(
    post,
    path = "/barberos",
    tag = "barberos",
    request_body = Barber,
    responses(
        (status = 200, description = "Barber created", body = Barber)
    )
)]
pub async fn create_barber(
    State(state): State<AppState>,
    Json(data): Json<Barber>,
) -> AppResult<Json<Barber>> {
    let barber = state.services.barbers.create(data).await?;
    Ok(Json(barber))
}

/// Replace a barber
#[utoipa::path(
    put,
    path = "/barberos/{id}",
    tag = "barberos",
    params(("id" = i32, Path, description = "Barber ID")),
    request_body = Barber,
    responses(
        (status = 200, description = "Barber updated", body = Barber),
        (status = 404, description = "Barber not found")
    )
)]
pub async fn update_barber(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(data): Json<Barber>,
) -> AppResult<Json<Barber>> {
    let barber = state.services.barbers.update(id, data).await?;
    Ok(Json(barber))
}

/// Delete a barber
#[utoipa::path(
    delete,
    path = "/barberos/{id}",
    tag = "barberos",
    params(("id" = i32, Path, description = "Barber ID")),
    responses(
        (status = 204, description = "Barber deleted"),
        (status = 404, description = "Barber not found"),
        (status = 409, description = "Barber still has appointments")
    )
)]
pub async fn delete_barber(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.barbers.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// List a barber's appointments
#[utoipa::path(
    get,
    path = "/barberos/{id}/citas",
    tag = "barberos",
    params(("id" = i32, Path, description = "Barber ID")),
    responses(
        (status = 200, description = "Appointments of the barber", body = Vec<Appointment>),
        (status = 404, description = "Barber not found")
    )
)]
pub async fn list_barber_appointments(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Vec<Appointment>>> {
    let appointments = state
        .services
        .appointments
        .list_for(Owner::Barber, id)
        .await?;
    Ok(Json(appointments))
}
