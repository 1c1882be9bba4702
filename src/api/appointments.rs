//! Appointment API endpoints (`/citas`)
//!
//! Referenced barber/client/service ids are not checked here; an unknown id
//! is rejected by the store's foreign key and answers 400.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{error::AppResult, models::Appointment, AppState};

/// List all appointments
#[utoipa::path(
    get,
    path = "/citas",
    tag = "citas",
    responses(
        (status = 200, description = "Appointment list", body = Vec<Appointment>)
    )
)]
pub async fn list_appointments(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Appointment>>> {
    let appointments = state.services.appointments.crud.list().await?;
    Ok(Json(appointments))
}

/// Get appointment by ID
#[utoipa::path(
    get,
    path = "/citas/{id}",
    tag = "citas",
    params(("id" = i32, Path, description = "Appointment ID")),
    responses(
        (status = 200, description = "Appointment details", body = Appointment),
        (status = 404, description = "Appointment not found")
    )
)]
pub async fn get_appointment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Appointment>> {
    let appointment = state.services.appointments.crud.get_by_id(id).await?;
    Ok(Json(appointment))
}

/// Book an appointment
#[utoipa::path(
    post,
    path = "/citas",
    tag = "citas",
    request_body = Appointment,
    responses(
        (status = 200, description = "Appointment created", body = Appointment),
        (status = 400, description = "Unknown barber, client or service", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_appointment(
    State(state): State<AppState>,
    Json(data): Json<Appointment>,
) -> AppResult<Json<Appointment>> {
    let appointment = state.services.appointments.crud.create(data).await?;
    Ok(Json(appointment))
}

/// Replace an appointment
#[utoipa::path(
    put,
    path = "/citas/{id}",
    tag = "citas",
    params(("id" = i32, Path, description = "Appointment ID")),
    request_body = Appointment,
    responses(
        (status = 200, description = "Appointment updated", body = Appointment),
        (status = 400, description = "Unknown barber, client or service", body = crate::error::ErrorResponse),
        (status = 404, description = "Appointment not found")
    )
)]
pub async fn update_appointment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(data): Json<Appointment>,
) -> AppResult<Json<Appointment>> {
    let appointment = state.services.appointments.crud.update(id, data).await?;
    Ok(Json(appointment))
}

/// Cancel an appointment
#[utoipa::path(
    delete,
    path = "/citas/{id}",
    tag = "citas",
    params(("id" = i32, Path, description = "Appointment ID")),
    responses(
        (status = 204, description = "Appointment deleted"),
        (status = 404, description = "Appointment not found")
    )
)]
pub async fn delete_appointment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.appointments.crud.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
