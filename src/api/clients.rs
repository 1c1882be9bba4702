//! Client API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::{Appointment, Client},
    repository::Owner,
    AppState,
};

/// List all clients
#[utoipa::path(
    get,
    path = "/clientes",
    tag = "clientes",
    responses(
        (status = 200, description = "Client list", body = Vec<Client>)
    )
)]
pub async fn list_clients(State(state): State<AppState>) -> AppResult<Json<Vec<Client>>> {
    let clients = state.services.clients.list().await?;
    Ok(Json(clients))
}

/// Get client by ID
#[utoipa::path(
    get,
    path = "/clientes/{id}",
    tag = "clientes",
    params(("id" = i32, Path, description = "Client ID")),
    responses(
        (status = 200, description = "Client details", body = Client),
        (status = 404, description = "Client not found")
    )
)]
pub async fn get_client(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Client>> {
    let client = state.services.clients.get_by_id(id).await?;
    Ok(Json(client))
}

/// Create a client
#[utoipa::path(
    post,
    path = "/clientes",
    tag = "clientes",
    request_body = Client,
    responses(
        (status = 200, description = "Client created", body = Client)
    )
)]
pub async fn create_client(
    State(state): State<AppState>,
    Json(data): Json<Client>,
) -> AppResult<Json<Client>> {
    let client = state.services.clients.create(data).await?;
    Ok(Json(client))
}

/// Replace a client
#[utoipa::path(
    put,
    path = "/clientes/{id}",
    tag = "clientes",
    params(("id" = i32, Path, description = "Client ID")),
    request_body = Client,
    responses(
        (status = 200, description = "Client updated", body = Client),
        (status = 404, description = "Client not found")
    )
)]
pub async fn update_client(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(data): Json<Client>,
) -> AppResult<Json<Client>> {
    let client = state.services.clients.update(id, data).await?;
    Ok(Json(client))
}

/// Delete a client
#[utoipa::path(
    delete,
    path = "/clientes/{id}",
    tag = "clientes",
    params(("id" = i32, Path, description = "Client ID")),
    responses(
        (status = 204, description = "Client deleted"),
        (status = 404, description = "Client not found"),
        (status = 409, description = "Client still has appointments")
    )
)]
pub async fn delete_client(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.clients.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// List a client's appointments
#[utoipa::path(
    get,
    path = "/clientes/{id}/citas",
    tag = "clientes",
    params(("id" = i32, Path, description = "Client ID")),
    responses(
        (status = 200, description = "Appointments of the client", body = Vec<Appointment>),
        (status = 404, description = "Client not found")
    )
)]
pub async fn list_client_appointments(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Vec<Appointment>>> {
    let appointments = state
        .services
        .appointments
        .list_for(Owner::Client, id)
        .await?;
    Ok(Json(appointments))
}
