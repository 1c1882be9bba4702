//! Tests against a running server backed by PostgreSQL
//!
//! Run with: cargo test --test live_api_tests -- --ignored

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080";

async fn create(client: &Client, path: &str, body: Value) -> Value {
    let response = client
        .post(format!("{}{}", BASE_URL, path))
        .json(&body)
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);
    response.json().await.expect("Failed to parse response")
}

#[tokio::test]
#[ignore]
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/ready", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
#[ignore]
async fn test_create_get_delete_service() {
    let client = Client::new();

    let created = create(
        &client,
        "/servicios",
        json!({"descripcion": "Corte clásico", "costo": 150.0}),
    )
    .await;
    let id = created["idServicio"].as_i64().expect("No service ID");

    let fetched: Value = client
        .get(format!("{}/servicios/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(fetched, created);

    let response = client
        .delete(format!("{}/servicios/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
#[ignore]
async fn test_book_appointment() {
    let client = Client::new();

    let barber = create(&client, "/barberos", json!({"nombre": "Luis"})).await;
    let customer = create(
        &client,
        "/clientes",
        json!({"nombre": "Ana", "telefono": "5551234"}),
    )
    .await;
    let service = create(
        &client,
        "/servicios",
        json!({"descripcion": "Afeitado", "costo": 80.0}),
    )
    .await;

    let appointment = create(
        &client,
        "/citas",
        json!({
            "fecha": "2024-05-01",
            "hora": "10:00",
            "barbero": {"idBarbero": barber["idBarbero"]},
            "cliente": {"idCliente": customer["idCliente"]},
            "servicio": {"idServicio": service["idServicio"]}
        }),
    )
    .await;
    assert!(appointment["idCita"].is_number());

    // Referenced rows cannot go while the appointment exists
    let response = client
        .delete(format!("{}/barberos/{}", BASE_URL, barber["idBarbero"]))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // Cleanup
    let _ = client
        .delete(format!("{}/citas/{}", BASE_URL, appointment["idCita"]))
        .send()
        .await;
    for (path, id) in [
        ("barberos", &barber["idBarbero"]),
        ("clientes", &customer["idCliente"]),
        ("servicios", &service["idServicio"]),
    ] {
        let _ = client
            .delete(format!("{}/{}/{}", BASE_URL, path, id))
            .send()
            .await;
    }
}

#[tokio::test]
#[ignore]
async fn test_book_appointment_unknown_barber() {
    let client = Client::new();

    let response = client
        .post(format!("{}/citas", BASE_URL))
        .json(&json!({
            "fecha": "2024-05-01",
            "hora": "10:00",
            "barbero": {"idBarbero": i32::MAX},
            "cliente": {"idCliente": i32::MAX},
            "servicio": {"idServicio": i32::MAX}
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore]
async fn test_delete_unknown_client() {
    let client = Client::new();

    let response = client
        .delete(format!("{}/clientes/{}", BASE_URL, i32::MAX))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(response.text().await.unwrap().is_empty());
}
