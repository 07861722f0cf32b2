//! API integration tests against the in-memory backend

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use storage_equipment_server::{
    api::create_router, config::StorageConfig, repository::Repository, services::Services, AppState,
};

fn app() -> Router {
    let repository = Repository::in_memory(&StorageConfig::default());
    create_router(AppState {
        services: Arc::new(Services::new(repository)),
    })
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn centrifuge() -> Value {
    json!({
        "name": "Centrifuge",
        "serialNumber": "SN1",
        "manufacturer": "Acme",
        "location": "Lab A",
        "serviceInterval": 30,
        "lastService": "2024-01-01"
    })
}

fn restock_order() -> Value {
    json!({
        "requestedBy": "Dr. Novak",
        "requestorDepartment": "Cardiology",
        "items": [{ "equipmentId": "eq-1", "quantity": 2 }, { "equipmentId": "eq-2" }]
    })
}

#[tokio::test]
async fn test_health_check() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/api/v1/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, body) = send(&app, Method::GET, "/api/v1/ready", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
async fn test_create_equipment_derives_fields() {
    let app = app();
    let (status, body) = send(&app, Method::POST, "/api/v1/equipment", Some(centrifuge())).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], "operational");
    assert_eq!(body["nextService"], "2024-01-31");
    assert_eq!(body["serialNumber"], "SN1");
    let id = body["id"].as_str().unwrap();

    let (status, fetched) = send(&app, Method::GET, &format!("/api/v1/equipment/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, body);
}

#[tokio::test]
async fn test_create_equipment_missing_fields() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/equipment",
        Some(json!({ "name": "Centrifuge", "serialNumber": "SN1" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Missing required fields: name, serialNumber, manufacturer, location"
    );

    let (_, list) = send(&app, Method::GET, "/api/v1/equipment", None).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn test_list_equipment_in_insertion_order() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/api/v1/equipment", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    for serial in ["SN1", "SN2"] {
        let mut data = centrifuge();
        data["serialNumber"] = json!(serial);
        send(&app, Method::POST, "/api/v1/equipment", Some(data)).await;
    }

    let (_, body) = send(&app, Method::GET, "/api/v1/equipment", None).await;
    let serials: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["serialNumber"].as_str().unwrap())
        .collect();
    assert_eq!(serials, ["SN1", "SN2"]);
}

#[tokio::test]
async fn test_update_equipment_recomputes_next_service() {
    let app = app();
    let (_, created) = send(&app, Method::POST, "/api/v1/equipment", Some(centrifuge())).await;
    let uri = format!("/api/v1/equipment/{}", created["id"].as_str().unwrap());

    let (status, body) = send(
        &app,
        Method::PUT,
        &uri,
        Some(json!({ "lastService": "2024-03-01", "location": "", "status": "in_repair" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["nextService"], "2024-03-31");
    assert_eq!(body["location"], "Lab A");
    assert_eq!(body["status"], "in_repair");
}

#[tokio::test]
async fn test_unknown_equipment_is_not_found() {
    let app = app();
    for method in [Method::GET, Method::DELETE] {
        let (status, body) = send(&app, method, "/api/v1/equipment/missing", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Equipment not found");
    }

    let (status, _) = send(
        &app,
        Method::PUT,
        "/api/v1/equipment/missing",
        Some(json!({ "name": "X" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_equipment() {
    let app = app();
    let (_, created) = send(&app, Method::POST, "/api/v1/equipment", Some(centrifuge())).await;
    let uri = format!("/api/v1/equipment/{}", created["id"].as_str().unwrap());

    let (status, body) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    for _ in 0..2 {
        let (status, _) = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}

#[tokio::test]
async fn test_malformed_json_is_rejected() {
    let app = app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/equipment")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"], "Invalid JSON format");
    assert!(body["details"].is_string());
}

#[tokio::test]
async fn test_create_order_is_pending() {
    let app = app();
    let mut data = restock_order();
    data["status"] = json!("delivered");

    let (status, body) = send(&app, Method::POST, "/api/v1/orders", Some(data)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], "pending");
    assert_eq!(body["items"][1]["quantity"], 1);
    assert_eq!(body["createdAt"], body["updatedAt"]);
}

#[tokio::test]
async fn test_create_order_validation() {
    let app = app();

    let mut data = restock_order();
    data["requestedBy"] = json!("");
    let (status, body) = send(&app, Method::POST, "/api/v1/orders", Some(data)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "RequestedBy is required");

    let mut data = restock_order();
    data["items"] = json!([]);
    let (status, body) = send(&app, Method::POST, "/api/v1/orders", Some(data)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "At least one item is required");

    let (_, list) = send(&app, Method::GET, "/api/v1/orders", None).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn test_update_order_status() {
    let app = app();
    let (_, created) = send(&app, Method::POST, "/api/v1/orders", Some(restock_order())).await;
    let uri = format!("/api/v1/orders/{}", created["id"].as_str().unwrap());

    let (status, body) = send(&app, Method::PUT, &uri, Some(json!({ "status": "shipped" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Invalid status. Must be: pending, delivered, or cancelled"
    );
    let (_, unchanged) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(unchanged, created);

    let (status, body) = send(
        &app,
        Method::PUT,
        &uri,
        Some(json!({ "status": "delivered", "notes": "dock 2" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "delivered");
    assert_eq!(body["notes"], "dock 2");
    assert_eq!(body["createdAt"], created["createdAt"]);
}

#[tokio::test]
async fn test_update_missing_order_status_checked_first() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/v1/orders/missing",
        Some(json!({ "status": "shipped" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Invalid status. Must be: pending, delivered, or cancelled"
    );

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/v1/orders/missing",
        Some(json!({ "status": "delivered" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Order not found");
}

#[tokio::test]
async fn test_create_equipment_negative_interval() {
    let app = app();
    let mut data = centrifuge();
    data["serviceInterval"] = json!(-3);

    let (status, body) = send(&app, Method::POST, "/api/v1/equipment", Some(data)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "serviceInterval must not be negative");

    let (_, list) = send(&app, Method::GET, "/api/v1/equipment", None).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn test_cancel_order_deletes_it() {
    let app = app();
    let (_, created) = send(&app, Method::POST, "/api/v1/orders", Some(restock_order())).await;
    let uri = format!("/api/v1/orders/{}", created["id"].as_str().unwrap());

    let (status, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Order not found");

    for _ in 0..2 {
        let (status, _) = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/openapi", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/equipment"].is_object());
}
