use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

use crate::shell::http::router;
use crate::tests::fixtures::clock::FixedClock;
use crate::tests::fixtures::orders::{empty_state, seeded_state};

async fn call(
    app: &Router,
    method: &str,
    path: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(path)
        .header("content-type", "application/json");
    let request = match body {
        Some(json) => request.body(Body::from(json.to_string())).unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn it_should_fulfill_and_dispatch_an_imported_order() {
    let app = router(empty_state());

    let (status, json) = call(
        &app,
        "POST",
        "/api/orders/import",
        Some(json!([{
            "id": "W1",
            "lineItems": [
                { "sku": "S1", "title": "Canvas Tote", "color": "Navy", "quantity": 2 },
                {
                    "sku": "S2",
                    "title": "Wool Scarf",
                    "color": "Grey",
                    "quantity": 1,
                    "price": 18.0
                }
            ]
        }])),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["imported"], 1);

    for sku in ["S1", "S1", "S2"] {
        let (status, json) = call(
            &app,
            "POST",
            "/api/scan",
            Some(json!({ "orderId": "W1", "sku": sku })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["message"], "Scan successful");
    }

    let (status, _) = call(
        &app,
        "PUT",
        "/api/orders/W1/transfer",
        Some(json!({ "transferType": "Pickup" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = call(
        &app,
        "PUT",
        "/api/orders/W1/status",
        Some(json!({ "status": "Shipped" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, json) = call(&app, "GET", "/api/orders/W1", None).await;
    assert_eq!(status, StatusCode::OK);
    let order = &json["data"];
    assert_eq!(order["status"], "Shipped");
    assert_eq!(order["transferType"], "Pickup");
    assert_eq!(order["transferTimestamp"], "1404/12/23 09:26");
    assert_eq!(order["lineItems"][0]["scanned"], 2);
    assert_eq!(order["lineItems"][0]["fulfillmentState"], "Fulfilled");
    assert_eq!(order["lineItems"][1]["fulfillmentState"], "Fulfilled");

    let (status, json) = call(&app, "GET", "/api/orders", None).await;
    assert_eq!(status, StatusCode::OK);
    let rows = json["data"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|row| row["id"] == "W1"
        && row["status"] == "Fulfilled"
        && row["transferType"] == "Pickup"));
}

#[tokio::test]
async fn it_should_leave_the_store_untouched_by_rejected_requests() {
    let app = router(seeded_state(Arc::new(FixedClock::default())).await);
    let (_, before) = call(&app, "GET", "/api/orders", None).await;

    let attempts = [
        (
            "POST",
            "/api/scan",
            json!({ "orderId": "missing-id", "sku": "S1" }),
            StatusCode::NOT_FOUND,
            "Order or SKU not found",
        ),
        (
            "POST",
            "/api/scan",
            json!({ "orderId": "B7", "sku": "S2" }),
            StatusCode::NOT_FOUND,
            "Order or SKU not found",
        ),
        (
            "POST",
            "/api/scan",
            json!({ "orderId": "A1" }),
            StatusCode::BAD_REQUEST,
            "Missing required fields",
        ),
        (
            "PUT",
            "/api/orders/missing-id/transfer",
            json!({}),
            StatusCode::NOT_FOUND,
            "Order not found",
        ),
        (
            "PUT",
            "/api/orders/A1/transfer",
            json!({ "transferType": "" }),
            StatusCode::BAD_REQUEST,
            "Missing transfer type",
        ),
        (
            "PUT",
            "/api/orders/missing-id/status",
            json!({}),
            StatusCode::NOT_FOUND,
            "Order not found",
        ),
        (
            "PUT",
            "/api/orders/A1/status",
            json!({ "status": "" }),
            StatusCode::BAD_REQUEST,
            "Missing status",
        ),
        (
            "POST",
            "/api/orders/import",
            json!([{ "id": "A1" }]),
            StatusCode::BAD_REQUEST,
            "order A1 already exists",
        ),
    ];
    for (method, path, body, expected, message) in attempts {
        let (status, json) = call(&app, method, path, Some(body)).await;
        assert_eq!(status, expected, "{method} {path}");
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], message, "{method} {path}");
    }

    let (_, after) = call(&app, "GET", "/api/orders", None).await;
    assert_eq!(before, after);
}
