// JSON envelope shared by every HTTP route.
//
// Shape
// - { "success": bool, "data"?: T, "message": string }
// - NotFound maps to 404, InvalidInput to 400, an unreadable body to 422.
// - Rejections carry each route's fixed client wording; the error detail goes to the logs.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::modules::fulfillment::core::errors::{ErrorKind, FulfillmentError};

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    pub message: String,
}

pub fn ok<T: Serialize>(data: T, message: &str) -> Response {
    (
        StatusCode::OK,
        Json(ApiResponse {
            success: true,
            data: Some(data),
            message: message.to_string(),
        }),
    )
        .into_response()
}

pub fn ack(message: &str) -> Response {
    (
        StatusCode::OK,
        Json(ApiResponse::<()> {
            success: true,
            data: None,
            message: message.to_string(),
        }),
    )
        .into_response()
}

pub fn failure(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ApiResponse::<()> {
            success: false,
            data: None,
            message: message.into(),
        }),
    )
        .into_response()
}

/// What a route tells clients for each kind of rejection.
#[derive(Debug, Clone, Copy)]
pub struct Wording {
    pub not_found: &'static str,
    pub invalid_input: &'static str,
}

fn status_of(error: &FulfillmentError) -> StatusCode {
    match error.kind() {
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::InvalidInput => StatusCode::BAD_REQUEST,
    }
}

pub fn rejected(error: FulfillmentError, wording: &Wording) -> Response {
    let message = match error.kind() {
        ErrorKind::NotFound => wording.not_found,
        ErrorKind::InvalidInput => wording.invalid_input,
    };
    failure(status_of(&error), message)
}

/// Rejects with the error's own description, for routes whose clients need to know
/// which item was refused.
pub fn rejected_in_detail(error: FulfillmentError) -> Response {
    failure(status_of(&error), error.to_string())
}

pub fn malformed(rejection: JsonRejection) -> Response {
    failure(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text())
}

#[cfg(test)]
mod envelope_tests {
    use super::*;
    use http_body_util::BodyExt;
    use rstest::rstest;

    async fn body_of(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_omit_data_on_an_acknowledgement() {
        let response = ack("Scan successful");
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_of(response).await,
            serde_json::json!({ "success": true, "message": "Scan successful" })
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_wrap_data() {
        let response = ok(vec![1, 2], "listed");
        assert_eq!(
            body_of(response).await,
            serde_json::json!({ "success": true, "data": [1, 2], "message": "listed" })
        );
    }

    const WORDING: Wording = Wording {
        not_found: "Order not found",
        invalid_input: "Missing status",
    };

    #[rstest]
    #[case(
        FulfillmentError::OrderNotFound("A1".into()),
        StatusCode::NOT_FOUND,
        "Order not found"
    )]
    #[case(
        FulfillmentError::MissingField("status"),
        StatusCode::BAD_REQUEST,
        "Missing status"
    )]
    #[tokio::test]
    async fn it_should_answer_with_the_route_wording(
        #[case] error: FulfillmentError,
        #[case] status: StatusCode,
        #[case] message: &str,
    ) {
        let response = rejected(error, &WORDING);
        assert_eq!(response.status(), status);
        assert_eq!(
            body_of(response).await,
            serde_json::json!({ "success": false, "message": message })
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_keep_the_error_description_when_asked_for_detail() {
        let error = FulfillmentError::DuplicateOrder("A1".into());
        let response = rejected_in_detail(error);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_of(response).await,
            serde_json::json!({ "success": false, "message": "order A1 already exists" })
        );
    }
}
