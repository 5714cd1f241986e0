use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    response::Response,
};
use serde::Deserialize;

use crate::modules::fulfillment::use_cases::set_order_status::command::SetOrderStatus;
use crate::shared::infrastructure::http::envelope::{self, Wording};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct SetOrderStatusBody {
    pub status: Option<String>,
}

const WORDING: Wording = Wording {
    not_found: "Order not found",
    invalid_input: "Missing status",
};

pub async fn handle(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
    body: Result<Json<SetOrderStatusBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return envelope::malformed(rejection),
    };

    let command = SetOrderStatus::new(order_id, body.status);
    match state.set_order_status.handle(command).await {
        Ok(()) => envelope::ack("Status updated successfully"),
        Err(e) => envelope::rejected(e, &WORDING),
    }
}
