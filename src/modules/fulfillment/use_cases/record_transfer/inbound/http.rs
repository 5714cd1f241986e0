use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    response::Response,
};
use serde::Deserialize;

use crate::modules::fulfillment::use_cases::record_transfer::command::RecordTransfer;
use crate::shared::infrastructure::http::envelope::{self, Wording};
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordTransferBody {
    pub transfer_type: Option<String>,
}

const WORDING: Wording = Wording {
    not_found: "Order not found",
    invalid_input: "Missing transfer type",
};

pub async fn handle(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
    body: Result<Json<RecordTransferBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return envelope::malformed(rejection),
    };

    let command = RecordTransfer::new(order_id, body.transfer_type);
    match state.record_transfer.handle(command).await {
        Ok(()) => envelope::ack("Transfer status updated successfully"),
        Err(e) => envelope::rejected(e, &WORDING),
    }
}
