use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::Response,
};
use serde::Deserialize;

use crate::modules::fulfillment::use_cases::record_scan::command::RecordScan;
use crate::shared::infrastructure::http::envelope::{self, Wording};
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordScanBody {
    pub order_id: Option<String>,
    pub sku: Option<String>,
}

const WORDING: Wording = Wording {
    not_found: "Order or SKU not found",
    invalid_input: "Missing required fields",
};

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<RecordScanBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return envelope::malformed(rejection),
    };

    let command = match RecordScan::new(body.order_id, body.sku) {
        Ok(c) => c,
        Err(e) => return envelope::rejected(e, &WORDING),
    };

    match state.record_scan.handle(command).await {
        Ok(()) => envelope::ack("Scan successful"),
        Err(e) => envelope::rejected(e, &WORDING),
    }
}
