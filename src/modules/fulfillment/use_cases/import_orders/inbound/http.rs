use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::Response,
};
use serde::Serialize;

use crate::modules::fulfillment::use_cases::import_orders::command::ImportOrder;
use crate::shared::infrastructure::http::envelope;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct ImportOrdersResponse {
    pub imported: usize,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<Vec<ImportOrder>>, JsonRejection>,
) -> Response {
    let Json(batch) = match body {
        Ok(b) => b,
        Err(rejection) => return envelope::malformed(rejection),
    };

    match state.import_orders.handle(batch).await {
        Ok(imported) => envelope::ok(
            ImportOrdersResponse { imported },
            "Orders imported successfully",
        ),
        Err(e) => envelope::rejected_in_detail(e),
    }
}
