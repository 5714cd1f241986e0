use axum::{extract::State, response::Response};

use crate::shared::infrastructure::http::envelope;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> Response {
    let rows = state.line_items.list_line_items().await;
    envelope::ok(rows, "Orders retrieved successfully")
}
