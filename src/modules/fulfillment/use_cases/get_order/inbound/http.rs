use axum::{
    extract::{Path, State},
    response::Response,
};

use crate::shared::infrastructure::http::envelope::{self, Wording};
use crate::shell::state::AppState;

const WORDING: Wording = Wording {
    not_found: "Order not found",
    invalid_input: "Invalid order id",
};

pub async fn handle(State(state): State<AppState>, Path(order_id): Path<String>) -> Response {
    match state.orders.get_order(&order_id).await {
        Ok(order) => envelope::ok(order, "Order details retrieved successfully"),
        Err(e) => envelope::rejected(e, &WORDING),
    }
}
