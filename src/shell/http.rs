use axum::{
    Router,
    routing::{get, post, put},
};

use crate::modules::fulfillment::use_cases::get_order::inbound::http as get_order_http;
use crate::modules::fulfillment::use_cases::import_orders::inbound::http as import_http;
use crate::modules::fulfillment::use_cases::list_line_items::inbound::http as list_http;
use crate::modules::fulfillment::use_cases::record_scan::inbound::http as scan_http;
use crate::modules::fulfillment::use_cases::record_transfer::inbound::http as transfer_http;
use crate::modules::fulfillment::use_cases::set_order_status::inbound::http as status_http;
use crate::modules::system::inbound::http as system_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/system/status", get(system_http::status))
        .route("/api/ping", get(system_http::ping))
        .route("/api/scan", post(scan_http::handle))
        .route("/api/orders", get(list_http::handle))
        .route("/api/orders/import", post(import_http::handle))
        .route("/api/orders/{order_id}", get(get_order_http::handle))
        .route("/api/orders/{order_id}/transfer", put(transfer_http::handle))
        .route("/api/orders/{order_id}/status", put(status_http::handle))
        .with_state(state)
}
