// Stateless probes. Neither touches the fulfillment store.

use axum::{extract::State, response::Response};
use serde::Serialize;

use crate::shared::core::primitives::SecondStamp;
use crate::shared::infrastructure::http::envelope;
use crate::shell::state::{AppState, SERVICE_VERSION};

#[derive(Serialize)]
pub struct SystemStatus {
    pub status: &'static str,
    pub message: &'static str,
    pub timestamp: String,
    pub version: &'static str,
}

#[derive(Serialize)]
pub struct Pong {
    pub timestamp: i64,
}

pub async fn status(State(state): State<AppState>) -> Response {
    let status = SystemStatus {
        status: "operational",
        message: "System is running normally",
        timestamp: SecondStamp(state.clock.now()).to_string(),
        version: SERVICE_VERSION,
    };
    envelope::ok(status, "System status retrieved successfully")
}

pub async fn ping(State(state): State<AppState>) -> Response {
    envelope::ok(
        Pong {
            timestamp: state.clock.epoch_millis(),
        },
        "pong",
    )
}
