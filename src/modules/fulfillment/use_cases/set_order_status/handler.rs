use std::sync::Arc;

use crate::modules::fulfillment::core::errors::FulfillmentError;
use crate::modules::fulfillment::core::ports::{FulfillmentStore, decider};
use crate::modules::fulfillment::use_cases::set_order_status::command::SetOrderStatus;
use crate::modules::fulfillment::use_cases::set_order_status::decide::decide_status;

pub struct SetOrderStatusHandler {
    store: Arc<dyn FulfillmentStore>,
}

impl SetOrderStatusHandler {
    pub fn new(store: Arc<dyn FulfillmentStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: SetOrderStatus) -> Result<(), FulfillmentError> {
        let order_id = command.order_id.clone();

        let result = self
            .store
            .mutate(&order_id, decider(move |_| decide_status(&command)))
            .await;

        match result {
            Ok(event) => {
                tracing::info!(%order_id, ?event, "order status updated");
                Ok(())
            }
            Err(e) => {
                tracing::warn!(%order_id, kind = ?e.kind(), error = %e, "order status rejected");
                Err(e)
            }
        }
    }
}
