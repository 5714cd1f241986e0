use std::sync::Arc;

use crate::modules::fulfillment::core::errors::FulfillmentError;
use crate::modules::fulfillment::core::ports::{FulfillmentStore, decider};
use crate::modules::fulfillment::use_cases::record_transfer::command::RecordTransfer;
use crate::modules::fulfillment::use_cases::record_transfer::decide::decide_transfer;
use crate::shared::core::clock::Clock;
use crate::shared::core::primitives::MinuteStamp;

pub struct RecordTransferHandler {
    store: Arc<dyn FulfillmentStore>,
    clock: Arc<dyn Clock>,
}

impl RecordTransferHandler {
    pub fn new(store: Arc<dyn FulfillmentStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    pub async fn handle(&self, command: RecordTransfer) -> Result<(), FulfillmentError> {
        let recorded_at = MinuteStamp::new(self.clock.now());
        let order_id = command.order_id.clone();

        let result = self
            .store
            .mutate(
                &order_id,
                decider(move |_| decide_transfer(&command, recorded_at)),
            )
            .await;

        match result {
            Ok(event) => {
                tracing::info!(%order_id, ?event, "transfer recorded");
                Ok(())
            }
            Err(e) => {
                tracing::warn!(%order_id, kind = ?e.kind(), error = %e, "transfer rejected");
                Err(e)
            }
        }
    }
}
