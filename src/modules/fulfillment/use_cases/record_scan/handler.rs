use std::sync::Arc;

use crate::modules::fulfillment::core::errors::FulfillmentError;
use crate::modules::fulfillment::core::ports::{FulfillmentStore, decider};
use crate::modules::fulfillment::use_cases::record_scan::command::RecordScan;
use crate::modules::fulfillment::use_cases::record_scan::decide::decide_scan;
use crate::shared::core::clock::Clock;
use crate::shared::core::primitives::MinuteStamp;

pub struct RecordScanHandler {
    store: Arc<dyn FulfillmentStore>,
    clock: Arc<dyn Clock>,
}

impl RecordScanHandler {
    pub fn new(store: Arc<dyn FulfillmentStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    pub async fn handle(&self, command: RecordScan) -> Result<(), FulfillmentError> {
        let scanned_at = MinuteStamp::new(self.clock.now());
        let order_id = command.order_id.clone();
        let sku = command.sku.clone();

        let result = self
            .store
            .mutate(
                &order_id,
                decider(move |order| decide_scan(order, &command, scanned_at)),
            )
            .await;

        match result {
            Ok(_) => {
                tracing::info!(%order_id, %sku, %scanned_at, "scan recorded");
                Ok(())
            }
            Err(e) => {
                tracing::warn!(%order_id, %sku, kind = ?e.kind(), error = %e, "scan rejected");
                Err(e)
            }
        }
    }
}
