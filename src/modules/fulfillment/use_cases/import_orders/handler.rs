use std::sync::Arc;

use crate::modules::fulfillment::core::errors::FulfillmentError;
use crate::modules::fulfillment::core::ports::FulfillmentStore;
use crate::modules::fulfillment::use_cases::import_orders::command::ImportOrder;
use crate::modules::fulfillment::use_cases::import_orders::decide::decide_import;

pub struct ImportOrdersHandler {
    store: Arc<dyn FulfillmentStore>,
}

impl ImportOrdersHandler {
    pub fn new(store: Arc<dyn FulfillmentStore>) -> Self {
        Self { store }
    }

    /// Returns how many orders were added. Nothing is added if any order is rejected.
    pub async fn handle(&self, batch: Vec<ImportOrder>) -> Result<usize, FulfillmentError> {
        let submitted = batch.len();
        let result = match decide_import(batch) {
            Ok(orders) => self.store.register(orders).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(imported) => {
                tracing::info!(imported, "orders imported");
                Ok(imported)
            }
            Err(e) => {
                tracing::warn!(submitted, kind = ?e.kind(), error = %e, "order import rejected");
                Err(e)
            }
        }
    }
}
