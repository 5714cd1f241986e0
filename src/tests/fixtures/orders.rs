// Shared order fixtures.
//
// The canonical batch lives in json/orders.json:
// - A1 (status Pending): S1 Canvas Tote x2, S2 Wool Scarf x1
// - B7 (no status):      S1 Canvas Tote x3

use std::sync::Arc;

use crate::modules::fulfillment::adapters::outbound::store_in_memory::InMemoryFulfillmentStore;
use crate::modules::fulfillment::core::ports::FulfillmentStore;
use crate::modules::fulfillment::use_cases::import_orders::command::{
    ImportLineItem, ImportOrder,
};
use crate::modules::fulfillment::use_cases::import_orders::decide::decide_import;
use crate::shell::state::AppState;
use crate::tests::fixtures::clock::FixedClock;

pub fn import_batch() -> Vec<ImportOrder> {
    serde_json::from_str(include_str!("json/orders.json")).unwrap()
}

pub async fn seeded_store() -> Arc<InMemoryFulfillmentStore> {
    let store = Arc::new(InMemoryFulfillmentStore::new());
    let orders = decide_import(import_batch()).unwrap();
    store.register(orders).await.unwrap();
    store
}

pub async fn seeded_state(clock: Arc<FixedClock>) -> AppState {
    let store = seeded_store().await;
    AppState::new(store, clock)
}

pub fn empty_state() -> AppState {
    let store = Arc::new(InMemoryFulfillmentStore::new());
    AppState::new(store, Arc::new(FixedClock::default()))
}

pub struct ImportOrderBuilder {
    inner: ImportOrder,
}

#[allow(dead_code)]
impl ImportOrderBuilder {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            inner: ImportOrder {
                id: Some(id.into()),
                status: None,
                line_items: Vec::new(),
            },
        }
    }

    pub fn status(mut self, v: impl Into<String>) -> Self {
        self.inner.status = Some(v.into());
        self
    }

    pub fn line_item(mut self, sku: impl Into<String>, quantity: u32) -> Self {
        self.inner.line_items.push(ImportLineItem {
            sku: Some(sku.into()),
            title: Some("Canvas Tote".to_string()),
            color: "Navy".to_string(),
            quantity: Some(quantity),
            price: None,
        });
        self
    }

    pub fn build(self) -> ImportOrder {
        self.inner
    }
}

#[cfg(test)]
mod order_fixture_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn the_json_batch_matches_the_documented_orders() {
        let batch = import_batch();
        assert_eq!(batch.len(), 2);
        assert_eq!(batch[0].id.as_deref(), Some("A1"));
        assert_eq!(batch[0].line_items[0].quantity, Some(2));
        assert_eq!(batch[1].status, None);
    }

    #[rstest]
    fn the_builder_sets_every_field() {
        let order = ImportOrderBuilder::new("C3")
            .status("Processing")
            .line_item("S1", 4)
            .build();
        assert_eq!(order.id.as_deref(), Some("C3"));
        assert_eq!(order.status.as_deref(), Some("Processing"));
        assert_eq!(order.line_items[0].sku.as_deref(), Some("S1"));
        assert_eq!(order.line_items[0].quantity, Some(4));
    }
}
