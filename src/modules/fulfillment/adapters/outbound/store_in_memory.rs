// In memory fulfillment store.
//
// Purpose
// - Hold every order for the lifetime of the process.
//
// Responsibilities
// - Keep orders in insertion order with an id index for lookups.
// - Serialize all mutations behind one write lock so scans are never lost.

use std::collections::{HashMap, HashSet};
use tokio::sync::RwLock;

use crate::modules::fulfillment::core::errors::FulfillmentError;
use crate::modules::fulfillment::core::events::OrderEvent;
use crate::modules::fulfillment::core::evolve::evolve;
use crate::modules::fulfillment::core::order::Order;
use crate::modules::fulfillment::core::ports::{Decider, FulfillmentStore};
use crate::modules::fulfillment::use_cases::get_order::projection::OrderView;
use crate::modules::fulfillment::use_cases::get_order::queries_port::OrderQueries;
use crate::modules::fulfillment::use_cases::list_line_items::projection::{LineItemRow, flatten};
use crate::modules::fulfillment::use_cases::list_line_items::queries_port::LineItemQueries;

#[derive(Default)]
struct OrderBook {
    orders: Vec<Order>,
    index: HashMap<String, usize>,
}

impl OrderBook {
    fn get(&self, order_id: &str) -> Option<&Order> {
        self.index.get(order_id).map(|&i| &self.orders[i])
    }

    fn get_mut(&mut self, order_id: &str) -> Option<&mut Order> {
        self.index.get(order_id).map(|&i| &mut self.orders[i])
    }
}

#[derive(Default)]
pub struct InMemoryFulfillmentStore {
    book: RwLock<OrderBook>,
}

impl InMemoryFulfillmentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl FulfillmentStore for InMemoryFulfillmentStore {
    async fn register(&self, orders: Vec<Order>) -> Result<usize, FulfillmentError> {
        let mut book = self.book.write().await;

        let mut incoming = HashSet::with_capacity(orders.len());
        for order in &orders {
            if book.index.contains_key(&order.id) || !incoming.insert(order.id.as_str()) {
                return Err(FulfillmentError::DuplicateOrder(order.id.clone()));
            }
        }

        let count = orders.len();
        for order in orders {
            let position = book.orders.len();
            book.index.insert(order.id.clone(), position);
            book.orders.push(order);
        }
        Ok(count)
    }

    async fn mutate(
        &self,
        order_id: &str,
        decide: Decider,
    ) -> Result<OrderEvent, FulfillmentError> {
        let mut book = self.book.write().await;
        let order = book
            .get_mut(order_id)
            .ok_or_else(|| FulfillmentError::OrderNotFound(order_id.to_string()))?;

        let event = decide(&*order)?;
        *order = evolve(order.clone(), &event);
        Ok(event)
    }
}

#[async_trait::async_trait]
impl OrderQueries for InMemoryFulfillmentStore {
    async fn get_order(&self, order_id: &str) -> Result<OrderView, FulfillmentError> {
        let book = self.book.read().await;
        book.get(order_id)
            .map(OrderView::from)
            .ok_or_else(|| FulfillmentError::OrderNotFound(order_id.to_string()))
    }
}

#[async_trait::async_trait]
impl LineItemQueries for InMemoryFulfillmentStore {
    async fn list_line_items(&self) -> Vec<LineItemRow> {
        let book = self.book.read().await;
        flatten(&book.orders).collect()
    }
}
