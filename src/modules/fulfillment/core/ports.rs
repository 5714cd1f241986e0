// Ports the fulfillment use cases code against.
//
// Purpose
// - Describe the store as traits so handlers and transports never name a concrete backend.
//
// Boundaries
// - No concrete state here. Read-side ports live next to their use cases.
//
// Atomicity
// - `mutate` runs the decider and applies its event as one step: concurrent callers
//   observe either the whole effect or none of it.

use async_trait::async_trait;

use crate::modules::fulfillment::core::errors::FulfillmentError;
use crate::modules::fulfillment::core::events::OrderEvent;
use crate::modules::fulfillment::core::order::Order;

pub type Decider = Box<dyn FnOnce(&Order) -> Result<OrderEvent, FulfillmentError> + Send>;

pub fn decider<F>(decide: F) -> Decider
where
    F: FnOnce(&Order) -> Result<OrderEvent, FulfillmentError> + Send + 'static,
{
    Box::new(decide)
}

#[async_trait]
pub trait FulfillmentStore: Send + Sync {
    /// Inserts new orders, all or nothing. Fails if any id is already present.
    async fn register(&self, orders: Vec<Order>) -> Result<usize, FulfillmentError>;

    /// Decides against the current order and applies the resulting event.
    async fn mutate(&self, order_id: &str, decide: Decider)
    -> Result<OrderEvent, FulfillmentError>;
}

