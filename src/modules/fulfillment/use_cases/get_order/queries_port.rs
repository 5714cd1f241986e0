use async_trait::async_trait;

use crate::modules::fulfillment::core::errors::FulfillmentError;
use crate::modules::fulfillment::use_cases::get_order::projection::OrderView;

#[async_trait]
pub trait OrderQueries: Send + Sync {
    async fn get_order(&self, order_id: &str) -> Result<OrderView, FulfillmentError>;
}
