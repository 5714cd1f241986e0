use async_trait::async_trait;

use crate::modules::fulfillment::use_cases::list_line_items::projection::LineItemRow;

#[async_trait]
pub trait LineItemQueries: Send + Sync {
    /// Every (order, SKU) pair, rebuilt from the current state on each call.
    async fn list_line_items(&self) -> Vec<LineItemRow>;
}
