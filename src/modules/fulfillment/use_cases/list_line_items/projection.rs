use serde::Serialize;

use crate::modules::fulfillment::core::order::{FulfillmentState, LineItem, Order};
use crate::shared::core::primitives::MinuteStamp;

/// One row per (order, SKU) pair, carrying the parent order's transfer fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItemRow {
    #[serde(rename = "id")]
    pub order_id: String,
    pub sku: String,
    pub title: String,
    pub color: String,
    pub quantity: u32,
    pub scanned: u64,
    /// Existing clients read the derived state under `status`.
    #[serde(rename = "status")]
    pub fulfillment_state: FulfillmentState,
    pub price: Option<f64>,
    pub scan_timestamp: Option<MinuteStamp>,
    pub transfer_type: Option<String>,
    pub transfer_timestamp: Option<MinuteStamp>,
}

impl LineItemRow {
    fn new(order: &Order, item: &LineItem) -> Self {
        Self {
            order_id: order.id.clone(),
            sku: item.sku.clone(),
            title: item.title.clone(),
            color: item.color.clone(),
            quantity: item.quantity,
            scanned: item.scanned,
            fulfillment_state: item.fulfillment_state(),
            price: item.price,
            scan_timestamp: item.last_scanned_at,
            transfer_type: order.transfer_type().map(str::to_string),
            transfer_timestamp: order.transfer_timestamp(),
        }
    }
}

/// Flattens orders into rows, in order insertion order and then SKU insertion order.
pub fn flatten(orders: &[Order]) -> impl Iterator<Item = LineItemRow> + '_ {
    orders.iter().flat_map(|order| {
        order
            .line_items
            .iter()
            .map(move |item| LineItemRow::new(order, item))
    })
}
