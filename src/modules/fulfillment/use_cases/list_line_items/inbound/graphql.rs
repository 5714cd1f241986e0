use async_graphql::{Context, Object};

use crate::modules::fulfillment::use_cases::get_order::inbound::graphql::GqlFulfillmentState;
use crate::modules::fulfillment::use_cases::list_line_items::projection::LineItemRow;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlLineItemRow {
    pub order_id: String,
    pub sku: String,
    pub title: String,
    pub color: String,
    pub quantity: u32,
    pub scanned: u64,
    pub fulfillment_state: GqlFulfillmentState,
    pub price: Option<f64>,
    pub scan_timestamp: Option<String>,
    pub transfer_type: Option<String>,
    pub transfer_timestamp: Option<String>,
}

impl From<LineItemRow> for GqlLineItemRow {
    fn from(row: LineItemRow) -> Self {
        Self {
            order_id: row.order_id,
            sku: row.sku,
            title: row.title,
            color: row.color,
            quantity: row.quantity,
            scanned: row.scanned,
            fulfillment_state: row.fulfillment_state.into(),
            price: row.price,
            scan_timestamp: row.scan_timestamp.map(|t| t.to_string()),
            transfer_type: row.transfer_type,
            transfer_timestamp: row.transfer_timestamp.map(|t| t.to_string()),
        }
    }
}

#[derive(Default)]
pub struct ListLineItemsQuery;

#[Object]
impl ListLineItemsQuery {
    async fn line_items(&self, context: &Context<'_>) -> Vec<GqlLineItemRow> {
        let state = context.data_unchecked::<AppState>();
        let rows = state.line_items.list_line_items().await;
        rows.into_iter().map(Into::into).collect()
    }
}
