use async_graphql::{Context, ErrorExtensions, Object, Result as GqlResult};

use crate::modules::fulfillment::core::order::FulfillmentState;
use crate::modules::fulfillment::use_cases::get_order::projection::{LineItemView, OrderView};
use crate::shell::state::AppState;

#[derive(async_graphql::Enum, Copy, Clone, Eq, PartialEq)]
pub enum GqlFulfillmentState {
    Pending,
    Fulfilled,
}

impl From<FulfillmentState> for GqlFulfillmentState {
    fn from(state: FulfillmentState) -> Self {
        match state {
            FulfillmentState::Pending => Self::Pending,
            FulfillmentState::Fulfilled => Self::Fulfilled,
        }
    }
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlLineItem {
    pub sku: String,
    pub title: String,
    pub color: String,
    pub quantity: u32,
    pub scanned: u64,
    pub price: Option<f64>,
    pub scan_timestamp: Option<String>,
    pub fulfillment_state: GqlFulfillmentState,
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlOrder {
    pub id: String,
    pub status: String,
    pub transfer_type: Option<String>,
    pub transfer_timestamp: Option<String>,
    pub line_items: Vec<GqlLineItem>,
}

impl From<LineItemView> for GqlLineItem {
    fn from(v: LineItemView) -> Self {
        Self {
            sku: v.sku,
            title: v.title,
            color: v.color,
            quantity: v.quantity,
            scanned: v.scanned,
            price: v.price,
            scan_timestamp: v.scan_timestamp.map(|t| t.to_string()),
            fulfillment_state: v.fulfillment_state.into(),
        }
    }
}

impl From<OrderView> for GqlOrder {
    fn from(v: OrderView) -> Self {
        Self {
            id: v.id,
            status: v.status,
            transfer_type: v.transfer_type,
            transfer_timestamp: v.transfer_timestamp.map(|t| t.to_string()),
            line_items: v.line_items.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Default)]
pub struct GetOrderQuery;

#[Object]
impl GetOrderQuery {
    async fn order(&self, context: &Context<'_>, id: String) -> GqlResult<GqlOrder> {
        let state = context.data_unchecked::<AppState>();
        let order = state
            .orders
            .get_order(&id)
            .await
            .map_err(|e| e.extend())?;
        Ok(order.into())
    }
}
