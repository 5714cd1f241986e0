use serde::Serialize;

use crate::shared::core::primitives::MinuteStamp;

pub const DEFAULT_ORDER_STATUS: &str = "Pending";

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: String,
    /// Free-form label set by operators. Unrelated to line-item fulfillment.
    pub status: String,
    pub transfer: Option<Transfer>,
    /// Kept in the order the items were imported.
    pub line_items: Vec<LineItem>,
}

/// How and when an order left the warehouse. Type and time are recorded together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transfer {
    pub transfer_type: String,
    pub recorded_at: MinuteStamp,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub sku: String,
    pub title: String,
    pub color: String,
    pub quantity: u32,
    pub price: Option<f64>,
    pub scanned: u64,
    pub last_scanned_at: Option<MinuteStamp>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FulfillmentState {
    Pending,
    Fulfilled,
}

impl Order {
    pub fn line_item(&self, sku: &str) -> Option<&LineItem> {
        self.line_items.iter().find(|item| item.sku == sku)
    }

    pub fn line_item_mut(&mut self, sku: &str) -> Option<&mut LineItem> {
        self.line_items.iter_mut().find(|item| item.sku == sku)
    }

    pub fn transfer_type(&self) -> Option<&str> {
        self.transfer.as_ref().map(|t| t.transfer_type.as_str())
    }

    pub fn transfer_timestamp(&self) -> Option<MinuteStamp> {
        self.transfer.as_ref().map(|t| t.recorded_at)
    }
}

impl LineItem {
    pub fn new(
        sku: impl Into<String>,
        title: impl Into<String>,
        color: impl Into<String>,
        quantity: u32,
        price: Option<f64>,
    ) -> Self {
        Self {
            sku: sku.into(),
            title: title.into(),
            color: color.into(),
            quantity,
            price,
            scanned: 0,
            last_scanned_at: None,
        }
    }

    /// Derived on every read; scanning past the target keeps the item fulfilled.
    pub fn fulfillment_state(&self) -> FulfillmentState {
        if self.scanned >= u64::from(self.quantity) {
            FulfillmentState::Fulfilled
        } else {
            FulfillmentState::Pending
        }
    }
}
