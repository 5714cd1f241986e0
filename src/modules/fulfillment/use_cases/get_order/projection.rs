use serde::Serialize;

use crate::modules::fulfillment::core::order::{FulfillmentState, LineItem, Order};
use crate::shared::core::primitives::MinuteStamp;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderView {
    pub id: String,
    pub status: String,
    pub transfer_type: Option<String>,
    pub transfer_timestamp: Option<MinuteStamp>,
    pub line_items: Vec<LineItemView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItemView {
    pub sku: String,
    pub title: String,
    pub color: String,
    pub quantity: u32,
    pub scanned: u64,
    pub price: Option<f64>,
    pub scan_timestamp: Option<MinuteStamp>,
    pub fulfillment_state: FulfillmentState,
}

impl From<&LineItem> for LineItemView {
    fn from(item: &LineItem) -> Self {
        Self {
            sku: item.sku.clone(),
            title: item.title.clone(),
            color: item.color.clone(),
            quantity: item.quantity,
            scanned: item.scanned,
            price: item.price,
            scan_timestamp: item.last_scanned_at,
            fulfillment_state: item.fulfillment_state(),
        }
    }
}

impl From<&Order> for OrderView {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id.clone(),
            status: order.status.clone(),
            transfer_type: order.transfer_type().map(str::to_string),
            transfer_timestamp: order.transfer_timestamp(),
            line_items: order.line_items.iter().map(LineItemView::from).collect(),
        }
    }
}

#[cfg(test)]
mod order_view_tests {
    use super::*;
    use crate::modules::fulfillment::core::order::Transfer;
    use crate::tests::fixtures::clock::fixed_now;
    use rstest::rstest;

    #[rstest]
    fn it_should_serialize_the_full_order_record() {
        let stamp = MinuteStamp::new(fixed_now());
        let mut tote = LineItem::new("S1", "Canvas Tote", "Navy", 2, Some(24.5));
        tote.scanned = 2;
        tote.last_scanned_at = Some(stamp);
        let order = Order {
            id: "A1".into(),
            status: "Processing".into(),
            transfer: Some(Transfer {
                transfer_type: "Courier".into(),
                recorded_at: stamp,
            }),
            line_items: vec![tote, LineItem::new("S2", "Wool Scarf", "Grey", 1, None)],
        };

        let json = serde_json::to_value(OrderView::from(&order)).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": "A1",
                "status": "Processing",
                "transferType": "Courier",
                "transferTimestamp": "1404/12/23 09:26",
                "lineItems": [
                    {
                        "sku": "S1",
                        "title": "Canvas Tote",
                        "color": "Navy",
                        "quantity": 2,
                        "scanned": 2,
                        "price": 24.5,
                        "scanTimestamp": "1404/12/23 09:26",
                        "fulfillmentState": "Fulfilled"
                    },
                    {
                        "sku": "S2",
                        "title": "Wool Scarf",
                        "color": "Grey",
                        "quantity": 1,
                        "scanned": 0,
                        "price": null,
                        "scanTimestamp": null,
                        "fulfillmentState": "Pending"
                    }
                ]
            })
        );
    }
}
