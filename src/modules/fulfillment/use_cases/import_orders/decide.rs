// Pure validation for imported orders.
//
// Responsibilities
// - Turn raw import rows into orders, rejecting the batch on the first problem.
// - Enforce per-order rules: a non-empty id, then unique non-empty SKUs, titles and
//   positive quantities on every line item.
// - Uniqueness of order ids against the store is checked by the store itself.

use std::collections::HashSet;

use crate::modules::fulfillment::core::errors::{FulfillmentError, required};
use crate::modules::fulfillment::core::order::{DEFAULT_ORDER_STATUS, LineItem, Order};
use crate::modules::fulfillment::use_cases::import_orders::command::{
    ImportLineItem, ImportOrder,
};

pub fn decide_import(batch: Vec<ImportOrder>) -> Result<Vec<Order>, FulfillmentError> {
    batch.into_iter().map(decide_order).collect()
}

fn decide_order(raw: ImportOrder) -> Result<Order, FulfillmentError> {
    let id = required("id", raw.id)?;
    let status = raw
        .status
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_ORDER_STATUS.to_string());

    let mut seen = HashSet::new();
    let mut line_items = Vec::with_capacity(raw.line_items.len());
    for item in raw.line_items {
        let item = decide_line_item(&id, item)?;
        if !seen.insert(item.sku.clone()) {
            return Err(FulfillmentError::DuplicateSku {
                order_id: id,
                sku: item.sku,
            });
        }
        line_items.push(item);
    }

    Ok(Order {
        id,
        status,
        transfer: None,
        line_items,
    })
}

fn decide_line_item(order_id: &str, raw: ImportLineItem) -> Result<LineItem, FulfillmentError> {
    let sku = required("sku", raw.sku)?;
    let title = required("title", raw.title)?;
    let quantity = match raw.quantity {
        None => return Err(FulfillmentError::MissingField("quantity")),
        Some(0) => {
            return Err(FulfillmentError::ZeroQuantity {
                order_id: order_id.to_string(),
                sku,
            });
        }
        Some(q) => q,
    };
    Ok(LineItem::new(sku, title, raw.color, quantity, raw.price))
}
