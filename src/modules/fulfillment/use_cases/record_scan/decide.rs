use crate::modules::fulfillment::core::errors::FulfillmentError;
use crate::modules::fulfillment::core::events::OrderEvent;
use crate::modules::fulfillment::core::order::Order;
use crate::modules::fulfillment::use_cases::record_scan::command::RecordScan;
use crate::shared::core::primitives::MinuteStamp;

/// A scan is accepted for any SKU of the order, however many times it was already scanned.
pub fn decide_scan(
    order: &Order,
    command: &RecordScan,
    scanned_at: MinuteStamp,
) -> Result<OrderEvent, FulfillmentError> {
    if order.line_item(&command.sku).is_none() {
        return Err(FulfillmentError::SkuNotFound {
            order_id: order.id.clone(),
            sku: command.sku.clone(),
        });
    }
    Ok(OrderEvent::ScanRecorded {
        sku: command.sku.clone(),
        scanned_at,
    })
}
