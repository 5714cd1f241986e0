use crate::modules::fulfillment::core::events::OrderEvent;
use crate::modules::fulfillment::core::order::{Order, Transfer};

/// Applies an already-decided event. Events are only produced by the deciders after
/// their preconditions hold, so an unknown SKU here leaves the order as it was.
pub fn evolve(mut order: Order, event: &OrderEvent) -> Order {
    match event {
        OrderEvent::ScanRecorded { sku, scanned_at } => {
            if let Some(item) = order.line_item_mut(sku) {
                item.scanned += 1;
                item.last_scanned_at = Some(*scanned_at);
            }
        }
        OrderEvent::TransferRecorded {
            transfer_type,
            recorded_at,
        } => {
            order.transfer = Some(Transfer {
                transfer_type: transfer_type.clone(),
                recorded_at: *recorded_at,
            });
        }
        OrderEvent::StatusChanged { status } => {
            order.status = status.clone();
        }
    }
    order
}
