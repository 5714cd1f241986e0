use crate::modules::fulfillment::core::errors::{FulfillmentError, required};
use crate::modules::fulfillment::core::events::OrderEvent;
use crate::modules::fulfillment::use_cases::record_transfer::command::RecordTransfer;
use crate::shared::core::primitives::MinuteStamp;

/// Any existing order accepts a transfer; repeating one refreshes its timestamp.
pub fn decide_transfer(
    command: &RecordTransfer,
    recorded_at: MinuteStamp,
) -> Result<OrderEvent, FulfillmentError> {
    Ok(OrderEvent::TransferRecorded {
        transfer_type: required("transferType", command.transfer_type.clone())?,
        recorded_at,
    })
}
