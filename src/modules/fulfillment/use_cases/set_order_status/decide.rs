use crate::modules::fulfillment::core::errors::{FulfillmentError, required};
use crate::modules::fulfillment::core::events::OrderEvent;
use crate::modules::fulfillment::use_cases::set_order_status::command::SetOrderStatus;

/// There is no transition graph: any non-empty label replaces whatever was there.
pub fn decide_status(command: &SetOrderStatus) -> Result<OrderEvent, FulfillmentError> {
    Ok(OrderEvent::StatusChanged {
        status: required("status", command.status.clone())?,
    })
}
