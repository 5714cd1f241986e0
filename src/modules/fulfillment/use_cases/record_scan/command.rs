use crate::modules::fulfillment::core::errors::{FulfillmentError, required};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordScan {
    pub order_id: String,
    pub sku: String,
}

impl RecordScan {
    pub fn new(order_id: Option<String>, sku: Option<String>) -> Result<Self, FulfillmentError> {
        Ok(Self {
            order_id: required("orderId", order_id)?,
            sku: required("sku", sku)?,
        })
    }
}
