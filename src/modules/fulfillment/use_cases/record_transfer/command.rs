/// A transfer request as received. The type is checked by the decider, once the order
/// is known to exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordTransfer {
    pub order_id: String,
    pub transfer_type: Option<String>,
}

impl RecordTransfer {
    pub fn new(order_id: impl Into<String>, transfer_type: Option<String>) -> Self {
        Self {
            order_id: order_id.into(),
            transfer_type,
        }
    }
}
