/// A status change as received. The status is checked by the decider, once the order
/// is known to exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetOrderStatus {
    pub order_id: String,
    pub status: Option<String>,
}

impl SetOrderStatus {
    pub fn new(order_id: impl Into<String>, status: Option<String>) -> Self {
        Self {
            order_id: order_id.into(),
            status,
        }
    }
}
