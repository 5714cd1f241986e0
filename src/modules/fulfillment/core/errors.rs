use thiserror::Error;

/// The two ways a fulfillment request can be rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    InvalidInput,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FulfillmentError {
    #[error("order {0} not found")]
    OrderNotFound(String),

    #[error("sku {sku} not found in order {order_id}")]
    SkuNotFound { order_id: String, sku: String },

    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("order {0} already exists")]
    DuplicateOrder(String),

    #[error("order {order_id} lists sku {sku} more than once")]
    DuplicateSku { order_id: String, sku: String },

    #[error("line item {sku} in order {order_id} must have a positive quantity")]
    ZeroQuantity { order_id: String, sku: String },
}

impl FulfillmentError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::OrderNotFound(_) | Self::SkuNotFound { .. } => ErrorKind::NotFound,
            Self::MissingField(_)
            | Self::DuplicateOrder(_)
            | Self::DuplicateSku { .. }
            | Self::ZeroQuantity { .. } => ErrorKind::InvalidInput,
        }
    }
}

/// Unwraps a required request field, treating absent and empty the same way.
pub fn required(field: &'static str, value: Option<String>) -> Result<String, FulfillmentError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(FulfillmentError::MissingField(field)),
    }
}
