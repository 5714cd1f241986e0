use crate::shared::core::primitives::MinuteStamp;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderEvent {
    ScanRecorded {
        sku: String,
        scanned_at: MinuteStamp,
    },
    TransferRecorded {
        transfer_type: String,
        recorded_at: MinuteStamp,
    },
    StatusChanged {
        status: String,
    },
}
