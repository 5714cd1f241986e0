use std::sync::Arc;

use crate::modules::fulfillment::core::ports::FulfillmentStore;
use crate::modules::fulfillment::use_cases::get_order::queries_port::OrderQueries;
use crate::modules::fulfillment::use_cases::import_orders::handler::ImportOrdersHandler;
use crate::modules::fulfillment::use_cases::list_line_items::queries_port::LineItemQueries;
use crate::modules::fulfillment::use_cases::record_scan::handler::RecordScanHandler;
use crate::modules::fulfillment::use_cases::record_transfer::handler::RecordTransferHandler;
use crate::modules::fulfillment::use_cases::set_order_status::handler::SetOrderStatusHandler;
use crate::shared::core::clock::Clock;

pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Clone)]
pub struct AppState {
    pub orders: Arc<dyn OrderQueries>,
    pub line_items: Arc<dyn LineItemQueries>,
    pub record_scan: Arc<RecordScanHandler>,
    pub record_transfer: Arc<RecordTransferHandler>,
    pub set_order_status: Arc<SetOrderStatusHandler>,
    pub import_orders: Arc<ImportOrdersHandler>,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    /// Wires every handler and query around the one store instance.
    pub fn new<S>(store: Arc<S>, clock: Arc<dyn Clock>) -> Self
    where
        S: FulfillmentStore + OrderQueries + LineItemQueries + 'static,
    {
        Self {
            orders: store.clone(),
            line_items: store.clone(),
            record_scan: Arc::new(RecordScanHandler::new(store.clone(), clock.clone())),
            record_transfer: Arc::new(RecordTransferHandler::new(store.clone(), clock.clone())),
            set_order_status: Arc::new(SetOrderStatusHandler::new(store.clone())),
            import_orders: Arc::new(ImportOrdersHandler::new(store)),
            clock,
        }
    }
}
