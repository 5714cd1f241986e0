use async_graphql::{Context, ErrorExtensions, Object, Result as GqlResult};

use crate::modules::fulfillment::use_cases::record_scan::command::RecordScan;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct RecordScanMutation;

#[Object]
impl RecordScanMutation {
    async fn record_scan(
        &self,
        context: &Context<'_>,
        order_id: String,
        sku: String,
    ) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        let command = RecordScan::new(Some(order_id), Some(sku)).map_err(|e| e.extend())?;
        state
            .record_scan
            .handle(command)
            .await
            .map_err(|e| e.extend())?;
        Ok(true)
    }
}
