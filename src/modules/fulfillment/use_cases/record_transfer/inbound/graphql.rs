use async_graphql::{Context, ErrorExtensions, Object, Result as GqlResult};

use crate::modules::fulfillment::use_cases::record_transfer::command::RecordTransfer;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct RecordTransferMutation;

#[Object]
impl RecordTransferMutation {
    async fn record_transfer(
        &self,
        context: &Context<'_>,
        order_id: String,
        transfer_type: String,
    ) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        let command = RecordTransfer::new(order_id, Some(transfer_type));
        state
            .record_transfer
            .handle(command)
            .await
            .map_err(|e| e.extend())?;
        Ok(true)
    }
}
