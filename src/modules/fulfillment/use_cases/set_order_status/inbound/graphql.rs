use async_graphql::{Context, ErrorExtensions, Object, Result as GqlResult};

use crate::modules::fulfillment::use_cases::set_order_status::command::SetOrderStatus;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct SetOrderStatusMutation;

#[Object]
impl SetOrderStatusMutation {
    async fn set_order_status(
        &self,
        context: &Context<'_>,
        order_id: String,
        status: String,
    ) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        let command = SetOrderStatus::new(order_id, Some(status));
        state
            .set_order_status
            .handle(command)
            .await
            .map_err(|e| e.extend())?;
        Ok(true)
    }
}
