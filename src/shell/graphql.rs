use async_graphql::{EmptySubscription, ErrorExtensions, MergedObject, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, Router, routing::get};

use crate::modules::fulfillment::core::errors::{ErrorKind, FulfillmentError};
use crate::modules::fulfillment::use_cases::get_order::inbound::graphql::GetOrderQuery;
use crate::modules::fulfillment::use_cases::list_line_items::inbound::graphql::ListLineItemsQuery;
use crate::modules::fulfillment::use_cases::record_scan::inbound::graphql::RecordScanMutation;
use crate::modules::fulfillment::use_cases::record_transfer::inbound::graphql::RecordTransferMutation;
use crate::modules::fulfillment::use_cases::set_order_status::inbound::graphql::SetOrderStatusMutation;
use crate::shell::state::AppState;

pub const ENDPOINT: &str = "/gql";

#[derive(MergedObject, Default)]
pub struct QueryRoot(GetOrderQuery, ListLineItemsQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(
    RecordScanMutation,
    RecordTransferMutation,
    SetOrderStatusMutation,
);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

impl ErrorExtensions for FulfillmentError {
    fn extend(&self) -> async_graphql::Error {
        let code = match self.kind() {
            ErrorKind::NotFound => "NOT_FOUND",
            ErrorKind::InvalidInput => "INVALID_INPUT",
        };
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| e.set("code", code))
    }
}

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        EmptySubscription,
    )
    .data(state)
    .finish()
}

pub fn router(schema: AppSchema) -> Router {
    Router::new()
        .route(ENDPOINT, get(graphiql).post(graphql))
        .layer(Extension(schema))
}

async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> axum::response::Html<String> {
    use async_graphql::http::GraphiQLSource;
    axum::response::Html(GraphiQLSource::build().endpoint(ENDPOINT).finish())
}
