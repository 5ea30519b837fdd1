use async_graphql::{EmptySubscription, Schema};

use crate::graphql::mutation::MutationRoot;
use crate::graphql::query::QueryRoot;
use crate::state::AppState;

/// The complete GraphQL schema
pub type BffSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn create_schema(state: AppState) -> BffSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(state)
        .finish()
}
