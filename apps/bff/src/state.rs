use std::sync::Arc;

use crate::backend::BackendApi;

/// Shared state injected into every resolver through the GraphQL context.
/// Holds no request data; master lists are loaded per operation.
#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<dyn BackendApi>,
}
