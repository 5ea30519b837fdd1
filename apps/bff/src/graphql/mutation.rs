use async_graphql::{Context, ErrorExtensions, Object, Result};

use crate::auth;
use crate::graphql::types::{LoginInput, RegisterInput, ResumeInput};
use crate::models::resume::Resume;
use crate::models::user::{LoginResponse, RegisterResponse};
use crate::resumes;
use crate::state::AppState;

/// Root mutation object for GraphQL
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn login(&self, ctx: &Context<'_>, input: LoginInput) -> Result<LoginResponse> {
        let state = ctx.data::<AppState>()?;
        auth::login(state.backend.as_ref(), &input)
            .await
            .map_err(|e| e.extend())
    }

    async fn register(&self, ctx: &Context<'_>, input: RegisterInput) -> Result<RegisterResponse> {
        let state = ctx.data::<AppState>()?;
        auth::register(state.backend.as_ref(), &input)
            .await
            .map_err(|e| e.extend())
    }

    /// Creates a resume and returns it as stored
    async fn create_resume(&self, ctx: &Context<'_>, input: ResumeInput) -> Result<Resume> {
        let state = ctx.data::<AppState>()?;
        resumes::create_resume(state.backend.as_ref(), &input)
            .await
            .map_err(|e| e.extend())
    }
}
