use async_graphql::{Context, ErrorExtensions, Object, Result};

use crate::errors::AppError;
use crate::graphql::types::{Language, Os, Tool};
use crate::models::resume::Resume;
use crate::resumes;
use crate::state::AppState;

/// Root query object for GraphQL
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Operating systems master list
    async fn os_list(&self, ctx: &Context<'_>) -> Result<Vec<Os>> {
        let state = ctx.data::<AppState>()?;
        let list = state
            .backend
            .list_os()
            .await
            .map_err(|e| AppError::from(e).extend())?;
        Ok(list.into_iter().map(Os::from).collect())
    }

    /// Tools master list
    async fn tools_list(&self, ctx: &Context<'_>) -> Result<Vec<Tool>> {
        let state = ctx.data::<AppState>()?;
        let list = state
            .backend
            .list_tools()
            .await
            .map_err(|e| AppError::from(e).extend())?;
        Ok(list.into_iter().map(Tool::from).collect())
    }

    /// Programming languages master list
    async fn languages_list(&self, ctx: &Context<'_>) -> Result<Vec<Language>> {
        let state = ctx.data::<AppState>()?;
        let list = state
            .backend
            .list_languages()
            .await
            .map_err(|e| AppError::from(e).extend())?;
        Ok(list.into_iter().map(Language::from).collect())
    }

    /// All resumes, or those belonging to `userId`
    async fn resumes(&self, ctx: &Context<'_>, user_id: Option<i32>) -> Result<Vec<Resume>> {
        let state = ctx.data::<AppState>()?;
        resumes::list_resumes(state.backend.as_ref(), user_id)
            .await
            .map_err(|e| e.extend())
    }

    /// A single resume; null when it does not exist
    async fn resume(&self, ctx: &Context<'_>, id: i32) -> Result<Option<Resume>> {
        let state = ctx.data::<AppState>()?;
        resumes::get_resume(state.backend.as_ref(), id)
            .await
            .map_err(|e| e.extend())
    }
}
