//! Resume orchestration: load master data, fetch raw records, normalize.
//!
//! Master lists are loaded per call and threaded through explicitly, so
//! concurrent requests never share lookup state.

use serde_json::Value;
use tracing::{info, warn};

use crate::backend::{BackendApi, BackendError};
use crate::errors::AppError;
use crate::graphql::types::ResumeInput;
use crate::masters::load_master_data;
use crate::models::master::MasterData;
use crate::models::resume::Resume;
use crate::normalize::normalize_resume;

/// All resumes, or only `user_id`'s when given. Filtering is the backend's job.
pub async fn list_resumes(
    api: &dyn BackendApi,
    user_id: Option<i32>,
) -> Result<Vec<Resume>, AppError> {
    let masters = load_master_data(api).await?;
    let raw = api.list_resumes(user_id).await?;

    let records = match raw {
        Value::Array(records) => records,
        Value::Null => Vec::new(),
        other => {
            warn!("Expected a resume array from the backend, got {}", kind_of(&other));
            Vec::new()
        }
    };

    Ok(records
        .iter()
        .map(|record| normalize_checked(record, &masters))
        .collect())
}

pub async fn get_resume(api: &dyn BackendApi, id: i32) -> Result<Option<Resume>, AppError> {
    let masters = load_master_data(api).await?;
    let raw = api.get_resume(id).await?;
    Ok(raw.map(|record| {
        let mut resume = normalize_checked(&record, &masters);
        // Some backend DTOs omit `id` on single-record reads.
        if resume.id == 0 {
            resume.id = id;
        }
        resume
    }))
}

/// Creates a resume and returns it in canonical form. When the backend
/// answers without a record (empty body or a bare flag), the submitted
/// payload is normalized instead.
pub async fn create_resume(api: &dyn BackendApi, input: &ResumeInput) -> Result<Resume, AppError> {
    input.validate()?;

    let masters = load_master_data(api).await?;
    let payload = serde_json::to_value(input.to_backend_payload())
        .map_err(BackendError::Parse)?;
    let created = api.create_resume(&payload).await?;

    let record = if created.is_object() { &created } else { &payload };
    let resume = normalize_checked(record, &masters);
    info!("Created resume '{}' (id {})", resume.title, resume.id);
    Ok(resume)
}

fn normalize_checked(record: &Value, masters: &MasterData) -> Resume {
    let resume = normalize_resume(record, masters);
    let unresolved = resume.unresolved_skill_count();
    if unresolved > 0 {
        warn!(
            resume_id = resume.id,
            unresolved, "Resume has skill references missing from master data"
        );
    }
    resume
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
