//! In-memory `BackendApi` used by tests.

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::backend::{BackendApi, BackendError};
use crate::models::master::{MasterData, MasterEntry};

#[derive(Default)]
pub struct FakeBackend {
    pub masters: MasterData,
    pub resumes: Vec<Value>,
    pub auth_response: Value,
    pub create_response: Option<Value>,
    /// Returned by `get_resume` for every id, bypassing the `id` match.
    pub single_resume: Option<Value>,
    failing: Vec<&'static str>,
    calls: Mutex<Vec<String>>,
    last_body: Mutex<Option<Value>>,
}

impl FakeBackend {
    pub fn with_default_masters() -> Self {
        Self {
            masters: MasterData {
                os: vec![MasterEntry::new(1, "Linux"), MasterEntry::new(2, "Windows")],
                tools: vec![MasterEntry::new(10, "Docker")],
                languages: vec![MasterEntry::new(20, "Rust"), MasterEntry::new(21, "Go")],
            },
            ..Self::default()
        }
    }

    pub fn with_resumes(mut self, resumes: Vec<Value>) -> Self {
        self.resumes = resumes;
        self
    }

    pub fn with_auth_response(mut self, response: Value) -> Self {
        self.auth_response = response;
        self
    }

    /// Makes the endpoint at `path` answer 500.
    pub fn failing(mut self, path: &'static str) -> Self {
        self.failing.push(path);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last_body(&self) -> Option<Value> {
        self.last_body.lock().unwrap().clone()
    }

    fn hit(&self, path: &str) -> Result<(), BackendError> {
        self.calls.lock().unwrap().push(path.to_string());
        match self.failing.iter().find(|p| **p == path) {
            Some(p) => Err(BackendError::Api {
                status: 500,
                message: format!("{} unavailable", p.trim_start_matches('/')),
            }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl BackendApi for FakeBackend {
    async fn list_os(&self) -> Result<Vec<MasterEntry>, BackendError> {
        self.hit("/os")?;
        Ok(self.masters.os.clone())
    }

    async fn list_tools(&self) -> Result<Vec<MasterEntry>, BackendError> {
        self.hit("/tools")?;
        Ok(self.masters.tools.clone())
    }

    async fn list_languages(&self) -> Result<Vec<MasterEntry>, BackendError> {
        self.hit("/languages")?;
        Ok(self.masters.languages.clone())
    }

    async fn login(&self, email: &str, password: &str) -> Result<Value, BackendError> {
        self.hit("/login")?;
        *self.last_body.lock().unwrap() = Some(json!({ "email": email, "password": password }));
        Ok(self.auth_response.clone())
    }

    async fn signup(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<Value, BackendError> {
        self.hit("/signup")?;
        *self.last_body.lock().unwrap() =
            Some(json!({ "username": username, "email": email, "password": password }));
        Ok(self.auth_response.clone())
    }

    async fn list_resumes(&self, user_id: Option<i32>) -> Result<Value, BackendError> {
        match user_id {
            Some(id) => {
                self.hit(&format!("/resume/user/{id}"))?;
                let owned: Vec<Value> = self
                    .resumes
                    .iter()
                    .filter(|r| r.get("user_id").and_then(Value::as_i64) == Some(id as i64))
                    .cloned()
                    .collect();
                Ok(Value::Array(owned))
            }
            None => {
                self.hit("/resume")?;
                Ok(Value::Array(self.resumes.clone()))
            }
        }
    }

    async fn get_resume(&self, id: i32) -> Result<Option<Value>, BackendError> {
        self.hit(&format!("/resume/{id}"))?;
        if let Some(record) = &self.single_resume {
            return Ok(Some(record.clone()));
        }
        Ok(self
            .resumes
            .iter()
            .find(|r| r.get("id").and_then(Value::as_i64) == Some(id as i64))
            .cloned())
    }

    async fn create_resume(&self, body: &Value) -> Result<Value, BackendError> {
        self.hit("/resume")?;
        *self.last_body.lock().unwrap() = Some(body.clone());
        Ok(self.create_response.clone().unwrap_or_else(|| body.clone()))
    }
}
