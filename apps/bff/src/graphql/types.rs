use async_graphql::{InputObject, SimpleObject};
use serde::Serialize;

use crate::errors::AppError;
use crate::models::master::{MasterEntry, MasterKind};

#[derive(Debug, Clone, SimpleObject)]
#[graphql(name = "OS")]
pub struct Os {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, SimpleObject)]
pub struct Tool {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, SimpleObject)]
pub struct Language {
    pub id: i32,
    pub name: String,
}

impl From<MasterEntry> for Os {
    fn from(entry: MasterEntry) -> Self {
        Self {
            id: entry.id,
            name: entry.name,
        }
    }
}

impl From<MasterEntry> for Tool {
    fn from(entry: MasterEntry) -> Self {
        Self {
            id: entry.id,
            name: entry.name,
        }
    }
}

impl From<MasterEntry> for Language {
    fn from(entry: MasterEntry) -> Self {
        Self {
            id: entry.id,
            name: entry.name,
        }
    }
}

#[derive(Debug, Clone, InputObject)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, InputObject)]
pub struct RegisterInput {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, InputObject)]
pub struct SkillItemInput {
    #[graphql(name = "type")]
    pub skill_type: String,
    #[graphql(name = "master_id")]
    pub master_id: i32,
    #[graphql(default)]
    pub name: String,
    pub level: Option<String>,
    pub years: Option<i32>,
}

#[derive(Debug, Clone, InputObject)]
pub struct SkillsInput {
    pub items: Vec<SkillItemInput>,
}

#[derive(Debug, Clone, InputObject)]
#[graphql(rename_fields = "snake_case")]
pub struct ExperienceInput {
    pub company: String,
    #[graphql(default)]
    pub position: String,
    pub start_date: String,
    #[graphql(default)]
    pub end_date: String,
    #[graphql(default)]
    pub description: String,
    #[graphql(default)]
    pub portfolio_url: String,
}

#[derive(Debug, Clone, InputObject)]
pub struct ResumeInput {
    pub user_id: Option<i32>,
    pub title: String,
    pub description: String,
    pub date: String,
    pub skills: SkillsInput,
    #[graphql(default)]
    pub experiences: Vec<ExperienceInput>,
}

/// Body of `POST /resume`.
#[derive(Debug, Serialize)]
pub struct BackendResumePayload<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i32>,
    pub title: &'a str,
    pub summary: &'a str,
    pub description: &'a str,
    pub date: &'a str,
    pub skills: Vec<BackendSkill<'a>>,
    pub experiences: Vec<BackendExperience<'a>>,
}

#[derive(Debug, Serialize)]
pub struct BackendSkill<'a> {
    #[serde(rename = "type")]
    pub skill_type: &'a str,
    pub master_id: i32,
    pub name: &'a str,
    pub level: &'a str,
    pub years: i32,
}

#[derive(Debug, Serialize)]
pub struct BackendExperience<'a> {
    pub company: &'a str,
    pub position: &'a str,
    pub start_date: &'a str,
    pub end_date: &'a str,
    pub description: &'a str,
    pub portfolio_url: &'a str,
}

impl ResumeInput {
    /// Mirrors the backend's own rules so bad input never leaves the BFF.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.title.trim().is_empty() {
            return Err(AppError::Validation("title is required".to_string()));
        }
        for (i, exp) in self.experiences.iter().enumerate() {
            if exp.company.trim().is_empty() || exp.start_date.trim().is_empty() {
                return Err(AppError::Validation(format!(
                    "experiences[{i}]: company and start_date are required"
                )));
            }
        }
        Ok(())
    }

    /// The input as the backend expects it: `summary` alongside
    /// `description`, and skill types in the backend's singular spelling.
    pub fn to_backend_payload(&self) -> BackendResumePayload<'_> {
        BackendResumePayload {
            user_id: self.user_id,
            title: &self.title,
            summary: &self.description,
            description: &self.description,
            date: &self.date,
            skills: self
                .skills
                .items
                .iter()
                .map(|s| BackendSkill {
                    skill_type: MasterKind::parse(&s.skill_type)
                        .map(|k| k.backend_tag())
                        .unwrap_or(s.skill_type.as_str()),
                    master_id: s.master_id,
                    name: &s.name,
                    level: s.level.as_deref().unwrap_or_default(),
                    years: s.years.unwrap_or_default(),
                })
                .collect(),
            experiences: self
                .experiences
                .iter()
                .map(|e| BackendExperience {
                    company: &e.company,
                    position: &e.position,
                    start_date: &e.start_date,
                    end_date: &e.end_date,
                    description: &e.description,
                    portfolio_url: &e.portfolio_url,
                })
                .collect(),
        }
    }
}
