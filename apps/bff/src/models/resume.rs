use async_graphql::SimpleObject;
use serde::{Deserialize, Serialize};

/// A skill reference after normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, SimpleObject)]
pub struct SkillItem {
    #[serde(rename = "type")]
    #[graphql(name = "type")]
    pub skill_type: String,
    #[graphql(name = "master_id")]
    pub master_id: i32,
    pub name: String,
    pub level: Option<String>,
    pub years: Option<i32>,
    /// False when `name` is a fallback rather than a master-list hit.
    pub resolved: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, SimpleObject)]
pub struct Skills {
    pub items: Vec<SkillItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, SimpleObject)]
#[graphql(rename_fields = "snake_case")]
pub struct Experience {
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
    pub portfolio_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct Resume {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub description: String,
    pub date: String,
    pub skills: Skills,
    pub experiences: Vec<Experience>,
    pub verified: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl Resume {
    pub fn unresolved_skill_count(&self) -> usize {
        self.skills.items.iter().filter(|s| !s.resolved).count()
    }
}
