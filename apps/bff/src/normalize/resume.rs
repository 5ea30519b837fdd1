use serde_json::Value;

use crate::models::master::MasterData;
use crate::models::resume::{Experience, Resume, Skills};
use crate::normalize::fields::{bool_field, int_field, str_field};
use crate::normalize::skills::{normalize_skills, SkillPayload};

/// Builds the canonical `Resume` from a backend record of unknown vintage.
/// Missing or mistyped fields fall back to defaults; this never fails.
pub fn normalize_resume(raw: &Value, masters: &MasterData) -> Resume {
    let text = |keys: &[&str]| str_field(raw, keys).unwrap_or_default();

    let payload = SkillPayload::from_value(raw.get("skills").or_else(|| raw.get("Skills")));

    Resume {
        id: int_field(raw, &["id", "ID"]).unwrap_or(0),
        user_id: int_field(raw, &["user_id", "userId", "UserID"]).unwrap_or(0),
        title: text(&["title", "Title"]),
        description: text(&["description", "summary", "Summary"]),
        date: text(&["date"]),
        skills: Skills {
            items: normalize_skills(&payload, masters),
        },
        experiences: normalize_experiences(raw.get("experiences").or_else(|| raw.get("Experiences"))),
        verified: bool_field(raw, &["verified", "Verified"]).unwrap_or(false),
        created_at: text(&["created_at", "createdAt", "CreatedAt"]),
        updated_at: text(&["updated_at", "updatedAt", "UpdatedAt"]),
    }
}

fn normalize_experiences(raw: Option<&Value>) -> Vec<Experience> {
    let Some(Value::Array(entries)) = raw else {
        return Vec::new();
    };

    entries
        .iter()
        .filter(|e| e.is_object())
        .map(|e| {
            let text = |keys: &[&str]| str_field(e, keys).unwrap_or_default();
            Experience {
                company: text(&["company", "Company"]),
                position: text(&["position", "Position"]),
                start_date: text(&["start_date", "startDate", "StartDate"]),
                end_date: text(&["end_date", "endDate", "EndDate"]),
                description: text(&["description", "Description"]),
                portfolio_url: text(&["portfolio_url", "portfolioUrl", "PortfolioURL"]),
            }
        })
        .collect()
}
