//! Skill normalization. Turns every skills shape the backend has ever
//! produced into a flat list of `SkillItem`s with display names.
//!
//! The raw `skills` field is classified once into a `SkillPayload`; nothing
//! downstream inspects the JSON shape again.

use serde_json::Value;
use tracing::debug;

use crate::models::master::{MasterData, MasterKind};
use crate::models::resume::SkillItem;
use crate::normalize::fields::{as_int, display_value, field, int_field, str_field};

/// The skills shapes seen from the backend, in detection order.
#[derive(Debug, Clone, PartialEq)]
pub enum SkillPayload {
    /// `skills: [{type, master_id, level, years}, ...]`
    BareSkillArray(Vec<Value>),
    /// `skills: {items: [...]}`
    ItemsWrapper(Vec<Value>),
    /// `skills: {os: [...], tools: [...], languages: [...]}`
    FlatIdArrays {
        os: Vec<Value>,
        tools: Vec<Value>,
        languages: Vec<Value>,
    },
    Absent,
}

impl SkillPayload {
    pub fn from_value(raw: Option<&Value>) -> Self {
        match raw {
            Some(Value::Array(entries)) => SkillPayload::BareSkillArray(entries.clone()),
            Some(obj @ Value::Object(_)) => match obj.get("items") {
                Some(Value::Array(items)) => SkillPayload::ItemsWrapper(items.clone()),
                _ => SkillPayload::FlatIdArrays {
                    os: array_or_empty(obj.get("os")),
                    tools: array_or_empty(obj.get("tools")),
                    languages: array_or_empty(obj.get("languages")),
                },
            },
            _ => SkillPayload::Absent,
        }
    }
}

fn array_or_empty(value: Option<&Value>) -> Vec<Value> {
    match value {
        Some(Value::Array(items)) => items.clone(),
        _ => Vec::new(),
    }
}

pub fn normalize_skills(payload: &SkillPayload, masters: &MasterData) -> Vec<SkillItem> {
    match payload {
        SkillPayload::BareSkillArray(entries) | SkillPayload::ItemsWrapper(entries) => entries
            .iter()
            .filter(|entry| entry.is_object())
            .map(|entry| itemized_skill(entry, masters))
            .collect(),
        SkillPayload::FlatIdArrays {
            os,
            tools,
            languages,
        } => [
            (MasterKind::Os, os),
            (MasterKind::Tools, tools),
            (MasterKind::Languages, languages),
        ]
        .into_iter()
        .flat_map(|(kind, values)| values.iter().map(move |v| legacy_skill(kind, v, masters)))
        .collect(),
        SkillPayload::Absent => Vec::new(),
    }
}

/// An entry that already carries its own `type`.
fn itemized_skill(entry: &Value, masters: &MasterData) -> SkillItem {
    let raw_type = str_field(entry, &["type", "Type"]).unwrap_or_default();
    let kind = MasterKind::parse(&raw_type);
    let master_id = int_field(entry, &["master_id", "masterId", "MasterID", "id"]).unwrap_or(0);

    let resolved_name = kind.and_then(|k| masters.lookup(k, master_id));
    if resolved_name.is_none() {
        debug!(skill_type = %raw_type, master_id, "unresolved skill reference");
    }

    SkillItem {
        skill_type: kind.map(|k| k.as_str().to_string()).unwrap_or(raw_type),
        master_id,
        name: resolved_name
            .map(str::to_string)
            .unwrap_or_else(|| master_id.to_string()),
        level: str_field(entry, &["level", "Level"]).filter(|l| !l.is_empty()),
        years: int_field(entry, &["years", "Years"]),
        resolved: resolved_name.is_some(),
    }
}

/// An element of one of the legacy `os` / `tools` / `languages` arrays:
/// a bare id, a bare name, or a small `{id, name}` object.
fn legacy_skill(kind: MasterKind, value: &Value, masters: &MasterData) -> SkillItem {
    let (master_id, own_name) = match value {
        Value::Object(_) => (
            int_field(value, &["master_id", "id"]),
            str_field(value, &["name", "label"]),
        ),
        other => (as_int(other), None),
    };
    let master_id = master_id.unwrap_or(0);

    let resolved_name = masters.lookup(kind, master_id);
    if resolved_name.is_none() {
        debug!(skill_type = kind.as_str(), master_id, "unresolved legacy skill reference");
    }

    let name = match resolved_name {
        Some(name) => name.to_string(),
        None => own_name.unwrap_or_else(|| match value {
            Value::Object(_) => field(value, &["master_id", "id"])
                .map(display_value)
                .unwrap_or_else(|| master_id.to_string()),
            other => display_value(other),
        }),
    };

    SkillItem {
        skill_type: kind.as_str().to_string(),
        master_id,
        name,
        level: str_field(value, &["level"]).filter(|l| !l.is_empty()),
        years: int_field(value, &["years"]),
        resolved: resolved_name.is_some(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::master::MasterEntry;
    use serde_json::json;

    fn masters() -> MasterData {
        MasterData {
            os: vec![MasterEntry::new(1, "Linux"), MasterEntry::new(2, "Windows")],
            tools: vec![MasterEntry::new(10, "Docker")],
            languages: vec![MasterEntry::new(20, "Rust"), MasterEntry::new(21, "Go")],
        }
    }

    fn normalize(raw: Value) -> Vec<SkillItem> {
        normalize_skills(&SkillPayload::from_value(raw.get("skills")), &masters())
    }

    #[test]
    fn test_shape_detection() {
        assert!(matches!(
            SkillPayload::from_value(Some(&json!([]))),
            SkillPayload::BareSkillArray(_)
        ));
        assert!(matches!(
            SkillPayload::from_value(Some(&json!({"items": []}))),
            SkillPayload::ItemsWrapper(_)
        ));
        assert!(matches!(
            SkillPayload::from_value(Some(&json!({"os": [1]}))),
            SkillPayload::FlatIdArrays { .. }
        ));
        assert_eq!(SkillPayload::from_value(None), SkillPayload::Absent);
        assert_eq!(SkillPayload::from_value(Some(&Value::Null)), SkillPayload::Absent);
        assert_eq!(SkillPayload::from_value(Some(&json!("os"))), SkillPayload::Absent);
    }

    #[test]
    fn test_known_id_resolves_to_master_name() {
        let items = normalize(json!({"skills": [{"type": "os", "master_id": 1}]}));
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].skill_type, "os");
        assert_eq!(items[0].master_id, 1);
        assert_eq!(items[0].name, "Linux");
        assert!(items[0].resolved);
    }

    #[test]
    fn test_unknown_id_falls_back_to_id_string() {
        let items = normalize(json!({"skills": [{"type": "os", "master_id": 99}]}));
        assert_eq!(items[0].name, "99");
        assert!(!items[0].resolved);
    }

    #[test]
    fn test_singular_types_are_aliased() {
        let items = normalize(json!({"skills": [
            {"type": "tool", "master_id": 10, "level": "advanced", "years": 3},
            {"type": "language", "master_id": 21}
        ]}));
        assert_eq!(items[0].skill_type, "tools");
        assert_eq!(items[0].name, "Docker");
        assert_eq!(items[0].level.as_deref(), Some("advanced"));
        assert_eq!(items[0].years, Some(3));
        assert_eq!(items[1].skill_type, "languages");
        assert_eq!(items[1].name, "Go");
    }

    #[test]
    fn test_items_wrapper_uses_master_names() {
        let items = normalize(json!({"skills": {"items": [
            {"type": "languages", "master_id": 20, "name": "stale"}
        ]}}));
        assert_eq!(items[0].name, "Rust");
        assert_eq!(items[0].skill_type, "languages");
    }

    #[test]
    fn test_unknown_type_is_kept_and_falls_back() {
        let items = normalize(json!({"skills": [{"type": "framework", "master_id": 1}]}));
        assert_eq!(items[0].skill_type, "framework");
        assert_eq!(items[0].name, "1");
    }

    #[test]
    fn test_item_without_id_gets_defaults() {
        let items = normalize(json!({"skills": [{"type": "os"}]}));
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].master_id, 0);
        assert_eq!(items[0].name, "0");
        assert_eq!(items[0].skill_type, "os");
    }

    #[test]
    fn test_non_object_items_are_skipped() {
        let items = normalize(json!({"skills": [{"type": "os", "master_id": 1}, "garbage", 7, null]}));
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Linux");

        let wrapped = normalize(json!({"skills": {"items": ["garbage", {"type": "tool", "master_id": 10}]}}));
        assert_eq!(wrapped.len(), 1);
        assert_eq!(wrapped[0].skill_type, "tools");
        assert!(wrapped.iter().all(|item| !item.skill_type.is_empty()));
    }

    #[test]
    fn test_flat_id_arrays() {
        let items = normalize(json!({"skills": {
            "os": [2, 404],
            "tools": [{"id": 10}],
            "languages": [{"master_id": 77, "label": "Zig"}]
        }}));
        let summary: Vec<(&str, i32, &str)> = items
            .iter()
            .map(|i| (i.skill_type.as_str(), i.master_id, i.name.as_str()))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("os", 2, "Windows"),
                ("os", 404, "404"),
                ("tools", 10, "Docker"),
                ("languages", 77, "Zig"),
            ]
        );
    }

    #[test]
    fn test_flat_arrays_with_plain_names() {
        let items = normalize(json!({"skills": {"os": ["BSD"], "tools": "not-a-list"}}));
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].master_id, 0);
        assert_eq!(items[0].name, "BSD");
    }

    #[test]
    fn test_missing_skills_is_empty() {
        assert!(normalize(json!({"title": "no skills"})).is_empty());
    }

    #[test]
    fn test_every_shape_yields_well_formed_items() {
        let shapes = [
            json!({"skills": [{"type": "os", "master_id": 1}, {"type": "tool", "master_id": 5}]}),
            json!({"skills": {"items": [{"type": "os", "master_id": 1}, {"type": "tools", "master_id": 5}]}}),
            json!({"skills": {"os": [1], "tools": [5]}}),
        ];
        for shape in shapes {
            let items = normalize(shape);
            assert_eq!(items.len(), 2);
            for item in &items {
                assert!(!item.skill_type.is_empty());
                let expected = masters()
                    .lookup(MasterKind::parse(&item.skill_type).unwrap(), item.master_id)
                    .map(str::to_string)
                    .unwrap_or_else(|| item.master_id.to_string());
                assert_eq!(item.name, expected);
            }
        }
    }
}
