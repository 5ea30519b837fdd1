use serde::{Deserialize, Serialize};

/// One row of an OS / tool / language master list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MasterEntry {
    #[serde(alias = "ID", alias = "Id")]
    pub id: i32,
    #[serde(alias = "Name", default)]
    pub name: String,
}

#[cfg(test)]
impl MasterEntry {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Which master list a skill reference points into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MasterKind {
    Os,
    Tools,
    Languages,
}

impl MasterKind {
    /// Maps the skill `type` spellings seen across backend versions onto a kind.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "os" => Some(MasterKind::Os),
            "tool" | "tools" => Some(MasterKind::Tools),
            "language" | "languages" => Some(MasterKind::Languages),
            _ => None,
        }
    }

    /// Canonical GraphQL-side spelling, also the legacy field name.
    pub fn as_str(&self) -> &'static str {
        match self {
            MasterKind::Os => "os",
            MasterKind::Tools => "tools",
            MasterKind::Languages => "languages",
        }
    }

    /// The singular tag the backend stores in its skills table.
    pub fn backend_tag(&self) -> &'static str {
        match self {
            MasterKind::Os => "os",
            MasterKind::Tools => "tool",
            MasterKind::Languages => "language",
        }
    }
}

/// The three master lists loaded for a single request.
#[derive(Debug, Clone, Default)]
pub struct MasterData {
    pub os: Vec<MasterEntry>,
    pub tools: Vec<MasterEntry>,
    pub languages: Vec<MasterEntry>,
}

impl MasterData {
    pub fn list(&self, kind: MasterKind) -> &[MasterEntry] {
        match kind {
            MasterKind::Os => &self.os,
            MasterKind::Tools => &self.tools,
            MasterKind::Languages => &self.languages,
        }
    }

    pub fn lookup(&self, kind: MasterKind, id: i32) -> Option<&str> {
        self.list(kind)
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| entry.name.as_str())
    }
}
