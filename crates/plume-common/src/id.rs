use serde::{Deserialize, Serialize};
use std::fmt;

pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Identifier for one open document window ("tab").
///
/// Opaque everywhere: assigned by the window controller when the window is
/// created, echoed back by the core in every notification that concerns
/// that document. Unique for the lifetime of the window.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TabId(String);

impl TabId {
    pub fn new() -> Self {
        Self(new_id())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TabId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TabId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for TabId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_id_is_valid_uuid() {
        let id = new_id();
        let parsed = uuid::Uuid::parse_str(&id);
        assert!(parsed.is_ok());
        assert_eq!(parsed.unwrap().get_version_num(), 4);
    }

    #[test]
    fn tab_id_is_unique_per_window() {
        let a = TabId::new();
        let b = TabId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn tab_id_display_matches_as_str() {
        let tab = TabId::new();
        assert_eq!(tab.to_string(), tab.as_str());
    }

    #[test]
    fn tab_id_from_str() {
        let tab = TabId::from("T1");
        assert_eq!(tab.as_str(), "T1");
    }

    #[test]
    fn tab_id_serializes_as_plain_string() {
        let tab = TabId::from("T1");
        let json = serde_json::to_string(&tab).unwrap();
        assert_eq!(json, "\"T1\"");

        let back: TabId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tab);
    }

    #[test]
    fn tab_id_hash() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        let t1 = TabId::new();
        let t2 = t1.clone();
        set.insert(t1);
        set.insert(t2);
        assert_eq!(set.len(), 1);
    }
}
