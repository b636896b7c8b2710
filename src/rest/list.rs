//! Decoding of collection listings.
//!
//! `GET {base}/{endpoint}` answers with
//! `{"children": [{"name": "...", "href": "..."}, ...]}`.

use serde::Deserialize;

use crate::rest::json;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ResourceList {
    #[serde(default)]
    children: Vec<ResourceListEntry>,
}

#[derive(Debug, Deserialize)]
struct ResourceListEntry {
    name: String,
}

impl ResourceList {
    pub(crate) fn decode(data: &[u8]) -> Result<Self, serde_json::Error> {
        json::from_slice(data)
    }

    /// Names in the order the appliance returned them.
    pub(crate) fn names(self) -> Vec<String> {
        self.children.into_iter().map(|child| child.name).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_keep_service_order() {
        let body = br#"{"children": [
            {"name": "a", "href": "/api/tm/3.5/config/active/pools/a"},
            {"name": "c", "href": "/api/tm/3.5/config/active/pools/c"},
            {"name": "b", "href": "/api/tm/3.5/config/active/pools/b"}
        ]}"#;

        let names = ResourceList::decode(body).unwrap().names();
        assert_eq!(names, vec!["a", "c", "b"]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let body = br#"{"children": [{"name": "a"}, {"name": "a"}]}"#;
        assert_eq!(ResourceList::decode(body).unwrap().names(), vec!["a", "a"]);
    }

    #[test]
    fn test_missing_children_is_empty() {
        assert!(ResourceList::decode(b"{}").unwrap().names().is_empty());
    }

    #[test]
    fn test_malformed_listing_is_an_error() {
        assert!(ResourceList::decode(b"[\"a\"]").is_err());
        assert!(ResourceList::decode(b"").is_err());
    }
}
