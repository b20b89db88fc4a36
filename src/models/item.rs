//! Image item as returned by the provider.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One image search result.
///
/// Only `id` and `views` are interpreted by the cache. Every other provider
/// field (`pageURL`, `tags`, `previewURL`, `user`, ...) is carried through
/// untouched so clients receive the provider's record as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Stable provider identifier
    pub id: u64,
    /// Popularity metric used for sorted views
    #[serde(default)]
    pub views: u64,
    /// Opaque display fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Item {
    /// Creates an item with no display fields.
    pub fn new(id: u64, views: u64) -> Self {
        Self {
            id,
            views,
            extra: Map::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_keeps_opaque_fields() {
        let json = r#"{"id": 7, "views": 42, "tags": "cat, kitten", "pageURL": "https://example.com/7"}"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, 7);
        assert_eq!(item.views, 42);
        assert_eq!(item.extra["tags"], "cat, kitten");

        let out = serde_json::to_value(&item).unwrap();
        assert_eq!(out["pageURL"], "https://example.com/7");
        assert_eq!(out["id"], 7);
    }

    #[test]
    fn test_item_missing_views_defaults_to_zero() {
        let item: Item = serde_json::from_str(r#"{"id": 1}"#).unwrap();
        assert_eq!(item.views, 0);
        assert!(item.extra.is_empty());
    }
}
