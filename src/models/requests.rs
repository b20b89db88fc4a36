//! Request DTOs for the image cache server API
//!
//! Defines the query strings accepted by the image endpoints.

use serde::Deserialize;

use crate::reader::SortKey;

/// Query string for `GET /images`
///
/// `page` is kept as a raw string so that malformed values fall back to the
/// first page instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImagesQuery {
    /// Search category
    pub category: Option<String>,
    /// 1-based client page number
    pub page: Option<String>,
}

impl ImagesQuery {
    /// Returns the requested client page, clamped to at least 1.
    pub fn client_page(&self) -> usize {
        self.page
            .as_deref()
            .and_then(|p| p.trim().parse::<i64>().ok())
            .filter(|p| *p >= 1)
            .map(|p| p as usize)
            .unwrap_or(1)
    }

    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        validate_category(self.category.as_deref())
    }
}

/// Query string for `GET /images/sorted`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SortedImagesQuery {
    /// Search category
    pub category: Option<String>,
    /// Sort key: `id` (default) or `views`
    #[serde(rename = "sortBy")]
    pub sort_by: Option<String>,
}

impl SortedImagesQuery {
    /// Resolves the sort key, defaulting to ascending id.
    pub fn sort_key(&self) -> SortKey {
        self.sort_by
            .as_deref()
            .map(SortKey::from_param)
            .unwrap_or(SortKey::Id)
    }

    /// Validates the request data
    pub fn validate(&self) -> Option<String> {
        validate_category(self.category.as_deref())
    }
}

fn validate_category(category: Option<&str>) -> Option<String> {
    match category {
        None => Some("Query parameter 'category' is required".to_string()),
        Some(c) if c.is_empty() => Some("Category cannot be empty".to_string()),
        Some(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn images_query(page: Option<&str>) -> ImagesQuery {
        ImagesQuery {
            category: Some("cats".to_string()),
            page: page.map(str::to_string),
        }
    }

    #[test]
    fn test_client_page_parsing() {
        assert_eq!(images_query(None).client_page(), 1);
        assert_eq!(images_query(Some("3")).client_page(), 3);
        assert_eq!(images_query(Some("0")).client_page(), 1);
        assert_eq!(images_query(Some("-4")).client_page(), 1);
        assert_eq!(images_query(Some("abc")).client_page(), 1);
    }

    #[test]
    fn test_validate_missing_category() {
        let query = ImagesQuery::default();
        assert!(query.validate().is_some());
    }

    #[test]
    fn test_validate_empty_category() {
        let query = SortedImagesQuery {
            category: Some(String::new()),
            sort_by: None,
        };
        assert!(query.validate().is_some());
    }

    #[test]
    fn test_sort_key_defaults_to_id() {
        let query = SortedImagesQuery {
            category: Some("cats".to_string()),
            sort_by: None,
        };
        assert_eq!(query.sort_key(), SortKey::Id);
    }

    #[test]
    fn test_sorted_query_deserialize() {
        let query: SortedImagesQuery =
            serde_json::from_str(r#"{"category": "dogs", "sortBy": "views"}"#).unwrap();
        assert_eq!(query.category.as_deref(), Some("dogs"));
        assert_eq!(query.sort_key(), SortKey::Views);
    }
}
