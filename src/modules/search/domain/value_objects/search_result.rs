use serde::{Deserialize, Serialize};

use super::media_category::MediaCategory;

/// Canonical search result every adapter maps its provider payload into.
///
/// Constructed per request and held only for the duration of the response;
/// nothing in this module persists it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    /// Display title; empty string when the upstream field is absent, never null
    pub title: String,
    /// Absolute artwork URL; `None` when the provider has no image
    pub image_url: Option<String>,
    /// Provider-native date string, treated as display text, not a parsed date
    pub release_date: Option<String>,
    /// Assigned by the adapter or overwritten by the router, never taken from
    /// the provider's own taxonomy
    pub category: MediaCategory,
    /// Provider-scoped identifier, unique only within its provider+category
    pub external_id: String,
    /// Creator name for books, release year for games, release date for movies
    pub author: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case_field_names() {
        let result = SearchResult {
            title: "아이언맨".to_string(),
            image_url: Some("https://image.tmdb.org/t/p/w200/iron.jpg".to_string()),
            release_date: Some("2008-04-30".to_string()),
            category: MediaCategory::Movie,
            external_id: "1726".to_string(),
            author: Some("2008-04-30".to_string()),
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["title"], "아이언맨");
        assert_eq!(json["imageUrl"], "https://image.tmdb.org/t/p/w200/iron.jpg");
        assert_eq!(json["releaseDate"], "2008-04-30");
        assert_eq!(json["category"], "movie");
        assert_eq!(json["externalId"], "1726");
    }

    #[test]
    fn absent_image_serializes_as_null_not_empty_string() {
        let result = SearchResult {
            title: "No Artwork".to_string(),
            image_url: None,
            release_date: None,
            category: MediaCategory::Book,
            external_id: "isbn-1".to_string(),
            author: None,
        };

        let json = serde_json::to_value(&result).unwrap();
        assert!(json["imageUrl"].is_null());
    }
}
