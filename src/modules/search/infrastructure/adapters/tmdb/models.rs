use serde::{Deserialize, Serialize};

// Response envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TmdbSearchResponse {
    #[serde(default)]
    pub results: Vec<Movie>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    #[serde(default)]
    pub id: Option<u32>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_envelope_field_parses_as_empty_list() {
        let response: TmdbSearchResponse = serde_json::from_str("{}").unwrap();
        assert!(response.results.is_empty());
    }

    #[test]
    fn sparse_items_parse_with_defaults() {
        let response: TmdbSearchResponse =
            serde_json::from_str(r#"{"results": [{"title": "아이언맨"}]}"#).unwrap();
        assert_eq!(response.results.len(), 1);
        assert_eq!(response.results[0].title.as_deref(), Some("아이언맨"));
        assert_eq!(response.results[0].id, None);
        assert_eq!(response.results[0].poster_path, None);
    }
}
