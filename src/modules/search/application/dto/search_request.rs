use serde::{Deserialize, Serialize};

/// Request DTO for a cross-catalog search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Search query string
    pub query: String,
    /// Category token; anything outside the recognized set selects no providers
    #[serde(default = "default_category")]
    pub category: String,
}

fn default_category() -> String {
    "all".to_string()
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            category: default_category(),
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_defaults_to_all() {
        assert_eq!(SearchRequest::new("해리포터").category, "all");
    }

    #[test]
    fn category_defaults_to_all_when_absent_from_json() {
        let request: SearchRequest = serde_json::from_str(r#"{"query": "Zelda"}"#).unwrap();
        assert_eq!(request.category, "all");
    }

    #[test]
    fn builder_overrides_category() {
        let request = SearchRequest::new("Zelda").with_category("game");
        assert_eq!(request.category, "game");
    }
}
