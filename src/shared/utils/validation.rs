use crate::shared::errors::AppError;

pub struct Validator;

impl Validator {
    /// Reject a query before any provider is contacted.
    /// An empty or whitespace-only query is the only caller-visible bad input.
    pub fn validate_search_query(query: &str) -> Result<(), AppError> {
        if query.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Search query cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_normal_queries() {
        assert!(Validator::validate_search_query("해리포터").is_ok());
        assert!(Validator::validate_search_query("Zelda").is_ok());
    }

    #[test]
    fn rejects_empty_query() {
        assert!(matches!(
            Validator::validate_search_query(""),
            Err(AppError::InvalidInput(_))
        ));
    }

    #[test]
    fn rejects_whitespace_only_query() {
        assert!(matches!(
            Validator::validate_search_query("   \t"),
            Err(AppError::InvalidInput(_))
        ));
    }
}
