use super::models::Book;
use crate::modules::search::domain::services::ResultNormalizer;
use crate::modules::search::domain::value_objects::{MediaCategory, SearchResult};
use crate::modules::search::infrastructure::adapters::ResultMapper;

/// Naver book search specific mapper implementation
#[derive(Debug, Clone)]
pub struct NaverMapper {
    normalizer: ResultNormalizer,
}

impl NaverMapper {
    pub fn new() -> Self {
        Self {
            normalizer: ResultNormalizer::new(),
        }
    }
}

impl ResultMapper<Book> for NaverMapper {
    fn map_to_result(&self, book: Book) -> SearchResult {
        SearchResult {
            // Naver wraps query matches in emphasis tags
            title: self
                .normalizer
                .strip_emphasis_tags(book.title.as_deref().unwrap_or_default()),
            image_url: ResultNormalizer::image_url(book.image),
            release_date: book.pubdate,
            category: MediaCategory::Book,
            external_id: book.isbn.unwrap_or_default(),
            author: book
                .author
                .map(|author| self.normalizer.strip_emphasis_tags(&author))
                .filter(|author| !author.is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book() -> Book {
        Book {
            title: Some("<b>해리포터</b>와 마법사의 돌".to_string()),
            author: Some("J.K. 롤링".to_string()),
            image: Some("https://shopping-phinf.pstatic.net/cover.jpg".to_string()),
            pubdate: Some("19991101".to_string()),
            isbn: Some("9788983920775".to_string()),
        }
    }

    #[test]
    fn maps_book_to_canonical_result_with_stripped_title() {
        let result = NaverMapper::new().map_to_result(book());
        assert_eq!(result.title, "해리포터와 마법사의 돌");
        assert_eq!(
            result.image_url.as_deref(),
            Some("https://shopping-phinf.pstatic.net/cover.jpg")
        );
        assert_eq!(result.release_date.as_deref(), Some("19991101"));
        assert_eq!(result.category, MediaCategory::Book);
        assert_eq!(result.external_id, "9788983920775");
        assert_eq!(result.author.as_deref(), Some("J.K. 롤링"));
    }

    #[test]
    fn empty_image_maps_to_none() {
        let result = NaverMapper::new().map_to_result(Book {
            image: Some(String::new()),
            ..book()
        });
        assert_eq!(result.image_url, None);
    }

    #[test]
    fn absent_fields_fall_back_to_defaults() {
        let result = NaverMapper::new().map_to_result(Book {
            title: None,
            author: None,
            image: None,
            pubdate: None,
            isbn: None,
        });
        assert_eq!(result.title, "");
        assert_eq!(result.external_id, "");
        assert_eq!(result.author, None);
        assert_eq!(result.release_date, None);
    }
}
