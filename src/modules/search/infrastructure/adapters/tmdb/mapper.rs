use super::models::Movie;
use crate::modules::search::domain::value_objects::{MediaCategory, SearchResult};
use crate::modules::search::infrastructure::adapters::ResultMapper;

/// Poster paths come back relative; TMDB serves them under a fixed base
const POSTER_BASE_URL: &str = "https://image.tmdb.org/t/p/w200";

/// TMDB specific mapper implementation
#[derive(Debug, Clone)]
pub struct TmdbMapper;

impl TmdbMapper {
    pub fn new() -> Self {
        Self
    }

    fn poster_url(poster_path: Option<&str>) -> Option<String> {
        poster_path
            .filter(|path| !path.is_empty())
            .map(|path| format!("{}{}", POSTER_BASE_URL, path))
    }
}

impl ResultMapper<Movie> for TmdbMapper {
    fn map_to_result(&self, movie: Movie) -> SearchResult {
        SearchResult {
            title: movie.title.unwrap_or_default(),
            image_url: Self::poster_url(movie.poster_path.as_deref()),
            release_date: movie.release_date.clone(),
            category: MediaCategory::Movie,
            external_id: movie.id.map(|id| id.to_string()).unwrap_or_default(),
            // The movie catalog has no author concept; the release date stands in
            author: movie.release_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie() -> Movie {
        Movie {
            id: Some(1726),
            title: Some("아이언맨".to_string()),
            poster_path: Some("/iron.jpg".to_string()),
            release_date: Some("2008-04-30".to_string()),
        }
    }

    #[test]
    fn maps_movie_to_canonical_result() {
        let result = TmdbMapper::new().map_to_result(movie());
        assert_eq!(result.title, "아이언맨");
        assert_eq!(
            result.image_url.as_deref(),
            Some("https://image.tmdb.org/t/p/w200/iron.jpg")
        );
        assert_eq!(result.release_date.as_deref(), Some("2008-04-30"));
        assert_eq!(result.category, MediaCategory::Movie);
        assert_eq!(result.external_id, "1726");
        assert_eq!(result.author.as_deref(), Some("2008-04-30"));
    }

    #[test]
    fn absent_poster_maps_to_none() {
        let result = TmdbMapper::new().map_to_result(Movie {
            poster_path: None,
            ..movie()
        });
        assert_eq!(result.image_url, None);
    }

    #[test]
    fn absent_title_and_id_fall_back_to_empty_strings() {
        let result = TmdbMapper::new().map_to_result(Movie {
            id: None,
            title: None,
            poster_path: None,
            release_date: None,
        });
        assert_eq!(result.title, "");
        assert_eq!(result.external_id, "");
        assert_eq!(result.author, None);
    }
}
