use crate::modules::search::domain::value_objects::{MediaCategory, SearchResult};

/// One routed provider call: which adapter to invoke and which category
/// label its results carry in the merged output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchRoute {
    /// Adapter to invoke, identified by its fixed category tag
    pub provider: MediaCategory,
    /// Category stamped on the route's results before merging
    pub label: MediaCategory,
}

impl SearchRoute {
    fn direct(category: MediaCategory) -> Self {
        Self {
            provider: category,
            label: category,
        }
    }

    /// Overwrite the category on results fetched through this route.
    /// Relabeling is the only field mutation allowed after an adapter returns.
    pub fn relabel(&self, mut results: Vec<SearchResult>) -> Vec<SearchResult> {
        if self.provider != self.label {
            for result in &mut results {
                result.category = self.label;
            }
        }
        results
    }
}

/// Maps a requested category token to the subset of providers to invoke
pub struct CategoryRouter;

impl CategoryRouter {
    /// `all` fans out to every provider in fixed order; `webtoon` is served
    /// by the book provider with its results retagged; an unrecognized token
    /// selects nothing, which is an empty result list and not an error.
    pub fn resolve(category: &str) -> Vec<SearchRoute> {
        match category {
            "all" => vec![
                SearchRoute::direct(MediaCategory::Movie),
                SearchRoute::direct(MediaCategory::Book),
                SearchRoute::direct(MediaCategory::Game),
            ],
            "movie" => vec![SearchRoute::direct(MediaCategory::Movie)],
            "book" => vec![SearchRoute::direct(MediaCategory::Book)],
            "game" => vec![SearchRoute::direct(MediaCategory::Game)],
            "webtoon" => vec![SearchRoute {
                provider: MediaCategory::Book,
                label: MediaCategory::Webtoon,
            }],
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book_result(title: &str) -> SearchResult {
        SearchResult {
            title: title.to_string(),
            image_url: None,
            release_date: Some("20230101".to_string()),
            category: MediaCategory::Book,
            external_id: "isbn".to_string(),
            author: None,
        }
    }

    #[test]
    fn all_selects_every_provider_in_fixed_order() {
        let routes = CategoryRouter::resolve("all");
        let providers: Vec<_> = routes.iter().map(|r| r.provider).collect();
        assert_eq!(
            providers,
            vec![MediaCategory::Movie, MediaCategory::Book, MediaCategory::Game]
        );
        assert!(routes.iter().all(|r| r.provider == r.label));
    }

    #[test]
    fn single_category_selects_matching_provider_only() {
        for (token, expected) in [
            ("movie", MediaCategory::Movie),
            ("book", MediaCategory::Book),
            ("game", MediaCategory::Game),
        ] {
            let routes = CategoryRouter::resolve(token);
            assert_eq!(routes.len(), 1, "token '{}'", token);
            assert_eq!(routes[0].provider, expected);
            assert_eq!(routes[0].label, expected);
        }
    }

    #[test]
    fn webtoon_routes_to_book_provider_with_relabel() {
        let routes = CategoryRouter::resolve("webtoon");
        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].provider, MediaCategory::Book);
        assert_eq!(routes[0].label, MediaCategory::Webtoon);
    }

    #[test]
    fn unknown_token_selects_nothing() {
        assert!(CategoryRouter::resolve("music").is_empty());
        assert!(CategoryRouter::resolve("").is_empty());
        assert!(CategoryRouter::resolve("ALL").is_empty());
    }

    #[test]
    fn relabel_overwrites_every_result_category() {
        let routes = CategoryRouter::resolve("webtoon");
        let relabeled =
            routes[0].relabel(vec![book_result("여신강림"), book_result("나 혼자만 레벨업")]);
        assert!(relabeled
            .iter()
            .all(|r| r.category == MediaCategory::Webtoon));
    }

    #[test]
    fn direct_route_keeps_results_untouched() {
        let routes = CategoryRouter::resolve("book");
        let original = vec![book_result("책")];
        let relabeled = routes[0].relabel(original.clone());
        assert_eq!(relabeled, original);
    }
}
