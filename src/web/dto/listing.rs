//! Query parameters for the post listing pages.

use serde::Deserialize;

use crate::domain::entities::PostFilter;

/// Query string accepted by the listing endpoints.
///
/// The `search_*` flags widen the text search beyond title and body. A flag
/// counts as set when the parameter is present with any non-empty value,
/// matching how browsers submit checkboxes.
#[derive(Debug, Default, Deserialize)]
pub struct ListingQuery {
    pub search: Option<String>,
    pub search_category: Option<String>,
    pub search_tag: Option<String>,
    pub search_comments: Option<String>,
    /// Raw page parameter; resolution happens in the service layer.
    pub page: Option<String>,
}

/// Query string for pages that only paginate, like the comment list on a
/// post detail page.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
}

fn flag_set(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}

impl ListingQuery {
    /// Converts the query string into a post filter.
    ///
    /// An empty or whitespace-only search term means no text filter, in
    /// which case the widening flags are irrelevant.
    pub fn to_filter(&self) -> PostFilter {
        let query = self
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        PostFilter {
            query,
            in_categories: flag_set(&self.search_category),
            in_tags: flag_set(&self.search_tag),
            in_comments: flag_set(&self.search_comments),
            category_slug: None,
            tag_slug: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_has_no_filter() {
        let filter = ListingQuery::default().to_filter();
        assert!(filter.query.is_none());
        assert!(!filter.in_categories);
    }

    #[test]
    fn test_whitespace_search_is_ignored() {
        let query = ListingQuery {
            search: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(query.to_filter().query.is_none());
    }

    #[test]
    fn test_checkbox_flags() {
        let query = ListingQuery {
            search: Some("rust".to_string()),
            search_category: Some("on".to_string()),
            search_comments: Some(String::new()),
            ..Default::default()
        };

        let filter = query.to_filter();
        assert_eq!(filter.query.as_deref(), Some("rust"));
        assert!(filter.in_categories);
        assert!(!filter.in_tags);
        // Present but empty does not count as checked.
        assert!(!filter.in_comments);
    }
}
