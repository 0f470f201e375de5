//! Snippet search and ordering

use crate::shared::{SearchFilters, Snippet};

/// Number of snippets shown as "recent"
pub const RECENT_LIMIT: usize = 5;

/// Apply every active filter and sort by `updated_at`, newest first
///
/// Empty strings in `category` or `language` count as "no filter". The text
/// query matches case-insensitively against title, description, code and tag
/// names. Ties keep snapshot order.
pub fn filter_snippets(snippets: &[Snippet], filters: &SearchFilters) -> Vec<Snippet> {
    let query = filters.query.to_lowercase();

    let mut results: Vec<Snippet> = snippets
        .iter()
        .filter(|s| query.is_empty() || matches_query(s, &query))
        .filter(|s| match filters.category.as_deref() {
            Some(category) if !category.is_empty() => s.category == category,
            _ => true,
        })
        .filter(|s| filters.tags.is_empty() || filters.tags.iter().any(|t| s.has_tag(t)))
        .filter(|s| match filters.language.as_deref() {
            Some(language) if !language.is_empty() => s.language == language,
            _ => true,
        })
        .filter(|s| !filters.favorites_only || s.is_favorite)
        .filter(|s| filters.date_from.map_or(true, |from| s.created_at >= from))
        .filter(|s| filters.date_to.map_or(true, |to| s.created_at <= to))
        .cloned()
        .collect();

    sort_by_recency(&mut results);
    results
}

/// The most recently updated snippets
pub fn recent(snippets: &[Snippet], limit: usize) -> Vec<Snippet> {
    let mut sorted = snippets.to_vec();
    sort_by_recency(&mut sorted);
    sorted.truncate(limit);
    sorted
}

fn sort_by_recency(snippets: &mut [Snippet]) {
    // stable
    snippets.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
}

fn matches_query(snippet: &Snippet, query: &str) -> bool {
    snippet.title.to_lowercase().contains(query)
        || snippet.description.to_lowercase().contains(query)
        || snippet.code.to_lowercase().contains(query)
        || snippet.tags.iter().any(|t| t.to_lowercase().contains(query))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::NewSnippet;
    use chrono::{DateTime, Duration, TimeZone, Utc};

    fn at(minutes: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::minutes(minutes)
    }

    fn snippet(id: &str, input: NewSnippet, minutes: i64) -> Snippet {
        input.into_snippet(id.to_string(), at(minutes))
    }

    fn sample() -> Vec<Snippet> {
        vec![
            snippet(
                "a",
                NewSnippet::new("Debounce helper", "setTimeout()", "javascript")
                    .with_category("1")
                    .with_tags(["utils"]),
                0,
            ),
            snippet(
                "b",
                NewSnippet::new("List comprehension", "[x for x in y]", "python")
                    .with_category("7")
                    .favorite(true),
                10,
            ),
            snippet(
                "c",
                NewSnippet::new("Flexbox", "display: flex", "css")
                    .with_description("Centering with FLEX")
                    .with_tags(["layout", "Utils"]),
                5,
            ),
        ]
    }

    fn ids(snippets: &[Snippet]) -> Vec<&str> {
        snippets.iter().map(|s| s.id.as_str()).collect()
    }

    #[test]
    fn test_empty_filters_sort_newest_first() {
        let results = filter_snippets(&sample(), &SearchFilters::new());
        assert_eq!(ids(&results), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_query_is_case_insensitive_across_fields() {
        let snippets = sample();
        assert_eq!(ids(&filter_snippets(&snippets, &SearchFilters::new().query("FLEX"))), vec!["c"]);
        assert_eq!(
            ids(&filter_snippets(&snippets, &SearchFilters::new().query("utils"))),
            vec!["c", "a"]
        );
        assert_eq!(
            ids(&filter_snippets(&snippets, &SearchFilters::new().query("settimeout"))),
            vec!["a"]
        );
    }

    #[test]
    fn test_tag_filter_is_exact_any_of() {
        let snippets = sample();
        let results = filter_snippets(&snippets, &SearchFilters::new().tags(["utils", "layout"]));
        assert_eq!(ids(&results), vec!["c", "a"]);

        let results = filter_snippets(&snippets, &SearchFilters::new().tags(["UTILS"]));
        assert!(results.is_empty());
    }

    #[test]
    fn test_structured_filters() {
        let snippets = sample();
        assert_eq!(ids(&filter_snippets(&snippets, &SearchFilters::new().category("7"))), vec!["b"]);
        assert_eq!(ids(&filter_snippets(&snippets, &SearchFilters::new().language("css"))), vec!["c"]);
        assert_eq!(ids(&filter_snippets(&snippets, &SearchFilters::new().favorites_only())), vec!["b"]);
        assert_eq!(filter_snippets(&snippets, &SearchFilters::new().category("")).len(), 3);
    }

    #[test]
    fn test_date_bounds_are_inclusive() {
        let snippets = sample();
        let results = filter_snippets(&snippets, &SearchFilters::new().created_between(Some(at(5)), Some(at(10))));
        assert_eq!(ids(&results), vec!["b", "c"]);
    }

    #[test]
    fn test_recent_limits_and_orders() {
        let snippets = sample();
        assert_eq!(ids(&recent(&snippets, 2)), vec!["b", "c"]);
        assert_eq!(recent(&snippets, RECENT_LIMIT).len(), 3);
    }

    fn tied() -> Vec<Snippet> {
        vec![
            snippet("x", NewSnippet::new("Tie one", "a", "js"), 7),
            snippet("old", NewSnippet::new("Older", "a", "js"), 1),
            snippet("y", NewSnippet::new("Tie two", "a", "js"), 7),
            snippet("z", NewSnippet::new("Tie three", "a", "js"), 7),
        ]
    }

    #[test]
    fn test_search_ties_keep_snapshot_order() {
        let snippets = tied();
        assert_eq!(
            ids(&filter_snippets(&snippets, &SearchFilters::new())),
            vec!["x", "y", "z", "old"]
        );
        assert_eq!(
            ids(&filter_snippets(&snippets, &SearchFilters::new().query("tie"))),
            vec!["x", "y", "z"]
        );

        let mut reversed = snippets;
        reversed.reverse();
        assert_eq!(
            ids(&filter_snippets(&reversed, &SearchFilters::new())),
            vec!["z", "y", "x", "old"]
        );
    }

    #[test]
    fn test_recent_ties_keep_snapshot_order() {
        assert_eq!(ids(&recent(&tied(), 2)), vec!["x", "y"]);
    }
}
