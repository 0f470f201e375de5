//! Dashboard statistics

use crate::shared::{Category, CategoryCount, LanguageCount, Snippet, SnippetStats, Tag};

use super::search::{recent, RECENT_LIMIT};

/// Entries kept in each "top" list
pub const TOP_LIMIT: usize = 5;

/// Aggregate the current snapshots
///
/// Language and category rankings are by count descending; equal counts keep
/// the order in which the value first appears in `snippets`. Snippets without
/// a category are counted under the empty string.
pub fn compute_stats(snippets: &[Snippet], categories: &[Category], tags: &[Tag]) -> SnippetStats {
    let top_languages = rank(snippets.iter().map(|s| s.language.as_str()))
        .into_iter()
        .map(|(language, count)| LanguageCount { language, count })
        .collect();

    let top_categories = rank(snippets.iter().map(|s| s.category.as_str()))
        .into_iter()
        .map(|(category, count)| CategoryCount { category, count })
        .collect();

    SnippetStats {
        total_snippets: snippets.len(),
        total_categories: categories.len(),
        total_tags: tags.len(),
        recent_snippets: recent(snippets, RECENT_LIMIT),
        top_languages,
        top_categories,
    }
}

fn rank<'a>(values: impl Iterator<Item = &'a str>) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for value in values {
        match counts.iter_mut().find(|(v, _)| v == value) {
            Some((_, count)) => *count += 1,
            None => counts.push((value.to_string(), 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(TOP_LIMIT);
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::category::default_categories;
    use crate::shared::snippet::timestamp_now;
    use crate::shared::NewSnippet;
    use pretty_assertions::assert_eq;

    fn snippet(id: &str, language: &str, category: &str) -> Snippet {
        NewSnippet::new("t", "c", language)
            .with_category(category)
            .into_snippet(id.to_string(), timestamp_now())
    }

    #[test]
    fn test_top_languages() {
        let snippets = vec![
            snippet("1", "js", "1"),
            snippet("2", "js", "1"),
            snippet("3", "py", "7"),
        ];
        let stats = compute_stats(&snippets, &default_categories(), &[]);

        assert_eq!(
            stats.top_languages,
            vec![
                LanguageCount { language: "js".to_string(), count: 2 },
                LanguageCount { language: "py".to_string(), count: 1 },
            ]
        );
        assert_eq!(stats.total_snippets, 3);
        assert_eq!(stats.total_categories, 8);
        assert_eq!(stats.total_tags, 0);
    }

    #[test]
    fn test_ties_keep_first_seen_order_and_cap_at_five() {
        let snippets: Vec<Snippet> = ["go", "rust", "c", "zig", "nim", "odin", "rust"]
            .iter()
            .enumerate()
            .map(|(i, lang)| snippet(&i.to_string(), lang, ""))
            .collect();
        let stats = compute_stats(&snippets, &[], &[]);

        let langs: Vec<&str> = stats.top_languages.iter().map(|l| l.language.as_str()).collect();
        assert_eq!(langs, vec!["rust", "go", "c", "zig", "nim"]);
        assert_eq!(
            stats.top_categories,
            vec![CategoryCount { category: String::new(), count: 7 }]
        );
    }

    #[test]
    fn test_empty_collection() {
        let stats = compute_stats(&[], &[], &[]);
        assert_eq!(stats, SnippetStats::default());
    }
}
