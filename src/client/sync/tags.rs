//! Tag reducer
//!
//! Tags are never edited directly by snippet mutations. After every change to
//! the snippet collection the tag list is rebuilt from the previous tag list
//! and the new collection.

use std::collections::{HashMap, HashSet};

use crate::shared::{Snippet, Tag};

/// Rebuild the tag list for `snippets`
///
/// Tags already in `previous` keep their position, id and color; their count
/// is refreshed and may drop to zero. Names seen for the first time are
/// appended in the order they are first encountered. Duplicate names in
/// `previous` collapse onto the first occurrence.
pub fn recompute_tags(previous: &[Tag], snippets: &[Snippet]) -> Vec<Tag> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut first_seen: Vec<&str> = Vec::new();

    for snippet in snippets {
        let mut on_snippet: HashSet<&str> = HashSet::new();
        for name in &snippet.tags {
            if !on_snippet.insert(name.as_str()) {
                continue;
            }
            let count = counts.entry(name.as_str()).or_insert(0);
            if *count == 0 {
                first_seen.push(name.as_str());
            }
            *count += 1;
        }
    }

    let mut known: HashSet<&str> = HashSet::new();
    let mut tags: Vec<Tag> = Vec::with_capacity(previous.len() + first_seen.len());

    for tag in previous {
        if !known.insert(tag.name.as_str()) {
            continue;
        }
        tags.push(Tag {
            count: counts.get(tag.name.as_str()).copied().unwrap_or(0),
            ..tag.clone()
        });
    }

    for name in first_seen {
        if known.insert(name) {
            tags.push(Tag::new(name, counts[name]));
        }
    }

    tags
}
