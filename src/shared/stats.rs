use serde::{Deserialize, Serialize};

use crate::shared::snippet::Snippet;

/// Aggregate numbers for the dashboard
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnippetStats {
    pub total_snippets: usize,
    pub total_categories: usize,
    pub total_tags: usize,
    /// Most recently updated first
    pub recent_snippets: Vec<Snippet>,
    pub top_languages: Vec<LanguageCount>,
    pub top_categories: Vec<CategoryCount>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageCount {
    pub language: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}
