//! Search filters
//!
//! A transient query object; it is built for one `search` call and then
//! dropped. Unset fields do not filter.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilters {
    /// Case-insensitive substring matched against title, description, code and tags
    #[serde(default)]
    pub query: String,
    /// Exact category match
    #[serde(default)]
    pub category: Option<String>,
    /// Snippets carrying any of these tags
    #[serde(default)]
    pub tags: Vec<String>,
    /// Exact language match
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub favorites_only: bool,
    /// Inclusive lower bound on `created_at`
    #[serde(default)]
    pub date_from: Option<DateTime<Utc>>,
    /// Inclusive upper bound on `created_at`
    #[serde(default)]
    pub date_to: Option<DateTime<Utc>>,
}

impl SearchFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn favorites_only(mut self) -> Self {
        self.favorites_only = true;
        self
    }

    pub fn created_between(
        mut self,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    ) -> Self {
        self.date_from = from;
        self.date_to = to;
        self
    }
}
