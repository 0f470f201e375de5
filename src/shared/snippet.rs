/**
 * Snippet Model
 *
 * This module defines the snippet as the client sees it, together with the
 * input used to create one and the partial patch used to edit one.
 *
 * # Required Fields
 *
 * `title`, `code` and `language` must be non-blank. Everything else has a
 * default: empty description and category, no tags, not a favorite.
 *
 * # Timestamps
 *
 * Timestamps are truncated to millisecond precision so a value survives a
 * round trip through the store and the JSON wire format unchanged.
 */
use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::SharedError;

/// A code snippet as cached by the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    /// Opaque identifier assigned by the store
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub code: String,
    /// Free-text language tag, e.g. `javascript`
    pub language: String,
    #[serde(default)]
    pub category: String,
    /// Tag names, in display order
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_favorite: bool,
    /// Set once when the store accepts the snippet
    pub created_at: DateTime<Utc>,
    /// Refreshed on every mutation
    pub updated_at: DateTime<Utc>,
}

impl Snippet {
    /// Merge a patch into this snippet and stamp a fresh `updated_at`
    ///
    /// `id` and `created_at` are never touched.
    pub fn apply_patch(&mut self, patch: SnippetPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(code) = patch.code {
            self.code = code;
        }
        if let Some(language) = patch.language {
            self.language = language;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(tags) = patch.tags {
            self.tags = tags;
        }
        if let Some(is_favorite) = patch.is_favorite {
            self.is_favorite = is_favorite;
        }
        self.updated_at = timestamp_now();
    }

    /// Whether the snippet carries a tag with exactly this name
    pub fn has_tag(&self, name: &str) -> bool {
        self.tags.iter().any(|tag| tag == name)
    }

    /// The mutable fields of this snippet as a full patch
    pub fn to_patch(&self) -> SnippetPatch {
        SnippetPatch {
            title: Some(self.title.clone()),
            description: Some(self.description.clone()),
            code: Some(self.code.clone()),
            language: Some(self.language.clone()),
            category: Some(self.category.clone()),
            tags: Some(self.tags.clone()),
            is_favorite: Some(self.is_favorite),
        }
    }
}

/// Fields of a snippet before the store has accepted it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSnippet {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_favorite: bool,
}

impl NewSnippet {
    /// Create an input with the three required fields and defaults elsewhere
    pub fn new(
        title: impl Into<String>,
        code: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            code: code.into(),
            language: language.into(),
            category: String::new(),
            tags: Vec::new(),
            is_favorite: false,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn favorite(mut self, is_favorite: bool) -> Self {
        self.is_favorite = is_favorite;
        self
    }

    /// Check that every required field is present
    pub fn validate(&self) -> Result<(), SharedError> {
        require("title", &self.title)?;
        require("code", &self.code)?;
        require("language", &self.language)
    }

    /// Build the stored snippet once the store has picked an id
    pub fn into_snippet(self, id: String, now: DateTime<Utc>) -> Snippet {
        Snippet {
            id,
            title: self.title,
            description: self.description,
            code: self.code,
            language: self.language,
            category: self.category,
            tags: self.tags,
            is_favorite: self.is_favorite,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial snippet fields; `None` leaves the current value in place
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnippetPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_favorite: Option<bool>,
}

impl SnippetPatch {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
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
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    pub fn favorite(mut self, is_favorite: bool) -> Self {
        self.is_favorite = Some(is_favorite);
        self
    }

    /// A patch may not blank out a required field
    pub fn validate(&self) -> Result<(), SharedError> {
        if let Some(title) = &self.title {
            require("title", title)?;
        }
        if let Some(code) = &self.code {
            require("code", code)?;
        }
        if let Some(language) = &self.language {
            require("language", language)?;
        }
        Ok(())
    }
}

/// Current time truncated to millisecond precision
pub fn timestamp_now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

fn require(field: &str, value: &str) -> Result<(), SharedError> {
    if value.trim().is_empty() {
        return Err(SharedError::validation(field, format!("{} is required", field)));
    }
    Ok(())
}
