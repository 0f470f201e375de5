//! Snippet categories
//!
//! Categories live only in client memory for the length of a session and are
//! seeded from a fixed default set on every start.

use serde::{Deserialize, Serialize};

use crate::shared::error::SharedError;
use crate::shared::new_id;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    /// Unique display name
    pub name: String,
    /// CSS color hint, e.g. `#f7df1e`
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Input for a new category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    pub name: String,
    pub color: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl NewCategory {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn validate(&self) -> Result<(), SharedError> {
        if self.name.trim().is_empty() {
            return Err(SharedError::validation("name", "name is required"));
        }
        Ok(())
    }

    pub fn into_category(self) -> Category {
        Category {
            id: new_id(),
            name: self.name,
            color: self.color,
            description: self.description,
        }
    }
}

/// Partial category fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPatch {
    pub name: Option<String>,
    pub color: Option<String>,
    pub description: Option<String>,
}

impl Category {
    pub fn apply_patch(&mut self, patch: CategoryPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(color) = patch.color {
            self.color = color;
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
    }
}

/// The eight categories every session starts with
pub fn default_categories() -> Vec<Category> {
    [
        ("1", "JavaScript", "#f7df1e", "JavaScript code snippets"),
        ("2", "TypeScript", "#3178c6", "TypeScript code snippets"),
        ("3", "Angular", "#dd0031", "Angular framework snippets"),
        ("4", "React", "#61dafb", "React library snippets"),
        ("5", "CSS", "#1572b6", "CSS styling snippets"),
        ("6", "HTML", "#e34f26", "HTML markup snippets"),
        ("7", "Python", "#3776ab", "Python code snippets"),
        ("8", "General", "#6c757d", "General purpose snippets"),
    ]
    .into_iter()
    .map(|(id, name, color, description)| Category {
        id: id.to_string(),
        name: name.to_string(),
        color: color.to_string(),
        description: Some(description.to_string()),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_categories() {
        let categories = default_categories();
        assert_eq!(categories.len(), 8);
        assert_eq!(categories[0].id, "1");
        assert_eq!(categories[0].name, "JavaScript");
        assert_eq!(categories[7].name, "General");

        let mut names: Vec<_> = categories.iter().map(|c| c.name.as_str()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 8);
    }

    #[test]
    fn test_new_category_gets_fresh_id() {
        let a = NewCategory::new("Rust", "#dea584").into_category();
        let b = NewCategory::new("Go", "#00add8").into_category();
        assert_ne!(a.id, b.id);
        assert!(a.description.is_none());
    }

    #[test]
    fn test_blank_name_rejected() {
        assert!(NewCategory::new(" ", "#000").validate().is_err());
    }

    #[test]
    fn test_apply_patch() {
        let mut category = default_categories().remove(0);
        category.apply_patch(CategoryPatch {
            color: Some("#000000".to_string()),
            ..Default::default()
        });
        assert_eq!(category.name, "JavaScript");
        assert_eq!(category.color, "#000000");
    }
}
