use serde::{Deserialize, Serialize};

use crate::shared::new_id;

/// Colors handed out to tags the first time their name is seen
pub const TAG_PALETTE: [&str; 8] = [
    "#007bff", "#28a745", "#dc3545", "#ffc107", "#17a2b8", "#6f42c1", "#e83e8c", "#fd7e14",
];

/// A tag derived from the snippet collection
///
/// `count` is always recomputed from the snippets; it is never set directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub id: String,
    pub name: String,
    pub color: String,
    pub count: usize,
}

impl Tag {
    /// A tag seen for the first time, colored from the palette
    pub fn new(name: impl Into<String>, count: usize) -> Self {
        let name = name.into();
        Self {
            id: new_id(),
            color: palette_color(&name).to_string(),
            name,
            count,
        }
    }
}

/// Input for a manually created tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTag {
    pub name: String,
    pub color: Option<String>,
}

impl NewTag {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn into_tag(self) -> Tag {
        let mut tag = Tag::new(self.name, 0);
        if let Some(color) = self.color {
            tag.color = color;
        }
        tag
    }
}

/// Pick a palette color for a tag name
///
/// Stable for a given name, so the same tag keeps its color across sessions.
pub fn palette_color(name: &str) -> &'static str {
    let hash = name
        .bytes()
        .fold(0usize, |acc, b| acc.wrapping_mul(31).wrapping_add(b as usize));
    TAG_PALETTE[hash % TAG_PALETTE.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_color_is_stable() {
        assert_eq!(palette_color("rust"), palette_color("rust"));
        assert!(TAG_PALETTE.contains(&palette_color("anything")));
        assert!(TAG_PALETTE.contains(&palette_color("")));
    }

    #[test]
    fn test_new_tag_with_color() {
        let tag = NewTag::new("async").with_color("#123456").into_tag();
        assert_eq!(tag.name, "async");
        assert_eq!(tag.color, "#123456");
        assert_eq!(tag.count, 0);
    }
}
