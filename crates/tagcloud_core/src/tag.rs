/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Tag records as supplied by a tag source.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The destination URL meaning "no link"; such tags render as buttons.
pub const NO_LINK: &str = "#";

fn no_link() -> String {
    NO_LINK.to_string()
}

/// A labeled, countable item to be visualized in the cloud.
///
/// Tags are read-only to the processor. The identifier is optional: when a
/// tag source does not provide one, the tag's position in the input
/// collection stands in for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub struct Tag {
    /// Stable identifier, used in CSS classes.
    #[serde(
        default,
        alias = "term-id",
        alias = "term_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<u64>,
    /// Display name.
    pub name: String,
    /// URL-safe name.
    #[serde(default)]
    pub slug: String,
    /// Destination URL; `"#"` renders the tag as a button.
    #[serde(default = "no_link", alias = "link")]
    pub url: String,
    /// Raw usage count.
    #[serde(default)]
    pub count: u64,
    /// Taxonomy the tag belongs to (e.g. `post_tag`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub taxonomy: Option<String>,
}

impl Default for Tag {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            slug: String::new(),
            url: no_link(),
            count: 0,
            taxonomy: None,
        }
    }
}

impl Tag {
    /// Create a tag with a generated slug and no link.
    pub fn new(id: u64, name: &str, count: u64) -> Self {
        Self {
            id: Some(id),
            name: name.to_string(),
            slug: slugify(name),
            count,
            ..Default::default()
        }
    }

    /// Set the destination URL.
    pub fn with_url(mut self, url: &str) -> Self {
        self.url = url.to_string();
        self
    }

    /// Set the taxonomy.
    pub fn with_taxonomy(mut self, taxonomy: &str) -> Self {
        self.taxonomy = Some(taxonomy.to_string());
        self
    }

    /// Whether the tag has no destination and should render as a button.
    pub fn is_button(&self) -> bool {
        self.url == NO_LINK
    }
}

/// Lowercase a name and collapse everything but letters and digits to `-`.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for c in name.chars().flat_map(char::to_lowercase) {
        if c.is_alphanumeric() {
            slug.push(c);
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}
