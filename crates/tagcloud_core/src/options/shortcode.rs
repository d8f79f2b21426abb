/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Arguments for the embeddable tag cloud shortcode.
//!
//! The shortcode queries its own tags and uses a tighter set of defaults
//! than a bare generation call: sizes 8-22pt and at most 45 tags.

use super::{TagCloudArgs, TagCloudOptions};
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Which link a tag points at.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(from = "String", rename_all = "lowercase")]
pub enum LinkMode {
    /// The public archive page for the tag.
    #[default]
    View,
    /// The tag's admin edit screen.
    Edit,
}

impl From<String> for LinkMode {
    fn from(value: String) -> Self {
        if value.trim().eq_ignore_ascii_case("edit") {
            LinkMode::Edit
        } else {
            LinkMode::View
        }
    }
}

/// Shortcode arguments: cloud options plus tag query parameters.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub struct ShortcodeArgs {
    /// Tag ids to leave out.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<u64>,
    /// Restrict the query to these tag ids.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub include: Vec<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<LinkMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxonomy: Option<String>,
    /// Post type passed to edit links.
    #[serde(alias = "post_type", skip_serializing_if = "Option::is_none")]
    pub post_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub echo: Option<bool>,
    #[serde(flatten)]
    pub cloud: TagCloudArgs,
}

impl ShortcodeArgs {
    pub const DEFAULT_TAXONOMY: &'static str = "post_tag";

    /// Defaults applied beneath the caller's cloud arguments.
    pub fn defaults() -> TagCloudOptions {
        TagCloudOptions {
            smallest: 8.0,
            largest: 22.0,
            number: 45,
            ..Default::default()
        }
    }

    /// Resolve the cloud options against the shortcode defaults.
    pub fn cloud_options(&self) -> TagCloudOptions {
        self.cloud.clone().resolve_with(Self::defaults())
    }

    pub fn taxonomy(&self) -> &str {
        self.taxonomy.as_deref().unwrap_or(Self::DEFAULT_TAXONOMY)
    }

    pub fn post_type(&self) -> &str {
        self.post_type.as_deref().unwrap_or("")
    }

    pub fn link_mode(&self) -> LinkMode {
        self.link.unwrap_or_default()
    }

    pub fn echo(&self) -> bool {
        self.echo.unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::CloudFormat;

    #[test]
    fn test_shortcode_defaults() {
        let args = ShortcodeArgs::default();
        let options = args.cloud_options();
        assert_eq!(options.smallest, 8.0);
        assert_eq!(options.largest, 22.0);
        assert_eq!(options.number, 45);
        assert_eq!(options.format, CloudFormat::Flat);
        assert_eq!(args.taxonomy(), "post_tag");
        assert_eq!(args.link_mode(), LinkMode::View);
        assert!(args.echo());
    }

    #[test]
    fn test_shortcode_snake_case_keys() {
        let yaml = "post_type: thread\nshow_count: true\nsingle_text: '%s reply'\n";
        let args: ShortcodeArgs = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(args.post_type(), "thread");
        assert!(args.cloud.extra.is_empty());
        let options = args.cloud_options();
        assert!(options.show_count);
        assert_eq!(options.single_text.as_deref(), Some("%s reply"));
    }

    #[test]
    fn test_shortcode_yaml() {
        let yaml = r#"
taxonomy: topic
link: EDIT
exclude: [3, 4]
number: 10
format: array
"#;
        let args: ShortcodeArgs = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(args.taxonomy(), "topic");
        assert_eq!(args.link_mode(), LinkMode::Edit);
        assert_eq!(args.exclude, vec![3, 4]);

        let options = args.cloud_options();
        assert_eq!(options.number, 10);
        assert_eq!(options.format, CloudFormat::Array);
        assert_eq!(options.largest, 22.0);
        assert!(options.extra.is_empty());
    }
}
