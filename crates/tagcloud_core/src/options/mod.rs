/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Tag cloud options.
//!
//! Callers hand in a partial [`TagCloudArgs`], typically deserialized from
//! YAML or JSON. [`TagCloudArgs::resolve`] merges it over the documented
//! defaults to produce the immutable [`TagCloudOptions`] a single generation
//! call works from. Nothing here is ever rejected: unknown keys are carried
//! in `extra`, and unknown enumerated values fall back to their defaults.

pub mod count_text;
pub mod scale;
pub mod shortcode;

pub use count_text::{CountTextCallback, CountTextFn};
pub use scale::{CountScale, ScaleFn};
pub use shortcode::{LinkMode, ShortcodeArgs};

use crate::locale::SingularPlural;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Shape of the generated output.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(from = "String", rename_all = "lowercase")]
pub enum CloudFormat {
    /// Links joined by the separator.
    #[default]
    Flat,
    /// Links wrapped in a list container.
    List,
    /// The raw sequence of links.
    Array,
}

impl From<&str> for CloudFormat {
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "list" => CloudFormat::List,
            "array" => CloudFormat::Array,
            _ => CloudFormat::Flat,
        }
    }
}

impl From<String> for CloudFormat {
    fn from(value: String) -> Self {
        CloudFormat::from(value.as_str())
    }
}

/// Sort key applied before scaling.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(from = "String", rename_all = "lowercase")]
pub enum OrderBy {
    #[default]
    Name,
    Count,
}

impl From<&str> for OrderBy {
    fn from(value: &str) -> Self {
        // Only "name" selects the name sort; anything else sorts by count.
        if value.trim().eq_ignore_ascii_case("name") {
            OrderBy::Name
        } else {
            OrderBy::Count
        }
    }
}

impl From<String> for OrderBy {
    fn from(value: String) -> Self {
        OrderBy::from(value.as_str())
    }
}

/// Sort direction.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(from = "String", rename_all = "lowercase")]
pub enum Order {
    #[default]
    Asc,
    Desc,
    /// Shuffle; no stability guarantee.
    Rand,
}

impl From<&str> for Order {
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "desc" | "descending" => Order::Desc,
            "rand" | "random" => Order::Rand,
            _ => Order::Asc,
        }
    }
}

impl From<String> for Order {
    fn from(value: String) -> Self {
        Order::from(value.as_str())
    }
}

/// Caller-supplied, partial tag cloud options.
///
/// Every field is optional; unset fields take their defaults in
/// [`TagCloudArgs::resolve`].
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub struct TagCloudArgs {
    /// Font size of the least used tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smallest: Option<f64>,
    /// Font size of the most used tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub largest: Option<f64>,
    /// CSS unit appended to font sizes (e.g. "pt", "px", "em").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Maximum number of tags; 0 means unlimited.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<CloudFormat>,
    /// Separator between links in flat format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub separator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orderby: Option<OrderBy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<Order>,
    /// Transform applied to raw counts before scaling.
    #[serde(
        skip_serializing_if = "Option::is_none",
        alias = "count_scale",
        alias = "topic-count-scale-callback",
        alias = "topic_count_scale_callback"
    )]
    pub count_scale: Option<CountScale>,
    /// Singular/plural templates for the count text, e.g. "%s post".
    #[serde(
        skip_serializing_if = "Option::is_none",
        alias = "count_text",
        alias = "topic-count-text",
        alias = "topic_count_text"
    )]
    pub count_text: Option<SingularPlural>,
    /// Callback producing the count text.
    #[serde(
        skip_serializing_if = "Option::is_none",
        alias = "count_text_callback",
        alias = "topic-count-text-callback",
        alias = "topic_count_text_callback"
    )]
    pub count_text_callback: Option<CountTextCallback>,
    /// Legacy singular count template.
    #[serde(skip_serializing_if = "Option::is_none", alias = "single_text")]
    pub single_text: Option<String>,
    /// Legacy plural count template.
    #[serde(skip_serializing_if = "Option::is_none", alias = "multiple_text")]
    pub multiple_text: Option<String>,
    /// Show the numeric count next to each tag.
    #[serde(skip_serializing_if = "Option::is_none", alias = "show_count")]
    pub show_count: Option<bool>,
    /// Run output hooks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<bool>,
    /// Href template with `{slug}`, `{name}` and `{id}` placeholders.
    #[serde(skip_serializing_if = "Option::is_none", alias = "link_template")]
    pub link_template: Option<String>,
    /// Seed for reproducible random order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Unrecognized keys, passed through for other collaborators.
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl TagCloudArgs {
    /// Resolve against the standard defaults.
    pub fn resolve(self) -> TagCloudOptions {
        self.resolve_with(TagCloudOptions::default())
    }

    /// Resolve against a caller-chosen set of defaults.
    pub fn resolve_with(self, defaults: TagCloudOptions) -> TagCloudOptions {
        let mut extra = defaults.extra;
        extra.extend(self.extra);

        TagCloudOptions {
            smallest: self.smallest.unwrap_or(defaults.smallest),
            largest: self.largest.unwrap_or(defaults.largest),
            unit: self.unit.unwrap_or(defaults.unit),
            number: self.number.unwrap_or(defaults.number),
            format: self.format.unwrap_or(defaults.format),
            separator: self.separator.unwrap_or(defaults.separator),
            orderby: self.orderby.unwrap_or(defaults.orderby),
            order: self.order.unwrap_or(defaults.order),
            count_scale: self.count_scale.unwrap_or(defaults.count_scale),
            count_text: self.count_text.or(defaults.count_text),
            count_text_callback: self.count_text_callback.or(defaults.count_text_callback),
            single_text: self.single_text.or(defaults.single_text),
            multiple_text: self.multiple_text.or(defaults.multiple_text),
            show_count: self.show_count.unwrap_or(defaults.show_count),
            filter: self.filter.unwrap_or(defaults.filter),
            link_template: self.link_template.or(defaults.link_template),
            seed: self.seed.or(defaults.seed),
            extra,
        }
    }

    /// Layer `overrides` on top of `self`; set fields in `overrides` win.
    pub fn merge(self, overrides: TagCloudArgs) -> TagCloudArgs {
        let mut extra = self.extra;
        extra.extend(overrides.extra);

        TagCloudArgs {
            smallest: overrides.smallest.or(self.smallest),
            largest: overrides.largest.or(self.largest),
            unit: overrides.unit.or(self.unit),
            number: overrides.number.or(self.number),
            format: overrides.format.or(self.format),
            separator: overrides.separator.or(self.separator),
            orderby: overrides.orderby.or(self.orderby),
            order: overrides.order.or(self.order),
            count_scale: overrides.count_scale.or(self.count_scale),
            count_text: overrides.count_text.or(self.count_text),
            count_text_callback: overrides.count_text_callback.or(self.count_text_callback),
            single_text: overrides.single_text.or(self.single_text),
            multiple_text: overrides.multiple_text.or(self.multiple_text),
            show_count: overrides.show_count.or(self.show_count),
            filter: overrides.filter.or(self.filter),
            link_template: overrides.link_template.or(self.link_template),
            seed: overrides.seed.or(self.seed),
            extra,
        }
    }
}

/// Fully resolved options for one generation call.
#[derive(Debug, Clone, PartialEq)]
pub struct TagCloudOptions {
    pub smallest: f64,
    pub largest: f64,
    pub unit: String,
    pub number: usize,
    pub format: CloudFormat,
    pub separator: String,
    pub orderby: OrderBy,
    pub order: Order,
    pub count_scale: CountScale,
    pub count_text: Option<SingularPlural>,
    pub count_text_callback: Option<CountTextCallback>,
    pub single_text: Option<String>,
    pub multiple_text: Option<String>,
    pub show_count: bool,
    pub filter: bool,
    pub link_template: Option<String>,
    pub seed: Option<u64>,
    pub extra: HashMap<String, serde_json::Value>,
}

impl Default for TagCloudOptions {
    fn default() -> Self {
        Self {
            smallest: 12.0,
            largest: 30.0,
            unit: "pt".to_string(),
            number: 0,
            format: CloudFormat::Flat,
            separator: "\n".to_string(),
            orderby: OrderBy::Name,
            order: Order::Asc,
            count_scale: CountScale::Linear,
            count_text: None,
            count_text_callback: None,
            single_text: None,
            multiple_text: None,
            show_count: false,
            filter: true,
            link_template: None,
            seed: None,
            extra: HashMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = TagCloudArgs::default().resolve();
        assert_eq!(options.smallest, 12.0);
        assert_eq!(options.largest, 30.0);
        assert_eq!(options.unit, "pt");
        assert_eq!(options.number, 0);
        assert_eq!(options.format, CloudFormat::Flat);
        assert_eq!(options.separator, "\n");
        assert_eq!(options.orderby, OrderBy::Name);
        assert_eq!(options.order, Order::Asc);
        assert!(!options.show_count);
        assert!(options.filter);
    }

    #[test]
    fn test_yaml_args() {
        let yaml = r#"
smallest: 8
largest: 22.5
unit: px
number: 45
format: LIST
orderby: count
order: DESC
show-count: true
topic-count-text:
  singular: "%s post"
  plural: "%s posts"
widget-id: sidebar-1
"#;
        let args: TagCloudArgs = serde_yaml::from_str(yaml).unwrap();
        let options = args.resolve();
        assert_eq!(options.smallest, 8.0);
        assert_eq!(options.largest, 22.5);
        assert_eq!(options.unit, "px");
        assert_eq!(options.number, 45);
        assert_eq!(options.format, CloudFormat::List);
        assert_eq!(options.orderby, OrderBy::Count);
        assert_eq!(options.order, Order::Desc);
        assert!(options.show_count);
        assert_eq!(
            options.count_text.as_ref().map(|t| t.plural.as_str()),
            Some("%s posts")
        );
        assert_eq!(
            options.extra.get("widget-id"),
            Some(&serde_json::Value::String("sidebar-1".to_string()))
        );
    }

    #[test]
    fn test_snake_case_keys() {
        let yaml = r#"
show_count: true
topic_count_text:
  singular: "%s thread"
  plural: "%s threads"
topic_count_text_callback: default_topic_count_text
topic_count_scale_callback: logarithmic
single_text: "%s topic"
multiple_text: "%s topics"
link_template: "/?tag={slug}"
"#;
        let args: TagCloudArgs = serde_yaml::from_str(yaml).unwrap();
        assert!(args.extra.is_empty(), "unexpected keys: {:?}", args.extra);
        let options = args.resolve();
        assert!(options.show_count);
        assert_eq!(
            options.count_text,
            Some(SingularPlural::new("%s thread", "%s threads"))
        );
        assert_eq!(options.count_text_callback, Some(CountTextCallback::Default));
        assert_eq!(options.count_scale, CountScale::Logarithmic);
        assert_eq!(options.single_text.as_deref(), Some("%s topic"));
        assert_eq!(options.multiple_text.as_deref(), Some("%s topics"));
        assert_eq!(options.link_template.as_deref(), Some("/?tag={slug}"));
    }

    #[test]
    fn test_unknown_enumerations_fall_back() {
        let args: TagCloudArgs =
            serde_json::from_str(r#"{"format": "table", "order": "sideways", "orderby": "slug"}"#)
                .unwrap();
        let options = args.resolve();
        assert_eq!(options.format, CloudFormat::Flat);
        assert_eq!(options.order, Order::Asc);
        assert_eq!(options.orderby, OrderBy::Count);
    }

    #[test]
    fn test_random_aliases() {
        assert_eq!(Order::from("RAND"), Order::Rand);
        assert_eq!(Order::from("random"), Order::Rand);
        assert_eq!(Order::from("Descending"), Order::Desc);
    }

    #[test]
    fn test_merge_prefers_overrides() {
        let base = TagCloudArgs {
            smallest: Some(10.0),
            unit: Some("px".to_string()),
            ..Default::default()
        };
        let overrides = TagCloudArgs {
            smallest: Some(14.0),
            number: Some(5),
            ..Default::default()
        };
        let merged = base.merge(overrides);
        assert_eq!(merged.smallest, Some(14.0));
        assert_eq!(merged.unit.as_deref(), Some("px"));
        assert_eq!(merged.number, Some(5));
    }

    #[test]
    fn test_args_serialize_kebab_case() {
        let args = TagCloudArgs {
            show_count: Some(true),
            order: Some(Order::Desc),
            ..Default::default()
        };
        let json = serde_json::to_value(&args).unwrap();
        assert_eq!(json["show-count"], serde_json::Value::Bool(true));
        assert_eq!(json["order"], serde_json::Value::String("desc".to_string()));
    }
}
