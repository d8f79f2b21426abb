/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tagcloud_core::tag::slugify;
use tagcloud_core::{ShortcodeArgs, Tag, TagCloudArgs};

use crate::ProcessorError;

/// The shapes a tag file may take.
#[derive(Deserialize)]
#[serde(untagged)]
enum InputTags {
    List(Vec<Tag>),
    Wrapped { tags: Vec<Tag> },
    /// Keyed by slug.
    Keyed(IndexMap<String, Tag>),
}

impl From<InputTags> for Vec<Tag> {
    fn from(input: InputTags) -> Self {
        match input {
            InputTags::List(tags) | InputTags::Wrapped { tags } => tags,
            InputTags::Keyed(map) => map
                .into_iter()
                .map(|(key, mut tag)| {
                    if tag.slug.is_empty() {
                        tag.slug = key;
                    }
                    tag
                })
                .collect(),
        }
    }
}

/// Parse `bytes` as JSON or YAML, picked by extension (YAML by default).
fn parse<T: DeserializeOwned>(path: &Path, bytes: &[u8]) -> Result<T, ProcessorError> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("yaml");
    match ext {
        "json" => serde_json::from_slice(bytes)
            .map_err(|e| ProcessorError::ParseError("JSON".to_string(), e.to_string())),
        _ => {
            let content = String::from_utf8_lossy(bytes);
            serde_yaml::from_str(&content)
                .map_err(|e| ProcessorError::ParseError("YAML".to_string(), e.to_string()))
        }
    }
}

/// Load tags from a file.
///
/// Accepts a list of tags, a `tags:` mapping wrapping that list, or a map
/// keyed by slug. Tags without a slug get one from their name.
pub fn load_tags(path: &Path) -> Result<Vec<Tag>, ProcessorError> {
    let bytes = fs::read(path)?;
    let input: InputTags = parse(path, &bytes)?;
    let mut tags: Vec<Tag> = input.into();
    for tag in &mut tags {
        if tag.slug.is_empty() {
            tag.slug = slugify(&tag.name);
        }
    }
    Ok(tags)
}

/// Load tag cloud arguments from a file.
pub fn load_args(path: &Path) -> Result<TagCloudArgs, ProcessorError> {
    let bytes = fs::read(path)?;
    parse(path, &bytes)
}

/// Load shortcode arguments from a file.
pub fn load_shortcode_args(path: &Path) -> Result<ShortcodeArgs, ProcessorError> {
    let bytes = fs::read(path)?;
    parse(path, &bytes)
}
