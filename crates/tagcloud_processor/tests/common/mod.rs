/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

#![allow(dead_code)]

use tagcloud_core::{CloudFormat, Tag, TagCloudOptions};
use tagcloud_processor::{Processor, TagData};

// --- Helper Functions for Test Data Construction ---

/// Create a linked tag.
pub fn make_tag(id: u64, name: &str, count: u64) -> Tag {
    Tag::new(id, name, count).with_url(&format!("/tag/{}/", tagcloud_core::tag::slugify(name)))
}

/// Create linked tags from `(name, count)` pairs, numbering ids from 1.
pub fn make_tags(specs: &[(&str, u64)]) -> Vec<Tag> {
    specs
        .iter()
        .enumerate()
        .map(|(i, (name, count))| make_tag(i as u64 + 1, name, *count))
        .collect()
}

pub fn array_options() -> TagCloudOptions {
    TagCloudOptions {
        format: CloudFormat::Array,
        ..Default::default()
    }
}

/// Records for `tags` from a default processor.
pub fn records(tags: &[Tag], options: &TagCloudOptions) -> Vec<TagData> {
    Processor::new().tag_data::<tagcloud_processor::Html>(tags, options)
}

pub fn names(records: &[TagData]) -> Vec<String> {
    records.iter().map(|r| r.name.clone()).collect()
}
