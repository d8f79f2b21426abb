/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Rendering of tag records into links and assembled cloud output.

pub mod format;
pub mod html;
pub mod plain;
pub mod template;

pub use format::{Link, Markup};
use serde::{Deserialize, Serialize};
use std::fmt;
use tagcloud_core::{CloudFormat, TagCloudOptions};

/// Fully resolved presentation data for one tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagData {
    /// The tag's identifier, or its input position when it has none.
    pub id: String,
    pub url: String,
    /// Empty, or "button" when the tag has no destination.
    pub role: String,
    pub name: String,
    pub slug: String,
    /// Count text, e.g. "1,024 items".
    pub formatted_count: String,
    pub real_count: u64,
    /// Base classes; the positional class is added when the link is rendered.
    pub class: String,
    /// Unit-less font size.
    pub font_size: f64,
    /// "name (count text)", present only when sizes vary or counts show.
    pub aria_label: Option<String>,
    /// Visible count markup, empty unless counts are shown.
    pub count_badge: String,
}

impl TagData {
    /// Render this record as a link at `position` (0-based) in the cloud.
    pub fn to_link<F: Markup>(&self, markup: &F, position: usize, unit: &str) -> String {
        let class = format!("{} tag-link-position-{}", self.class, position + 1);
        let font_size = format!("{}{}", format_font_size(self.font_size), unit);
        markup.link(&Link {
            url: &self.url,
            role: &self.role,
            class: &class,
            font_size: &font_size,
            aria_label: self.aria_label.as_deref(),
            name: &self.name,
            count_badge: &self.count_badge,
        })
    }
}

/// Format a font size with a `.` decimal point and at most three decimals.
pub fn format_font_size(size: f64) -> String {
    let rounded = (size * 1000.0).round() / 1000.0;
    format!("{}", rounded)
}

/// The generated cloud.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CloudOutput {
    /// Flat or list format.
    Text(String),
    /// Array format: one link per tag.
    Links(Vec<String>),
}

impl CloudOutput {
    /// The empty value for a format.
    pub fn empty(format: CloudFormat) -> Self {
        match format {
            CloudFormat::Array => CloudOutput::Links(Vec::new()),
            CloudFormat::Flat | CloudFormat::List => CloudOutput::Text(String::new()),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            CloudOutput::Text(s) => s.is_empty(),
            CloudOutput::Links(links) => links.is_empty(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CloudOutput::Text(s) => Some(s),
            CloudOutput::Links(_) => None,
        }
    }

    pub fn as_links(&self) -> Option<&[String]> {
        match self {
            CloudOutput::Text(_) => None,
            CloudOutput::Links(links) => Some(links),
        }
    }
}

impl fmt::Display for CloudOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CloudOutput::Text(s) => f.write_str(s),
            CloudOutput::Links(links) => f.write_str(&links.join("\n")),
        }
    }
}

/// Join rendered links into the requested output shape.
pub fn assemble<F: Markup>(markup: &F, links: Vec<String>, options: &TagCloudOptions) -> CloudOutput {
    match options.format {
        CloudFormat::Array => CloudOutput::Links(links),
        CloudFormat::List => CloudOutput::Text(markup.list(&links)),
        CloudFormat::Flat => CloudOutput::Text(links.join(&options.separator)),
    }
}
