/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use super::labels::LabelFormatter;
use super::scaling::{FontScale, ScaledTag};
use crate::render::{template, Markup, TagData};
use tagcloud_core::tag::NO_LINK;
use tagcloud_core::{Tag, TagCloudOptions};
use tracing::trace;

/// Builds the per-tag records for one generation call.
pub struct Renderer<'a, F: Markup> {
    options: &'a TagCloudOptions,
    labels: &'a LabelFormatter<'a>,
    scale: &'a FontScale,
    markup: &'a F,
    aria_label: bool,
}

impl<'a, F: Markup> Renderer<'a, F> {
    pub fn new(
        options: &'a TagCloudOptions,
        labels: &'a LabelFormatter<'a>,
        scale: &'a FontScale,
        markup: &'a F,
    ) -> Self {
        // Labels mirror what is shown visually: varying sizes or counts.
        let aria_label = options.show_count || scale.varies();
        Self {
            options,
            labels,
            scale,
            markup,
            aria_label,
        }
    }

    pub fn tag_data(&self, scaled: &ScaledTag<'_>) -> TagData {
        let tag = &scaled.tag.tag;
        let id = tag
            .id
            .map(|id| id.to_string())
            .unwrap_or_else(|| scaled.tag.key.to_string());

        let formatted_count = self.labels.format(scaled.real, tag, self.options);

        let (url, role) = if tag.is_button() {
            (NO_LINK.to_string(), "button".to_string())
        } else {
            (self.href(tag, &id), String::new())
        };

        let font_size = self.scale.size(scaled.scaled);
        trace!(tag = %tag.name, count = scaled.real, font_size, "scaled tag");

        TagData {
            aria_label: self
                .aria_label
                .then(|| format!("{} ({})", tag.name, formatted_count)),
            count_badge: if self.options.show_count {
                self.markup.count_badge(scaled.real)
            } else {
                String::new()
            },
            class: format!("tag-cloud-link tag-link-{}", id),
            id,
            url,
            role,
            name: tag.name.clone(),
            slug: tag.slug.clone(),
            formatted_count,
            real_count: scaled.real,
            font_size,
        }
    }

    fn href(&self, tag: &Tag, id: &str) -> String {
        match &self.options.link_template {
            Some(link_template) => template::expand(link_template, |key| match key {
                "slug" => Some(tag.slug.clone()),
                "name" => Some(tag.name.clone()),
                "id" => Some(id.to_string()),
                _ => None,
            }),
            None => tag.url.clone(),
        }
    }
}
