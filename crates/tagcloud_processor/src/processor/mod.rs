/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! The tag cloud processor.
//!
//! ## Pipeline
//!
//! Data flows strictly one way:
//!
//! 1. [`LabelFormatter::resolve`] picks the count-text strategy once.
//! 2. [`Sorter`] orders the tags (or takes a sort hook's order) and applies
//!    the item limit.
//! 3. [`FontScale`] maps transformed counts onto the font-size range.
//! 4. [`Renderer`] builds one [`TagData`] record per tag; `tag_data` hooks
//!    may rewrite the list.
//! 5. Records become links and are assembled into the requested format;
//!    `output` hooks get the last word when `filter` is on.
//!
//! Everything is local to one call, so a `Processor` can be shared freely.

pub mod labels;
pub mod rendering;
pub mod scaling;
pub mod sorting;


use crate::hooks::Hooks;
use crate::render::html::Html;
use crate::render::{assemble, CloudOutput, Markup, TagData};
use tagcloud_core::{Locale, Tag, TagCloudArgs, TagCloudOptions};
use tracing::debug;

pub use self::labels::{CountLabel, LabelFormatter};
pub use self::rendering::Renderer;
pub use self::scaling::{scale_tags, FontScale, ScaledTag};
pub use self::sorting::{natural_cmp, Ordered, OrderedTag, Sorter};

/// The tag cloud processor.
///
/// Holds the collaborators that outlive a single call: the locale used for
/// count text and the registered hooks.
#[derive(Debug, Default)]
pub struct Processor {
    /// The locale for number grouping and count pluralization.
    pub locale: Locale,
    /// Interception points.
    pub hooks: Hooks,
}

/// Records plus the tags they were built from, in final order.
struct Prepared {
    tags: Vec<Tag>,
    data: Vec<TagData>,
}

impl Processor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_locale(locale: Locale) -> Self {
        Self {
            locale,
            ..Default::default()
        }
    }

    pub fn with_hooks(mut self, hooks: Hooks) -> Self {
        self.hooks = hooks;
        self
    }

    /// Generate an HTML tag cloud.
    pub fn generate(&self, tags: &[Tag], options: &TagCloudOptions) -> CloudOutput {
        self.generate_with::<Html>(tags, options)
    }

    /// Generate a tag cloud with the given markup.
    ///
    /// Returns the empty value for the requested format when `tags` is
    /// empty or a sort hook leaves nothing to render.
    pub fn generate_with<F: Markup>(&self, tags: &[Tag], options: &TagCloudOptions) -> CloudOutput {
        let markup = F::default();
        let Some(prepared) = self.prepare(tags, options, &markup) else {
            return CloudOutput::empty(options.format);
        };

        let links: Vec<String> = prepared
            .data
            .iter()
            .enumerate()
            .map(|(position, data)| data.to_link(&markup, position, &options.unit))
            .collect();

        let output = assemble(&markup, links, options);
        debug!(
            tags = prepared.data.len(),
            format = ?options.format,
            "generated tag cloud"
        );

        if options.filter {
            self.hooks.apply_output(output, &prepared.tags, options)
        } else {
            output
        }
    }

    /// The per-tag records a cloud would be rendered from, after `tag_data`
    /// hooks.
    pub fn tag_data<F: Markup>(&self, tags: &[Tag], options: &TagCloudOptions) -> Vec<TagData> {
        self.prepare(tags, options, &F::default())
            .map(|prepared| prepared.data)
            .unwrap_or_default()
    }

    fn prepare<F: Markup>(
        &self,
        tags: &[Tag],
        options: &TagCloudOptions,
        markup: &F,
    ) -> Option<Prepared> {
        if tags.is_empty() {
            debug!("no tags to render");
            return None;
        }

        let labels = LabelFormatter::resolve(options, &self.locale);

        let ordered = Sorter::new(options, &self.hooks).order(tags);
        if ordered.tags.is_empty() {
            debug!(overridden = ordered.overridden, "no tags left after ordering");
            return None;
        }

        let scaled = scale_tags(&ordered.tags, &options.count_scale);
        let counts: Vec<f64> = scaled.iter().map(|s| s.scaled).collect();
        let scale = FontScale::new(&counts, options.smallest, options.largest);

        let renderer = Renderer::new(options, &labels, &scale, markup);
        let data = scaled.iter().map(|s| renderer.tag_data(s)).collect();
        let data = self.hooks.apply_tag_data(data);

        Some(Prepared {
            tags: ordered.tags.into_iter().map(|o| o.tag).collect(),
            data,
        })
    }
}

/// Generate an HTML tag cloud with a default processor.
pub fn generate_tag_cloud(tags: &[Tag], args: TagCloudArgs) -> CloudOutput {
    Processor::default().generate(tags, &args.resolve())
}
