/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! The embeddable tag cloud shortcode.
//!
//! Unlike [`Processor::generate`], the shortcode fetches its own tags: it
//! asks a [`TagSource`] for the most used tags, points each one at a link
//! from a [`LinkResolver`], and then renders them with the regular pipeline
//! (which re-sorts the top tags by the configured key).

use crate::error::ProcessorError;
use crate::processor::{natural_cmp, Processor};
use crate::render::html::Html;
use crate::render::{template, CloudOutput, Markup};
use tagcloud_core::{LinkMode, Order, OrderBy, ShortcodeArgs, Tag};
use tracing::{debug, warn};

/// Parameters for a tag lookup.
#[derive(Debug, Clone, Copy)]
pub struct TagQuery<'a> {
    pub taxonomy: &'a str,
    /// Sources that track post types may restrict to it.
    pub post_type: &'a str,
    pub include: &'a [u64],
    pub exclude: &'a [u64],
    /// 0 means unlimited.
    pub limit: usize,
    pub orderby: OrderBy,
    pub order: Order,
}

/// Where tags come from.
pub trait TagSource {
    fn query(&self, query: &TagQuery<'_>) -> Result<Vec<Tag>, ProcessorError>;
}

impl TagSource for [Tag] {
    fn query(&self, query: &TagQuery<'_>) -> Result<Vec<Tag>, ProcessorError> {
        let mut tags: Vec<Tag> = self
            .iter()
            .filter(|t| t.taxonomy.as_deref().map_or(true, |tx| tx == query.taxonomy))
            .filter(|t| {
                query.include.is_empty() || t.id.is_some_and(|id| query.include.contains(&id))
            })
            .filter(|t| t.id.map_or(true, |id| !query.exclude.contains(&id)))
            .cloned()
            .collect();

        tags.sort_by(|a, b| {
            let cmp = match query.orderby {
                OrderBy::Name => natural_cmp(&a.name, &b.name),
                OrderBy::Count => a.count.cmp(&b.count),
            };
            if query.order == Order::Desc {
                cmp.reverse()
            } else {
                cmp
            }
        });

        if query.limit > 0 {
            tags.truncate(query.limit);
        }
        Ok(tags)
    }
}

impl TagSource for Vec<Tag> {
    fn query(&self, query: &TagQuery<'_>) -> Result<Vec<Tag>, ProcessorError> {
        self.as_slice().query(query)
    }
}

/// Resolves the link a tag points at.
pub trait LinkResolver {
    fn view_link(&self, tag: &Tag) -> Result<String, ProcessorError>;
    fn edit_link(&self, tag: &Tag, post_type: &str) -> Result<String, ProcessorError>;
}

/// Links built from `{slug}`, `{name}`, `{id}`, `{taxonomy}` and
/// `{post_type}` templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkPatterns {
    pub view: String,
    pub edit: String,
}

impl Default for LinkPatterns {
    fn default() -> Self {
        Self {
            view: "/tag/{slug}/".to_string(),
            edit: "/admin/tags/{id}/edit?taxonomy={taxonomy}&post_type={post_type}".to_string(),
        }
    }
}

impl LinkPatterns {
    fn fill(&self, pattern: &str, tag: &Tag, post_type: &str) -> String {
        template::expand(pattern, |key| match key {
            "slug" => Some(tag.slug.clone()),
            "name" => Some(tag.name.clone()),
            "id" => tag.id.map(|id| id.to_string()),
            "taxonomy" => Some(
                tag.taxonomy
                    .clone()
                    .unwrap_or_else(|| ShortcodeArgs::DEFAULT_TAXONOMY.to_string()),
            ),
            "post_type" => Some(post_type.to_string()),
            _ => None,
        })
    }
}

impl LinkResolver for LinkPatterns {
    fn view_link(&self, tag: &Tag) -> Result<String, ProcessorError> {
        if tag.slug.is_empty() && self.view.contains("{slug}") {
            return Err(ProcessorError::Link(tag.name.clone()));
        }
        Ok(self.fill(&self.view, tag, ""))
    }

    fn edit_link(&self, tag: &Tag, post_type: &str) -> Result<String, ProcessorError> {
        if tag.id.is_none() && self.edit.contains("{id}") {
            return Err(ProcessorError::Link(tag.name.clone()));
        }
        Ok(self.fill(&self.edit, tag, post_type))
    }
}

impl Processor {
    /// Render the shortcode as HTML.
    pub fn shortcode(
        &self,
        args: &ShortcodeArgs,
        source: &dyn TagSource,
        links: &dyn LinkResolver,
    ) -> Option<CloudOutput> {
        self.shortcode_with::<Html>(args, source, links)
    }

    /// Render the shortcode with the given markup.
    ///
    /// Returns `None` when the source fails or finds nothing, or when any
    /// tag's link cannot be resolved.
    pub fn shortcode_with<F: Markup>(
        &self,
        args: &ShortcodeArgs,
        source: &dyn TagSource,
        links: &dyn LinkResolver,
    ) -> Option<CloudOutput> {
        let options = args.cloud_options();
        let query = TagQuery {
            taxonomy: args.taxonomy(),
            post_type: args.post_type(),
            include: &args.include,
            exclude: &args.exclude,
            limit: options.number,
            // Always query the top tags.
            orderby: OrderBy::Count,
            order: Order::Desc,
        };

        let mut tags = match source.query(&query) {
            Ok(tags) => tags,
            Err(e) => {
                warn!(error = %e, "tag query failed");
                return None;
            }
        };
        if tags.is_empty() {
            debug!(taxonomy = query.taxonomy, "no tags found");
            return None;
        }

        for tag in &mut tags {
            let link = match args.link_mode() {
                LinkMode::View => links.view_link(tag),
                LinkMode::Edit => links.edit_link(tag, args.post_type()),
            };
            match link {
                Ok(url) => tag.url = url,
                Err(e) => {
                    warn!(error = %e, "link resolution failed");
                    return None;
                }
            }
        }

        let output = self.generate_with::<F>(&tags, &options);
        Some(self.hooks.apply_shortcode_output(output, args))
    }
}
