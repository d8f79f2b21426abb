/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Interception points in the generation pipeline.
//!
//! Each point holds an ordered list of closures. They run synchronously, in
//! registration order, at a fixed place in the pipeline, and each receives
//! the value produced by the one before it.
//!
//! | Point              | Runs                                  |
//! |--------------------|---------------------------------------|
//! | `sort`             | before ordering; may replace it       |
//! | `tag_data`         | after per-tag records are built       |
//! | `output`           | after assembly, when `filter` is on   |
//! | `shortcode_output` | after the shortcode renders its cloud |

use crate::render::{CloudOutput, TagData};
use std::fmt;
use tagcloud_core::{ShortcodeArgs, Tag, TagCloudOptions};

/// Returns `Some` to replace the ordering outright.
pub type SortHook = Box<dyn Fn(&[Tag], &TagCloudOptions) -> Option<Vec<Tag>> + Send + Sync>;
pub type TagDataHook = Box<dyn Fn(Vec<TagData>) -> Vec<TagData> + Send + Sync>;
pub type OutputHook =
    Box<dyn Fn(CloudOutput, &[Tag], &TagCloudOptions) -> CloudOutput + Send + Sync>;
pub type ShortcodeHook = Box<dyn Fn(CloudOutput, &ShortcodeArgs) -> CloudOutput + Send + Sync>;

#[derive(Default)]
pub struct Hooks {
    sort: Vec<SortHook>,
    tag_data: Vec<TagDataHook>,
    output: Vec<OutputHook>,
    shortcode_output: Vec<ShortcodeHook>,
}

impl fmt::Debug for Hooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks")
            .field("sort", &self.sort.len())
            .field("tag_data", &self.tag_data.len())
            .field("output", &self.output.len())
            .field("shortcode_output", &self.shortcode_output.len())
            .finish()
    }
}

impl Hooks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_sort(
        mut self,
        f: impl Fn(&[Tag], &TagCloudOptions) -> Option<Vec<Tag>> + Send + Sync + 'static,
    ) -> Self {
        self.sort.push(Box::new(f));
        self
    }

    pub fn on_tag_data(
        mut self,
        f: impl Fn(Vec<TagData>) -> Vec<TagData> + Send + Sync + 'static,
    ) -> Self {
        self.tag_data.push(Box::new(f));
        self
    }

    pub fn on_output(
        mut self,
        f: impl Fn(CloudOutput, &[Tag], &TagCloudOptions) -> CloudOutput + Send + Sync + 'static,
    ) -> Self {
        self.output.push(Box::new(f));
        self
    }

    pub fn on_shortcode_output(
        mut self,
        f: impl Fn(CloudOutput, &ShortcodeArgs) -> CloudOutput + Send + Sync + 'static,
    ) -> Self {
        self.shortcode_output.push(Box::new(f));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.sort.is_empty()
            && self.tag_data.is_empty()
            && self.output.is_empty()
            && self.shortcode_output.is_empty()
    }

    /// Run the sort hooks. `Some` means at least one hook replaced the order.
    pub fn sort_override(&self, tags: &[Tag], options: &TagCloudOptions) -> Option<Vec<Tag>> {
        let mut replaced: Option<Vec<Tag>> = None;
        for hook in &self.sort {
            let current = replaced.as_deref().unwrap_or(tags);
            if let Some(next) = hook(current, options) {
                replaced = Some(next);
            }
        }
        replaced
    }

    pub fn apply_tag_data(&self, data: Vec<TagData>) -> Vec<TagData> {
        self.tag_data.iter().fold(data, |acc, hook| hook(acc))
    }

    pub fn apply_output(
        &self,
        output: CloudOutput,
        tags: &[Tag],
        options: &TagCloudOptions,
    ) -> CloudOutput {
        self.output
            .iter()
            .fold(output, |acc, hook| hook(acc, tags, options))
    }

    pub fn apply_shortcode_output(&self, output: CloudOutput, args: &ShortcodeArgs) -> CloudOutput {
        self.shortcode_output
            .iter()
            .fold(output, |acc, hook| hook(acc, args))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_sort_hooks_means_no_override() {
        let hooks = Hooks::new();
        let tags = vec![Tag::new(1, "a", 1)];
        assert!(hooks.is_empty());
        assert_eq!(hooks.sort_override(&tags, &TagCloudOptions::default()), None);
    }

    #[test]
    fn test_sort_hooks_chain() {
        let hooks = Hooks::new()
            .on_sort(|tags, _| {
                let mut tags = tags.to_vec();
                tags.reverse();
                Some(tags)
            })
            .on_sort(|_, _| None)
            .on_sort(|tags, _| Some(tags[..1].to_vec()));
        let tags = vec![Tag::new(1, "a", 1), Tag::new(2, "b", 1)];
        let replaced = hooks
            .sort_override(&tags, &TagCloudOptions::default())
            .unwrap();
        assert_eq!(replaced.len(), 1);
        assert_eq!(replaced[0].name, "b");
    }

    #[test]
    fn test_output_hooks_fold_in_order() {
        let hooks = Hooks::new()
            .on_output(|out, _, _| CloudOutput::Text(format!("{}1", out)))
            .on_output(|out, _, _| CloudOutput::Text(format!("{}2", out)));
        let out = hooks.apply_output(
            CloudOutput::Text("x".into()),
            &[],
            &TagCloudOptions::default(),
        );
        assert_eq!(out, CloudOutput::Text("x12".into()));
    }
}
