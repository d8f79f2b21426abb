/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Count text resolution.

use std::borrow::Cow;
use tagcloud_core::{
    CountTextCallback, CountTextFn, Locale, SingularPlural, Tag, TagCloudOptions,
};

/// The strategy chosen for a whole generation call.
#[derive(Debug, Clone)]
pub enum CountLabel<'a> {
    /// Pluralized template filled with the locale-grouped count.
    Template(Cow<'a, SingularPlural>),
    /// Invoked per tag; the result is used verbatim.
    Callback(&'a CountTextFn),
}

pub struct LabelFormatter<'a> {
    label: CountLabel<'a>,
    locale: &'a Locale,
}

impl<'a> LabelFormatter<'a> {
    /// Pick the count-text strategy, in priority order: an explicit template
    /// pair, then a callback, then legacy single/multiple text, then the
    /// locale's default.
    pub fn resolve(options: &'a TagCloudOptions, locale: &'a Locale) -> Self {
        let default = move || CountLabel::Template(Cow::Borrowed(&locale.terms.items));

        let label = if let Some(template) = &options.count_text {
            CountLabel::Template(Cow::Borrowed(template))
        } else if let Some(callback) = &options.count_text_callback {
            match callback {
                CountTextCallback::Default => default(),
                CountTextCallback::Custom(f) => CountLabel::Callback(f),
            }
        } else if let (Some(single), Some(multiple)) =
            (&options.single_text, &options.multiple_text)
        {
            CountLabel::Template(Cow::Owned(SingularPlural::new(single, multiple)))
        } else {
            default()
        };

        Self { label, locale }
    }

    pub fn label(&self) -> &CountLabel<'a> {
        &self.label
    }

    /// Count text for one tag's raw count.
    pub fn format(&self, count: u64, tag: &Tag, options: &TagCloudOptions) -> String {
        match &self.label {
            CountLabel::Template(template) => self.locale.count_text(template, count),
            CountLabel::Callback(f) => f.call(count, tag, options),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn format(options: &TagCloudOptions, count: u64) -> String {
        let locale = Locale::en_us();
        let tag = Tag::new(1, "rust", count);
        LabelFormatter::resolve(options, &locale).format(count, &tag, options)
    }

    #[test]
    fn test_default_template() {
        let options = TagCloudOptions::default();
        assert_eq!(format(&options, 1), "1 item");
        assert_eq!(format(&options, 5), "5 items");
        assert_eq!(format(&options, 12000), "12,000 items");
    }

    #[test]
    fn test_explicit_template_wins_over_callback() {
        let options = TagCloudOptions {
            count_text: Some(SingularPlural::new("%s post", "%s posts")),
            count_text_callback: Some(CountTextCallback::custom(|_, _, _| "never".into())),
            ..Default::default()
        };
        assert_eq!(format(&options, 1), "1 post");
        assert_eq!(format(&options, 2), "2 posts");
    }

    #[test]
    fn test_callback_receives_tag() {
        let options = TagCloudOptions {
            count_text_callback: Some(CountTextCallback::custom(|count, tag, _| {
                format!("{} uses of {}", count, tag.name)
            })),
            single_text: Some("%s thing".into()),
            multiple_text: Some("%s things".into()),
            ..Default::default()
        };
        assert_eq!(format(&options, 3), "3 uses of rust");
    }

    #[test]
    fn test_named_default_callback() {
        let options = TagCloudOptions {
            count_text_callback: Some(CountTextCallback::Default),
            single_text: Some("%s thing".into()),
            multiple_text: Some("%s things".into()),
            ..Default::default()
        };
        assert_eq!(format(&options, 2), "2 items");
    }

    #[test]
    fn test_legacy_single_multiple_text() {
        let options = TagCloudOptions {
            single_text: Some("%s topic".into()),
            multiple_text: Some("%s topics".into()),
            ..Default::default()
        };
        assert_eq!(format(&options, 1), "1 topic");
        assert_eq!(format(&options, 4), "4 topics");

        let only_single = TagCloudOptions {
            single_text: Some("%s topic".into()),
            ..Default::default()
        };
        assert_eq!(format(&only_single, 4), "4 items");
    }
}
