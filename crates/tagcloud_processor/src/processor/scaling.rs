/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Linear mapping from (transformed) counts to font sizes.

use super::sorting::OrderedTag;
use tagcloud_core::CountScale;
use tracing::warn;

/// A tag with its transformed and raw counts, alive only for one call.
#[derive(Debug, Clone, Copy)]
pub struct ScaledTag<'a> {
    pub tag: &'a OrderedTag,
    pub scaled: f64,
    pub real: u64,
}

pub fn scale_tags<'a>(tags: &'a [OrderedTag], scale: &CountScale) -> Vec<ScaledTag<'a>> {
    tags.iter()
        .map(|tag| ScaledTag {
            tag,
            scaled: scale.apply(tag.tag.count),
            real: tag.tag.count,
        })
        .collect()
}

/// Interpolation from the scaled-count range onto the font-size range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontScale {
    smallest: f64,
    min_count: f64,
    font_spread: f64,
    step: f64,
}

impl FontScale {
    pub fn new(scaled_counts: &[f64], smallest: f64, largest: f64) -> Self {
        let (min_count, max_count) = if scaled_counts.is_empty() {
            (0.0, 0.0)
        } else {
            scaled_counts
                .iter()
                .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &c| {
                    (lo.min(c), hi.max(c))
                })
        };

        let mut spread = max_count - min_count;
        if spread.is_nan() || spread <= 0.0 {
            spread = 1.0;
        }

        let mut font_spread = largest - smallest;
        if font_spread < 0.0 {
            warn!(smallest, largest, "font size bounds are inverted");
            font_spread = 1.0;
        }

        Self {
            smallest,
            min_count,
            font_spread,
            step: font_spread / spread,
        }
    }

    /// Font size for a scaled count within the observed range.
    pub fn size(&self, scaled: f64) -> f64 {
        let size = self.smallest + (scaled - self.min_count) * self.step;
        size.max(self.smallest).min(self.smallest + self.font_spread)
    }

    /// Whether tags can render at different sizes.
    pub fn varies(&self) -> bool {
        self.font_spread != 0.0
    }
}
