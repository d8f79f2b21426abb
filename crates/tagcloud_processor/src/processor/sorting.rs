/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use crate::hooks::Hooks;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::cmp::Ordering;
use std::iter::Peekable;
use std::str::Chars;
use tagcloud_core::{Order, OrderBy, Tag, TagCloudOptions};
use tracing::debug;

/// A tag paired with its position in the collection it was taken from.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedTag {
    pub key: usize,
    pub tag: Tag,
}

/// The final tag order.
#[derive(Debug, Clone, PartialEq)]
pub struct Ordered {
    pub tags: Vec<OrderedTag>,
    /// Whether a sort hook supplied the order.
    pub overridden: bool,
}

pub struct Sorter<'a> {
    options: &'a TagCloudOptions,
    hooks: &'a Hooks,
}

impl<'a> Sorter<'a> {
    pub fn new(options: &'a TagCloudOptions, hooks: &'a Hooks) -> Self {
        Self { options, hooks }
    }

    /// Order the tags and apply the item limit.
    ///
    /// A sort hook's replacement is taken verbatim. Otherwise tags are
    /// shuffled, or stably sorted by the configured key and reversed for
    /// descending order. Truncation always happens last.
    pub fn order(&self, tags: &[Tag]) -> Ordered {
        let (mut ordered, overridden) = match self.hooks.sort_override(tags, self.options) {
            Some(replaced) => {
                debug!(count = replaced.len(), "sort hook replaced tag order");
                (keyed(replaced), true)
            }
            None => {
                let mut ordered = keyed(tags.to_vec());
                self.sort(&mut ordered);
                (ordered, false)
            }
        };

        if self.options.number > 0 {
            ordered.truncate(self.options.number);
        }

        Ordered {
            tags: ordered,
            overridden,
        }
    }

    fn sort(&self, tags: &mut [OrderedTag]) {
        if self.options.order == Order::Rand {
            match self.options.seed {
                Some(seed) => tags.shuffle(&mut StdRng::seed_from_u64(seed)),
                None => tags.shuffle(&mut rand::thread_rng()),
            }
            return;
        }

        match self.options.orderby {
            OrderBy::Name => tags.sort_by(|a, b| natural_cmp(&a.tag.name, &b.tag.name)),
            OrderBy::Count => tags.sort_by_key(|t| t.tag.count),
        }

        if self.options.order == Order::Desc {
            tags.reverse();
        }
    }
}

fn keyed(tags: Vec<Tag>) -> Vec<OrderedTag> {
    tags.into_iter()
        .enumerate()
        .map(|(key, tag)| OrderedTag { key, tag })
        .collect()
}

/// Case-insensitive natural ordering: digit runs compare by value, so
/// "tag2" sorts before "tag10".
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut a = a.chars().peekable();
    let mut b = b.chars().peekable();

    loop {
        match (a.peek().copied(), b.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) if x.is_ascii_digit() && y.is_ascii_digit() => {
                let x_run = take_digits(&mut a);
                let y_run = take_digits(&mut b);
                let x_run = x_run.trim_start_matches('0');
                let y_run = y_run.trim_start_matches('0');
                let cmp = x_run.len().cmp(&y_run.len()).then_with(|| x_run.cmp(y_run));
                if cmp != Ordering::Equal {
                    return cmp;
                }
            }
            (Some(x), Some(y)) => {
                let cmp = x.to_lowercase().cmp(y.to_lowercase());
                if cmp != Ordering::Equal {
                    return cmp;
                }
                a.next();
                b.next();
            }
        }
    }
}

fn take_digits(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut run = String::new();
    while let Some(c) = chars.next_if(char::is_ascii_digit) {
        run.push(c);
    }
    run
}
