/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! `{placeholder}` expansion for link templates.

use regex::{Captures, Regex};
use std::sync::OnceLock;

fn placeholder() -> &'static Regex {
    static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
    PLACEHOLDER.get_or_init(|| Regex::new(r"\{([a-z_]+)\}").expect("placeholder regex is valid"))
}

/// Replace each `{name}` in `template` with the URL-encoded value `lookup`
/// returns for it. Unknown placeholders are left in place.
pub fn expand(template: &str, lookup: impl Fn(&str) -> Option<String>) -> String {
    placeholder()
        .replace_all(template, |caps: &Captures<'_>| match lookup(&caps[1]) {
            Some(value) => url::form_urlencoded::byte_serialize(value.as_bytes()).collect(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_encodes_values() {
        let out = expand("/?post_type=thread&tag={name}&id={id}", |key| match key {
            "name" => Some("C++ & Rust".to_string()),
            "id" => Some("7".to_string()),
            _ => None,
        });
        assert_eq!(out, "/?post_type=thread&tag=C%2B%2B+%26+Rust&id=7");
    }

    #[test]
    fn test_unknown_placeholder_is_kept() {
        assert_eq!(expand("/t/{unknown}/", |_| None), "/t/{unknown}/");
    }
}
