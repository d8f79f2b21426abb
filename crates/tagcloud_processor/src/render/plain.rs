/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Plain text output format.

use super::format::{Link, Markup};

#[derive(Default, Clone)]
pub struct PlainText;

impl Markup for PlainText {
    fn escape_attr(&self, s: &str) -> String {
        s.to_string()
    }

    fn escape_url(&self, s: &str) -> String {
        s.to_string()
    }

    fn escape_text(&self, s: &str) -> String {
        s.to_string()
    }

    fn count_badge(&self, count: u64) -> String {
        format!(" ({})", count)
    }

    fn link(&self, link: &Link<'_>) -> String {
        // Plain text just renders the text content of the link
        format!("{}{}", link.name, link.count_badge)
    }

    fn list(&self, items: &[String]) -> String {
        items.iter().map(|item| format!("- {}\n", item)).collect()
    }
}
