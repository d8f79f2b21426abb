/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Markup trait for pluggable renderers.

/// The parts of one tag link, unescaped.
///
/// `count_badge` is the only field that already holds markup; it was
/// produced by the same [`Markup`] implementation.
#[derive(Debug, Clone, Copy)]
pub struct Link<'a> {
    pub url: &'a str,
    /// Empty, or an ARIA role such as "button".
    pub role: &'a str,
    pub class: &'a str,
    /// Size with its unit, e.g. "16.5pt".
    pub font_size: &'a str,
    pub aria_label: Option<&'a str>,
    pub name: &'a str,
    pub count_badge: &'a str,
}

/// Trait for defining how tag links and lists are written in a target markup.
///
/// Implementations own escaping: every raw string reaches the output only
/// through `escape_attr`, `escape_url` or `escape_text`, chosen by the
/// context it lands in.
pub trait Markup: Default + Clone {
    /// Escape text for use inside a quoted attribute value.
    fn escape_attr(&self, s: &str) -> String;

    /// Sanitize and escape a URL for use in an `href`.
    fn escape_url(&self, s: &str) -> String;

    /// Escape visible body text.
    fn escape_text(&self, s: &str) -> String;

    /// Render the visible count shown after a tag name.
    fn count_badge(&self, count: u64) -> String;

    /// Render one tag link.
    fn link(&self, link: &Link<'_>) -> String;

    /// Wrap rendered links in a list container, one item per link.
    fn list(&self, items: &[String]) -> String;
}
