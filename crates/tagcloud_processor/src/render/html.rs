/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! HTML output format.

use super::format::{Link, Markup};
use regex::{Captures, Regex};
use std::sync::OnceLock;
use url::Url;

/// Schemes allowed in hrefs; anything else is dropped.
const ALLOWED_SCHEMES: &[&str] = &[
    "http", "https", "ftp", "ftps", "mailto", "news", "irc", "gopher", "nntp", "feed", "telnet",
    "mms", "rtsp", "sms", "svn", "tel", "fax", "xmpp", "webcal", "urn",
];

/// A bare `&`, or a complete character reference to leave as is.
fn ampersand() -> &'static Regex {
    static AMPERSAND: OnceLock<Regex> = OnceLock::new();
    AMPERSAND.get_or_init(|| {
        Regex::new(r"&(?:#[0-9]+|#[xX][0-9a-fA-F]+|[A-Za-z][A-Za-z0-9]*);|&")
            .expect("ampersand regex is valid")
    })
}

#[derive(Default, Clone)]
pub struct Html;

impl Html {
    fn escape(s: &str) -> String {
        let mut out = String::with_capacity(s.len());
        for c in s.chars() {
            match c {
                '&' => out.push_str("&amp;"),
                '<' => out.push_str("&lt;"),
                '>' => out.push_str("&gt;"),
                '"' => out.push_str("&quot;"),
                '\'' => out.push_str("&#039;"),
                _ => out.push(c),
            }
        }
        out
    }

    /// The scheme of `s`, if it has one.
    fn scheme(s: &str) -> Option<&str> {
        let (scheme, _) = s.split_once(':')?;
        let mut chars = scheme.chars();
        let first = chars.next()?;
        if first.is_ascii_alphabetic()
            && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        {
            Some(scheme)
        } else {
            None
        }
    }

    fn percent_encode_unsafe(s: &str) -> String {
        let mut out = String::with_capacity(s.len());
        for c in s.chars() {
            if c.is_ascii_control()
                || !c.is_ascii()
                || matches!(c, ' ' | '"' | '<' | '>' | '\\' | '^' | '`' | '{' | '|' | '}')
            {
                let mut buf = [0u8; 4];
                for b in c.encode_utf8(&mut buf).bytes() {
                    out.push_str(&format!("%{:02X}", b));
                }
            } else {
                out.push(c);
            }
        }
        out
    }
}

impl Markup for Html {
    fn escape_attr(&self, s: &str) -> String {
        Self::escape(s)
    }

    fn escape_url(&self, s: &str) -> String {
        let s = s.trim();
        if s.is_empty() {
            return String::new();
        }

        let normalized = match Self::scheme(s) {
            Some(scheme) => {
                if !ALLOWED_SCHEMES.contains(&scheme.to_ascii_lowercase().as_str()) {
                    return String::new();
                }
                match Url::parse(s) {
                    Ok(url) => url.to_string(),
                    Err(_) => Self::percent_encode_unsafe(s),
                }
            }
            None => Self::percent_encode_unsafe(s),
        };

        ampersand()
            .replace_all(&normalized, |caps: &Captures<'_>| {
                if caps[0].len() == 1 {
                    "&amp;".to_string()
                } else {
                    caps[0].to_string()
                }
            })
            .replace('\'', "&#039;")
    }

    fn escape_text(&self, s: &str) -> String {
        Self::escape(s)
    }

    fn count_badge(&self, count: u64) -> String {
        format!(r#"<span class="tag-link-count"> ({})</span>"#, count)
    }

    fn link(&self, link: &Link<'_>) -> String {
        let role = if link.role.is_empty() {
            String::new()
        } else {
            format!(r#" role="{}""#, self.escape_attr(link.role))
        };
        let aria_label = link
            .aria_label
            .map(|label| format!(r#" aria-label="{}""#, self.escape_attr(label)))
            .unwrap_or_default();

        format!(
            r#"<a href="{}"{} class="{}" style="font-size: {};"{}>{}{}</a>"#,
            self.escape_url(link.url),
            role,
            self.escape_attr(link.class),
            self.escape_attr(link.font_size),
            aria_label,
            self.escape_text(link.name),
            link.count_badge
        )
    }

    fn list(&self, items: &[String]) -> String {
        // Explicit role; list-style: none drops the implicit one.
        let mut out = String::from("<ul class='tag-cloud' role='list'>\n\t<li>");
        out.push_str(&items.join("</li>\n\t<li>"));
        out.push_str("</li>\n</ul>\n");
        out
    }
}
