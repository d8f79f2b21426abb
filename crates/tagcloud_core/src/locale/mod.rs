/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Locale support for count text.
//!
//! A locale provides the digit grouping used when a count is shown to
//! readers, the plural rule that selects between singular and plural
//! templates, and the built-in "%s item" / "%s items" templates.

pub mod types;

use crate::error::CoreError;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;
pub use types::*;

fn default_grouping() -> String {
    ",".to_string()
}

/// A locale definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub struct Locale {
    /// The locale identifier (e.g., "en-US", "de-DE").
    pub locale: String,
    /// Thousands separator.
    #[serde(default = "default_grouping", alias = "grouping_separator")]
    pub grouping_separator: String,
    #[serde(default, alias = "plural_rule")]
    pub plural_rule: PluralRule,
    #[serde(default)]
    pub terms: Terms,
}

impl Default for Locale {
    fn default() -> Self {
        Self::en_us()
    }
}

impl Locale {
    pub fn en_us() -> Self {
        Self {
            locale: "en-US".into(),
            grouping_separator: ",".into(),
            plural_rule: PluralRule::OneOther,
            terms: Terms::en_us(),
        }
    }

    pub fn de_de() -> Self {
        Self {
            locale: "de-DE".into(),
            grouping_separator: ".".into(),
            plural_rule: PluralRule::OneOther,
            terms: Terms {
                items: SingularPlural::new("%s Eintrag", "%s Einträge"),
            },
        }
    }

    pub fn fr_fr() -> Self {
        Self {
            locale: "fr-FR".into(),
            grouping_separator: "\u{202F}".into(),
            plural_rule: PluralRule::ZeroOne,
            terms: Terms {
                items: SingularPlural::new("%s élément", "%s éléments"),
            },
        }
    }

    /// Look up a built-in locale by identifier or base language.
    pub fn builtin(locale_id: &str) -> Option<Self> {
        let base = locale_id.split(['-', '_']).next().unwrap_or(locale_id);
        match base.to_ascii_lowercase().as_str() {
            "en" => Some(Self::en_us()),
            "de" => Some(Self::de_de()),
            "fr" => Some(Self::fr_fr()),
            _ => None,
        }
    }

    /// Group the digits of `n` in threes.
    pub fn format_number(&self, n: u64) -> String {
        let digits = n.to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3 * 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push_str(&self.grouping_separator);
            }
            out.push(c);
        }
        out
    }

    /// Select the inflected template for `n`, not yet interpolated.
    pub fn plural<'a>(&self, template: &'a SingularPlural, n: u64) -> &'a str {
        if self.plural_rule.is_singular(n) {
            &template.singular
        } else {
            &template.plural
        }
    }

    /// Select the template for `n` and substitute the grouped number for `%s`.
    pub fn count_text(&self, template: &SingularPlural, n: u64) -> String {
        let number = self.format_number(n);
        self.plural(template, n)
            .replace("%1$s", &number)
            .replace("%s", &number)
    }

    /// Load a locale from a YAML string.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, CoreError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load locale from a file path directly.
    pub fn from_yaml_file(path: &Path) -> Result<Self, CoreError> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&yaml)
    }

    /// Load a locale by ID (e.g., "en-US", "de-DE") from a locales directory.
    ///
    /// Tries `<id>.yaml`, then any file for the base language, then the
    /// built-in locales, and finally en-US.
    pub fn load(locale_id: &str, locales_dir: &Path) -> Self {
        let file_path = locales_dir.join(format!("{}.yaml", locale_id));

        if file_path.exists() {
            match Self::from_yaml_file(&file_path) {
                Ok(locale) => return locale,
                Err(e) => {
                    warn!(locale = locale_id, error = %e, "failed to load locale file");
                }
            }
        }

        if let Some(base) = locale_id.split('-').next().filter(|_| locale_id.contains('-')) {
            if let Ok(entries) = std::fs::read_dir(locales_dir) {
                for entry in entries.flatten() {
                    let name = entry.file_name();
                    let name_str = name.to_string_lossy();
                    if name_str.starts_with(base) && name_str.ends_with(".yaml") {
                        if let Ok(locale) = Self::from_yaml_file(&entry.path()) {
                            return locale;
                        }
                    }
                }
            }
        }

        Self::builtin(locale_id).unwrap_or_else(|| {
            warn!(locale = locale_id, "unknown locale, falling back to en-US");
            Self::en_us()
        })
    }
}
