/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A template with singular and plural forms, e.g. "%s item" / "%s items".
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SingularPlural {
    /// Singular form.
    pub singular: String,
    /// Plural form.
    pub plural: String,
}

impl SingularPlural {
    pub fn new(singular: &str, plural: &str) -> Self {
        Self {
            singular: singular.to_string(),
            plural: plural.to_string(),
        }
    }
}

/// Plural selection rule for a language.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub enum PluralRule {
    /// Singular only for exactly one (English, German).
    #[default]
    OneOther,
    /// Singular for zero and one (French).
    ZeroOne,
    /// No plural distinction (Japanese, Chinese).
    Invariant,
}

impl PluralRule {
    pub fn is_singular(&self, n: u64) -> bool {
        match self {
            PluralRule::OneOther => n == 1,
            PluralRule::ZeroOne => n <= 1,
            PluralRule::Invariant => true,
        }
    }
}

/// Terms used by the tag cloud.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub struct Terms {
    /// Default count text.
    pub items: SingularPlural,
}

impl Default for Terms {
    fn default() -> Self {
        Self::en_us()
    }
}

impl Terms {
    pub fn en_us() -> Self {
        Self {
            items: SingularPlural::new("%s item", "%s items"),
        }
    }
}
