/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Count transforms applied before font sizes are interpolated.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// A caller-supplied count transform.
#[derive(Clone)]
pub struct ScaleFn(pub Arc<dyn Fn(u64) -> f64 + Send + Sync>);

impl ScaleFn {
    pub fn new(f: impl Fn(u64) -> f64 + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }
}

impl fmt::Debug for ScaleFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ScaleFn(..)")
    }
}

impl PartialEq for ScaleFn {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// Transform from a raw usage count to the value font sizes are spread over.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(from = "String", rename_all = "kebab-case")]
pub enum CountScale {
    /// Identity. Registered as `default_topic_count_scale`.
    #[default]
    Linear,
    /// `round(log10(count + 1) * 100)`.
    Logarithmic,
    #[serde(skip)]
    #[cfg_attr(feature = "schema", schemars(skip))]
    Custom(ScaleFn),
}

impl CountScale {
    /// Name under which the default transform is registered.
    pub const DEFAULT_NAME: &'static str = "default_topic_count_scale";

    pub fn custom(f: impl Fn(u64) -> f64 + Send + Sync + 'static) -> Self {
        CountScale::Custom(ScaleFn::new(f))
    }

    pub fn apply(&self, count: u64) -> f64 {
        match self {
            CountScale::Linear => count as f64,
            CountScale::Logarithmic => ((count as f64 + 1.0).log10() * 100.0).round(),
            CountScale::Custom(f) => (f.0)(count),
        }
    }
}

impl From<&str> for CountScale {
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "logarithmic" | "log" => CountScale::Logarithmic,
            _ => CountScale::Linear,
        }
    }
}

impl From<String> for CountScale {
    fn from(value: String) -> Self {
        CountScale::from(value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_is_identity() {
        assert_eq!(CountScale::Linear.apply(0), 0.0);
        assert_eq!(CountScale::Linear.apply(42), 42.0);
    }

    #[test]
    fn test_logarithmic() {
        assert_eq!(CountScale::Logarithmic.apply(0), 0.0);
        assert_eq!(CountScale::Logarithmic.apply(9), 100.0);
        assert_eq!(CountScale::Logarithmic.apply(99), 200.0);
        // log10(5) * 100 = 69.897
        assert_eq!(CountScale::Logarithmic.apply(4), 70.0);
    }

    #[test]
    fn test_named_default() {
        assert_eq!(CountScale::from(CountScale::DEFAULT_NAME), CountScale::Linear);
        assert_eq!(CountScale::from("LOG"), CountScale::Logarithmic);
    }

    #[test]
    fn test_custom() {
        let scale = CountScale::custom(|c| (c * 2) as f64);
        assert_eq!(scale.apply(21), 42.0);
        assert_eq!(scale.clone(), scale);
    }
}
