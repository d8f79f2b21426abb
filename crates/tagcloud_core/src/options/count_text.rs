/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Count-text callbacks.

use super::TagCloudOptions;
use crate::tag::Tag;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

type CountTextFnInner = dyn Fn(u64, &Tag, &TagCloudOptions) -> String + Send + Sync;

/// A caller-supplied function producing the count text for one tag.
///
/// Receives the tag's raw count, the tag itself and the resolved options.
/// Its return value is used verbatim.
#[derive(Clone)]
pub struct CountTextFn(pub Arc<CountTextFnInner>);

impl CountTextFn {
    pub fn new(f: impl Fn(u64, &Tag, &TagCloudOptions) -> String + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    pub fn call(&self, count: u64, tag: &Tag, options: &TagCloudOptions) -> String {
        (self.0)(count, tag, options)
    }
}

impl fmt::Debug for CountTextFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CountTextFn(..)")
    }
}

impl PartialEq for CountTextFn {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// How the count text is produced when no explicit template pair is given.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(from = "String", rename_all = "kebab-case")]
pub enum CountTextCallback {
    /// The built-in "%s item" / "%s items" templates.
    /// Registered as `default_topic_count_text`.
    #[default]
    Default,
    #[serde(skip)]
    #[cfg_attr(feature = "schema", schemars(skip))]
    Custom(CountTextFn),
}

impl CountTextCallback {
    pub const DEFAULT_NAME: &'static str = "default_topic_count_text";

    pub fn custom(
        f: impl Fn(u64, &Tag, &TagCloudOptions) -> String + Send + Sync + 'static,
    ) -> Self {
        CountTextCallback::Custom(CountTextFn::new(f))
    }
}

impl From<String> for CountTextCallback {
    fn from(_name: String) -> Self {
        // Named callbacks cannot be resolved from configuration; only the
        // registered default is addressable by name.
        CountTextCallback::Default
    }
}
