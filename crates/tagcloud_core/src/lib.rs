/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Tag Cloud Core
//!
//! Shared data model for tag cloud generation: the [`Tag`] records handed in
//! by a tag source, the partial [`TagCloudArgs`] a caller supplies, the fully
//! resolved [`TagCloudOptions`] the processor consumes, and the [`Locale`]
//! used for number grouping and count pluralization.
//!
//! # Example
//!
//! ```rust
//! use tagcloud_core::{CloudFormat, TagCloudArgs};
//!
//! let yaml = r#"
//! smallest: 10
//! largest: 20
//! format: list
//! order: DESC
//! "#;
//! let args: TagCloudArgs = serde_yaml::from_str(yaml).unwrap();
//! let options = args.resolve();
//! assert_eq!(options.format, CloudFormat::List);
//! assert_eq!(options.unit, "pt");
//! ```

pub mod error;
pub mod locale;
pub mod options;
pub mod tag;

pub use error::CoreError;
pub use locale::{Locale, PluralRule, SingularPlural};
pub use options::{
    CloudFormat, CountScale, CountTextCallback, CountTextFn, LinkMode, Order, OrderBy, ScaleFn,
    ShortcodeArgs, TagCloudArgs, TagCloudOptions,
};
pub use tag::Tag;
