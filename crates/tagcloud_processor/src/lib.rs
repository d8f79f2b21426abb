/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Tag Cloud Processor
//!
//! This crate turns a list of tags with usage counts into a tag cloud: each
//! tag becomes a link whose font size grows with its count. Output can be a
//! flat string, an HTML list, or an array of link strings, and every stage
//! of generation can be intercepted through [`Hooks`].
//!
//! # Example
//!
//! ```rust
//! use tagcloud_processor::{generate_tag_cloud, CloudOutput};
//! use tagcloud_core::{Tag, TagCloudArgs};
//!
//! let tags = vec![
//!     Tag::new(1, "rust", 10).with_url("/tag/rust/"),
//!     Tag::new(2, "go", 1).with_url("/tag/go/"),
//! ];
//!
//! let args: TagCloudArgs = serde_yaml::from_str("format: array").unwrap();
//! let cloud = generate_tag_cloud(&tags, args);
//!
//! // Sorted by name: the rarest tag gets the smallest size.
//! let links = cloud.as_links().unwrap();
//! assert_eq!(links.len(), 2);
//! assert!(links[0].contains(">go</a>"));
//! assert!(links[0].contains("font-size: 12pt;"));
//! assert!(links[1].contains("font-size: 30pt;"));
//! ```

pub mod error;
pub mod hooks;
pub mod io;
pub mod processor;
pub mod render;
pub mod shortcode;

pub use error::ProcessorError;
pub use hooks::Hooks;
pub use processor::{generate_tag_cloud, Processor};
pub use render::html::Html;
pub use render::plain::PlainText;
pub use render::{CloudOutput, Markup, TagData};
pub use shortcode::{LinkPatterns, LinkResolver, TagQuery, TagSource};
