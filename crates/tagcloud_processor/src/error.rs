/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use thiserror::Error;

/// Errors at the edges of tag cloud generation.
///
/// Generation itself never fails; these cover loading input and the
/// collaborators the shortcode consults.
#[derive(Debug, Error)]
pub enum ProcessorError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse {0}: {1}")]
    ParseError(String, String),

    #[error("tag source error: {0}")]
    Source(String),

    #[error("could not resolve link for tag {0}")]
    Link(String),

    #[error(transparent)]
    Core(#[from] tagcloud_core::CoreError),
}
