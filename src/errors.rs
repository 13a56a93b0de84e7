// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors raised by the seam carver.
//!
//! Every one of these is a usage error found by local validation
//! before anything is mutated; there is nothing transient to retry.

use crate::flipper::Orientation;
use thiserror::Error;

/// Result alias for seam carving operations.
pub type Result<T> = std::result::Result<T, SeamError>;

/// What is wrong with a seam handed to one of the removal operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeamDefect {
    /// The seam does not have one entry per row (or column).
    #[error("expected {expected} entries, found {found}")]
    Length { expected: usize, found: usize },

    /// An entry points outside the picture.
    #[error("entry {index} is {value}, outside 0..{limit}")]
    OutOfRange { index: usize, value: u32, limit: u32 },

    /// Two consecutive entries are more than one pixel apart.
    #[error("entry {index} jumps from {from} to {to}")]
    Step { index: usize, from: u32, to: u32 },
}

/// Errors that can occur while querying or carving a picture.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeamError {
    /// An energy query addressed a pixel outside the picture.
    #[error("pixel ({x}, {y}) is outside the {width}x{height} picture")]
    InvalidCoordinate { x: u32, y: u32, width: u32, height: u32 },

    /// A seam failed validation.
    #[error("invalid seam: {0}")]
    InvalidSeam(#[from] SeamDefect),

    /// The dimension a seam would shrink is already a single pixel
    /// (or the requested target size is zero).
    #[error("cannot remove a {0} seam: the picture is already one pixel across")]
    UnshrinkableDimension(Orientation),

    /// The source picture has no pixels at all.
    #[error("cannot carve an empty picture")]
    EmptyPicture,

    /// A carve asked for a picture larger than the current one.
    #[error("seamcarve cannot upscale {width}x{height} to {new_width}x{new_height}")]
    Upscale { width: u32, height: u32, new_width: u32, new_height: u32 },
}
