// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types reported by the minimap.

use alloc::string::String;
use core::fmt;

use kurbo::{Affine, Size, Vec2};

/// The geometric input that made a computation impossible.
///
/// Carried by [`MinimapError::DegenerateGeometry`]. Each variant holds the
/// offending value so it can be logged as-is.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Degenerate {
    /// The main canvas reported a zero, negative, or non-finite size.
    MainSize(Size),
    /// The minimap size (after applying the pixel ratio) is zero, negative, or non-finite.
    MinimapSize(Size),
    /// The main canvas transform is not finite or cannot be inverted.
    Transform(Affine),
    /// A computed scale factor came out zero or non-finite.
    Scale(Vec2),
}

impl fmt::Display for Degenerate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MainSize(size) => write!(f, "main canvas size {size:?} is degenerate"),
            Self::MinimapSize(size) => write!(f, "minimap size {size:?} is degenerate"),
            Self::Transform(affine) => {
                let coeffs = affine.as_coeffs();
                write!(f, "main canvas transform {coeffs:?} is not invertible")
            }
            Self::Scale(scale) => write!(f, "minimap scale {scale:?} is zero or not finite"),
        }
    }
}

impl core::error::Error for Degenerate {}

/// Errors reported by [`Minimap`](crate::Minimap).
///
/// A pointer-down on a rectangle that already fills the minimap is not an
/// error; it is reported as [`DragStart::Refused`](crate::DragStart::Refused).
#[derive(Clone, Debug, PartialEq)]
pub enum MinimapError {
    /// A scale or dimension was zero or invalid.
    ///
    /// The synchronization pass that hit this was skipped and the previously
    /// rendered state left untouched; the next repaint notification retries.
    DegenerateGeometry(Degenerate),
    /// The configured container id does not exist in the hosting document.
    ///
    /// This is the only construction-time failure.
    MissingContainer {
        /// The id that was looked up.
        id: String,
    },
}

impl fmt::Display for MinimapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateGeometry(what) => write!(f, "degenerate geometry: {what}"),
            Self::MissingContainer { id } => {
                write!(f, "minimap container `{id}` not found in the document")
            }
        }
    }
}

impl core::error::Error for MinimapError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::DegenerateGeometry(what) => Some(what),
            Self::MissingContainer { .. } => None,
        }
    }
}

impl From<Degenerate> for MinimapError {
    fn from(what: Degenerate) -> Self {
        Self::DegenerateGeometry(what)
    }
}
