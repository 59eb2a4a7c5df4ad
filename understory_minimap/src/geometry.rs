// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport rectangle geometry.
//!
//! The viewport rectangle is the minimap-space depiction of the region the main
//! canvas currently shows. Its size follows the main canvas zoom:
//!
//! - Zoomed in (`scale >= 1`): the extent is `minimap / scale` on that axis.
//! - Zoomed out (`scale < 1`): the rectangle saturates the minimap on that axis.
//!
//! Its origin is the logical top-left point of the main canvas, mapped
//! proportionally into the minimap. Offsets panned past the world origin clamp
//! to zero, and the rectangle never extends past the far edge of the minimap.

use kurbo::{Affine, Point, Rect, Size};

use crate::error::Degenerate;
use crate::transform::is_usable;

fn check_transform(transform: Affine) -> Result<(), Degenerate> {
    let det = transform.determinant();
    if !transform.is_finite() || !det.is_finite() || det == 0.0 {
        return Err(Degenerate::Transform(transform));
    }
    Ok(())
}

/// Computes the viewport rectangle in minimap pixels.
///
/// The top-left logical point is found by inverse-mapping pixel `(0, 0)`
/// through `transform`.
///
/// ```
/// use kurbo::{Affine, Rect, Size};
/// use understory_minimap::compute_viewport_rect;
///
/// let rect = compute_viewport_rect(
///     Affine::scale(2.0),
///     Size::new(800.0, 600.0),
///     Size::new(200.0, 120.0),
/// )
/// .unwrap();
/// assert_eq!(rect, Rect::new(0.0, 0.0, 100.0, 60.0));
/// ```
pub fn compute_viewport_rect(
    transform: Affine,
    main: Size,
    minimap: Size,
) -> Result<Rect, Degenerate> {
    check_transform(transform)?;
    let top_left = transform.inverse() * Point::ORIGIN;
    viewport_rect_at(transform, top_left, main, minimap)
}

/// Computes the viewport rectangle from an already known top-left point.
///
/// `top_left` is the logical point shown at the main canvas pixel origin, as
/// reported by the host. `transform` only contributes its axis scale factors.
pub fn viewport_rect_at(
    transform: Affine,
    top_left: Point,
    main: Size,
    minimap: Size,
) -> Result<Rect, Degenerate> {
    if !is_usable(main) {
        return Err(Degenerate::MainSize(main));
    }
    if !is_usable(minimap) {
        return Err(Degenerate::MinimapSize(minimap));
    }
    check_transform(transform)?;
    if !top_left.is_finite() {
        return Err(Degenerate::Transform(transform));
    }

    let [scale_x, _, _, scale_y, _, _] = transform.as_coeffs();
    let width = if scale_x >= 1.0 {
        minimap.width / scale_x
    } else {
        minimap.width
    };
    let height = if scale_y >= 1.0 {
        minimap.height / scale_y
    } else {
        minimap.height
    };

    let left = if top_left.x > 0.0 {
        top_left.x * minimap.width / main.width
    } else {
        0.0
    };
    let top = if top_left.y > 0.0 {
        top_left.y * minimap.height / main.height
    } else {
        0.0
    };

    // Keep the far edge inside the minimap as well.
    let left = left.min(minimap.width - width);
    let top = top.min(minimap.height - height);

    Ok(Rect::from_origin_size((left, top), (width, height)))
}
