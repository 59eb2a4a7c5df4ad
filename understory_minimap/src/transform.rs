// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversions between main-canvas space and minimap space.
//!
//! The minimap always draws its mirrored content from the world origin, so the
//! mapping is a pure per-axis scale with no translation. The scale fits the
//! *world size* (the larger of the content bounds and the main canvas size)
//! into the minimap footprint.

use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::error::Degenerate;

/// Returns `true` when both extents are finite and strictly positive.
pub(crate) fn is_usable(size: Size) -> bool {
    size.width.is_finite() && size.height.is_finite() && size.width > 0.0 && size.height > 0.0
}

/// Validated per-axis scale from main-canvas space into minimap space.
///
/// Both factors are finite and non-zero, so the mapping can always be
/// inverted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MinimapScale {
    factors: Vec2,
}

impl MinimapScale {
    /// Creates a scale from explicit factors.
    ///
    /// Fails with [`Degenerate::Scale`] if either factor is zero or not finite.
    pub fn new(sx: f64, sy: f64) -> Result<Self, Degenerate> {
        let factors = Vec2::new(sx, sy);
        if !sx.is_finite() || !sy.is_finite() || sx == 0.0 || sy == 0.0 {
            return Err(Degenerate::Scale(factors));
        }
        Ok(Self { factors })
    }

    /// The per-axis factors as `(sx, sy)`.
    #[must_use]
    pub fn factors(self) -> Vec2 {
        self.factors
    }

    /// The scale as an affine transform.
    #[must_use]
    pub fn affine(self) -> Affine {
        Affine::scale_non_uniform(self.factors.x, self.factors.y)
    }

    /// Maps a main-canvas point into minimap space.
    #[must_use]
    pub fn to_minimap(self, pt: Point) -> Point {
        Point::new(pt.x * self.factors.x, pt.y * self.factors.y)
    }

    /// Maps a minimap point back into main-canvas space.
    #[must_use]
    pub fn to_main(self, pt: Point) -> Point {
        Point::new(pt.x / self.factors.x, pt.y / self.factors.y)
    }
}

/// Computes the world size used as the fit-to-content denominator.
///
/// Each axis takes the larger of the content extent and the main canvas
/// extent, so sparse content still maps the whole visible area. Missing or
/// non-finite content bounds fall back to `main`.
#[must_use]
pub fn world_size(content_bounds: Option<Rect>, main: Size) -> Size {
    match content_bounds {
        Some(bounds) if bounds.is_finite() => Size::new(
            bounds.width().abs().max(main.width),
            bounds.height().abs().max(main.height),
        ),
        _ => main,
    }
}

/// Computes the scale that fits the world into the minimap.
///
/// `minimap` is the minimap size in device pixels (logical size multiplied
/// by the pixel ratio).
pub fn to_minimap_scale(
    content_bounds: Option<Rect>,
    main: Size,
    minimap: Size,
) -> Result<MinimapScale, Degenerate> {
    if !is_usable(minimap) {
        return Err(Degenerate::MinimapSize(minimap));
    }
    let world = world_size(content_bounds, main);
    MinimapScale::new(minimap.width / world.width, minimap.height / world.height)
}

/// Maps a main-canvas point into minimap space.
#[must_use]
pub fn main_to_minimap_point(pt: Point, scale: MinimapScale) -> Point {
    scale.to_minimap(pt)
}

/// Converts minimap drag distance into main-canvas distance.
///
/// Each axis is `main / minimap * pixel_ratio`.
pub fn pan_ratio(main: Size, minimap: Size, pixel_ratio: f64) -> Result<Vec2, Degenerate> {
    if !is_usable(main) {
        return Err(Degenerate::MainSize(main));
    }
    if !is_usable(minimap) {
        return Err(Degenerate::MinimapSize(minimap));
    }
    let ratio = Vec2::new(
        main.width / minimap.width * pixel_ratio,
        main.height / minimap.height * pixel_ratio,
    );
    if !ratio.is_finite() {
        return Err(Degenerate::Scale(ratio));
    }
    Ok(ratio)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn world_size_takes_the_larger_extent_per_axis() {
        let main = Size::new(800.0, 600.0);
        let content = Rect::new(-100.0, 0.0, 1100.0, 300.0);
        assert_eq!(world_size(Some(content), main), Size::new(1200.0, 600.0));
    }

    #[test]
    fn world_size_falls_back_to_main_without_content() {
        let main = Size::new(800.0, 600.0);
        assert_eq!(world_size(None, main), main);
        let nan = Rect::new(f64::NAN, 0.0, 1.0, 1.0);
        assert_eq!(world_size(Some(nan), main), main);
    }

    #[test]
    fn scale_fits_world_into_minimap() {
        let main = Size::new(800.0, 600.0);
        let scale = to_minimap_scale(None, main, Size::new(200.0, 120.0)).unwrap();
        assert_eq!(scale.factors(), Vec2::new(0.25, 0.2));

        let p = main_to_minimap_point(Point::new(400.0, 300.0), scale);
        assert_eq!(p, Point::new(100.0, 60.0));
        assert_eq!(scale.to_main(p), Point::new(400.0, 300.0));
    }

    #[test]
    fn zero_world_is_degenerate() {
        let err = to_minimap_scale(None, Size::ZERO, Size::new(200.0, 120.0)).unwrap_err();
        assert!(matches!(err, Degenerate::Scale(_)));
    }

    #[test]
    fn zero_minimap_is_degenerate() {
        let err = to_minimap_scale(None, Size::new(800.0, 600.0), Size::ZERO).unwrap_err();
        assert_eq!(err, Degenerate::MinimapSize(Size::ZERO));
    }

    #[test]
    fn explicit_scale_rejects_non_finite_factors() {
        assert!(MinimapScale::new(f64::INFINITY, 1.0).is_err());
        assert!(MinimapScale::new(1.0, f64::NAN).is_err());
        assert!(MinimapScale::new(0.0, 1.0).is_err());
        assert_eq!(
            MinimapScale::new(2.0, 3.0).unwrap().affine(),
            Affine::scale_non_uniform(2.0, 3.0)
        );
    }

    #[test]
    fn pan_ratio_includes_pixel_ratio() {
        let ratio = pan_ratio(Size::new(800.0, 600.0), Size::new(200.0, 120.0), 2.0).unwrap();
        assert_eq!(ratio, Vec2::new(8.0, 10.0));
        assert!(pan_ratio(Size::ZERO, Size::new(200.0, 120.0), 1.0).is_err());
    }
}
