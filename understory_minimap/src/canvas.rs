// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The minimap drawing surface and its viewport overlay.

use kurbo::{Affine, Rect, Size, Vec2};
use peniko::Color;

use crate::scene::Group;

/// Stroke used to outline the viewport rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportStyle {
    /// Outline color.
    pub color: Color,
    /// Outline width in minimap pixels.
    pub line_width: f64,
}

impl Default for ViewportStyle {
    fn default() -> Self {
        Self {
            color: Color::from_rgb8(0x18, 0x90, 0xff),
            line_width: 2.0,
        }
    }
}

/// The fixed-size surface mirrored content is drawn on.
///
/// The surface holds the current content and an absolute content matrix.
/// Renderers draw `content` under `matrix` whenever [`revision`](Self::revision)
/// changes.
#[derive(Clone, Debug)]
pub struct MinimapCanvas<E> {
    element: E,
    size: Size,
    pixel_ratio: f64,
    content: Group,
    matrix: Affine,
    revision: u64,
}

impl<E> MinimapCanvas<E> {
    /// Creates an empty canvas inside `element`.
    #[must_use]
    pub fn new(element: E, size: Size, pixel_ratio: f64) -> Self {
        Self {
            element,
            size,
            pixel_ratio,
            content: Group::new(),
            matrix: Affine::IDENTITY,
            revision: 0,
        }
    }

    /// The element the canvas and its overlay live in.
    #[must_use]
    pub fn element(&self) -> &E {
        &self.element
    }

    /// Logical size of the canvas.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Device pixel ratio the canvas renders at.
    #[must_use]
    pub fn pixel_ratio(&self) -> f64 {
        self.pixel_ratio
    }

    /// Size of the canvas in device pixels.
    #[must_use]
    pub fn pixel_size(&self) -> Size {
        self.size * self.pixel_ratio
    }

    /// The mirrored content currently displayed.
    #[must_use]
    pub fn content(&self) -> &Group {
        &self.content
    }

    /// The content-to-device matrix.
    #[must_use]
    pub fn matrix(&self) -> Affine {
        self.matrix
    }

    /// Incremented by every [`draw`](Self::draw).
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Replaces the displayed content.
    pub fn replace_content(&mut self, content: Group) {
        self.content = content;
    }

    /// Bounds of the displayed content in content space.
    #[must_use]
    pub fn content_bounds(&self) -> Option<Rect> {
        self.content.bounding_box()
    }

    /// Resets the matrix to identity.
    pub fn reset_matrix(&mut self) {
        self.matrix = Affine::IDENTITY;
    }

    /// Appends a per-axis scale to the matrix.
    pub fn scale(&mut self, factors: Vec2) {
        self.matrix *= Affine::scale_non_uniform(factors.x, factors.y);
    }

    /// Marks the canvas as needing a repaint.
    pub fn draw(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    /// Drops all content and resets the matrix.
    pub fn clear(&mut self) {
        self.content = Group::new();
        self.reset_matrix();
        self.draw();
    }
}

/// The draggable rectangle showing the main canvas's visible region.
#[derive(Clone, Debug)]
pub struct ViewportOverlay<E> {
    element: E,
    rect: Rect,
    style: ViewportStyle,
}

impl<E> ViewportOverlay<E> {
    pub(crate) fn new(element: E, style: ViewportStyle) -> Self {
        Self {
            element,
            rect: Rect::ZERO,
            style,
        }
    }

    /// The overlay's element.
    #[must_use]
    pub fn element(&self) -> &E {
        &self.element
    }

    /// The displayed geometry in minimap pixels.
    #[must_use]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// The outline style.
    #[must_use]
    pub fn style(&self) -> ViewportStyle {
        self.style
    }

    pub(crate) fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_is_absolute_after_reset() {
        let mut canvas = MinimapCanvas::new((), Size::new(200.0, 120.0), 2.0);
        assert_eq!(canvas.pixel_size(), Size::new(400.0, 240.0));

        canvas.scale(Vec2::new(0.5, 0.5));
        canvas.reset_matrix();
        canvas.scale(Vec2::new(0.25, 0.2));

        assert_eq!(canvas.matrix(), Affine::scale_non_uniform(0.25, 0.2));
    }

    #[test]
    fn draw_and_clear_bump_revision() {
        let mut canvas = MinimapCanvas::new((), Size::new(200.0, 120.0), 1.0);
        canvas.draw();
        canvas.clear();
        assert_eq!(canvas.revision(), 2);
        assert!(canvas.content().is_empty());
    }

    #[test]
    fn default_viewport_style() {
        let style = ViewportStyle::default();
        assert_eq!(style.line_width, 2.0);
        assert_eq!(style.color, Color::from_rgb8(0x18, 0x90, 0xff));
    }
}
