// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interfaces the minimap needs from its environment.
//!
//! - [`HostCanvas`]: the main canvas being overviewed.
//! - [`Document`]: the UI document the minimap's elements live in.
//!
//! The host is also responsible for calling
//! [`Minimap::on_host_repaint`](crate::Minimap::on_host_repaint) from its
//! "about to repaint" hook and for routing pointer events over the minimap to
//! [`Minimap::handle_pointer`](crate::Minimap::handle_pointer).

use core::fmt::Debug;

use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::canvas::ViewportStyle;
use crate::scene::SceneSource;

/// The main canvas the minimap mirrors and pans.
///
/// The minimap only reads from the host, except for [`HostCanvas::pan`].
pub trait HostCanvas: SceneSource {
    /// Current transform from logical scene coordinates to canvas pixels.
    fn transform(&self) -> Affine;

    /// Size of the visible canvas area in logical units.
    fn viewport_size(&self) -> Size;

    /// Device pixel ratio of the canvas.
    fn pixel_ratio(&self) -> f64;

    /// Maps a canvas pixel to the logical point shown there.
    fn point_to_logical(&self, pt: Point) -> Point {
        self.transform().inverse() * pt
    }

    /// Moves the visible region by `delta` logical units.
    ///
    /// The translation applies in scene space, before the view transform, so
    /// after `pan(delta)` the logical point at the canvas origin has moved by
    /// `-delta`. A negative `delta.x` moves the content left, revealing more
    /// of the world to the right.
    fn pan(&mut self, delta: Vec2);
}

/// The document hosting the minimap's elements.
///
/// `Element` is a cheap handle (for example a DOM node reference or an id
/// into a retained UI tree).
pub trait Document {
    /// Handle to an element of this document.
    type Element: Clone + Debug;

    /// Looks up an element by id.
    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// The element containing the main canvas.
    ///
    /// A minimap created without a container is appended here.
    fn host_element(&self) -> Self::Element;

    /// Creates a detached element carrying `class_name`.
    fn create_element(&mut self, class_name: &str) -> Self::Element;

    /// Adds `class_name` to an element.
    fn add_class(&mut self, element: &Self::Element, class_name: &str);

    /// Sets an element's width and height.
    fn set_size(&mut self, element: &Self::Element, size: Size);

    /// Positions and sizes an absolutely placed element.
    fn set_rect(&mut self, element: &Self::Element, rect: Rect);

    /// Moves an absolutely placed element without resizing it.
    fn set_position(&mut self, element: &Self::Element, origin: Point);

    /// Applies a border stroke to an element.
    fn set_stroke(&mut self, element: &Self::Element, style: &ViewportStyle);

    /// Appends `child` to `parent`.
    fn append_child(&mut self, parent: &Self::Element, child: &Self::Element);

    /// Removes every child of an element.
    fn clear_children(&mut self, element: &Self::Element);
}
