// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Minimap: an overview of a larger canvas with a draggable viewport.
//!
//! A minimap is a small, fixed-size canvas that mirrors a main canvas, shows a
//! rectangle for the region the main canvas currently displays, and lets the
//! user pan the main canvas by dragging that rectangle.
//!
//! The crate is organized around a synchronization core:
//! - [`transform`]: fit-to-world scale and point mapping between main-canvas
//!   space and minimap space.
//! - [`geometry`]: the viewport rectangle computed from the main canvas
//!   transform.
//! - [`drag`]: the `Idle`/`Dragging` state machine turning pointer movement
//!   into clamped rectangle moves and pan commands.
//! - [`Minimap`]: orchestrates "host repaint → rebuild mirrored content →
//!   recompute the viewport → rescale the canvas".
//!
//! It does **not** render anything or own the host's scene. Callers provide:
//! - A [`HostCanvas`] exposing the main canvas transform, size, pixel ratio,
//!   scene, and a pan command.
//! - A [`Document`] that creates and styles the minimap's elements.
//! - A [`MirrorStrategy`] (or one of the built-in [`MirrorMode`]s) deciding how
//!   host shapes are copied.
//!
//! ## Viewport geometry example
//!
//! ```rust
//! use kurbo::{Affine, Rect, Size};
//! use understory_minimap::compute_viewport_rect;
//!
//! let main = Size::new(800.0, 600.0);
//! let minimap = Size::new(200.0, 120.0);
//!
//! // Zoomed in 2x: the rectangle covers a quarter of the minimap.
//! let rect = compute_viewport_rect(Affine::scale(2.0), main, minimap).unwrap();
//! assert_eq!(rect, Rect::new(0.0, 0.0, 100.0, 60.0));
//!
//! // Zoomed out: the rectangle saturates the minimap.
//! let rect = compute_viewport_rect(Affine::scale(0.5), main, minimap).unwrap();
//! assert_eq!(rect, Rect::new(0.0, 0.0, 200.0, 120.0));
//! ```
//!
//! ## Drag example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size, Vec2};
//! use understory_minimap::DragController;
//!
//! let mut drag = DragController::new(Size::new(200.0, 120.0));
//! let rect = Rect::from_origin_size((90.0, 0.0), (100.0, 60.0));
//! drag.begin(rect, Point::new(0.0, 0.0), Vec2::new(4.0, 5.0));
//!
//! // A large move to the right stops at the minimap edge.
//! let step = drag.update(Point::new(50.0, 0.0)).unwrap();
//! assert_eq!(step.rect.x1, 200.0);
//! assert_eq!(step.pan.x, -40.0);
//! ```
//!
//! ## Design notes
//!
//! - When the main canvas is zoomed out (scale below 1 on an axis), the
//!   rectangle fills the minimap on that axis instead of shrinking.
//! - Every synchronization pass recomputes from current host values; nothing
//!   accumulates across passes, so repeated or re-entrant passes are safe.
//! - Degenerate geometry (zero sizes, non-invertible transforms) skips a pass
//!   and leaves the previous state in place.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod canvas;
pub mod drag;
mod error;
pub mod geometry;
mod host;
mod minimap;
mod mirror;
mod scene;
pub mod transform;

pub use canvas::{MinimapCanvas, ViewportOverlay, ViewportStyle};
pub use drag::{DragController, DragSession, DragStart, DragStep};
pub use error::{Degenerate, MinimapError};
pub use geometry::{compute_viewport_rect, viewport_rect_at};
pub use host::{Document, HostCanvas};
pub use minimap::{Container, Minimap, MinimapConfig, PointerEvent, PointerTarget, SyncOutcome};
pub use mirror::{FullClone, KeyShapesOnly, MirrorMode, MirrorStrategy};
pub use scene::{EdgeView, Group, Item, NodeView, SceneSource, Shape, ShapeStyle};
pub use transform::{MinimapScale, main_to_minimap_point, pan_ratio, to_minimap_scale, world_size};
