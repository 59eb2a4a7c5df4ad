// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag controller: turn pointer movement over the viewport rectangle into
//! clamped rectangle moves and main-canvas pan commands.
//!
//! ## Usage
//!
//! 1) On pointer-down over the rectangle, call [`DragController::begin`] with the
//!    rectangle's displayed geometry, the pointer position, and the pan ratio.
//!    A rectangle that already fills the minimap on either axis is refused.
//! 2) On each move, call [`DragController::update`]. It returns the clamped
//!    rectangle and the pan command to forward to the main canvas.
//! 3) On pointer-up or pointer-leave, call [`DragController::end`].
//!
//! Deltas use the `last - current` convention: moving the pointer right yields
//! a negative `delta.x`, moves the rectangle right, and pans the main canvas
//! content left.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Rect, Size, Vec2};
//! use understory_minimap::{DragController, DragStart};
//!
//! let mut drag = DragController::new(Size::new(200.0, 120.0));
//! let rect = Rect::from_origin_size((10.0, 10.0), (100.0, 60.0));
//!
//! let start = drag.begin(rect, Point::new(50.0, 50.0), Vec2::new(4.0, 5.0));
//! assert_eq!(start, DragStart::Started);
//!
//! let step = drag.update(Point::new(80.0, 50.0)).unwrap();
//! assert_eq!(step.rect.x0, 40.0);
//! assert_eq!(step.pan, Vec2::new(-120.0, 0.0));
//!
//! drag.end();
//! assert!(!drag.is_dragging());
//! ```

use kurbo::{Point, Rect, Size, Vec2};

/// Result of trying to start a drag session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragStart {
    /// A session is now active.
    Started,
    /// The rectangle already fills the minimap on at least one axis, so there
    /// is nowhere to pan. No state changed.
    Refused,
}

/// State of the drag interaction.
///
/// A session exists only between a matched pointer-down and pointer-up (or
/// pointer-leave).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragSession {
    /// No pointer is dragging the rectangle.
    #[default]
    Idle,
    /// The rectangle is being dragged.
    Dragging {
        /// Rectangle geometry captured at pointer-down.
        start_rect: Rect,
        /// Current rectangle geometry, advanced by every clamped move.
        rect: Rect,
        /// Position of the last processed pointer event.
        last_pointer: Point,
        /// Minimap-to-main distance ratio captured at pointer-down.
        pan_ratio: Vec2,
    },
}

/// Outcome of one processed pointer move.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragStep {
    /// Rectangle geometry after the clamped move.
    pub rect: Rect,
    /// Clamped minimap-space delta, `last - current`.
    pub delta: Vec2,
    /// Pan command for the main canvas: `delta` scaled by the pan ratio.
    pub pan: Vec2,
}

/// Drag state machine for the minimap viewport rectangle.
#[derive(Clone, Copy, Debug)]
pub struct DragController {
    bounds: Size,
    session: DragSession,
}

impl DragController {
    /// Creates an idle controller for a minimap of the given size.
    #[must_use]
    pub fn new(bounds: Size) -> Self {
        Self {
            bounds,
            session: DragSession::Idle,
        }
    }

    /// The minimap size the rectangle is clamped to.
    #[must_use]
    pub fn bounds(&self) -> Size {
        self.bounds
    }

    /// The current session state.
    #[must_use]
    pub fn session(&self) -> DragSession {
        self.session
    }

    /// Returns `true` while a drag session is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.session, DragSession::Dragging { .. })
    }

    /// Starts a drag session from the rectangle's displayed geometry.
    ///
    /// Any session already in progress is replaced.
    pub fn begin(&mut self, rect: Rect, pointer: Point, pan_ratio: Vec2) -> DragStart {
        if rect.width() >= self.bounds.width || rect.height() >= self.bounds.height {
            tracing::trace!(?rect, "viewport fills the minimap; drag refused");
            return DragStart::Refused;
        }
        self.session = DragSession::Dragging {
            start_rect: rect,
            rect,
            last_pointer: pointer,
            pan_ratio,
        };
        tracing::trace!(?rect, ?pointer, "viewport drag started");
        DragStart::Started
    }

    /// Processes a pointer move.
    ///
    /// Returns `None` when idle or when `pointer` is not finite. Otherwise the
    /// raw delta is clamped so the rectangle stays inside the minimap, the
    /// session advances, and the last pointer becomes `pointer`.
    pub fn update(&mut self, pointer: Point) -> Option<DragStep> {
        let DragSession::Dragging {
            rect,
            last_pointer,
            pan_ratio,
            ..
        } = &mut self.session
        else {
            return None;
        };
        if !pointer.is_finite() {
            return None;
        }

        let mut dx = last_pointer.x - pointer.x;
        let mut dy = last_pointer.y - pointer.y;

        // Stop at the left or right edge.
        if rect.x0 - dx < 0.0 {
            dx = rect.x0;
        } else if rect.x0 - dx + rect.width() > self.bounds.width {
            dx = rect.x0 + rect.width() - self.bounds.width;
        }
        // Stop at the top or bottom edge.
        if rect.y0 - dy < 0.0 {
            dy = rect.y0;
        } else if rect.y0 - dy + rect.height() > self.bounds.height {
            dy = rect.y0 + rect.height() - self.bounds.height;
        }

        let delta = Vec2::new(dx, dy);
        *rect = Rect::from_origin_size(rect.origin() - delta, rect.size());
        *last_pointer = pointer;

        Some(DragStep {
            rect: *rect,
            delta,
            pan: Vec2::new(dx * pan_ratio.x, dy * pan_ratio.y),
        })
    }

    /// Ends the current session, if any.
    pub fn end(&mut self) {
        if self.is_dragging() {
            tracing::trace!("viewport drag ended");
        }
        self.session = DragSession::Idle;
    }

    /// How far the rectangle has moved since the session started.
    #[must_use]
    pub fn total_offset(&self) -> Option<Vec2> {
        match self.session {
            DragSession::Dragging {
                start_rect, rect, ..
            } => Some(rect.origin() - start_rect.origin()),
            DragSession::Idle => None,
        }
    }
}
