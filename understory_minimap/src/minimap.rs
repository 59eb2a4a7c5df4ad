// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The minimap: configuration, synchronization with the host, and pointer routing.

use alloc::boxed::Box;
use alloc::format;
use alloc::string::String;

use kurbo::{Point, Rect, Size, Vec2};

use crate::canvas::{MinimapCanvas, ViewportOverlay, ViewportStyle};
use crate::drag::{DragController, DragStep};
use crate::error::MinimapError;
use crate::geometry::viewport_rect_at;
use crate::host::{Document, HostCanvas};
use crate::mirror::{MirrorMode, MirrorStrategy};
use crate::transform::{MinimapScale, pan_ratio, to_minimap_scale, world_size};

/// Where the minimap should live in the document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Container<E> {
    /// Use this element.
    Element(E),
    /// Look up the element with this id; a missing id is a construction error.
    Id(String),
    /// Create a new element inside the host's container.
    #[default]
    Absent,
}

/// Construction-time configuration.
#[derive(Clone, Debug)]
pub struct MinimapConfig<E> {
    /// Container placement.
    pub container: Container<E>,
    /// Minimap size in logical pixels. Fixed for the minimap's lifetime.
    pub size: Size,
    /// Class given to the container.
    pub class_name: String,
    /// Class given to the viewport rectangle element.
    pub viewport_class_name: String,
    /// Outline of the viewport rectangle.
    pub viewport_style: ViewportStyle,
    /// Built-in mirroring strategy.
    pub mirror: MirrorMode,
}

impl<E> Default for MinimapConfig<E> {
    fn default() -> Self {
        Self {
            container: Container::Absent,
            size: Size::new(200.0, 120.0),
            class_name: "understory-minimap".into(),
            viewport_class_name: "understory-minimap-viewport".into(),
            viewport_style: ViewportStyle::default(),
            mirror: MirrorMode::FullClone,
        }
    }
}

impl<E> MinimapConfig<E> {
    /// Sets the container placement.
    #[must_use]
    pub fn with_container(mut self, container: Container<E>) -> Self {
        self.container = container;
        self
    }

    /// Sets the minimap size.
    #[must_use]
    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Sets the viewport rectangle outline.
    #[must_use]
    pub fn with_viewport_style(mut self, style: ViewportStyle) -> Self {
        self.viewport_style = style;
        self
    }

    /// Sets the built-in mirroring strategy.
    #[must_use]
    pub fn with_mirror(mut self, mirror: MirrorMode) -> Self {
        self.mirror = mirror;
        self
    }
}

/// Which element a pointer event hit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerTarget {
    /// The viewport rectangle.
    Viewport,
    /// Anything else inside the minimap.
    Other,
}

/// Pointer input over the minimap container.
///
/// Positions only need a consistent origin across one drag (client or page
/// coordinates both work); only differences are used.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    /// A button was pressed.
    Down {
        /// Pointer position.
        position: Point,
        /// The element under the pointer.
        target: PointerTarget,
    },
    /// The pointer moved.
    Move {
        /// Pointer position.
        position: Point,
    },
    /// The button was released.
    Up,
    /// The pointer left the minimap container.
    Leave,
}

/// What one synchronization pass computed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SyncOutcome {
    /// The viewport rectangle in minimap pixels.
    pub viewport: Rect,
    /// Bounds of the rebuilt content, if it had any.
    pub content_bounds: Option<Rect>,
    /// The world size the content was fitted with.
    pub world_size: Size,
    /// Content-to-device scale applied to the canvas.
    pub scale: MinimapScale,
}

/// An overview of a host canvas with a draggable viewport rectangle.
///
/// ## Wiring
///
/// - Call [`on_host_repaint`](Self::on_host_repaint) from the host's "about to
///   repaint" hook.
/// - Route pointer events over the minimap container to
///   [`handle_pointer`](Self::handle_pointer).
///
/// Panning from a drag triggers the host's next repaint, which resynchronizes
/// the minimap. Every pass recomputes from current host values, so re-entry is
/// harmless.
#[derive(Debug)]
pub struct Minimap<D: Document> {
    document: D,
    container: D::Element,
    canvas: MinimapCanvas<D::Element>,
    viewport: Option<ViewportOverlay<D::Element>>,
    viewport_class_name: String,
    viewport_style: ViewportStyle,
    strategy: Box<dyn MirrorStrategy>,
    drag: DragController,
}

impl<D: Document> Minimap<D> {
    /// Creates the minimap's elements and runs a first synchronization pass.
    ///
    /// Fails only with [`MinimapError::MissingContainer`]. A degenerate first
    /// pass is logged and retried on the next repaint notification.
    pub fn new<H: HostCanvas>(
        document: D,
        host: &H,
        config: MinimapConfig<D::Element>,
    ) -> Result<Self, MinimapError> {
        let strategy = config.mirror.strategy();
        Self::with_strategy(document, host, config, strategy)
    }

    /// Like [`new`](Self::new), with a custom mirroring strategy.
    ///
    /// `config.mirror` is ignored.
    pub fn with_strategy<H: HostCanvas>(
        mut document: D,
        host: &H,
        config: MinimapConfig<D::Element>,
        strategy: Box<dyn MirrorStrategy>,
    ) -> Result<Self, MinimapError> {
        let MinimapConfig {
            container,
            size,
            class_name,
            viewport_class_name,
            viewport_style,
            mirror: _,
        } = config;

        let container = match container {
            Container::Element(element) => Some(element),
            Container::Id(id) => match document.element_by_id(&id) {
                Some(element) => Some(element),
                None => return Err(MinimapError::MissingContainer { id }),
            },
            Container::Absent => None,
        };
        let container = match container {
            Some(element) => {
                document.add_class(&element, &class_name);
                document.set_size(&element, size);
                element
            }
            None => {
                let element = document.create_element(&class_name);
                document.set_size(&element, size);
                let host_element = document.host_element();
                document.append_child(&host_element, &element);
                element
            }
        };

        let surface = document.create_element(&format!("{class_name}-container"));
        document.append_child(&container, &surface);
        let canvas = MinimapCanvas::new(surface, size, host.pixel_ratio());

        let mut minimap = Self {
            document,
            container,
            canvas,
            viewport: None,
            viewport_class_name,
            viewport_style,
            strategy,
            drag: DragController::new(size),
        };
        // Failures are already logged; the next repaint retries.
        let _ = minimap.on_host_repaint(host);
        Ok(minimap)
    }

    /// Resynchronizes with the host.
    ///
    /// Rebuilds mirrored content, recomputes the viewport rectangle, and
    /// rescales the canvas so the world fits. Everything is computed before
    /// anything is applied: on [`MinimapError::DegenerateGeometry`] the pass is
    /// skipped and the previously rendered state is left as it was.
    pub fn on_host_repaint<H: HostCanvas>(
        &mut self,
        host: &H,
    ) -> Result<SyncOutcome, MinimapError> {
        match self.sync(host) {
            Ok(outcome) => {
                tracing::debug!(
                    viewport = ?outcome.viewport,
                    world = ?outcome.world_size,
                    "minimap synchronized"
                );
                Ok(outcome)
            }
            Err(err) => {
                tracing::warn!(error = %err, "minimap synchronization skipped");
                Err(err)
            }
        }
    }

    fn sync<H: HostCanvas>(&mut self, host: &H) -> Result<SyncOutcome, MinimapError> {
        let content = self.strategy.rebuild(host);

        let main = host.viewport_size();
        let viewport = viewport_rect_at(
            host.transform(),
            host.point_to_logical(Point::ORIGIN),
            main,
            self.canvas.size(),
        )?;

        let content_bounds = content.bounding_box();
        let scale = to_minimap_scale(content_bounds, main, self.canvas.pixel_size())?;

        self.canvas.replace_content(content);
        self.apply_viewport(viewport);
        self.canvas.reset_matrix();
        self.canvas.scale(scale.factors());
        self.canvas.draw();

        Ok(SyncOutcome {
            viewport,
            content_bounds,
            world_size: world_size(content_bounds, main),
            scale,
        })
    }

    fn apply_viewport(&mut self, rect: Rect) {
        if self.viewport.is_none() {
            let element = self.document.create_element(&self.viewport_class_name);
            self.document.set_stroke(&element, &self.viewport_style);
            self.document.append_child(self.canvas.element(), &element);
            self.viewport = Some(ViewportOverlay::new(element, self.viewport_style));
        }
        if let Some(overlay) = &mut self.viewport {
            overlay.set_rect(rect);
            self.document.set_rect(overlay.element(), rect);
        }
    }

    /// Processes a pointer event over the minimap.
    ///
    /// Returns the step taken when a move advanced an active drag; the host
    /// has already been panned by `step.pan` at that point.
    pub fn handle_pointer<H: HostCanvas>(
        &mut self,
        host: &mut H,
        event: PointerEvent,
    ) -> Option<DragStep> {
        match event {
            PointerEvent::Down {
                position,
                target: PointerTarget::Viewport,
            } => {
                self.begin_drag(host, position);
                None
            }
            PointerEvent::Down { .. } => None,
            PointerEvent::Move { position } => {
                let step = self.drag.update(position)?;
                // Move the rectangle before panning so it never overshoots.
                if let Some(overlay) = &mut self.viewport {
                    overlay.set_rect(step.rect);
                    let origin = step.rect.origin();
                    self.document.set_position(overlay.element(), origin);
                }
                host.pan(step.pan);
                Some(step)
            }
            PointerEvent::Up | PointerEvent::Leave => {
                self.drag.end();
                None
            }
        }
    }

    fn begin_drag<H: HostCanvas>(&mut self, host: &H, position: Point) {
        let Some(overlay) = &self.viewport else {
            return;
        };
        let ratio = match pan_ratio(host.viewport_size(), self.canvas.size(), host.pixel_ratio()) {
            Ok(ratio) => ratio,
            Err(err) => {
                tracing::warn!(error = %err, "cannot start viewport drag");
                return;
            }
        };
        self.drag.begin(overlay.rect(), position, ratio);
    }

    /// The minimap canvas.
    #[must_use]
    pub fn canvas(&self) -> &MinimapCanvas<D::Element> {
        &self.canvas
    }

    /// The viewport rectangle, once the first successful pass has created it.
    #[must_use]
    pub fn viewport(&self) -> Option<&ViewportOverlay<D::Element>> {
        self.viewport.as_ref()
    }

    /// The container element.
    #[must_use]
    pub fn container(&self) -> &D::Element {
        &self.container
    }

    /// The document the minimap's elements live in.
    #[must_use]
    pub fn document(&self) -> &D {
        &self.document
    }

    /// Returns `true` while the viewport rectangle is being dragged.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// The minimap size in logical pixels.
    #[must_use]
    pub fn size(&self) -> Size {
        self.canvas.size()
    }

    /// Offset of the viewport rectangle since the current drag started.
    #[must_use]
    pub fn drag_offset(&self) -> Option<Vec2> {
        self.drag.total_offset()
    }

    /// Releases the canvas and the container's contents, returning the document.
    pub fn destroy(mut self) -> D {
        self.drag.end();
        self.canvas.clear();
        self.document.clear_children(&self.container);
        tracing::debug!("minimap destroyed");
        self.document
    }
}
