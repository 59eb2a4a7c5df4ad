// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared pieces for the minimap demos: a small graph host and a document that
//! logs what the minimap does to it.

use std::collections::HashMap;

use kurbo::{Affine, Circle, Line, Point, Rect, Size, Vec2};
use peniko::{Brush, Color};
use tracing_subscriber::EnvFilter;
use understory_minimap::{
    Document, EdgeView, Group, HostCanvas, NodeView, SceneSource, Shape, ShapeStyle, ViewportStyle,
};

/// A graph canvas: circular nodes joined by straight edges, each node with a label box.
#[derive(Debug)]
pub struct DemoGraph {
    root: Group,
    nodes: Vec<(Affine, Shape)>,
    edges: Vec<Shape>,
    size: Size,
    pixel_ratio: f64,
}

impl DemoGraph {
    /// Lays out `columns x rows` nodes on a grid with `spacing`, chaining
    /// neighbors with edges.
    pub fn grid(size: Size, columns: usize, rows: usize, spacing: f64) -> Self {
        let node_style = ShapeStyle {
            fill: Some(Brush::Solid(Color::from_rgb8(0xc6, 0xe5, 0xff))),
            stroke: Some(Brush::Solid(Color::from_rgb8(0x5b, 0x8f, 0xf9))),
            line_width: 1.0,
        };
        let edge_style = ShapeStyle {
            fill: None,
            stroke: Some(Brush::Solid(Color::from_rgb8(0xa0, 0xa0, 0xa0))),
            line_width: 1.0,
        };
        let key_shape = Shape::new(&Circle::new(Point::ORIGIN, 15.0), node_style);
        let label = Shape::new(&Rect::new(-12.0, 18.0, 12.0, 26.0), ShapeStyle::default());

        let mut graph = Self {
            root: Group::new(),
            nodes: Vec::new(),
            edges: Vec::new(),
            size,
            pixel_ratio: 1.0,
        };

        for row in 0..rows {
            for column in 0..columns {
                let center = Point::new(column as f64 * spacing, row as f64 * spacing);
                if column + 1 < columns {
                    let next = center + Vec2::new(spacing, 0.0);
                    graph.push_edge(Shape::new(&Line::new(center, next), edge_style.clone()));
                }
                if row + 1 < rows {
                    let below = center + Vec2::new(0.0, spacing);
                    graph.push_edge(Shape::new(&Line::new(center, below), edge_style.clone()));
                }

                let transform = Affine::translate(center.to_vec2());
                let mut group = Group::with_transform(transform);
                group.push_shape(key_shape.clone());
                group.push_shape(label.clone());
                graph.root.push_group(group);
                graph.nodes.push((transform, key_shape.clone()));
            }
        }
        graph
    }

    fn push_edge(&mut self, edge: Shape) {
        self.root.push_shape(edge.clone());
        self.edges.push(edge);
    }

    /// Replaces the view transform (zoom and scroll).
    pub fn set_view(&mut self, transform: Affine) {
        self.root.transform = transform;
    }
}

impl SceneSource for DemoGraph {
    fn root(&self) -> &Group {
        &self.root
    }

    fn nodes(&self) -> Box<dyn Iterator<Item = NodeView<'_>> + '_> {
        Box::new(self.nodes.iter().map(|(transform, key_shape)| NodeView {
            transform: *transform,
            key_shape,
        }))
    }

    fn edges(&self) -> Box<dyn Iterator<Item = EdgeView<'_>> + '_> {
        Box::new(self.edges.iter().map(|key_shape| EdgeView { key_shape }))
    }
}

impl HostCanvas for DemoGraph {
    fn transform(&self) -> Affine {
        self.root.transform
    }

    fn viewport_size(&self) -> Size {
        self.size
    }

    fn pixel_ratio(&self) -> f64 {
        self.pixel_ratio
    }

    fn pan(&mut self, delta: Vec2) {
        self.root.transform = self.root.transform * Affine::translate(delta);
        tracing::info!(dx = delta.x, dy = delta.y, "host panned");
    }
}

/// A document of numbered elements that logs every mutation.
#[derive(Debug)]
pub struct LogDocument {
    ids: HashMap<String, u32>,
    next: u32,
}

impl LogDocument {
    /// Creates a document whose host element is `#graph` (element 0).
    pub fn new() -> Self {
        let mut ids = HashMap::new();
        ids.insert("graph".to_owned(), 0);
        Self { ids, next: 1 }
    }
}

impl Default for LogDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl Document for LogDocument {
    type Element = u32;

    fn element_by_id(&self, id: &str) -> Option<u32> {
        self.ids.get(id).copied()
    }

    fn host_element(&self) -> u32 {
        0
    }

    fn create_element(&mut self, class_name: &str) -> u32 {
        let element = self.next;
        self.next += 1;
        tracing::info!(element, class_name, "create element");
        element
    }

    fn add_class(&mut self, element: &u32, class_name: &str) {
        tracing::info!(element, class_name, "add class");
    }

    fn set_size(&mut self, element: &u32, size: Size) {
        tracing::info!(element, ?size, "set size");
    }

    fn set_rect(&mut self, element: &u32, rect: Rect) {
        tracing::info!(element, ?rect, "set rect");
    }

    fn set_position(&mut self, element: &u32, origin: Point) {
        tracing::info!(element, ?origin, "set position");
    }

    fn set_stroke(&mut self, element: &u32, style: &ViewportStyle) {
        tracing::info!(element, line_width = style.line_width, "set stroke");
    }

    fn append_child(&mut self, parent: &u32, child: &u32) {
        tracing::info!(parent, child, "append child");
    }

    fn clear_children(&mut self, element: &u32) {
        tracing::info!(element, "clear children");
    }
}

/// Installs a `tracing` subscriber honoring `RUST_LOG` (default `info`).
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,understory_minimap=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
