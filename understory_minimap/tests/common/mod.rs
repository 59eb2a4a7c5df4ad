// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory host canvas and document shared by the integration tests.

#![allow(
    missing_docs,
    dead_code,
    reason = "Integration-test helper module; not every test uses every helper."
)]

use kurbo::{Affine, Rect, Size, Vec2};
use understory_minimap::{
    Document, EdgeView, Group, HostCanvas, NodeView, SceneSource, Shape, ShapeStyle, ViewportStyle,
};

/// A graph canvas with square nodes and straight edges.
#[derive(Debug)]
pub(crate) struct TestHost {
    root: Group,
    nodes: Vec<(Affine, Shape)>,
    edges: Vec<Shape>,
    size: Size,
    pixel_ratio: f64,
    pub(crate) pans: Vec<Vec2>,
}

impl TestHost {
    pub(crate) fn new(size: Size) -> Self {
        Self {
            root: Group::new(),
            nodes: Vec::new(),
            edges: Vec::new(),
            size,
            pixel_ratio: 1.0,
            pans: Vec::new(),
        }
    }

    pub(crate) fn with_pixel_ratio(mut self, pixel_ratio: f64) -> Self {
        self.pixel_ratio = pixel_ratio;
        self
    }

    /// Adds a 20x20 node centered on `(x, y)`.
    pub(crate) fn add_node(&mut self, x: f64, y: f64) {
        let transform = Affine::translate(Vec2::new(x, y));
        let key_shape = Shape::new(&Rect::new(-10.0, -10.0, 10.0, 10.0), ShapeStyle::default());
        let mut group = Group::with_transform(transform);
        group.push_shape(key_shape.clone());
        self.root.push_group(group);
        self.nodes.push((transform, key_shape));
    }

    pub(crate) fn add_edge(&mut self, from: (f64, f64), to: (f64, f64)) {
        let key_shape = Shape::new(&kurbo::Line::new(from, to), ShapeStyle::default());
        self.root.push_shape(key_shape.clone());
        self.edges.push(key_shape);
    }

    pub(crate) fn set_transform(&mut self, transform: Affine) {
        self.root.transform = transform;
    }

    pub(crate) fn set_size(&mut self, size: Size) {
        self.size = size;
    }
}

impl SceneSource for TestHost {
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

impl HostCanvas for TestHost {
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
        self.pans.push(delta);
    }
}

/// Element state recorded by [`TestDocument`].
#[derive(Clone, Debug, Default)]
pub(crate) struct TestElement {
    pub(crate) id: Option<String>,
    pub(crate) classes: Vec<String>,
    pub(crate) size: Option<Size>,
    pub(crate) rect: Option<Rect>,
    pub(crate) stroke: Option<ViewportStyle>,
    pub(crate) children: Vec<usize>,
    pub(crate) position_updates: usize,
}

/// A document whose elements are indices into a vector. Index 0 is the host element.
#[derive(Debug)]
pub(crate) struct TestDocument {
    pub(crate) elements: Vec<TestElement>,
}

impl TestDocument {
    pub(crate) fn new() -> Self {
        Self {
            elements: vec![TestElement {
                id: Some("host".into()),
                ..TestElement::default()
            }],
        }
    }

    /// Adds an element with an id to the host element and returns its index.
    pub(crate) fn with_element(mut self, id: &str) -> (Self, usize) {
        let index = self.elements.len();
        self.elements.push(TestElement {
            id: Some(id.into()),
            ..TestElement::default()
        });
        self.elements[0].children.push(index);
        (self, index)
    }

    pub(crate) fn element(&self, index: usize) -> &TestElement {
        &self.elements[index]
    }
}

impl Document for TestDocument {
    type Element = usize;

    fn element_by_id(&self, id: &str) -> Option<usize> {
        self.elements
            .iter()
            .position(|element| element.id.as_deref() == Some(id))
    }

    fn host_element(&self) -> usize {
        0
    }

    fn create_element(&mut self, class_name: &str) -> usize {
        self.elements.push(TestElement {
            classes: vec![class_name.into()],
            ..TestElement::default()
        });
        self.elements.len() - 1
    }

    fn add_class(&mut self, element: &usize, class_name: &str) {
        self.elements[*element].classes.push(class_name.into());
    }

    fn set_size(&mut self, element: &usize, size: Size) {
        self.elements[*element].size = Some(size);
    }

    fn set_rect(&mut self, element: &usize, rect: Rect) {
        self.elements[*element].rect = Some(rect);
    }

    fn set_position(&mut self, element: &usize, origin: kurbo::Point) {
        let state = &mut self.elements[*element];
        let rect = state.rect.unwrap_or(Rect::ZERO);
        state.rect = Some(rect.with_origin(origin));
        state.position_updates += 1;
    }

    fn set_stroke(&mut self, element: &usize, style: &ViewportStyle) {
        self.elements[*element].stroke = Some(*style);
    }

    fn append_child(&mut self, parent: &usize, child: &usize) {
        self.elements[*parent].children.push(*child);
    }

    fn clear_children(&mut self, element: &usize) {
        self.elements[*element].children.clear();
    }
}
