// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Read-only view of the host scene that mirroring strategies consume.
//!
//! The host owns its scene. The minimap only reads it through [`SceneSource`]
//! and builds its own [`Group`] from clones; it never holds a reference back
//! into host data between passes.

use alloc::boxed::Box;
use alloc::vec::Vec;

use kurbo::{Affine, BezPath, Rect, Shape as _};
use peniko::Brush;

/// Paint applied to a [`Shape`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShapeStyle {
    /// Interior paint, if the shape is filled.
    pub fill: Option<Brush>,
    /// Outline paint, if the shape is stroked.
    pub stroke: Option<Brush>,
    /// Outline width in local units. Ignored when `stroke` is `None`.
    pub line_width: f64,
}

/// A single drawable shape.
#[derive(Clone, Debug, PartialEq)]
pub struct Shape {
    /// Outline geometry in local coordinates.
    pub path: BezPath,
    /// Paint for the outline and interior.
    pub style: ShapeStyle,
}

impl Shape {
    /// Creates a shape from any Kurbo shape and a style.
    pub fn new(geometry: &impl kurbo::Shape, style: ShapeStyle) -> Self {
        Self {
            path: geometry.to_path(0.1),
            style,
        }
    }

    /// Local bounds, grown by half the line width when stroked.
    ///
    /// Returns `None` for an empty or non-finite path.
    #[must_use]
    pub fn bounding_box(&self) -> Option<Rect> {
        if self.path.elements().is_empty() {
            return None;
        }
        let mut bounds = self.path.bounding_box();
        if self.style.stroke.is_some() && self.style.line_width > 0.0 {
            bounds = bounds.inflate(self.style.line_width / 2.0, self.style.line_width / 2.0);
        }
        bounds.is_finite().then_some(bounds)
    }
}

/// A child of a [`Group`].
#[derive(Clone, Debug, PartialEq)]
pub enum Item {
    /// A leaf shape.
    Shape(Shape),
    /// A nested group with its own transform.
    Group(Group),
}

/// An ordered collection of items sharing a local transform.
///
/// Children are painted in order, so later items draw on top.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Group {
    /// Transform from this group's space into its parent's space.
    pub transform: Affine,
    /// Children in paint order.
    pub children: Vec<Item>,
}

impl Group {
    /// Creates an empty group with an identity transform.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty group with the given transform.
    #[must_use]
    pub fn with_transform(transform: Affine) -> Self {
        Self {
            transform,
            children: Vec::new(),
        }
    }

    /// Appends a shape.
    pub fn push_shape(&mut self, shape: Shape) {
        self.children.push(Item::Shape(shape));
    }

    /// Appends a nested group.
    pub fn push_group(&mut self, group: Self) {
        self.children.push(Item::Group(group));
    }

    /// Returns `true` when the group has no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Total number of shapes in this group and all nested groups.
    #[must_use]
    pub fn shape_count(&self) -> usize {
        self.children
            .iter()
            .map(|item| match item {
                Item::Shape(_) => 1,
                Item::Group(group) => group.shape_count(),
            })
            .sum()
    }

    /// Bounds of all descendants in this group's *parent* space.
    ///
    /// Nested transforms are applied; the result is conservative under
    /// rotation and shear. Returns `None` when nothing has finite bounds.
    #[must_use]
    pub fn bounding_box(&self) -> Option<Rect> {
        self.bounds_in(Affine::IDENTITY)
    }

    fn bounds_in(&self, parent: Affine) -> Option<Rect> {
        let to_parent = parent * self.transform;
        self.children
            .iter()
            .filter_map(|item| match item {
                Item::Shape(shape) => shape
                    .bounding_box()
                    .map(|local| to_parent.transform_rect_bbox(local)),
                Item::Group(group) => group.bounds_in(to_parent),
            })
            .filter(|bounds| bounds.is_finite())
            .reduce(|acc, bounds| acc.union(bounds))
    }
}

/// A node as seen by the minimap: its placement and its key shape.
#[derive(Clone, Copy, Debug)]
pub struct NodeView<'a> {
    /// Transform of the node's group within the scene.
    pub transform: Affine,
    /// The shape that visually identifies the node.
    pub key_shape: &'a Shape,
}

/// An edge as seen by the minimap.
///
/// Edge key shapes are already expressed in scene coordinates.
#[derive(Clone, Copy, Debug)]
pub struct EdgeView<'a> {
    /// The shape that visually identifies the edge.
    pub key_shape: &'a Shape,
}

/// Read-only access to the host's scene.
///
/// Enumeration order is irrelevant to correctness; mirroring preserves it.
pub trait SceneSource {
    /// The scene-graph root, including its current view transform.
    fn root(&self) -> &Group;

    /// All nodes.
    fn nodes(&self) -> Box<dyn Iterator<Item = NodeView<'_>> + '_>;

    /// All edges.
    fn edges(&self) -> Box<dyn Iterator<Item = EdgeView<'_>> + '_>;
}

#[cfg(test)]
mod tests {
    use kurbo::{Circle, Vec2};
    use peniko::Color;

    use super::*;

    fn square(x: f64, y: f64, side: f64) -> Shape {
        Shape::new(
            &Rect::from_origin_size((x, y), (side, side)),
            ShapeStyle::default(),
        )
    }

    #[test]
    fn empty_group_has_no_bounds() {
        assert_eq!(Group::new().bounding_box(), None);
        let mut nested = Group::new();
        nested.push_group(Group::new());
        assert_eq!(nested.bounding_box(), None);
    }

    #[test]
    fn stroke_inflates_bounds() {
        let shape = Shape::new(
            &Rect::new(0.0, 0.0, 10.0, 10.0),
            ShapeStyle {
                fill: None,
                stroke: Some(Brush::Solid(Color::BLACK)),
                line_width: 2.0,
            },
        );
        assert_eq!(
            shape.bounding_box(),
            Some(Rect::new(-1.0, -1.0, 11.0, 11.0))
        );
    }

    #[test]
    fn nested_transforms_apply_to_bounds() {
        let mut inner = Group::with_transform(Affine::translate(Vec2::new(100.0, 50.0)));
        inner.push_shape(square(0.0, 0.0, 10.0));

        let mut root = Group::with_transform(Affine::scale(2.0));
        root.push_shape(square(-5.0, -5.0, 5.0));
        root.push_group(inner);

        assert_eq!(
            root.bounding_box(),
            Some(Rect::new(-10.0, -10.0, 220.0, 120.0))
        );
        assert_eq!(root.shape_count(), 2);
    }

    #[test]
    fn curved_shapes_have_bounds() {
        let shape = Shape::new(&Circle::new((0.0, 0.0), 5.0), ShapeStyle::default());
        let bounds = shape.bounding_box().unwrap();
        assert!((bounds.width() - 10.0).abs() < 1e-6);
    }
}
