// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mirroring strategies: how the host scene is copied into the minimap.
//!
//! A strategy rebuilds the minimap content from scratch on every pass. The
//! previous content is discarded, never diffed.

use alloc::boxed::Box;
use core::fmt::Debug;

use kurbo::Affine;

use crate::scene::{Group, SceneSource};

/// Rebuilds minimap content from the host scene.
pub trait MirrorStrategy: Debug {
    /// Produces fresh content, positioned from the world origin.
    fn rebuild(&self, scene: &dyn SceneSource) -> Group;
}

/// Clones the entire scene root and resets its transform.
///
/// Everything the host draws appears in the minimap, including decorations
/// that are not key shapes.
#[derive(Clone, Copy, Debug, Default)]
pub struct FullClone;

impl MirrorStrategy for FullClone {
    fn rebuild(&self, scene: &dyn SceneSource) -> Group {
        let mut content = scene.root().clone();
        content.transform = Affine::IDENTITY;
        content
    }
}

/// Clones only the key shape of each edge and node.
///
/// Edges come first so nodes are drawn over them. Each node's key shape is
/// wrapped in a group carrying the node's own transform.
#[derive(Clone, Copy, Debug, Default)]
pub struct KeyShapesOnly;

impl MirrorStrategy for KeyShapesOnly {
    fn rebuild(&self, scene: &dyn SceneSource) -> Group {
        let mut content = Group::new();
        for edge in scene.edges() {
            content.push_shape(edge.key_shape.clone());
        }
        for node in scene.nodes() {
            let mut parent = Group::with_transform(node.transform);
            parent.push_shape(node.key_shape.clone());
            content.push_group(parent);
        }
        content
    }
}

/// Built-in mirroring modes selectable from configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MirrorMode {
    /// See [`FullClone`].
    #[default]
    FullClone,
    /// See [`KeyShapesOnly`].
    KeyShapesOnly,
}

impl MirrorMode {
    /// The strategy implementing this mode.
    #[must_use]
    pub fn strategy(self) -> Box<dyn MirrorStrategy> {
        match self {
            Self::FullClone => Box::new(FullClone),
            Self::KeyShapesOnly => Box::new(KeyShapesOnly),
        }
    }
}
