//! Core scene data model.
//!
//! A scene is a flat, insertion-ordered list of rectangles. Order is
//! z-order: later objects paint on top. Objects are identified by index;
//! nothing removes them in the current scope, so indices stay stable.

use crate::color::Color;
use serde::{Deserialize, Serialize};

/// Where newly spawned objects land, in model coordinates.
pub const SPAWN_X: f32 = 50.0;
pub const SPAWN_Y: f32 = 50.0;
/// Spawn dimensions for new objects.
pub const SPAWN_WIDTH: f32 = 100.0;
pub const SPAWN_HEIGHT: f32 = 100.0;

/// The canvas (drawing surface) logical dimensions, pre-zoom.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

/// A drawable rectangle. Positions and sizes are model-space (unscaled).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SceneObject {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub color: Color,
}

impl SceneObject {
    /// A freshly spawned object at the fixed spawn rectangle.
    pub fn spawned(color: Color) -> Self {
        Self {
            x: SPAWN_X,
            y: SPAWN_Y,
            width: SPAWN_WIDTH,
            height: SPAWN_HEIGHT,
            color,
        }
    }

    /// Strict containment: points exactly on an edge do not count.
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px > self.x && px < self.x + self.width && py > self.y && py < self.y + self.height
    }
}

/// One canvas worth of objects, in paint order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    objects: Vec<SceneObject>,
}

impl Scene {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an object on top of the z-order. Returns its index.
    pub fn push(&mut self, object: SceneObject) -> usize {
        self.objects.push(object);
        self.objects.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&SceneObject> {
        self.objects.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut SceneObject> {
        self.objects.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SceneObject> {
        self.objects.iter()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}
