//! Canvas version snapshots.
//!
//! Versions live in an arena of `Scene` values with an active-index
//! cursor. Saving replaces the whole active entry by value, so versions
//! never alias each other's object lists. The store always holds at
//! least one scene and the cursor is always in range.

use crate::model::Scene;
use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};

/// Arena of scene snapshots plus the active cursor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionStore {
    scenes: SmallVec<[Scene; 4]>,
    active: usize,
}

impl VersionStore {
    /// A new store with a single empty scene, active.
    #[must_use]
    pub fn new() -> Self {
        Self {
            scenes: smallvec![Scene::new()],
            active: 0,
        }
    }

    /// Append a new empty scene and make it active. Returns its index.
    ///
    /// New versions always start empty — they never clone the previous
    /// scene. Other entries are untouched.
    pub fn add(&mut self) -> usize {
        self.scenes.push(Scene::new());
        self.active = self.scenes.len() - 1;
        self.active
    }

    /// Move the cursor to `index`. Out of range is a no-op returning
    /// `false`.
    pub fn switch(&mut self, index: usize) -> bool {
        if index >= self.scenes.len() {
            return false;
        }
        self.active = index;
        true
    }

    /// Overwrite the active entry with a snapshot of `scene`.
    pub fn save(&mut self, scene: &Scene) {
        self.scenes[self.active] = scene.clone();
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_scene(&self) -> &Scene {
        &self.scenes[self.active]
    }

    pub fn get(&self, index: usize) -> Option<&Scene> {
        self.scenes.get(index)
    }

    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    pub fn is_empty(&self) -> bool {
        false // invariant: at least one scene
    }

    /// Display labels in arena order: "Canvas 1", "Canvas 2", …
    pub fn labels(&self) -> Vec<String> {
        (1..=self.scenes.len()).map(|n| format!("Canvas {n}")).collect()
    }
}

impl Default for VersionStore {
    fn default() -> Self {
        Self::new()
    }
}
