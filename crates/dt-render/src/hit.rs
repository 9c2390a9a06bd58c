//! Hit testing: point → object lookup.
//!
//! Scans the scene in insertion order and returns the first object whose
//! box strictly contains the point. Pick order is therefore
//! earliest-added, not topmost-painted: when two objects overlap, the
//! lower index wins.

use dt_core::Scene;

/// Find the object at model position (px, py).
/// Returns `None` if no object is hit (background).
pub fn hit_test(scene: &Scene, px: f32, py: f32) -> Option<usize> {
    scene.iter().position(|obj| obj.contains(px, py))
}
