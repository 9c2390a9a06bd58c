//! Integration tests: canvas version switching (dt-editor).
//!
//! Versions are whole-scene snapshots; edits under one version must
//! never leak into another.

use dt_core::Viewport;
use dt_editor::CanvasEngine;
use rand::SeedableRng;
use rand::rngs::SmallRng;

fn engine() -> CanvasEngine {
    CanvasEngine::with_rng(Viewport::default(), SmallRng::seed_from_u64(7))
}

#[test]
fn new_version_starts_empty_and_becomes_active() {
    let mut e = engine();
    e.add_object();

    let idx = e.add_version();
    assert_eq!(idx, 1);
    assert_eq!(e.active_version(), 1);
    assert!(e.scene.is_empty(), "new canvas did not start empty");
}

#[test]
fn edits_stay_with_the_version_they_were_made_under() {
    let mut e = engine();

    // Version 0 gets one object.
    e.add_object();

    // Version 1 is created empty and gets its own object.
    e.add_version();
    assert!(e.scene.is_empty());
    e.add_object();
    assert_eq!(e.scene.len(), 1);

    // Back to version 0: still exactly its original one object.
    assert!(e.switch_version(0));
    assert_eq!(e.scene.len(), 1);

    // And version 1 kept its own.
    assert!(e.switch_version(1));
    assert_eq!(e.scene.len(), 1);
}

#[test]
fn drag_saves_into_the_version_active_at_edit_time() {
    let mut e = engine();
    e.add_object();
    e.toggle_select_mode();

    // Drag under version 0, then create version 1.
    e.pointer_down(75.0, 75.0);
    e.pointer_move(125.0, 75.0);
    e.pointer_up(125.0, 75.0);
    e.add_version();

    // Version 0 holds the dragged position; version 1 is untouched.
    assert!(e.switch_version(0));
    assert_eq!(e.scene.get(0).unwrap().x, 100.0);
    assert!(e.switch_version(1));
    assert!(e.scene.is_empty());
}

#[test]
fn switching_discards_unsaved_working_edits() {
    let mut e = engine();
    e.add_object();
    e.add_version();

    // Go back to version 0 and start (but never finish) a drag.
    e.switch_version(0);
    e.toggle_select_mode();
    e.pointer_down(75.0, 75.0);
    e.pointer_move(300.0, 300.0);
    assert!(e.has_unsaved_edits());

    // Leaving mid-drag abandons the move, as does coming back.
    e.switch_version(1);
    e.switch_version(0);
    assert_eq!(e.scene.get(0).unwrap().x, 50.0);
    assert!(!e.has_unsaved_edits());
}

#[test]
fn out_of_range_switch_is_a_noop() {
    let mut e = engine();
    e.add_object();

    assert!(!e.switch_version(3));
    assert_eq!(e.active_version(), 0);
    assert_eq!(e.scene.len(), 1, "working scene disturbed by rejected switch");
}

#[test]
fn labels_track_the_version_count() {
    let mut e = engine();
    assert_eq!(e.version_labels(), vec!["Canvas 1"]);
    e.add_version();
    e.add_version();
    assert_eq!(e.version_labels(), vec!["Canvas 1", "Canvas 2", "Canvas 3"]);
    assert_eq!(e.active_version(), 2);
}
