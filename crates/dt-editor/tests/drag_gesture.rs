//! Integration tests: the full pointer gesture pipeline (dt-editor).
//!
//! Exercises screen → model mapping, hit testing, and drag-state
//! tracking through the public `CanvasEngine` API, the way a host
//! delivers events.

use dt_core::Viewport;
use dt_editor::CanvasEngine;
use rand::SeedableRng;
use rand::rngs::SmallRng;

fn engine() -> CanvasEngine {
    CanvasEngine::with_rng(Viewport::default(), SmallRng::seed_from_u64(99))
}

// ─── The canonical gesture ──────────────────────────────────────────────

#[test]
fn drag_first_object_by_ten_ten() {
    let mut e = engine();
    e.add_object();
    e.add_object();
    e.toggle_select_mode();

    // Down inside object 0's rectangle, then move by (10, 10), then up.
    assert!(e.pointer_down(75.0, 75.0));
    assert!(e.pointer_move(85.0, 85.0));
    assert!(e.pointer_up(85.0, 85.0));

    let first = e.scene.get(0).unwrap();
    assert_eq!((first.x, first.y), (60.0, 60.0), "object 0 did not move by (10, 10)");

    // Both objects spawn at the same spot; the earlier-added one is
    // picked, the other must not move.
    let second = e.scene.get(1).unwrap();
    assert_eq!((second.x, second.y), (50.0, 50.0), "object 1 moved");

    // The gesture's single save landed in the active version.
    let saved = e.versions.active_scene();
    assert_eq!(saved.get(0).unwrap().x, 60.0);
    assert_eq!(saved.get(1).unwrap().x, 50.0);
}

#[test]
fn every_move_event_repositions_without_coalescing() {
    let mut e = engine();
    e.add_object();
    e.toggle_select_mode();

    e.pointer_down(60.0, 60.0);
    for step in 1..=20 {
        e.pointer_move(60.0 + step as f32, 60.0);
        assert_eq!(e.scene.get(0).unwrap().x, 50.0 + step as f32);
    }
    e.pointer_up(80.0, 60.0);
}

// ─── Mode gating ────────────────────────────────────────────────────────

#[test]
fn gesture_over_an_object_is_inert_in_normal_mode() {
    let mut e = engine();
    e.add_object();

    assert!(!e.pointer_down(75.0, 75.0));
    assert!(!e.pointer_move(200.0, 200.0));
    assert!(!e.pointer_up(200.0, 200.0));

    let obj = e.scene.get(0).unwrap();
    assert_eq!((obj.x, obj.y), (50.0, 50.0));
}

#[test]
fn toggling_select_mode_reports_the_cursor_flag() {
    let mut e = engine();
    assert!(!e.is_selecting());
    e.toggle_select_mode();
    assert!(e.is_selecting());
    e.toggle_select_mode();
    assert!(!e.is_selecting());
}

// ─── Misses ─────────────────────────────────────────────────────────────

#[test]
fn down_on_an_edge_does_not_grab() {
    let mut e = engine();
    e.add_object();
    e.toggle_select_mode();

    // x == 50 is exactly the left edge — boundary-exclusive, no drag.
    assert!(!e.pointer_down(50.0, 100.0));
    assert!(!e.pointer_move(60.0, 100.0));
}

#[test]
fn down_on_background_does_not_grab() {
    let mut e = engine();
    e.add_object();
    e.toggle_select_mode();
    assert!(!e.pointer_down(700.0, 500.0));
}

// ─── Zoom interplay ─────────────────────────────────────────────────────

#[test]
fn wheel_mid_drag_is_accepted_and_remaps_the_next_move() {
    let mut e = engine();
    e.add_object();
    e.toggle_select_mode();

    assert!(e.pointer_down(60.0, 60.0));
    // Zoom out mid-drag: allowed, the drag session survives.
    assert!(e.wheel(50.0));
    assert!((e.view.zoom - 0.5).abs() < 1e-4);

    // The same screen point now maps to a different model point, so the
    // object jumps — the documented behavior.
    assert!(e.pointer_move(60.0, 60.0));
    let obj = e.scene.get(0).unwrap();
    assert!((obj.x - 110.0).abs() < 1e-2, "x was {}", obj.x);
}

#[test]
fn zoom_never_leaves_its_bounds() {
    let mut e = engine();
    for _ in 0..500 {
        e.wheel(-40.0);
    }
    assert_eq!(e.view.zoom, 4.0);
    for _ in 0..500 {
        e.wheel(40.0);
    }
    assert_eq!(e.view.zoom, 0.5);
}

#[test]
fn zoom_does_not_touch_stored_coordinates() {
    let mut e = engine();
    e.add_object();
    e.wheel(-100.0);
    let obj = e.scene.get(0).unwrap();
    assert_eq!((obj.x, obj.y, obj.width, obj.height), (50.0, 50.0, 100.0, 100.0));
}
