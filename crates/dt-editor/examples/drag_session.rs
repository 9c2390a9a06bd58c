//! Simulates a short editing session against the canvas engine and
//! prints the resulting state. Run with logging to watch the gesture
//! pipeline:
//!
//! ```sh
//! RUST_LOG=trace cargo run -p dt-editor --example drag_session
//! ```

use dt_core::Viewport;
use dt_editor::CanvasEngine;
use rand::SeedableRng;
use rand::rngs::SmallRng;

fn main() {
    env_logger::init();

    let mut engine = CanvasEngine::with_rng(Viewport::default(), SmallRng::seed_from_u64(2024));

    // Two objects on the first canvas, then drag the first one.
    engine.add_object();
    engine.add_object();
    engine.toggle_select_mode();
    engine.pointer_down(75.0, 75.0);
    engine.pointer_move(175.0, 135.0);
    engine.pointer_up(175.0, 135.0);

    // A second canvas with one object, then back to the first.
    engine.add_version();
    engine.add_object();
    engine.switch_version(0);

    println!("versions: {:?}", engine.version_labels());
    println!("active:   {}", engine.active_version());
    for (i, obj) in engine.scene.iter().enumerate() {
        println!(
            "object {i}: ({}, {}) {}x{} {}",
            obj.x,
            obj.y,
            obj.width,
            obj.height,
            obj.color.to_hex()
        );
    }
}
