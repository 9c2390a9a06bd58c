//! Scene → Vello drawing commands.
//!
//! Emits one filled rectangle per object, in list order (later objects
//! paint on top). Zoom is a uniform scale on the fill transform; object
//! coordinates stay model-space.

use dt_core::{Color, Scene};
use kurbo::{Affine, Rect};
use peniko::Fill;
use vello::Scene as VelloScene;

/// Paint the scene to a Vello scene at the given zoom factor.
///
/// Call once per frame with a freshly-cleared `Scene`.
/// The caller presents the scene via wgpu.
pub fn paint_scene(out: &mut VelloScene, scene: &Scene, zoom: f32) {
    log::trace!("paint {} objects at zoom {zoom}", scene.len());

    let transform = Affine::scale(zoom as f64);
    for obj in scene.iter() {
        let rect = Rect::new(
            obj.x as f64,
            obj.y as f64,
            (obj.x + obj.width) as f64,
            (obj.y + obj.height) as f64,
        );
        out.fill(Fill::NonZero, transform, to_peniko(obj.color), None, &rect);
    }
}

fn to_peniko(c: Color) -> peniko::Color {
    peniko::Color::from_rgb8(c.r, c.g, c.b)
}
