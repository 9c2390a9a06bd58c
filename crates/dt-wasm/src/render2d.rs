//! Canvas2D software renderer.
//!
//! Full repaint per frame: clear the surface, scale by the zoom factor,
//! fill each object's rectangle in list order (later objects on top),
//! restore the transform.

use dt_core::Scene;
use web_sys::CanvasRenderingContext2d;

/// Render the scene to a Canvas2D context at the given zoom.
///
/// `width`/`height` are the surface's pixel dimensions, used only for
/// the clear.
pub fn render_scene(
    ctx: &CanvasRenderingContext2d,
    scene: &Scene,
    zoom: f32,
    width: f64,
    height: f64,
) {
    ctx.clear_rect(0.0, 0.0, width, height);

    ctx.save();
    let _ = ctx.scale(zoom as f64, zoom as f64);

    for obj in scene.iter() {
        ctx.set_fill_style_str(&obj.color.to_hex());
        ctx.fill_rect(
            obj.x as f64,
            obj.y as f64,
            obj.width as f64,
            obj.height as f64,
        );
    }

    ctx.restore();
}
