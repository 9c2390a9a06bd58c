pub mod hit;
pub mod paint;

pub use hit::hit_test;
pub use paint::paint_scene;
