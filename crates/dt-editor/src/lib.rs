pub mod engine;
pub mod input;
pub mod tools;
pub mod view;

pub use engine::CanvasEngine;
pub use input::InputEvent;
pub use tools::{DragController, DragSession, Mode, SceneMutation};
pub use view::ViewTransform;
