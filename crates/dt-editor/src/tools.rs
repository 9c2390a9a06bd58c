//! Drag interaction state machine.
//!
//! The controller translates model-space pointer events into
//! `SceneMutation` values the engine applies. It is `Idle` until a
//! pointer-down lands on an object, `Dragging` until the pointer lifts.
//! All coordinates entering here are already model-space.

use crate::input::InputEvent;
use dt_core::Scene;

/// The global interaction mode. Dragging is only eligible in `Select`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Normal,
    Select,
}

impl Mode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Normal => Self::Select,
            Self::Select => Self::Normal,
        }
    }
}

/// Ephemeral drag state, alive between pointer-down-on-object and
/// pointer-up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Index of the dragged object in the working scene.
    pub index: usize,
    /// Pointer position at grab time, model-space.
    pub start: (f32, f32),
    /// Pointer minus object top-left at grab time. Keeps the object
    /// from snapping its corner to the cursor.
    pub grab: (f32, f32),
}

/// A mutation the controller asks the engine to apply.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SceneMutation {
    /// Set an object's top-left corner. Size and color are untouched.
    MoveObject { index: usize, x: f32, y: f32 },
}

/// The `Idle`/`Dragging` state machine.
#[derive(Debug, Default)]
pub struct DragController {
    session: Option<DragSession>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a model-space input event, returning zero or more
    /// mutations. `hit` is the hit-test result for down events.
    pub fn handle(
        &mut self,
        event: &InputEvent,
        scene: &Scene,
        hit: Option<usize>,
    ) -> Vec<SceneMutation> {
        match event {
            InputEvent::PointerDown { x, y } => {
                if let Some(index) = hit
                    && let Some(obj) = scene.get(index)
                {
                    self.session = Some(DragSession {
                        index,
                        start: (*x, *y),
                        grab: (x - obj.x, y - obj.y),
                    });
                }
                // Press alone doesn't mutate
                vec![]
            }
            InputEvent::PointerMove { x, y } => {
                if let Some(s) = &self.session {
                    return vec![SceneMutation::MoveObject {
                        index: s.index,
                        x: x - s.grab.0,
                        y: y - s.grab.1,
                    }];
                }
                vec![]
            }
            InputEvent::PointerUp { .. } => {
                self.session = None;
                vec![]
            }
            InputEvent::Wheel { .. } => vec![],
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Drop any live session without saving. Used on mode toggles and
    /// version switches, where the session would outlive its scene.
    pub fn cancel(&mut self) {
        self.session = None;
    }
}
