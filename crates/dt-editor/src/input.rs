//! Input abstraction layer.
//!
//! Normalizes host pointer and wheel events into a unified `InputEvent`
//! enum consumed by the drag controller. Pointer coordinates here are
//! screen-space; `ViewTransform` maps them to model-space before any
//! hit testing or drag math.

/// A normalized input event from the host.
#[derive(Debug, Clone, Copy)]
pub enum InputEvent {
    /// Pointer pressed (mouse down, touch start).
    PointerDown { x: f32, y: f32 },

    /// Pointer moved.
    PointerMove { x: f32, y: f32 },

    /// Pointer released.
    PointerUp { x: f32, y: f32 },

    /// Wheel scroll; only the vertical delta drives zoom.
    Wheel { delta_y: f32 },
}

impl InputEvent {
    pub fn from_pointer_down(x: f32, y: f32) -> Self {
        Self::PointerDown { x, y }
    }

    pub fn from_pointer_move(x: f32, y: f32) -> Self {
        Self::PointerMove { x, y }
    }

    pub fn from_pointer_up(x: f32, y: f32) -> Self {
        Self::PointerUp { x, y }
    }

    /// Extract position if this is a pointer event.
    pub fn position(&self) -> Option<(f32, f32)> {
        match self {
            Self::PointerDown { x, y }
            | Self::PointerMove { x, y }
            | Self::PointerUp { x, y } => Some((*x, *y)),
            Self::Wheel { .. } => None,
        }
    }
}
