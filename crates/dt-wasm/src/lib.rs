//! WASM bridge — exposes the canvas and sidebar widgets to JavaScript.
//!
//! Compiled via `wasm-pack build --target web`. The host wires pointer
//! and wheel listeners plus the toolbar buttons to `DtCanvas`, and the
//! sidebar add buttons to `DtSidebar`; list-shaped return values travel
//! as JSON strings.

mod render2d;

use dt_core::{SidebarState, Viewport};
use dt_editor::CanvasEngine;
use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

/// The main WASM-facing canvas controller.
///
/// All interaction from the host goes through this struct; handlers
/// return `true` when the caller should repaint.
#[wasm_bindgen]
pub struct DtCanvas {
    engine: CanvasEngine,
}

#[wasm_bindgen]
impl DtCanvas {
    /// Create a controller for a surface of the given logical size.
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            engine: CanvasEngine::new(Viewport { width, height }),
        }
    }

    /// Repaint the active scene to a Canvas2D context.
    pub fn render(&self, ctx: &CanvasRenderingContext2d) {
        render2d::render_scene(
            ctx,
            &self.engine.scene,
            self.engine.view.zoom,
            self.engine.viewport.width as f64,
            self.engine.viewport.height as f64,
        );
    }

    /// Tell the engine where the canvas element sits on screen, so
    /// client coordinates can be corrected before hit testing.
    pub fn set_canvas_offset(&mut self, x: f32, y: f32) {
        self.engine.view.offset_x = x;
        self.engine.view.offset_y = y;
    }

    // ─── Pointer events ──────────────────────────────────────────────────

    /// Pointer pressed. Returns true if a drag started.
    pub fn handle_pointer_down(&mut self, x: f32, y: f32) -> bool {
        self.engine.pointer_down(x, y)
    }

    /// Pointer moved. Returns true if an object was repositioned.
    pub fn handle_pointer_move(&mut self, x: f32, y: f32) -> bool {
        self.engine.pointer_move(x, y)
    }

    /// Pointer released. Returns true if a drag completed (and was
    /// saved).
    pub fn handle_pointer_up(&mut self, x: f32, y: f32) -> bool {
        self.engine.pointer_up(x, y)
    }

    /// Wheel input. Returns true if the zoom changed.
    pub fn handle_wheel(&mut self, delta_y: f32) -> bool {
        self.engine.wheel(delta_y)
    }

    // ─── Toolbar actions ─────────────────────────────────────────────────

    /// Add an object to the active canvas. Returns its index.
    pub fn add_object(&mut self) -> usize {
        self.engine.add_object()
    }

    /// Toggle select mode. Returns the new "selecting" flag, which the
    /// host uses for cursor styling and the button label.
    pub fn toggle_select_mode(&mut self) -> bool {
        self.engine.toggle_select_mode();
        self.engine.is_selecting()
    }

    pub fn is_selecting(&self) -> bool {
        self.engine.is_selecting()
    }

    /// Start a new empty canvas and make it active. Returns its index.
    pub fn add_canvas(&mut self) -> usize {
        self.engine.add_version()
    }

    /// Switch to canvas `index`. Out of range returns false and changes
    /// nothing.
    pub fn switch_canvas(&mut self, index: usize) -> bool {
        self.engine.switch_version(index)
    }

    pub fn active_canvas(&self) -> usize {
        self.engine.active_version()
    }

    /// Version-switch button labels as a JSON array.
    pub fn canvas_labels(&self) -> String {
        serde_json::to_string(&self.engine.version_labels()).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn zoom(&self) -> f32 {
        self.engine.view.zoom
    }
}

/// Bridge for the two-sidebar page: each add button appends the next
/// numbered item to its own list.
#[wasm_bindgen]
pub struct DtSidebar {
    state: SidebarState,
}

#[wasm_bindgen]
impl DtSidebar {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            state: SidebarState::new(),
        }
    }

    /// Add an item to the left sidebar. Returns its label.
    pub fn add_left(&mut self) -> String {
        self.state.left.add().to_string()
    }

    /// Add an item to the right sidebar. Returns its label.
    pub fn add_right(&mut self) -> String {
        self.state.right.add().to_string()
    }

    /// Left sidebar items as a JSON array.
    pub fn left_items(&self) -> String {
        serde_json::to_string(self.state.left.items()).unwrap_or_else(|_| "[]".to_string())
    }

    /// Right sidebar items as a JSON array.
    pub fn right_items(&self) -> String {
        serde_json::to_string(self.state.right.items()).unwrap_or_else(|_| "[]".to_string())
    }
}

impl Default for DtSidebar {
    fn default() -> Self {
        Self::new()
    }
}
