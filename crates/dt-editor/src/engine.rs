//! Canvas engine: the authoritative widget state.
//!
//! Owns the working scene, the version store, the view transform, and
//! the interaction mode. Pointer events are mapped to model-space here,
//! hit-tested, and delegated to the drag controller; the mutations it
//! returns are applied in place. Object adds persist into the active
//! version immediately; a drag persists once, when the pointer lifts.

use crate::input::InputEvent;
use crate::tools::{DragController, Mode, SceneMutation};
use crate::view::ViewTransform;
use dt_core::{Color, Scene, SceneObject, VersionStore, Viewport};
use dt_render::hit::hit_test;
use rand::SeedableRng;
use rand::rngs::SmallRng;

pub struct CanvasEngine {
    /// The working object list (the active canvas).
    pub scene: Scene,
    /// Saved per-version snapshots.
    pub versions: VersionStore,
    /// Zoom and canvas screen offset.
    pub view: ViewTransform,
    /// Logical drawing-surface size, pre-zoom.
    pub viewport: Viewport,

    mode: Mode,
    controller: DragController,
    rng: SmallRng,
    /// Working-scene edits not yet saved into the active version.
    scene_dirty: bool,
}

impl CanvasEngine {
    /// A new engine with one empty canvas and OS-seeded colors.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self::with_rng(viewport, SmallRng::from_os_rng())
    }

    /// Inject the color generator — tests seed it for determinism.
    pub fn with_rng(viewport: Viewport, rng: SmallRng) -> Self {
        Self {
            scene: Scene::new(),
            versions: VersionStore::new(),
            view: ViewTransform::default(),
            viewport,
            mode: Mode::Normal,
            controller: DragController::new(),
            rng,
            scene_dirty: false,
        }
    }

    // ─── Discrete UI actions ─────────────────────────────────────────────

    /// Add an object at the spawn rectangle with a random color and save
    /// the active version. Returns the new object's index.
    pub fn add_object(&mut self) -> usize {
        let color = Color::random(&mut self.rng);
        let index = self.scene.push(SceneObject::spawned(color));
        self.scene_dirty = true;
        self.save_active();
        log::debug!("added object {index} ({})", self.scene.get(index).map(|o| o.color.to_hex()).unwrap_or_default());
        index
    }

    /// Flip between `Normal` and `Select`. A live drag session does not
    /// survive the flip.
    pub fn toggle_select_mode(&mut self) -> Mode {
        self.mode = self.mode.toggled();
        self.controller.cancel();
        log::debug!("mode -> {:?}", self.mode);
        self.mode
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_selecting(&self) -> bool {
        self.mode == Mode::Select
    }

    /// Start a new, empty canvas version and make it active. The
    /// previous version keeps whatever was last saved into it.
    pub fn add_version(&mut self) -> usize {
        let index = self.versions.add();
        self.scene = Scene::new();
        self.controller.cancel();
        self.scene_dirty = false;
        index
    }

    /// Make version `index` active and load its saved scene into the
    /// working list (by value). Out of range is a logged no-op.
    pub fn switch_version(&mut self, index: usize) -> bool {
        if !self.versions.switch(index) {
            log::warn!("switch to out-of-range version {index} ignored");
            return false;
        }
        self.scene = self.versions.active_scene().clone();
        self.controller.cancel();
        self.scene_dirty = false;
        true
    }

    pub fn active_version(&self) -> usize {
        self.versions.active_index()
    }

    pub fn version_labels(&self) -> Vec<String> {
        self.versions.labels()
    }

    // ─── Pointer events (screen-space coordinates) ───────────────────────

    /// Pointer pressed. Ignored entirely outside `Select` mode — no hit
    /// test, no state. Returns whether a drag session started.
    pub fn pointer_down(&mut self, x: f32, y: f32) -> bool {
        if self.mode != Mode::Select {
            return false;
        }
        let (mx, my) = self.view.to_model(x, y);
        let hit = hit_test(&self.scene, mx, my);
        let mutations =
            self.controller
                .handle(&InputEvent::from_pointer_down(mx, my), &self.scene, hit);
        self.apply(mutations);
        if let Some(s) = self.controller.session() {
            log::trace!("drag start on object {} at ({mx}, {my})", s.index);
        }
        self.controller.is_dragging()
    }

    /// Pointer moved. Repositions the dragged object, if any. The model
    /// mapping uses the zoom at the time of this event, so a wheel
    /// mid-drag makes the object jump — known behavior, not corrected.
    pub fn pointer_move(&mut self, x: f32, y: f32) -> bool {
        if !self.controller.is_dragging() {
            return false;
        }
        let (mx, my) = self.view.to_model(x, y);
        let mutations =
            self.controller
                .handle(&InputEvent::from_pointer_move(mx, my), &self.scene, None);
        self.apply(mutations)
    }

    /// Pointer released. Ends the drag session and saves the active
    /// version — the single save of the whole gesture. Returns whether
    /// a drag actually completed.
    pub fn pointer_up(&mut self, x: f32, y: f32) -> bool {
        let was_dragging = self.controller.is_dragging();
        let (mx, my) = self.view.to_model(x, y);
        self.controller
            .handle(&InputEvent::from_pointer_up(mx, my), &self.scene, None);
        if was_dragging {
            self.save_active();
            log::trace!("drag end at ({mx}, {my})");
        }
        was_dragging
    }

    /// Wheel input adjusts zoom, clamped. Mode-independent and legal
    /// mid-drag. Returns whether the zoom changed.
    pub fn wheel(&mut self, delta_y: f32) -> bool {
        self.view.apply_wheel(delta_y)
    }

    // ─── State plumbing ──────────────────────────────────────────────────

    /// Overwrite the active version with the working scene.
    pub fn save_active(&mut self) {
        self.versions.save(&self.scene);
        self.scene_dirty = false;
        log::trace!("saved version {}", self.versions.active_index());
    }

    /// Working-scene edits not yet persisted (i.e. a drag in progress).
    pub fn has_unsaved_edits(&self) -> bool {
        self.scene_dirty
    }

    fn apply(&mut self, mutations: Vec<SceneMutation>) -> bool {
        let mut changed = false;
        for m in mutations {
            match m {
                SceneMutation::MoveObject { index, x, y } => {
                    if let Some(obj) = self.scene.get_mut(index) {
                        obj.x = x;
                        obj.y = y;
                        changed = true;
                    }
                }
            }
        }
        if changed {
            self.scene_dirty = true;
        }
        changed
    }
}

impl Default for CanvasEngine {
    fn default() -> Self {
        Self::new(Viewport::default())
    }
}
