//! Interaction driver for the hitscan demo
//!
//! Owns the scene and everything the input handlers touch. Input events are
//! processed one at a time; a pointer release runs a full collision pass
//! before the next event is looked at. Render ticks never change state.

use std::time::Duration;

use hitscan_engine::assets::{load_collision_triangles, ObjError};
use hitscan_engine::core::{ConfigError, HitscanConfig};
use hitscan_engine::debug::CollisionDebugVisualizer;
use hitscan_engine::foundation::time::{FrameTicker, Stopwatch};
use hitscan_engine::input::{Gizmo, InputEvent, KeyCode, MouseButton, MouseState};
use hitscan_engine::physics::{run_collision, CollisionReport};
use hitscan_engine::scene::{build_scene, PendingLoad, PickingCamera, SceneError, SceneRegistry};
use thiserror::Error;

/// Initial viewport size until the host reports a resize
pub const DEFAULT_VIEWPORT: (u32, u32) = (800, 600);

/// Demo application errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    /// A required scene node is missing
    #[error("Scene error: {0}")]
    Scene(#[from] SceneError),
    /// A target mesh could not be loaded
    #[error("Asset error: {0}")]
    Asset(#[from] ObjError),
}

/// The interactive hitscan scene
pub struct HitscanApp {
    config: HitscanConfig,
    registry: SceneRegistry,
    pending: Vec<PendingLoad>,
    debug: CollisionDebugVisualizer,
    gizmo: Gizmo,
    mouse: MouseState,
    camera: PickingCamera,
    ticker: FrameTicker,
    last_report: CollisionReport,
    vector_text: String,
    count_text: String,
}

impl HitscanApp {
    /// Build the scene described by `config`
    pub fn new(config: HitscanConfig) -> Result<Self, AppError> {
        log::info!("Creating hitscan demo application...");
        let (registry, pending) = build_scene(&config.scene, config.bullet.max_length)?;
        let (width, height) = DEFAULT_VIEWPORT;

        Ok(Self {
            debug: CollisionDebugVisualizer::from_config(&config.debug),
            camera: PickingCamera::from_config(&config.scene.camera, width, height),
            ticker: FrameTicker::new(config.engine.target_fps),
            mouse: MouseState::new(width, height),
            gizmo: Gizmo::new(),
            last_report: CollisionReport::default(),
            vector_text: String::new(),
            count_text: String::new(),
            config,
            registry,
            pending,
        })
    }

    /// Finish mesh loads and run the first collision pass
    pub fn start(&mut self) -> Result<(), AppError> {
        self.complete_pending_loads();
        self.run_pass()?;
        Ok(())
    }

    /// Resolve every pending OBJ target
    ///
    /// A target whose file cannot be loaded stays empty and is skipped by
    /// collision passes.
    pub fn complete_pending_loads(&mut self) {
        for load in std::mem::take(&mut self.pending) {
            if let Err(e) = self.load_target(&load) {
                log::warn!("Failed to load {} from {}: {e}", load.role, load.path.display());
            }
        }
    }

    fn load_target(&mut self, load: &PendingLoad) -> Result<(), AppError> {
        let triangles = load_collision_triangles(&load.path)?;
        self.registry.set_mesh(load.role, triangles)?;
        Ok(())
    }

    /// Process one input event
    pub fn handle_event(&mut self, event: InputEvent) -> Result<(), AppError> {
        match event {
            InputEvent::PointerDown { button, x, y } => {
                self.mouse.update_position(x, y);
                if button == MouseButton::Left {
                    self.mouse.start_drag();
                    self.try_attach();
                }
            }
            InputEvent::PointerMove { x, y } => {
                self.mouse.update_position(x, y);
                self.drag_attached();
            }
            InputEvent::PointerUp { button } => {
                if button == MouseButton::Left {
                    self.mouse.end_drag();
                }
                self.run_pass()?;
            }
            InputEvent::KeyDown(KeyCode::Z) => {
                let mode = self.gizmo.cycle_mode();
                log::info!("Gizmo mode: {mode:?}");
            }
            InputEvent::KeyDown(KeyCode::Escape) => {
                self.gizmo.detach();
                log::info!("Gizmo detached");
            }
            InputEvent::KeyDown(KeyCode::Other('d')) => {
                let enabled = !self.debug.is_enabled();
                self.debug.set_enabled(enabled);
                log::info!("Collision debug drawing {}", if enabled { "on" } else { "off" });
            }
            InputEvent::KeyDown(_) => {}
            InputEvent::Resize { width, height } => {
                self.mouse.update_window_size(width, height);
                self.camera.set_viewport(width, height);
                log::debug!("Viewport resized to {width}x{height}");
            }
        }
        Ok(())
    }

    fn try_attach(&mut self) {
        let (ndc_x, ndc_y) = self.mouse.screen_to_ndc();
        let ray = self.camera.ray_through(ndc_x, ndc_y);
        if let Some((key, distance)) = self.registry.pick(&ray) {
            self.gizmo.attach(key);
            if let Some(node) = self.registry.node(key) {
                log::info!("Gizmo attached to {} at distance {distance:.3}", node.name);
            }
        }
    }

    fn drag_attached(&mut self) {
        let Some(key) = self.gizmo.attached() else {
            return;
        };
        let Some((dx, dy)) = self.mouse.take_drag_delta() else {
            return;
        };
        if let Some(node) = self.registry.node_mut(key) {
            self.gizmo.apply_drag(&mut node.transform, dx, dy);
        }
    }

    /// Fire the bullet from the current emitter pose and refresh the display
    pub fn run_pass(&mut self) -> Result<&CollisionReport, AppError> {
        let mut stopwatch = Stopwatch::new();
        let ray = self.registry.emitter_pose()?.ray(self.config.bullet.max_length);
        let report = run_collision(&ray, self.registry.targets(), &mut self.debug);
        log::debug!("Collision pass took {:?}", stopwatch.lap());

        self.vector_text = report.vector_text();
        self.count_text = report.count_text();
        self.last_report = report;
        Ok(&self.last_report)
    }

    /// Advance the render clock; returns the number of frames rendered
    pub fn tick(&mut self, elapsed: Duration) -> u32 {
        let frames = self.ticker.advance(elapsed);
        for _ in 0..frames {
            self.render();
        }
        frames
    }

    fn render(&self) {
        log::trace!(
            "Frame {}: {} debug shapes, {} scene nodes",
            self.ticker.tick_count(),
            self.debug.get_shapes().count(),
            self.registry.len()
        );
    }

    /// Bullet vector display text
    pub fn vector_text(&self) -> &str {
        &self.vector_text
    }

    /// Hit count display text
    pub fn count_text(&self) -> &str {
        &self.count_text
    }

    /// Report of the latest pass
    pub fn last_report(&self) -> &CollisionReport {
        &self.last_report
    }

    /// Scene nodes
    pub fn registry(&self) -> &SceneRegistry {
        &self.registry
    }

    /// Transform gizmo
    pub fn gizmo(&self) -> &Gizmo {
        &self.gizmo
    }

    /// Collision debug shapes
    pub fn debug(&self) -> &CollisionDebugVisualizer {
        &self.debug
    }
}
