/// ShowroomViewer: the composition root.
///
/// Owns one instance of every component and wires them in dependency order:
/// scene cache -> ModelAdapter -> AnnotationLayout -> ViewChoreographer,
/// with OrbitController and Camera alongside. The caller drives it from its
/// frame loop and forwards pointer input, viewport changes and texture load
/// completions.
///
/// Loaded scenes are shared through the cache; each load adapts a private
/// copy, so the cached asset is never mutated.

use glam::{Mat4, Vec2};
use crate::annotation::{Annotation, AnnotationLayout, find_annotation};
use crate::camera::{Camera, CameraPose, OrbitController, OrbitInput, ViewChoreographer};
use crate::config::ViewerConfig;
use crate::error::{Error, Result};
use crate::model::{AdaptOutcome, ModelAdapter, TextureRequest};
use crate::resource::{AssetCache, Material, SceneLoader, Texture, TextureSource};
use crate::scene::{AABB, SceneGraph};
use crate::{engine_bail, viewer_error, viewer_info, viewer_warn};

const SOURCE: &str = "showroom::ShowroomViewer";

/// Everything the renderer needs for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct FrameOutput {
    pub pose: CameraPose,
    /// A camera transition is still running
    pub animating: bool,
    pub view: Mat4,
    pub projection: Mat4,
    pub active_annotation: Option<u32>,
    /// Marker id and its viewport position, `None` when off screen
    pub markers: Vec<(u32, Option<Vec2>)>,
}

struct LoadedModel {
    reference: String,
    scene: SceneGraph,
    outcome: AdaptOutcome,
}

/// Interactive carpet viewer state
pub struct ShowroomViewer {
    scenes: AssetCache<SceneGraph>,
    adapter: ModelAdapter,
    layout: AnnotationLayout,
    choreographer: ViewChoreographer,
    orbit: OrbitController,
    camera: Camera,
    model: Option<LoadedModel>,
    annotations: Vec<Annotation>,
    last_frame_ms: Option<f64>,
}

impl ShowroomViewer {
    /// Create a viewer for a `width` x `height` viewport.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` if the configuration is rejected, and
    /// `Error::InitializationFailed` for a viewport without a positive,
    /// finite size.
    pub fn new(config: ViewerConfig, width: f32, height: f32) -> Result<Self> {
        config.validate()?;
        if !(width > 0.0 && height > 0.0) || !width.is_finite() || !height.is_finite() {
            viewer_error!(SOURCE, "Cannot create viewer for a {}x{} viewport", width, height);
            return Err(Error::InitializationFailed(format!("viewport {}x{} has no area", width, height)));
        }

        let choreographer = ViewChoreographer::new(config.choreography, width);
        let camera = Camera::new(config.camera, choreographer.pose(), width, height);

        viewer_info!(SOURCE, "Viewer created ({}x{}, {:?})", width, height, choreographer.device_class());

        Ok(Self {
            scenes: AssetCache::new("scene"),
            adapter: ModelAdapter::new(&config.adapter),
            layout: AnnotationLayout::new(config.layout),
            choreographer,
            orbit: OrbitController::new(config.orbit),
            camera,
            model: None,
            annotations: Vec::new(),
            last_frame_ms: None,
        })
    }

    // ===== GETTERS =====

    /// Current annotations, empty while no carpet is available
    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    pub fn bounding_box(&self) -> Option<AABB> {
        self.model.as_ref().and_then(|m| m.outcome.bounding_box)
    }

    /// Reference of the loaded model
    pub fn model_reference(&self) -> Option<&str> {
        self.model.as_ref().map(|m| m.reference.as_str())
    }

    /// The adapted working copy of the loaded scene
    pub fn scene(&self) -> Option<&SceneGraph> {
        self.model.as_ref().map(|m| &m.scene)
    }

    /// Live material of the carpet mesh
    pub fn carpet_material(&self) -> Option<&Material> {
        let model = self.model.as_ref()?;
        model.scene.node(model.outcome.target?)?.material()
    }

    pub fn active_annotation(&self) -> Option<u32> {
        self.choreographer.active_annotation()
    }

    pub fn pose(&self) -> CameraPose {
        self.choreographer.pose()
    }

    pub fn is_animating(&self) -> bool {
        self.choreographer.is_animating()
    }

    pub fn choreographer(&self) -> &ViewChoreographer {
        &self.choreographer
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn scene_cache(&self) -> &AssetCache<SceneGraph> {
        &self.scenes
    }

    // ===== MODEL =====

    /// Warm the scene cache without showing the model.
    pub fn preload_model(&mut self, reference: &str, loader: &mut dyn SceneLoader) -> Result<()> {
        self.scenes.preload(reference, || loader.load_scene(reference))
    }

    /// Load, adapt and show a model, replacing the current one.
    ///
    /// Annotations are regenerated from the new carpet bounds and any
    /// selection is dropped; the camera stays where it is.
    ///
    /// # Errors
    ///
    /// Propagates the loader's error. The previous model stays in place.
    pub fn load_model(&mut self, reference: &str, loader: &mut dyn SceneLoader) -> Result<AdaptOutcome> {
        let shared = match self.scenes.acquire(reference, || loader.load_scene(reference)) {
            Ok(shared) => shared,
            Err(err) => {
                viewer_warn!(SOURCE, "Model '{}' failed to load: {}", reference, err);
                return Err(err);
            }
        };

        if let Some(previous) = self.model.take() {
            if let Err(err) = self.scenes.release(&previous.reference) {
                viewer_warn!(SOURCE, "Previous model '{}' not released: {}", previous.reference, err);
            }
        }

        let mut scene = (*shared).clone();
        self.adapter.reset();
        let outcome = self.adapter.adapt(&mut scene);
        self.annotations = self.layout.layout(outcome.bounding_box.as_ref());
        self.choreographer.clear_selection();

        viewer_info!(SOURCE, "Model '{}' ready: {} annotations", reference, self.annotations.len());
        self.model = Some(LoadedModel { reference: reference.to_string(), scene, outcome });
        Ok(outcome)
    }

    /// Drop the current model and release its cache entry.
    pub fn unload_model(&mut self) -> Result<()> {
        let Some(model) = self.model.take() else {
            return Ok(());
        };
        self.adapter.reset();
        self.annotations.clear();
        self.choreographer.clear_selection();
        self.scenes.release(&model.reference)?;
        viewer_info!(SOURCE, "Model '{}' unloaded", model.reference);
        Ok(())
    }

    // ===== TEXTURES =====

    /// Swap the carpet texture (`Some`) or restore the original (`None`).
    ///
    /// Returns the load request to resolve later, if one is needed.
    pub fn request_texture(&mut self, source: Option<TextureSource>) -> Option<TextureRequest> {
        let model = self.model.as_mut()?;
        self.adapter.apply_texture(&mut model.scene, source)
    }

    /// Resolve a texture request. Returns `true` if the texture was applied.
    pub fn complete_texture(&mut self, request: TextureRequest, loaded: Result<Texture>) -> bool {
        let Some(model) = self.model.as_mut() else {
            return false;
        };
        self.adapter.complete_texture(&mut model.scene, request, loaded)
    }

    // ===== INTERACTION =====

    /// Toggle focus on the annotation with `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if no current annotation has that id.
    pub fn select_annotation(&mut self, id: u32, now_ms: f64) -> Result<()> {
        let Some(annotation) = find_annotation(&self.annotations, id) else {
            engine_bail!(SOURCE, "Unknown annotation id {}", id);
        };
        self.choreographer.select_annotation(annotation, now_ms);
        Ok(())
    }

    /// Close the info panel and return to the default framing
    pub fn close_annotation(&mut self, now_ms: f64) {
        self.choreographer.cancel_to_default(now_ms);
    }

    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.choreographer.set_viewport_width(width);
        self.camera.set_viewport(width, height);
    }

    /// Apply user orbit input. Returns `false` while a transition runs.
    pub fn orbit(&mut self, input: OrbitInput) -> bool {
        if self.choreographer.is_animating() {
            return false;
        }
        let pose = self.orbit.apply(&self.choreographer.pose(), input);
        self.choreographer.apply_user_pose(pose)
    }

    // ===== FRAME =====

    /// Advance to `now_ms` and produce the camera state for rendering.
    pub fn frame(&mut self, now_ms: f64) -> FrameOutput {
        let (mut pose, done) = self.choreographer.tick(now_ms);

        if done && self.choreographer.active_annotation().is_none() {
            if let Some(last) = self.last_frame_ms {
                let dt_seconds = ((now_ms - last) / 1000.0) as f32;
                let rotated = self.orbit.auto_rotate(&pose, dt_seconds);
                if rotated != pose && self.choreographer.apply_user_pose(rotated) {
                    pose = rotated;
                }
            }
        }
        self.last_frame_ms = Some(now_ms);

        self.camera.set_pose(pose);
        let markers = self
            .annotations
            .iter()
            .map(|a| (a.id, self.camera.project_to_viewport(a.position)))
            .collect();

        FrameOutput {
            pose,
            animating: !done,
            view: *self.camera.view_matrix(),
            projection: *self.camera.projection_matrix(),
            active_annotation: self.choreographer.active_annotation(),
            markers,
        }
    }
}

#[cfg(test)]
#[path = "viewer_tests.rs"]
mod tests;
