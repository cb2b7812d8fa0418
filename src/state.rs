// src/state.rs
// Mutable state behind a molecule view: atoms, rotation input and the surface.

use crate::error::SurfaceError;
use crate::interactions::{apply_rotation, PointerEvent, RotationController};
use crate::rendering::gradient_cache::GradientCache;
use crate::rendering::painter::draw_structure;
use crate::rendering::{CanvasSize, DrawingSurface, ProjectedAtom, Scene, ViewTransform};

pub struct ViewState<S> {
  pub atoms: Vec<ProjectedAtom>,
  pub max_total_radius: f64,
  pub gradients: GradientCache,
  pub controller: RotationController,
  pub canvas: CanvasSize,
  pub view_margin: f64,
  pub surface: S,
  pub frames: u64,
}

impl<S: DrawingSurface> ViewState<S> {
  pub fn new(
    scene: Scene,
    gradients: GradientCache,
    controller: RotationController,
    canvas: CanvasSize,
    view_margin: f64,
    surface: S,
  ) -> Self {
    Self {
      atoms: scene.atoms,
      max_total_radius: scene.max_total_radius,
      gradients,
      controller,
      canvas,
      view_margin,
      surface,
      frames: 0,
    }
  }

  pub fn view_transform(&self) -> ViewTransform {
    ViewTransform::fit(self.max_total_radius, &self.canvas, self.view_margin)
  }

  /// One animation step: rotate, then paint. A non-finite `dt` repaints
  /// without rotating.
  pub fn advance(&mut self, dt: f64) {
    if !dt.is_finite() {
      log::warn!("Ignoring non-finite tick interval {}", dt);
      self.draw();
      return;
    }
    let rotation = self.controller.step(dt, self.canvas.pixel_width());
    apply_rotation(&mut self.atoms, &rotation);
    self.draw();
  }

  pub fn draw(&mut self) {
    let view = self.view_transform();
    let _ = draw_structure(&mut self.surface, &self.atoms, &mut self.gradients, &view);
    self.frames += 1;
  }

  /// Rotation is carried in the atom positions, so only the pixel mapping changes.
  pub fn resize(&mut self, canvas: CanvasSize) -> Result<(), SurfaceError> {
    self.surface.resize(canvas)?;
    self.canvas = canvas;
    self.draw();
    Ok(())
  }

  pub fn handle_pointer(&mut self, event: &PointerEvent) {
    if self.controller.handle(event) {
      self.surface.set_cursor(self.controller.cursor());
    }
  }
}
