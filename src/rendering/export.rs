// src/rendering/export.rs
// Cairo back buffer for on-screen frames and PNG snapshots.

use super::primitives::{CircularArc, EllipticalArc, ShadingGradient};
use super::scene::ViewTransform;
use super::surface::{CanvasSize, CursorStyle, DrawingSurface};
use crate::error::SurfaceError;
use crate::model::Rgb;
use cairo::{Context, Format, ImageSurface, RadialGradient};
use nalgebra::Vector2;
use std::fs::File;
use std::path::Path;

// Below this a semi-axis is drawn as a straight chord instead of a scaled arc
const DEGENERATE_AXIS: f64 = 1e-6;

/// Drawing surface backed by a cairo `ImageSurface` sized to the canvas
/// pixel buffer.
pub struct CairoSurface {
  buffer: ImageSurface,
  cr: Context,
  canvas: CanvasSize,
  background: Rgb,
  cursor: CursorStyle,
  cursor_changed: bool,
}

fn create_buffer(canvas: &CanvasSize) -> Result<(ImageSurface, Context), SurfaceError> {
  let w = canvas.pixel_width() as i32;
  let h = canvas.pixel_height() as i32;
  let buffer = ImageSurface::create(Format::ARgb32, w, h)
    .map_err(|e| SurfaceError::Unavailable(format!("{}x{} image surface: {}", w, h, e)))?;
  let cr = Context::new(&buffer).map_err(|e| SurfaceError::Unavailable(e.to_string()))?;
  Ok((buffer, cr))
}

impl CairoSurface {
  pub fn new(canvas: CanvasSize, background: Rgb) -> Result<Self, SurfaceError> {
    let (buffer, cr) = create_buffer(&canvas)?;
    Ok(Self {
      buffer,
      cr,
      canvas,
      background,
      cursor: CursorStyle::Grab,
      cursor_changed: true,
    })
  }

  /// Returns the cursor once after each change, for the host to apply.
  pub fn take_cursor_change(&mut self) -> Option<CursorStyle> {
    if self.cursor_changed {
      self.cursor_changed = false;
      Some(self.cursor)
    } else {
      None
    }
  }

  /// Blits the back buffer onto a widget context in logical units.
  pub fn paint_onto(&self, cr: &Context) -> Result<(), cairo::Error> {
    self.buffer.flush();
    cr.save()?;
    let s = 1.0 / self.canvas.backing_scale;
    cr.scale(s, s);
    cr.set_source_surface(&self.buffer, 0.0, 0.0)?;
    cr.paint()?;
    cr.restore()
  }

  pub fn export_png(&self, path: &Path) -> Result<(), SurfaceError> {
    self.buffer.flush();
    let mut file = File::create(path).map_err(|e| SurfaceError::Export(e.to_string()))?;
    self.buffer
      .write_to_png(&mut file)
      .map_err(|e| SurfaceError::Export(e.to_string()))?;
    log::info!("Snapshot written to {:?}", path);
    Ok(())
  }
}

impl DrawingSurface for CairoSurface {
  fn resize(&mut self, canvas: CanvasSize) -> Result<(), SurfaceError> {
    if canvas == self.canvas {
      return Ok(());
    }
    let (buffer, cr) = create_buffer(&canvas)?;
    self.buffer = buffer;
    self.cr = cr;
    self.canvas = canvas;
    Ok(())
  }

  fn begin_frame(&mut self, view: &ViewTransform) {
    self.cr.identity_matrix();
    let Rgb { r, g, b } = self.background;
    self.cr.set_source_rgb(r, g, b);
    if let Err(e) = self.cr.paint() {
      log::warn!("Failed to clear frame: {}", e);
    }
    self.cr.translate(view.mid_x, view.mid_y);
    self.cr.scale(view.scale, view.scale);
  }

  fn begin_path(&mut self) {
    self.cr.new_path();
  }

  fn elliptical_arc_segment(&mut self, arc: &EllipticalArc) {
    if arc.rx.abs() < DEGENERATE_AXIS || arc.ry.abs() < DEGENERATE_AXIS {
      let a = arc.point_at(arc.start);
      let b = arc.point_at(arc.end);
      self.cr.line_to(a.x, a.y);
      self.cr.line_to(b.x, b.y);
      return;
    }

    let m = self.cr.matrix();
    self.cr.translate(arc.center.x, arc.center.y);
    self.cr.rotate(arc.rotation);
    self.cr.scale(arc.rx, arc.ry);
    self.cr.arc(0.0, 0.0, 1.0, arc.start, arc.end);
    self.cr.set_matrix(m);
  }

  fn circular_arc_segment(&mut self, arc: &CircularArc) {
    self.cr.arc(arc.center.x, arc.center.y, arc.radius, arc.start, arc.end);
  }

  fn fill_with_radial_gradient(&mut self, gradient: &ShadingGradient, origin: Vector2<f64>) {
    let c = origin + gradient.center;
    let pat = RadialGradient::new(c.x, c.y, 0.0, c.x, c.y, gradient.full_radius);
    for stop in &gradient.stops {
      pat.add_color_stop_rgb(stop.offset, stop.color.r, stop.color.g, stop.color.b);
    }

    if let Err(e) = self.cr.set_source(&pat) {
      log::warn!("Failed to set atom gradient: {}", e);
      self.cr.new_path();
      return;
    }
    if let Err(e) = self.cr.fill() {
      log::warn!("Failed to fill atom: {}", e);
    }
  }

  fn set_cursor(&mut self, cursor: CursorStyle) {
    if cursor != self.cursor {
      self.cursor = cursor;
      self.cursor_changed = true;
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::model::Element;
  use crate::rendering::gradient_cache::GradientCache;
  use crate::rendering::painter::draw_structure;
  use crate::rendering::ProjectedAtom;
  use nalgebra::Vector3;
  use std::path::PathBuf;
  use std::rc::Rc;

  const RED: Rgb = Rgb::new(1.0, 0.0, 0.0);
  const BLUE: Rgb = Rgb::new(0.0, 0.0, 1.0);
  const GREEN: Rgb = Rgb::new(0.0, 1.0, 0.0);

  fn projected(symbol: &str, pos: [f64; 3], r: f64, color: Rgb) -> ProjectedAtom {
    ProjectedAtom {
      position: Vector3::from(pos),
      radius: r,
      color,
      element: Rc::new(Element::new(symbol, r, color)),
    }
  }

  fn scratch(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("molspin-cairo-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir.join(name)
  }

  /// A (red) and B (blue) intersect side by side, C sits hidden far behind A.
  /// `b_depth` pushes B toward the viewer. Canvas origin maps to pixel (100, 50).
  fn render(b_depth: f64, png: &Path) -> ImageSurface {
    let atoms = vec![
      projected("A", [0.0, 0.0, 0.0], 40.0, RED),
      projected("B", [70.0, 0.0, b_depth], 40.0, BLUE),
      projected("C", [0.0, 0.0, -200.0], 10.0, RED),
    ];
    let canvas = CanvasSize::new(200.0, 100.0, 1.0).unwrap();
    let mut surface = CairoSurface::new(canvas, GREEN).unwrap();
    let view = ViewTransform {
      scale: 1.0,
      mid_x: 100.0,
      mid_y: 50.0,
    };
    let _ = draw_structure(&mut surface, &atoms, &mut GradientCache::new(), &view);

    surface.export_png(png).unwrap();
    let mut file = File::open(png).unwrap();
    ImageSurface::create_from_png(&mut file).unwrap()
  }

  /// (r, g, b) of the pixel covering renderer point (x, y).
  fn pixel(img: &mut ImageSurface, x: f64, y: f64) -> (u8, u8, u8) {
    let (px, py) = ((100.0 + x) as usize, (50.0 + y) as usize);
    let stride = img.stride() as usize;
    let data = img.data().unwrap();
    let i = py * stride + px * 4;
    let argb = u32::from_ne_bytes([data[i], data[i + 1], data[i + 2], data[i + 3]]);
    (((argb >> 16) & 0xff) as u8, ((argb >> 8) & 0xff) as u8, (argb & 0xff) as u8)
  }

  fn is_red(c: (u8, u8, u8)) -> bool {
    c.0 > c.2 && c.1 < 200
  }

  fn is_blue(c: (u8, u8, u8)) -> bool {
    c.2 > c.0 && c.1 < 200
  }

  #[test]
  fn straight_cut_shows_the_farther_atom() {
    let png = scratch("straight.png");
    let mut img = render(0.0, &png);
    assert_eq!((img.width(), img.height()), (200, 100));

    // inside both discs, on A's side of the chord at x = 35: A shows through
    assert!(is_red(pixel(&mut img, 31.0, 0.0)), "{:?}", pixel(&mut img, 31.0, 0.0));
    // on B's side of the chord, B covers A
    assert!(is_blue(pixel(&mut img, 38.0, 0.0)), "{:?}", pixel(&mut img, 38.0, 0.0));
    assert!(is_blue(pixel(&mut img, 90.0, 0.0)));
    // outside every disc
    assert_eq!(pixel(&mut img, -95.0, -45.0), (0, 255, 0));
    let _ = std::fs::remove_file(&png);
  }

  #[test]
  fn tilted_cut_bulges_toward_the_farther_atom() {
    // B in front: the cut is a real ellipse reaching to about x = 30.5
    let png = scratch("tilted.png");
    let mut img = render(20.0, &png);

    assert!(is_blue(pixel(&mut img, 31.0, 0.0)), "{:?}", pixel(&mut img, 31.0, 0.0));
    assert!(is_blue(pixel(&mut img, 33.0, 0.0)));
    assert!(is_red(pixel(&mut img, 28.0, 0.0)));
    let _ = std::fs::remove_file(&png);
  }

  #[test]
  fn gradient_is_anchored_at_the_atom() {
    let png = scratch("gradient.png");
    let mut img = render(-500.0, &png);

    // highlight sits up-left of A's centre, the rim is darker
    let highlight = pixel(&mut img, -8.0, -8.0);
    let rim = pixel(&mut img, 30.0, 20.0);
    assert!(highlight.0 > rim.0, "{:?} vs {:?}", highlight, rim);
    assert!(highlight.1 > 100, "{:?}", highlight);
    let _ = std::fs::remove_file(&png);
  }

  #[test]
  fn resize_to_same_canvas_keeps_buffer() {
    let canvas = CanvasSize::new(64.0, 32.0, 2.0).unwrap();
    let mut surface = CairoSurface::new(canvas, Rgb::BLACK).unwrap();
    let before = surface.buffer.to_raw_none();

    surface.resize(canvas).unwrap();
    assert_eq!(surface.buffer.to_raw_none(), before);

    let bigger = CanvasSize::new(128.0, 32.0, 2.0).unwrap();
    surface.resize(bigger).unwrap();
    assert_ne!(surface.buffer.to_raw_none(), before);
    assert_eq!(surface.buffer.width(), 256);
  }

  #[test]
  fn cursor_changes_are_reported_once() {
    let canvas = CanvasSize::new(10.0, 10.0, 1.0).unwrap();
    let mut surface = CairoSurface::new(canvas, Rgb::BLACK).unwrap();
    assert_eq!(surface.take_cursor_change(), Some(CursorStyle::Grab));
    assert_eq!(surface.take_cursor_change(), None);

    surface.set_cursor(CursorStyle::Grabbing);
    surface.set_cursor(CursorStyle::Grabbing);
    assert_eq!(surface.take_cursor_change(), Some(CursorStyle::Grabbing));
    assert_eq!(surface.take_cursor_change(), None);
  }
}
