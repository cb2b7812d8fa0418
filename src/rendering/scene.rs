// src/rendering/scene.rs

use super::gradient_cache::GradientCache;
use super::surface::CanvasSize;
use crate::error::SceneError;
use crate::model::{Element, Rgb, SourceAtom};
use crate::utils::linalg::Bounds3;
use nalgebra::{Vector2, Vector3};
use std::rc::Rc;

/// Angstrom -> renderer units. Lands positions in the same (picometre-like)
/// units as element radii.
pub const POSITION_SCALE: f64 = 75.0;

/// Canvas width covers this many multiples of the assembly's bounding radius.
pub const VIEW_MARGIN: f64 = 2.5;

// Used by painter.rs for drawing and interactions.rs for rotating.
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectedAtom {
  pub position: Vector3<f64>, // renderer units, z is depth
  pub radius: f64,
  pub color: Rgb,
  pub element: Rc<Element>,
}

impl ProjectedAtom {
  pub fn screen_pos(&self) -> Vector2<f64> {
    self.position.xy()
  }
}

/// Renderer-space point set for one molecule.
#[derive(Clone, Debug)]
pub struct Scene {
  pub atoms: Vec<ProjectedAtom>,
  /// max over atoms of |position| + radius, measured after centering
  pub max_total_radius: f64,
}

/// Pixel mapping for a frame: renderer point p lands at `mid + scale * p`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
  pub scale: f64,
  pub mid_x: f64,
  pub mid_y: f64,
}

impl ViewTransform {
  /// Uniform scale so a sphere of `max_total_radius` fits the canvas width
  /// with margin, centered on the pixel buffer.
  pub fn fit(max_total_radius: f64, canvas: &CanvasSize, margin: f64) -> Self {
    let width = canvas.pixel_width();
    let height = canvas.pixel_height();
    let scale = if max_total_radius > 0.0 {
      width / max_total_radius / margin
    } else {
      1.0
    };
    Self {
      scale,
      mid_x: width / 2.0,
      mid_y: height / 2.0,
    }
  }
}

/// Turns source atoms into renderer-space atoms and owns the shading cache
/// for the scenes it builds.
#[derive(Debug)]
pub struct SceneBuilder {
  position_scale: f64,
  gradients: GradientCache,
}

impl Default for SceneBuilder {
  fn default() -> Self {
    Self::new(POSITION_SCALE)
  }
}

impl SceneBuilder {
  pub fn new(position_scale: f64) -> Self {
    Self {
      position_scale,
      gradients: GradientCache::new(),
    }
  }

  pub fn gradients(&self) -> &GradientCache {
    &self.gradients
  }

  pub fn into_gradients(self) -> GradientCache {
    self.gradients
  }

  pub fn build(&mut self, atoms: &[SourceAtom]) -> Result<Scene, SceneError> {
    if atoms.is_empty() {
      return Err(SceneError::EmptyMolecule);
    }

    // 1. Scale into renderer space, rejecting anything that would poison geometry
    let mut projected = Vec::with_capacity(atoms.len());
    for (index, atom) in atoms.iter().enumerate() {
      let element = &atom.element;
      let position = Vector3::from(atom.position) * self.position_scale;
      if !position.iter().all(|c| c.is_finite()) {
        return Err(SceneError::NonFiniteCoordinate {
          index,
          symbol: element.symbol.clone(),
        });
      }
      if !(element.radius.is_finite() && element.radius > 0.0) {
        return Err(SceneError::InvalidRadius {
          symbol: element.symbol.clone(),
          radius: element.radius,
        });
      }
      projected.push(ProjectedAtom {
        position,
        radius: element.radius,
        color: element.color,
        element: element.clone(),
      });
    }

    // 2. Center the bounding box of all spheres on the origin
    let mut bounds = Bounds3::nothing();
    for atom in &projected {
      bounds.include(&Bounds3::around_sphere(&atom.position, atom.radius));
    }
    let center = bounds.center();
    if center.norm() > 0.0 {
      for atom in &mut projected {
        atom.position -= center;
      }
    }

    // 3. Bounding radius for the view scale
    let max_total_radius = projected
      .iter()
      .map(|a| a.position.norm() + a.radius)
      .fold(0.0, f64::max);

    // 4. One gradient per distinct element
    for atom in &projected {
      let _ = self.gradients.get_or_insert(&atom.element);
    }

    let stats = self.gradients.stats();
    log::debug!(
      "Scene built: {} atoms, bounding radius {:.1}, {} gradients ({} reused)",
      projected.len(),
      max_total_radius,
      stats.entries,
      stats.hits
    );

    Ok(Scene {
      atoms: projected,
      max_total_radius,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::model::Molecule;

  fn atom(symbol: &str, radius: f64, pos: [f64; 3]) -> SourceAtom {
    SourceAtom::new(Rc::new(Element::new(symbol, radius, Rgb::WHITE)), pos)
  }

  #[test]
  fn empty_molecule_is_rejected() {
    let mut b = SceneBuilder::default();
    assert_eq!(b.build(&[]).unwrap_err(), SceneError::EmptyMolecule);
  }

  #[test]
  fn non_finite_coordinates_are_rejected() {
    let mut b = SceneBuilder::default();
    let atoms = vec![atom("C", 77.0, [0.0; 3]), atom("O", 73.0, [f64::NAN, 0.0, 0.0])];
    assert_eq!(
      b.build(&atoms).unwrap_err(),
      SceneError::NonFiniteCoordinate {
        index: 1,
        symbol: "O".to_string()
      }
    );
  }

  #[test]
  fn non_positive_radius_is_rejected() {
    let mut b = SceneBuilder::default();
    let err = b.build(&[atom("X", 0.0, [0.0; 3])]).unwrap_err();
    assert!(matches!(err, SceneError::InvalidRadius { .. }));
  }

  #[test]
  fn positions_are_scaled_not_radii() {
    let mut b = SceneBuilder::new(75.0);
    let scene = b.build(&[atom("A", 10.0, [-1.0, 0.0, 0.0]), atom("B", 10.0, [1.0, 0.0, 0.0])]).unwrap();
    assert!((scene.atoms[0].position - Vector3::new(-75.0, 0.0, 0.0)).norm() < 1e-12);
    assert!((scene.atoms[1].position - Vector3::new(75.0, 0.0, 0.0)).norm() < 1e-12);
    assert_eq!(scene.atoms[0].radius, 10.0);
    assert!((scene.max_total_radius - 85.0).abs() < 1e-12);
  }

  #[test]
  fn assembly_is_centered() {
    let mut b = SceneBuilder::default();
    let atoms = vec![
      atom("A", 40.0, [3.0, 1.0, -2.0]),
      atom("B", 10.0, [5.0, 4.0, 0.5]),
      atom("C", 25.0, [2.0, -1.0, 1.0]),
    ];
    let scene = b.build(&atoms).unwrap();

    let mut bounds = Bounds3::nothing();
    for a in &scene.atoms {
      bounds.include(&Bounds3::around_sphere(&a.position, a.radius));
    }
    assert!(bounds.center().norm() < 1e-9);

    let expected = scene
      .atoms
      .iter()
      .map(|a| a.position.norm() + a.radius)
      .fold(0.0, f64::max);
    assert!((scene.max_total_radius - expected).abs() < 1e-12);
  }

  #[test]
  fn gradients_built_per_distinct_element() {
    let mut b = SceneBuilder::default();
    let mut m = Molecule::new("ethanol");
    for s in ["C", "C", "O", "H", "H"] {
      m.push(s, [0.0, 0.0, 0.0]);
    }
    let _ = b.build(&m.atoms).unwrap();
    assert_eq!(b.gradients().len(), 3);
  }

  #[test]
  fn view_transform_fits_width() {
    let canvas = CanvasSize::new(500.0, 300.0, 2.0).unwrap();
    let v = ViewTransform::fit(100.0, &canvas, VIEW_MARGIN);
    // pixel buffer is 1000 wide
    assert!((v.scale - 4.0).abs() < 1e-12);
    assert_eq!((v.mid_x, v.mid_y), (500.0, 300.0));
  }
}
