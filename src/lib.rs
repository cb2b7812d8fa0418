// src/lib.rs
//
// Interactive 3D molecule rendering: ball atoms painted back to front with
// analytic cuts where spheres intersect, spun by a tick source and dragged by
// pointer input.

pub mod config;
pub mod error;
pub mod events;
pub mod interactions;
pub mod io;
pub mod model;
pub mod rendering;
pub mod state;
pub mod utils;
pub mod view;

pub use error::{SceneError, SurfaceError, ViewError};
pub use view::MoleculeView;
