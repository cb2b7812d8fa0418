pub mod gradient_cache;
pub mod occlusion;
pub mod painter;
pub mod primitives;
pub mod recording;
pub mod scene;
pub mod surface;

#[cfg(feature = "cairo")]
pub mod export;

// Re-export the pieces the view and host need
pub use painter::draw_structure;
pub use recording::RecordingSurface;
pub use scene::{ProjectedAtom, Scene, SceneBuilder, ViewTransform};
pub use surface::{CanvasSize, CursorStyle, DrawingSurface};

#[cfg(feature = "cairo")]
pub use export::CairoSurface;
