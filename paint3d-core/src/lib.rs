/// paint3d Core Library - painter's-algorithm rendering of solid polyhedra
///
/// This library provides the geometry pipeline: point rotation about the origin or a pivot,
/// perspective projection, per-object face collection and depth-ordered compositing onto
/// any surface implementing [`DrawingSurface`].

pub mod color;
pub mod compositor;
pub mod config;
pub mod draw;
pub mod error;
pub mod geometry;
pub mod object;
pub mod projection;
pub mod scene;
pub mod transform;

// Re-export commonly used types
pub use color::Color;
pub use compositor::{composite, DrawingSurface, RecordingSurface, SurfaceCall};
pub use config::RenderConfig;
pub use draw::{DrawList, DrawRequest};
pub use error::{Error, Result};
pub use geometry::{Edge, Face, Shape};
pub use object::RenderableObject;
pub use projection::{Projection, ProjectionMode};
pub use scene::Scene;
pub use transform::{Axis, Rotate, RotationState, RotationStrategy};
