/// WF3D Core Library - Projection, camera and geometry pipeline
///
/// This library provides the platform-free core of the wireframe
/// visualizer: static polygon/cube geometry, the translating viewpoint,
/// the angle-based projection function, and the renderer that turns a
/// scene into screen-space line commands.

pub mod geometry;
pub mod projection;
pub mod render;
pub mod viewpoint;

// Re-export commonly used types
pub use geometry::{Cube, GeometryError, Polygon, CUBE_EDGES};
pub use projection::{project, Projection, ScreenPoint};
pub use render::{LineCommand, RenderMode, Rgb, WireframeRenderer};
pub use viewpoint::{MoveInput, Viewpoint, ViewpointConfig, FOV_MAX, FOV_MIN};
