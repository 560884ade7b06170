/// Oriented volumes animated independently of the mesh pipeline.
pub mod basis;

pub use basis::{AnimatedVolume, BasisVolume, RotationPlane, Spin, EDGES};
