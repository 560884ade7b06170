/// Scene geometry supplied to the pipeline.
/// Meshes own their buffers; the pipeline only borrows them.
pub mod mesh;
pub mod platform;

pub use mesh::{Mesh, MeshError};
pub use platform::Platform;
