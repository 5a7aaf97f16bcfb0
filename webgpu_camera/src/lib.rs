/*!
# WebGPU Camera

Camera types for a WebGPU renderer.

Every camera produces a right-handed view matrix and a projection matrix in
WebGPU clip space (depth in [0, 1]). Both matrices are cached and rebuilt
lazily after a parameter change, so reading them every frame is cheap.

## Architecture

- **CameraBase**: Lens state (aspect ratio, clipping planes, depth range) and the matrix cache
- **OrbitCamera**: Circles a target point, driven by rotate/zoom
- **FirstPersonCamera**: Free-look with walking movement
- **OrthographicCamera**: Parallel projection with zoom and pan
- **Camera**: Closed enum over the three kinds, for code that holds "the active camera"
- **Frustum** / **CameraUniform**: Culling planes and the GPU block derived from a camera
*/

// Internal modules
mod error;
pub mod log;
pub mod camera;

// Main camera3d namespace module
pub mod camera3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging sub-module (types and registry, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
        pub use crate::log::{set_logger, reset_logger, set_min_severity, min_severity};
    }

    // All camera types
    pub use crate::camera::*;
}

// Re-export math library at crate root
pub use glam;
