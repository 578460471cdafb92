/// Geometry pipeline for spinSCII: voxelization, centering, rotation,
/// and perspective projection.
///
/// Tout est pur et sans état : le nuage de voxels est construit une fois,
/// puis chaque frame ne fait que transformer des copies de coordonnées.

pub mod center;
pub mod project;
pub mod rotate;
pub mod voxel;

pub use center::center;
pub use project::{Viewport, project};
pub use rotate::{frame_angle, rotate_y};
pub use voxel::{Voxel, voxelize};
