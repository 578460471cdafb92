use sp_core::error::CoreError;
use sp_geom::project::{Viewport, project};
use sp_geom::voxel::Voxel;

/// Géométrie de canvas fixe partagée par toutes les frames d'une séquence.
///
/// Calculée une seule fois par une passe statique à l'angle 0, jamais par
/// frame : c'est ce qui garantit que chaque frame de la séquence a les
/// mêmes dimensions. Une silhouette tournée qui déborderait cette boîte
/// est rognée par le test de bornes du rasterizer — limitation connue,
/// pas un défaut à corriger par un redimensionnement par frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameBounds {
    /// Left edge of the static bounding box, in screen coordinates.
    pub min_x: i32,
    /// Top edge of the static bounding box, in screen coordinates.
    pub min_y: i32,
    /// Canvas width, bounding box plus symmetric padding.
    pub width: u32,
    /// Canvas height, bounding box plus symmetric padding.
    pub height: u32,
    /// Marge appliquée de chaque côté.
    pub padding: u32,
}

/// Passe de dimensionnement statique : projette le nuage non tourné
/// (décalé de `-center`) et prend la boîte englobante des projections
/// réussies, plus `padding` de chaque côté.
///
/// # Errors
/// Returns `CoreError::EmptyInput` if no static point projects — cloud
/// empty, or entirely behind the eye plane. Rien à cadrer.
///
/// # Example
/// ```
/// use sp_geom::project::Viewport;
/// use sp_geom::voxel::Voxel;
/// use sp_render::sizer::size_frames;
/// let cloud = vec![Voxel { x: 0, y: 0, z: 0, is_surface: true }];
/// let bounds = size_frames(&cloud, [0.0, 0.0, 0.0], &Viewport::new(250.0), 5).unwrap();
/// // Un seul point : boîte 1×1 plus 5 de marge de chaque côté.
/// assert_eq!((bounds.width, bounds.height), (11, 11));
/// ```
pub fn size_frames(
    voxels: &[Voxel],
    center: [f32; 3],
    view: &Viewport,
    padding: u32,
) -> Result<FrameBounds, CoreError> {
    let mut min_x = i32::MAX;
    let mut max_x = i32::MIN;
    let mut min_y = i32::MAX;
    let mut max_y = i32::MIN;

    for v in voxels {
        if let Some((sx, sy)) = project(v.offset(center), view) {
            min_x = min_x.min(sx);
            max_x = max_x.max(sx);
            min_y = min_y.min(sy);
            max_y = max_y.max(sy);
        }
    }

    if min_x > max_x {
        return Err(CoreError::EmptyInput);
    }

    let bounds = FrameBounds {
        min_x,
        min_y,
        width: (max_x - min_x + 1) as u32 + 2 * padding,
        height: (max_y - min_y + 1) as u32 + 2 * padding,
        padding,
    };
    log::debug!(
        "Canvas statique {}×{}, origine ({}, {})",
        bounds.width,
        bounds.height,
        bounds.min_x,
        bounds.min_y
    );
    Ok(bounds)
}
