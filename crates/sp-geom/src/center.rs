use sp_core::error::CoreError;

use crate::voxel::Voxel;

/// Centre géométrique du nuage : milieu min/max de chaque axe.
///
/// Calculé une seule fois sur le nuage *non tourné*, puis soustrait de
/// chaque voxel avant rotation. Sans lui, l'objet orbite autour de
/// l'origine de la grille et sort du cadre.
///
/// # Errors
/// Returns `CoreError::EmptyInput` if the cloud is empty — the center is
/// undefined.
///
/// # Example
/// ```
/// use sp_geom::center::center;
/// use sp_geom::voxel::Voxel;
/// let cloud: Vec<Voxel> = (0..10)
///     .map(|x| Voxel { x, y: 0, z: 0, is_surface: true })
///     .collect();
/// let c = center(&cloud).unwrap();
/// assert_eq!(c, [4.5, 0.0, 0.0]);
/// ```
pub fn center(voxels: &[Voxel]) -> Result<[f32; 3], CoreError> {
    if voxels.is_empty() {
        return Err(CoreError::EmptyInput);
    }

    let mut min = [i32::MAX; 3];
    let mut max = [i32::MIN; 3];
    for v in voxels {
        for (axis, value) in [v.x, v.y, v.z].into_iter().enumerate() {
            min[axis] = min[axis].min(value);
            max[axis] = max[axis].max(value);
        }
    }

    Ok([
        (max[0] + min[0]) as f32 / 2.0,
        (max[1] + min[1]) as f32 / 2.0,
        (max[2] + min[2]) as f32 / 2.0,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn voxel(x: i32, y: i32, z: i32) -> Voxel {
        Voxel {
            x,
            y,
            z,
            is_surface: false,
        }
    }

    #[test]
    fn span_zero_to_nine_centers_at_four_point_five() {
        let cloud: Vec<Voxel> = (0..=9).map(|x| voxel(x, 0, 0)).collect();
        let c = center(&cloud).unwrap();
        assert!((c[0] - 4.5).abs() < f32::EPSILON);
    }

    #[test]
    fn midpoint_ignores_interior_distribution() {
        // Seuls les extrêmes comptent, pas la densité entre eux.
        let cloud = vec![voxel(0, 2, -4), voxel(8, 2, 6), voxel(1, 2, 0)];
        let c = center(&cloud).unwrap();
        assert_eq!(c, [4.0, 2.0, 1.0]);
    }

    #[test]
    fn empty_cloud_is_an_error() {
        assert!(matches!(center(&[]), Err(CoreError::EmptyInput)));
    }

    #[test]
    fn single_voxel_is_its_own_center() {
        let c = center(&[voxel(3, -1, 7)]).unwrap();
        assert_eq!(c, [3.0, -1.0, 7.0]);
    }
}
