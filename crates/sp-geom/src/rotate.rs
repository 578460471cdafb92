use std::f32::consts::TAU;

/// Rotation rigide autour de l'axe vertical (Y).
///
/// Matrice standard :
/// ```text
/// [x']   [ cosθ   0   sinθ]   [x]
/// [y'] = [   0    1     0 ] * [y]
/// [z']   [-sinθ   0   cosθ]   [z]
/// ```
///
/// Fonction pure, appelée une fois par voxel et par frame.
///
/// # Example
/// ```
/// use sp_geom::rotate::rotate_y;
/// let p = rotate_y([1.0, 5.0, 0.0], std::f32::consts::FRAC_PI_2);
/// assert!((p[0]).abs() < 1e-6);
/// assert!((p[1] - 5.0).abs() < 1e-6);
/// assert!((p[2] + 1.0).abs() < 1e-6);
/// ```
#[inline(always)]
#[must_use]
pub fn rotate_y(p: [f32; 3], angle: f32) -> [f32; 3] {
    let (sin, cos) = angle.sin_cos();
    [
        p[0] * cos + p[2] * sin,
        p[1],
        -p[0] * sin + p[2] * cos,
    ]
}

/// Angle de la frame `index` parmi `frame_count` : `index · 2π / frame_count`.
///
/// La séquence couvre une révolution complète ; la frame 0 est l'objet
/// non tourné.
///
/// # Example
/// ```
/// use sp_geom::rotate::frame_angle;
/// assert_eq!(frame_angle(0, 4), 0.0);
/// assert!((frame_angle(2, 4) - std::f32::consts::PI).abs() < 1e-6);
/// ```
#[inline]
#[must_use]
pub fn frame_angle(index: u32, frame_count: u32) -> f32 {
    index as f32 * (TAU / frame_count as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn angle_zero_is_identity() {
        let p = [3.0, -2.0, 7.5];
        assert_eq!(rotate_y(p, 0.0), p);
    }

    #[test]
    fn full_turn_returns_within_tolerance() {
        let p = [12.0, 4.0, -9.0];
        let q = rotate_y(p, TAU);
        for axis in 0..3 {
            assert!((p[axis] - q[axis]).abs() < 1e-4, "axe {axis} : {q:?}");
        }
    }

    #[test]
    fn rotation_preserves_y_and_radius() {
        let p = [3.0, 8.0, 4.0];
        let q = rotate_y(p, 1.234);
        assert!((q[1] - 8.0).abs() < f32::EPSILON);
        let r_before = p[0].hypot(p[2]);
        let r_after = q[0].hypot(q[2]);
        assert!((r_before - r_after).abs() < 1e-4);
    }

    #[test]
    fn frame_zero_angle_is_exactly_zero() {
        assert_eq!(frame_angle(0, 50), 0.0);
    }

    #[test]
    fn half_sequence_is_half_turn() {
        let angle = frame_angle(25, 50);
        assert!((angle - std::f32::consts::PI).abs() < 1e-6);
    }
}
