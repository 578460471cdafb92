/// Configuration de projection : distance de vue et écran virtuel.
///
/// L'écran virtuel ne sert que de décalage de centrage ; la taille réelle
/// du canvas est recalculée par le Frame Sizer à partir de la boîte
/// englobante projetée.
///
/// # Example
/// ```
/// use sp_geom::project::Viewport;
/// let view = Viewport::new(250.0);
/// assert_eq!(view.screen_w, 100.0);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    /// Distance œil-écran. > 0.
    pub view_distance: f32,
    /// Largeur de l'écran virtuel.
    pub screen_w: f32,
    /// Hauteur de l'écran virtuel.
    pub screen_h: f32,
}

impl Viewport {
    /// Viewport avec l'écran virtuel 100×100 standard.
    #[must_use]
    pub fn new(view_distance: f32) -> Self {
        Self {
            view_distance,
            screen_w: 100.0,
            screen_h: 100.0,
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(250.0)
    }
}

/// Projection perspective 3D → 2D : division par `view_distance + z`,
/// troncature vers zéro.
///
/// Retourne `None` quand `view_distance + z ≤ 0` — le point est derrière
/// (ou sur) le plan de l'œil. Exclusion silencieuse, jamais un clamp ni
/// une erreur : un appelant doit tolérer un ensemble visible qui rétrécit
/// au fil des frames.
///
/// # Example
/// ```
/// use sp_geom::project::{project, Viewport};
/// let view = Viewport::new(250.0);
/// // z = 0 : facteur 1, simple translation vers le centre écran.
/// assert_eq!(project([10.0, 5.0, 0.0], &view), Some((60, 55)));
/// // Point sur le plan de l'œil : pas de projection.
/// assert_eq!(project([10.0, 5.0, -250.0], &view), None);
/// ```
#[inline(always)]
#[must_use]
pub fn project(p: [f32; 3], view: &Viewport) -> Option<(i32, i32)> {
    let denom = view.view_distance + p[2];
    if denom <= 0.0 {
        return None;
    }
    let factor = view.view_distance / denom;
    let sx = (view.screen_w / 2.0 + p[0] * factor) as i32;
    let sy = (view.screen_h / 2.0 + p[1] * factor) as i32;
    Some((sx, sy))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factor_one_at_zero_depth() {
        let view = Viewport::new(250.0);
        assert_eq!(project([10.0, 5.0, 0.0], &view), Some((60, 55)));
    }

    #[test]
    fn nearer_points_project_larger() {
        let view = Viewport::new(250.0);
        let (far_x, _) = project([40.0, 0.0, 100.0], &view).unwrap();
        let (near_x, _) = project([40.0, 0.0, -100.0], &view).unwrap();
        assert!(near_x > far_x);
    }

    #[test]
    fn eye_plane_and_behind_are_excluded() {
        let view = Viewport::new(250.0);
        assert_eq!(project([1.0, 1.0, -250.0], &view), None);
        assert_eq!(project([1.0, 1.0, -300.0], &view), None);
        // Juste devant le plan : projeté.
        assert!(project([1.0, 1.0, -249.0], &view).is_some());
    }

    #[test]
    fn truncates_toward_zero() {
        // screen 100 ⇒ offset 50 ; x négatif produit une coordonnée
        // fractionnaire tronquée vers zéro, pas arrondie au plus bas.
        let view = Viewport::new(250.0);
        let (sx, _) = project([-10.5, 0.0, 0.0], &view).unwrap();
        assert_eq!(sx, 39);
    }
}
