use sp_core::frame::Frame;

use crate::sizer::FrameBounds;

/// Un voxel projeté, prêt pour la composition à tampon de profondeur.
///
/// Éphémère : recalculé à chaque frame, jamais conservé entre deux angles.
#[derive(Clone, Copy, Debug)]
pub struct ProjectedGlyph {
    /// Screen x, before translation to canvas-local coordinates.
    pub sx: i32,
    /// Screen y, before translation to canvas-local coordinates.
    pub sy: i32,
    /// Rotated z, used for nearest-surface-wins occlusion.
    pub depth: f32,
    /// Glyphe hérité du voxel (surface ou intérieur).
    pub glyph: char,
}

/// Rasterisation à tampon de profondeur, surface la plus proche gagnante.
///
/// La grille est initialisée au glyphe de fond, le tampon de profondeur à
/// +∞. Chaque point est translaté en coordonnées locales du canvas
/// (`s − min + padding`) ; hors bornes, il est ignoré silencieusement
/// (c'est le rognage assumé du dimensionnement statique). Dans les
/// bornes, une profondeur strictement plus petite écrase le glyphe et le
/// tampon — le résultat est donc indépendant de l'ordre d'énumération
/// des voxels.
///
/// # Example
/// ```
/// use sp_render::raster::{rasterize, ProjectedGlyph};
/// use sp_render::sizer::FrameBounds;
/// let bounds = FrameBounds { min_x: 0, min_y: 0, width: 3, height: 3, padding: 1 };
/// let points = [ProjectedGlyph { sx: 0, sy: 0, depth: 0.0, glyph: '#' }];
/// let frame = rasterize(&points, &bounds, '.');
/// assert_eq!(frame.get(1, 1), '#');
/// ```
#[must_use]
pub fn rasterize(points: &[ProjectedGlyph], bounds: &FrameBounds, background: char) -> Frame {
    let mut frame = Frame::filled(bounds.width, bounds.height, background);
    let mut zbuffer = vec![f32::INFINITY; (bounds.width * bounds.height) as usize];

    let pad = bounds.padding as i32;
    for p in points {
        let fx = p.sx - bounds.min_x + pad;
        let fy = p.sy - bounds.min_y + pad;
        if fx < 0 || fy < 0 {
            continue;
        }
        let (fx, fy) = (fx as u32, fy as u32);
        if fx >= bounds.width || fy >= bounds.height {
            continue;
        }
        let idx = (fy * bounds.width + fx) as usize;
        if p.depth < zbuffer[idx] {
            zbuffer[idx] = p.depth;
            frame.set(fx, fy, p.glyph);
        }
    }
    frame
}
