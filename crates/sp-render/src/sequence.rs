use rayon::prelude::*;
use sp_core::config::SpinConfig;
use sp_core::error::CoreError;
use sp_core::frame::Frame;
use sp_geom::project::{Viewport, project};
use sp_geom::rotate::{frame_angle, rotate_y};
use sp_geom::voxel::Voxel;
use sp_geom::center;

use crate::raster::{ProjectedGlyph, rasterize};
use crate::sizer::{FrameBounds, size_frames};

/// Rend une frame à l'angle donné : rotation, projection, rasterisation.
///
/// Les voxels derrière le plan de l'œil sont exclus par la projection ;
/// l'ensemble visible peut rétrécir d'une frame à l'autre sans que ce
/// soit une erreur.
#[must_use]
pub fn render_frame(
    voxels: &[Voxel],
    center: [f32; 3],
    angle: f32,
    bounds: &FrameBounds,
    view: &Viewport,
    config: &SpinConfig,
) -> Frame {
    let points: Vec<ProjectedGlyph> = voxels
        .iter()
        .filter_map(|v| {
            let rotated = rotate_y(v.offset(center), angle);
            project(rotated, view).map(|(sx, sy)| ProjectedGlyph {
                sx,
                sy,
                depth: rotated[2],
                glyph: if v.is_surface {
                    config.surface_glyph
                } else {
                    config.interior_glyph
                },
            })
        })
        .collect();

    rasterize(&points, bounds, config.background_glyph)
}

/// Orchestre la séquence complète : N frames sur une révolution.
///
/// Le canvas est dimensionné une fois par la passe statique, puis chaque
/// frame est indépendante — elles sont calculées en parallèle (rayon) et
/// collectées dans l'ordre des index, pas dans l'ordre d'achèvement. Le
/// seul état mutable par frame est son propre tampon de profondeur, local
/// à la frame, donc aucun verrou n'est nécessaire.
///
/// # Errors
/// Returns `CoreError::Config` for an invalid configuration, or
/// `CoreError::EmptyInput` for an empty voxel cloud (center and canvas
/// undefined).
///
/// # Example
/// ```
/// use sp_core::config::SpinConfig;
/// use sp_core::mask::Mask;
/// use sp_geom::voxel::voxelize;
/// use sp_render::sequence::render_sequence;
///
/// let mask = Mask::from_rows(vec![vec![true, true], vec![true, true]]).unwrap();
/// let voxels = voxelize(&mask, 2);
/// let config = SpinConfig { depth: 2, frame_count: 4, ..SpinConfig::default() };
/// let frames = render_sequence(&voxels, &config).unwrap();
/// assert_eq!(frames.len(), 4);
/// ```
pub fn render_sequence(voxels: &[Voxel], config: &SpinConfig) -> Result<Vec<Frame>, CoreError> {
    config.validate()?;
    let center = center(voxels)?;
    let view = Viewport::new(config.view_distance);
    let bounds = size_frames(voxels, center, &view, config.padding)?;

    log::info!(
        "Séquence : {} voxels, {} frames, canvas {}×{}",
        voxels.len(),
        config.frame_count,
        bounds.width,
        bounds.height
    );

    let frames = (0..config.frame_count)
        .into_par_iter()
        .map(|i| {
            let angle = frame_angle(i, config.frame_count);
            render_frame(voxels, center, angle, &bounds, &view, config)
        })
        .collect();
    Ok(frames)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sp_core::mask::Mask;
    use sp_geom::voxel::voxelize;

    fn config(depth: u32, frame_count: u32) -> SpinConfig {
        SpinConfig {
            depth,
            frame_count,
            ..SpinConfig::default()
        }
    }

    #[test]
    fn full_square_sequence_end_to_end() {
        let mask = Mask::from_rows(vec![vec![true, true], vec![true, true]]).unwrap();
        let voxels = voxelize(&mask, 2);
        let frames = render_sequence(&voxels, &config(2, 4)).unwrap();
        assert_eq!(frames.len(), 4);
        for frame in &frames {
            assert!(frame.has_foreground('.'), "frame sans glyphe rendu");
        }
    }

    #[test]
    fn all_frames_share_dimensions() {
        let mask = Mask::from_rows(vec![vec![true, false, true], vec![true, true, true]]).unwrap();
        let voxels = voxelize(&mask, 3);
        let frames = render_sequence(&voxels, &config(3, 12)).unwrap();
        let (w, h) = (frames[0].width, frames[0].height);
        assert!(frames.iter().all(|f| f.width == w && f.height == h));
    }

    #[test]
    fn asymmetric_solid_differs_at_half_turn() {
        // Forme en L, asymétrique autour de l'axe Y.
        let mask = Mask::from_rows(vec![
            vec![true, false, false],
            vec![true, false, false],
            vec![true, true, true],
        ])
        .unwrap();
        let voxels = voxelize(&mask, 4);
        let frames = render_sequence(&voxels, &config(4, 4)).unwrap();
        assert_ne!(frames[0].cells, frames[2].cells, "0° et 180° identiques");
    }

    #[test]
    fn frame_zero_is_the_unrotated_object() {
        let mask = Mask::from_rows(vec![vec![true, true, true]]).unwrap();
        let voxels = voxelize(&mask, 2);
        let cfg = config(2, 8);
        let frames = render_sequence(&voxels, &cfg).unwrap();

        let c = center(&voxels).unwrap();
        let view = Viewport::new(cfg.view_distance);
        let bounds = size_frames(&voxels, c, &view, cfg.padding).unwrap();
        let static_frame = render_frame(&voxels, c, 0.0, &bounds, &view, &cfg);
        assert_eq!(frames[0], static_frame);
    }

    #[test]
    fn empty_cloud_is_rejected() {
        let err = render_sequence(&[], &config(2, 4));
        assert!(matches!(err, Err(CoreError::EmptyInput)));
    }

    #[test]
    fn invalid_config_fails_before_geometry() {
        let mask = Mask::from_rows(vec![vec![true]]).unwrap();
        let voxels = voxelize(&mask, 1);
        let err = render_sequence(&voxels, &config(1, 0));
        assert!(matches!(err, Err(CoreError::Config(_))));
    }

    #[test]
    fn surface_and_interior_use_distinct_glyphs() {
        // Une seule cellule, profondeur 3 : la couche médiane est
        // intérieure mais cachée derrière la face avant à l'angle 0.
        // À 90°, le flanc devient visible.
        let mask = Mask::from_rows(vec![vec![true]]).unwrap();
        let voxels = voxelize(&mask, 3);
        let cfg = config(3, 4);
        let frames = render_sequence(&voxels, &cfg).unwrap();
        assert!(frames[0].cells.contains(&cfg.surface_glyph));
        assert!(frames[1].cells.contains(&cfg.interior_glyph));
    }
}
