use std::path::{Path, PathBuf};

use anyhow::Result;
use image::RgbImage;
use sp_core::config::SpinConfig;
use sp_core::mask::Mask;
use sp_core::traits::MaskSource;

use crate::image::{load_flattened, tile_align};

/// Seuil de somme RGB en dessous duquel un pixel compte comme "noir".
const BLACK_SUM: u16 = 90;
/// Seuil de somme RGB au-dessus duquel un pixel compte comme "blanc".
const WHITE_SUM: u16 = 690;

/// Seuillage par densité de tuiles : une cellule de masque par bloc
/// `tilesize`×`tilesize`, remplie quand au moins
/// `⌊tilesize²·density_threshold⌋` de ses pixels passent la règle de
/// sélection (somme RGB ≤ 90 pour le noir, ≥ 690 pour le blanc).
///
/// Les dimensions de `img` doivent être des multiples exacts de
/// `tilesize` — c'est ce que garantit [`crate::image::tile_align`].
///
/// # Example
/// ```
/// use image::RgbImage;
/// use sp_source::mask::mask_from_tiles;
/// let img = RgbImage::new(4, 2); // tout noir
/// let mask = mask_from_tiles(&img, 2, true, 0.9);
/// assert_eq!((mask.width, mask.height), (2, 1));
/// assert_eq!(mask.filled_count(), 2);
/// ```
#[must_use]
pub fn mask_from_tiles(
    img: &RgbImage,
    tilesize: u32,
    select_black: bool,
    density_threshold: f32,
) -> Mask {
    let cols = img.width() / tilesize;
    let rows = img.height() / tilesize;
    let required = (tilesize as f32 * tilesize as f32 * density_threshold).floor() as u32;

    let mut mask = Mask::blank(cols, rows);
    for ty in 0..rows {
        for tx in 0..cols {
            let mut selected = 0u32;
            for py in 0..tilesize {
                for px in 0..tilesize {
                    let [r, g, b] = img.get_pixel(tx * tilesize + px, ty * tilesize + py).0;
                    let sum = u16::from(r) + u16::from(g) + u16::from(b);
                    let hit = if select_black {
                        sum <= BLACK_SUM
                    } else {
                        sum >= WHITE_SUM
                    };
                    selected += u32::from(hit);
                }
            }
            if selected >= required {
                mask.fill(tx, ty);
            }
        }
    }
    mask
}

/// Collaborateur image → masque du pipeline : décode, aplatit, aligne,
/// seuille. Implémente [`MaskSource`].
///
/// # Example
/// ```no_run
/// use sp_core::config::SpinConfig;
/// use sp_core::traits::MaskSource;
/// use sp_source::mask::ImageMaskSource;
/// use std::path::Path;
///
/// let config = SpinConfig::default();
/// let source = ImageMaskSource::new(Path::new("logo.png"), &config);
/// let mask = source.mask().unwrap();
/// ```
pub struct ImageMaskSource {
    path: PathBuf,
    dim: u32,
    select_black: bool,
    density_threshold: f32,
}

impl ImageMaskSource {
    /// Construit la source depuis le chemin d'image et la config.
    #[must_use]
    pub fn new(path: &Path, config: &SpinConfig) -> Self {
        Self {
            path: path.to_path_buf(),
            dim: config.dim,
            select_black: config.select_black,
            density_threshold: config.density_threshold,
        }
    }
}

impl MaskSource for ImageMaskSource {
    fn mask(&self) -> Result<Mask> {
        let rgb = load_flattened(&self.path, self.select_black)?;
        let (aligned, tilesize) = tile_align(&rgb, self.dim)?;
        let mask = mask_from_tiles(&aligned, tilesize, self.select_black, self.density_threshold);
        log::info!(
            "Masque {}×{} : {} cellules remplies (tuile {tilesize})",
            mask.width,
            mask.height,
            mask.filled_count()
        );
        Ok(mask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    /// 4×4 : tuile haut-gauche noire, le reste blanc.
    fn quadrant_image() -> RgbImage {
        let mut img = RgbImage::from_pixel(4, 4, Rgb([255, 255, 255]));
        for y in 0..2 {
            for x in 0..2 {
                img.put_pixel(x, y, Rgb([0, 0, 0]));
            }
        }
        img
    }

    #[test]
    fn black_selection_fills_the_black_tile_only() {
        let mask = mask_from_tiles(&quadrant_image(), 2, true, 0.9);
        assert_eq!((mask.width, mask.height), (2, 2));
        assert!(mask.filled(0, 0));
        assert_eq!(mask.filled_count(), 1);
    }

    #[test]
    fn white_selection_is_the_complement() {
        let mask = mask_from_tiles(&quadrant_image(), 2, false, 0.9);
        assert!(!mask.filled(0, 0));
        assert_eq!(mask.filled_count(), 3);
    }

    #[test]
    fn density_threshold_requires_enough_pixels() {
        // Tuile 2×2 avec un seul pixel noir : 25 % de densité.
        let mut img = RgbImage::from_pixel(2, 2, Rgb([255, 255, 255]));
        img.put_pixel(0, 0, Rgb([0, 0, 0]));
        let strict = mask_from_tiles(&img, 2, true, 0.9);
        assert_eq!(strict.filled_count(), 0);
        let loose = mask_from_tiles(&img, 2, true, 0.25);
        assert_eq!(loose.filled_count(), 1);
    }

    #[test]
    fn dark_grey_counts_as_black_up_to_the_sum_threshold() {
        // 30+30+30 = 90 : encore noir. 31+30+30 = 91 : plus noir.
        let just_black = RgbImage::from_pixel(2, 2, Rgb([30, 30, 30]));
        assert_eq!(mask_from_tiles(&just_black, 2, true, 0.9).filled_count(), 1);
        let too_light = RgbImage::from_pixel(2, 2, Rgb([31, 30, 30]));
        assert_eq!(mask_from_tiles(&too_light, 2, true, 0.9).filled_count(), 0);
    }
}
