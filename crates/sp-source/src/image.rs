use std::path::Path;

use anyhow::{Context, Result};
use image::imageops::FilterType;
use image::{DynamicImage, RgbImage};
use sp_core::error::CoreError;

/// Aplatit la transparence en composant sur un fond uni : blanc quand on
/// sélectionne les pixels sombres, noir quand on sélectionne les clairs.
/// Sans cela, les zones transparentes d'un PNG passeraient le seuil de
/// densité comme si elles étaient remplies.
///
/// # Example
/// ```
/// use image::{DynamicImage, RgbaImage};
/// use sp_source::image::flatten_alpha;
/// let mut rgba = RgbaImage::new(1, 1);
/// rgba.get_pixel_mut(0, 0).0 = [0, 0, 0, 0]; // entièrement transparent
/// let rgb = flatten_alpha(&DynamicImage::ImageRgba8(rgba), true);
/// assert_eq!(rgb.get_pixel(0, 0).0, [255, 255, 255]);
/// ```
#[must_use]
pub fn flatten_alpha(img: &DynamicImage, select_black: bool) -> RgbImage {
    if !img.color().has_alpha() {
        return img.to_rgb8();
    }
    let rgba = img.to_rgba8();
    let bg: u16 = if select_black { 255 } else { 0 };
    RgbImage::from_fn(rgba.width(), rgba.height(), |x, y| {
        let [r, g, b, a] = rgba.get_pixel(x, y).0;
        let a = u16::from(a);
        let blend = |c: u8| ((u16::from(c) * a + bg * (255 - a)) / 255) as u8;
        image::Rgb([blend(r), blend(g), blend(b)])
    })
}

/// Charge une image et aplatit sa transparence.
///
/// # Errors
/// Returns an error if the file cannot be opened or decoded.
///
/// # Example
/// ```no_run
/// use sp_source::image::load_flattened;
/// use std::path::Path;
/// let rgb = load_flattened(Path::new("logo.png"), true).unwrap();
/// ```
pub fn load_flattened(path: &Path, select_black: bool) -> Result<RgbImage> {
    let img =
        image::open(path).with_context(|| format!("Impossible de charger {}", path.display()))?;
    Ok(flatten_alpha(&img, select_black))
}

/// Aligne l'image sur une grille de `dim` tuiles en largeur : redimensionne
/// (bilinéaire) à `tilesize·dim` de large et rogne le reste de hauteur non
/// divisible. Retourne l'image alignée et la taille de tuile.
///
/// # Errors
/// Returns `CoreError::InvalidDimensions` if the image is narrower than
/// `dim` tiles, or too short for a single tile row.
///
/// # Example
/// ```
/// use image::RgbImage;
/// use sp_source::image::tile_align;
/// let img = RgbImage::new(103, 41);
/// let (aligned, tilesize) = tile_align(&img, 10).unwrap();
/// assert_eq!(tilesize, 10);
/// assert_eq!((aligned.width(), aligned.height()), (100, 40));
/// ```
pub fn tile_align(img: &RgbImage, dim: u32) -> Result<(RgbImage, u32), CoreError> {
    let (width, height) = img.dimensions();
    let tilesize = width / dim;
    if tilesize == 0 {
        return Err(CoreError::InvalidDimensions { width, height });
    }
    let target_w = tilesize * dim;
    let target_h = height - height % tilesize;
    if target_h == 0 {
        return Err(CoreError::InvalidDimensions { width, height });
    }

    log::debug!("Alignement : {width}×{height} → {target_w}×{target_h}, tuile {tilesize}");
    let aligned = image::imageops::resize(img, target_w, target_h, FilterType::Triangle);
    Ok((aligned, tilesize))
}
