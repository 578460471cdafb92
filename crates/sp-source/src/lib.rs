/// Image-to-mask collaborator for spinSCII.
///
/// Décode une image, aplatit la transparence, l'aligne sur une grille de
/// tuiles, puis seuil la densité de chaque tuile en masque binaire. Le
/// cœur géométrique ne voit jamais de pixels — seulement le masque.

pub mod image;
pub mod mask;

pub use mask::ImageMaskSource;
