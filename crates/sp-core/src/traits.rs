use crate::frame::Frame;
use crate::mask::Mask;

/// Fournit le masque binaire consommé par le pipeline géométrique.
///
/// Implémenté par : `ImageMaskSource` (sp-source). Le cœur ne sait rien
/// du décodage d'image ni de la politique de seuillage — il ne voit que
/// des lignes de booléens.
///
/// # Example
/// ```
/// use sp_core::traits::MaskSource;
/// use sp_core::mask::Mask;
///
/// struct DummySource;
/// impl MaskSource for DummySource {
///     fn mask(&self) -> anyhow::Result<Mask> { Ok(Mask::blank(2, 2)) }
/// }
/// ```
pub trait MaskSource {
    /// Produit le masque. Appelé une seule fois par exécution.
    ///
    /// # Errors
    /// Returns an error if the underlying source cannot be read or
    /// converted.
    fn mask(&self) -> anyhow::Result<Mask>;
}

/// Reçoit la séquence de frames ordonnée produite par le cœur.
///
/// Implémenté par : `JsonSink` (sp-export). Le format de persistance
/// n'appartient pas au cœur.
///
/// # Example
/// ```
/// use sp_core::traits::FrameSink;
/// use sp_core::frame::Frame;
///
/// struct DummySink;
/// impl FrameSink for DummySink {
///     fn write(&self, _frames: &[Frame]) -> anyhow::Result<()> { Ok(()) }
/// }
/// ```
pub trait FrameSink {
    /// Écrit la séquence complète. L'ordre des frames est l'ordre temporel.
    ///
    /// # Errors
    /// Returns an error if the sequence cannot be persisted.
    fn write(&self, frames: &[Frame]) -> anyhow::Result<()>;
}
