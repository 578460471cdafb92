use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Configuration complète du pipeline, sérialisable en TOML.
///
/// Chaque champ a une valeur par défaut saine ; les invariants durs
/// (profondeur, nombre de frames, distance de vue) sont vérifiés par
/// [`SpinConfig::validate`] avant tout calcul géométrique.
///
/// # Example
/// ```
/// use sp_core::config::SpinConfig;
/// let config = SpinConfig::default();
/// assert_eq!(config.frame_count, 50);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SpinConfig {
    // === Géométrie ===
    /// Épaisseur d'extrusion en couches de voxels. ≥ 1.
    pub depth: u32,
    /// Nombre de frames sur une révolution complète (360°). ≥ 1.
    pub frame_count: u32,
    /// Distance œil-écran pour la projection perspective. > 0.
    pub view_distance: f32,
    /// Marge symétrique ajoutée autour de la boîte englobante projetée.
    pub padding: u32,

    // === Glyphes ===
    /// Glyphe des voxels de surface (faces avant/arrière de l'extrusion).
    pub surface_glyph: char,
    /// Glyphe des voxels intérieurs / de flanc.
    pub interior_glyph: char,
    /// Glyphe de fond de la frame.
    pub background_glyph: char,

    // === Source (collaborateur image → masque) ===
    /// Nombre de tuiles en largeur d'image. ≥ 1.
    pub dim: u32,
    /// Sélectionner les pixels sombres (true) ou clairs (false).
    pub select_black: bool,
    /// Fraction de pixels sélectionnés requise pour remplir une tuile [0, 1].
    pub density_threshold: f32,
}

impl Default for SpinConfig {
    fn default() -> Self {
        Self {
            depth: 11,
            frame_count: 50,
            view_distance: 250.0,
            padding: 5,
            surface_glyph: '#',
            interior_glyph: '@',
            background_glyph: '.',
            dim: 100,
            select_black: true,
            density_threshold: 0.9,
        }
    }
}

impl SpinConfig {
    /// Clamp soft numeric fields to their valid ranges.
    /// Called after TOML deserialization to prevent out-of-range values.
    pub fn clamp_all(&mut self) {
        self.density_threshold = self.density_threshold.clamp(0.0, 1.0);
    }

    /// Vérifie les invariants durs, avant tout calcul géométrique.
    ///
    /// Rejette plutôt que de clamper : une valeur hors domaine ici est
    /// une erreur d'appelant, pas un réglage à corriger silencieusement.
    ///
    /// # Errors
    /// Returns `CoreError::Config` if `depth == 0`, `frame_count == 0`,
    /// `view_distance ≤ 0` (or non-finite), or `dim == 0`.
    ///
    /// # Example
    /// ```
    /// use sp_core::config::SpinConfig;
    /// let mut config = SpinConfig::default();
    /// config.frame_count = 0;
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.depth == 0 {
            return Err(CoreError::Config("depth doit être ≥ 1".into()));
        }
        if self.frame_count == 0 {
            return Err(CoreError::Config("frame_count doit être ≥ 1".into()));
        }
        if !self.view_distance.is_finite() || self.view_distance <= 0.0 {
            return Err(CoreError::Config(format!(
                "view_distance doit être finie et > 0 (reçu {})",
                self.view_distance
            )));
        }
        if self.dim == 0 {
            return Err(CoreError::Config("dim doit être ≥ 1".into()));
        }
        Ok(())
    }
}

/// Structure TOML intermédiaire pour désérialisation avec valeurs optionnelles.
#[derive(Deserialize)]
struct ConfigFile {
    render: RenderSection,
    source: Option<SourceSection>,
}

/// Render section of the TOML config, all fields optional for partial override.
#[derive(Deserialize)]
struct RenderSection {
    depth: Option<u32>,
    frame_count: Option<u32>,
    view_distance: Option<f32>,
    padding: Option<u32>,
    surface_glyph: Option<char>,
    interior_glyph: Option<char>,
    background_glyph: Option<char>,
}

/// Source section of the TOML config, all fields optional.
#[derive(Deserialize)]
struct SourceSection {
    dim: Option<u32>,
    select_black: Option<bool>,
    density_threshold: Option<f32>,
}

/// Charge un fichier TOML et fusionne avec les valeurs par défaut.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed, or if the
/// merged configuration violates a hard invariant.
///
/// # Example
/// ```no_run
/// use sp_core::config::load_config;
/// use std::path::Path;
/// let config = load_config(Path::new("config/default.toml")).unwrap();
/// ```
pub fn load_config(path: &Path) -> Result<SpinConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;

    let file: ConfigFile = toml::from_str(&content)
        .with_context(|| format!("Erreur de parsing TOML dans {}", path.display()))?;

    let mut config = SpinConfig::default();

    let r = file.render;
    if let Some(v) = r.depth {
        config.depth = v;
    }
    if let Some(v) = r.frame_count {
        config.frame_count = v;
    }
    if let Some(v) = r.view_distance {
        config.view_distance = v;
    }
    if let Some(v) = r.padding {
        config.padding = v;
    }
    if let Some(v) = r.surface_glyph {
        config.surface_glyph = v;
    }
    if let Some(v) = r.interior_glyph {
        config.interior_glyph = v;
    }
    if let Some(v) = r.background_glyph {
        config.background_glyph = v;
    }

    if let Some(s) = file.source {
        if let Some(v) = s.dim {
            config.dim = v;
        }
        if let Some(v) = s.select_black {
            config.select_black = v;
        }
        if let Some(v) = s.density_threshold {
            config.density_threshold = v;
        }
    }

    config.clamp_all();
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(SpinConfig::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_depth() {
        let config = SpinConfig {
            depth: 0,
            ..SpinConfig::default()
        };
        assert!(matches!(config.validate(), Err(CoreError::Config(_))));
    }

    #[test]
    fn validate_rejects_non_positive_view_distance() {
        for bad in [0.0, -10.0, f32::NAN] {
            let config = SpinConfig {
                view_distance: bad,
                ..SpinConfig::default()
            };
            assert!(config.validate().is_err(), "view_distance {bad} acceptée");
        }
    }

    #[test]
    fn clamp_all_bounds_density_threshold() {
        let mut config = SpinConfig {
            density_threshold: 1.7,
            ..SpinConfig::default()
        };
        config.clamp_all();
        assert!((config.density_threshold - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn toml_partial_override_merges_over_defaults() {
        let file: ConfigFile = toml::from_str(
            "[render]\ndepth = 3\nsurface_glyph = \"%\"\n\n[source]\nselect_black = false\n",
        )
        .unwrap();
        let mut config = SpinConfig::default();
        if let Some(v) = file.render.depth {
            config.depth = v;
        }
        if let Some(v) = file.render.surface_glyph {
            config.surface_glyph = v;
        }
        if let Some(v) = file.source.and_then(|s| s.select_black) {
            config.select_black = v;
        }
        assert_eq!(config.depth, 3);
        assert_eq!(config.surface_glyph, '%');
        assert!(!config.select_black);
        assert_eq!(config.frame_count, 50);
    }
}
