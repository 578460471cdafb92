use std::path::PathBuf;

use clap::Parser;

/// spinSCII — image vers séquence ASCII 3D en rotation.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Source visuelle : chemin vers une image (PNG, JPEG, BMP, GIF).
    #[arg(long)]
    pub image: PathBuf,

    /// Fichier de configuration TOML. Défaut : config/default.toml.
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Chemin du JSON de sortie (tableau de frames).
    #[arg(long, default_value = "ascii_frames.json")]
    pub out: PathBuf,

    /// Épaisseur d'extrusion en couches de voxels.
    #[arg(long)]
    pub depth: Option<u32>,

    /// Nombre de frames sur 360°.
    #[arg(long)]
    pub frames: Option<u32>,

    /// Nombre de tuiles en largeur d'image.
    #[arg(long)]
    pub dim: Option<u32>,

    /// Couleur sélectionnée dans l'image : "black" ou "white".
    #[arg(long)]
    pub select: Option<String>,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Interprète `--select` en règle de sélection.
    ///
    /// # Errors
    /// Returns an error for any value other than "black" or "white".
    pub fn select_black(&self) -> anyhow::Result<Option<bool>> {
        match self.select.as_deref() {
            None => Ok(None),
            Some("black") => Ok(Some(true)),
            Some("white") => Ok(Some(false)),
            Some(other) => {
                anyhow::bail!("Sélection inconnue '{other}'. Utilisez \"black\" ou \"white\".")
            }
        }
    }
}
