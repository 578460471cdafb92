use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use sp_core::frame::Frame;
use sp_core::traits::FrameSink;

/// Sérialise la séquence en tableau JSON de chaînes, une chaîne par
/// frame (lignes jointes par `\n`). C'est le format que consomme
/// l'afficheur aval, qui boucle sur le tableau à intervalle fixe.
///
/// # Example
/// ```no_run
/// use sp_core::frame::Frame;
/// use sp_core::traits::FrameSink;
/// use sp_export::json::JsonSink;
///
/// let frames = vec![Frame::filled(2, 2, '.')];
/// JsonSink::new("ascii_frames.json").write(&frames).unwrap();
/// ```
pub struct JsonSink {
    path: PathBuf,
}

impl JsonSink {
    /// Sink écrivant au chemin donné.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Chemin de sortie.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FrameSink for JsonSink {
    fn write(&self, frames: &[Frame]) -> Result<()> {
        let strings: Vec<String> = frames.iter().map(Frame::to_text).collect();
        let file = File::create(&self.path)
            .with_context(|| format!("Impossible de créer {}", self.path.display()))?;
        serde_json::to_writer(BufWriter::new(file), &strings)
            .with_context(|| format!("Écriture JSON échouée dans {}", self.path.display()))?;
        log::info!("{} frames écrites dans {}", frames.len(), self.path.display());
        Ok(())
    }
}
