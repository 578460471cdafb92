use anyhow::{Context, Result};
use clap::Parser;
use sp_core::config::SpinConfig;
use sp_core::traits::{FrameSink, MaskSource};
use sp_export::json::JsonSink;
use sp_geom::voxel::voxelize;
use sp_render::sequence::render_sequence;
use sp_source::mask::ImageMaskSource;

pub mod cli;

fn main() -> Result<()> {
    // 1. Parser CLI
    let cli = cli::Cli::parse();

    // 2. Initialiser le logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    // 3. Charger la config
    let mut config = resolve_config(&cli)?;

    // 4. Appliquer les overrides CLI
    if let Some(v) = cli.depth {
        config.depth = v;
    }
    if let Some(v) = cli.frames {
        config.frame_count = v;
    }
    if let Some(v) = cli.dim {
        config.dim = v;
    }
    if let Some(v) = cli.select_black()? {
        config.select_black = v;
    }
    config.validate()?;

    // 5. Extraire le masque de l'image
    let source = ImageMaskSource::new(&cli.image, &config);
    let mask = source.mask()?;
    if mask.filled_count() == 0 {
        anyhow::bail!(
            "Masque vide : aucune tuile ne passe le seuil. Ajustez --dim, --select, ou density_threshold."
        );
    }

    // 6. Voxeliser la silhouette
    let voxels = voxelize(&mask, config.depth);

    // 7. Rendre la séquence complète
    let frames =
        render_sequence(&voxels, &config).context("Impossible de rendre la séquence")?;

    // 8. Exporter en JSON
    JsonSink::new(&cli.out).write(&frames)?;
    println!("{} frames sauvegardées dans {}", frames.len(), cli.out.display());

    Ok(())
}

/// Resolve config: fichier TOML si présent, sinon valeurs par défaut.
fn resolve_config(cli: &cli::Cli) -> Result<SpinConfig> {
    if cli.config.exists() {
        sp_core::config::load_config(&cli.config)
    } else {
        log::warn!(
            "Config introuvable : {}. Utilisation des défauts.",
            cli.config.display()
        );
        Ok(SpinConfig::default())
    }
}
