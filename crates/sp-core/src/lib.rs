/// Configuration, types, and shared structures for spinSCII.
///
/// This crate contains all shared types, traits, and configuration logic
/// used across the spinSCII workspace.

pub mod config;
pub mod error;
pub mod frame;
pub mod mask;
pub mod traits;

pub use config::SpinConfig;
pub use error::CoreError;
pub use frame::Frame;
pub use mask::Mask;

/// Re-exports pour accès par chemin sémantique.
pub mod grid {
    pub use crate::frame::Frame;
    pub use crate::mask::Mask;
}
