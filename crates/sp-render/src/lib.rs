/// Rendering pipeline for spinSCII: static frame sizing, depth-buffered
/// rasterization, and the full-revolution frame sequencer.

pub mod raster;
pub mod sequence;
pub mod sizer;

pub use raster::{ProjectedGlyph, rasterize};
pub use sequence::{render_frame, render_sequence};
pub use sizer::{FrameBounds, size_frames};
