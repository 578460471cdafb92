/// Frame-sequence persistence for spinSCII.

pub mod json;

pub use json::JsonSink;
