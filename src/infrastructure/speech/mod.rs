//! Speech source adapters

pub mod stdin;

pub use stdin::StdinSpeech;
