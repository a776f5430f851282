//! Checkerboard coordinates and transcript validation

pub mod board;
pub mod validator;

pub use board::BoardCoordinate;
pub use validator::{coordinates, validate, ValidationResult};
