//! Mathematical utilities for the selection and layout engine

/// Fit-to-box scaling and row width arithmetic
pub mod geometry;
