//! Mathematical utilities for tessellation geometry

/// Triangle altitudes, grid sizing and point coverage tests
pub mod geometry;
