//! Analysis modules for source image statistics

/// Colour frequency analysis used for canvas backgrounds
pub mod palette;
