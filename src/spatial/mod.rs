//! Spatial data structures and raster manipulation
//!
//! This module contains spatial-related functionality including:
//! - Uniform cropping and grid slicing of sources into tiles
//! - Canvas allocation and clipped paste operations
//! - Anti-aliased shape masks and toroidal shifting

/// Canvas allocation and masked paste operations
pub mod canvas;
/// Uniform cropping of a source set to a common size
pub mod crop;
/// Anti-aliased alpha masks for non-rectangular placement
pub mod masks;
/// Wrap-around translation of raster buffers
pub mod shift;
/// Tile references, grid slicing and sampling without replacement
pub mod tiles;

pub use tiles::{Tile, TilePool, TileSet};
