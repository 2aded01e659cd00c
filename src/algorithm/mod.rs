/// Looping animation frames derived by braided toroidal band shifts
pub mod animation;
/// Darker/lighter pixel-wise merging of two composites
pub mod blend;
/// Circular dot grids and their offset merge
pub mod circle;
/// Closed enumeration of compositors with a single dispatch point
pub mod compositor;
/// Interlocking equilateral triangle lattices
pub mod equilateral;
/// Impose variants blending two independent composites
pub mod impose;
/// Strip stitching and the recursive grid of grids
pub mod stitch;
/// Triangular tiling from two independent tile pools
pub mod triangle;
