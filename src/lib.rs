//! Column-wise coverage accumulation for shelf packed glyph atlases
//!
//! A rasterizer writes signed coverage deltas into a [CoverageBuffer];
//! the [Accumulator] turns those into gray levels in an [Atlas] by summing
//! each column of each shelf from top to bottom.
//!
//! How does this work
//!
//! ```text
//!    geom  = AtlasGeometry( atlas_width, shelf_height )
//!    cov   = CoverageBuffer( width, height )   -- filled by a rasterizer
//!    atlas = Atlas( width, height )
//!  Accumulate
//!    Accumulator(geom).run(cov, atlas)
//!      validate()                  -- atlas large enough for the shelves
//!      split_strips()              -- shelves cut into column strips
//!      par_iter_mut(strip)         -- strips run in parallel
//!        accumulate_strip()
//!          sum += cov.sample(x,y)  -- zero outside the coverage buffer
//!          atlas(x,y) = (gray(sum), 255, 255, 255)
//!  Reference
//!    Accumulator(geom).run_serial(cov, atlas)
//!      accumulate_unit(index)      -- one (column, shelf) pair per index
//!  Output
//!    atlas.to_file("atlas.png")
//! ```

pub mod buffer;
pub mod color;
pub mod coverage;
pub mod atlas;
pub mod geometry;
pub mod accum;
pub mod error;
pub mod ppm;

pub use buffer::*;
pub use color::*;
pub use coverage::*;
pub use atlas::*;
pub use geometry::*;
pub use accum::*;
pub use error::*;

/// Access to raw pixel component data
pub trait PixelData {
    fn pixeldata(&self) -> &[u8];
}
