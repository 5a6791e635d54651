//! Output atlas image

use std::path::Path;

use crate::buffer::RenderingBuffer;
use crate::color::Rgba8;
use crate::error::Error;
use crate::PixelData;

/// Output Atlas
///
/// Four 8-bit components per pixel.  The accumulator stores gray levels in
/// the red component and writes 255 into green, blue and alpha.
#[derive(Debug,Clone,PartialEq)]
pub struct Atlas {
    rbuf: RenderingBuffer,
}

impl Atlas {
    /// Create a new atlas of width x height
    ///
    /// All components start at zero; call [clear](#method.clear) for a
    /// blank white atlas
    pub fn new(width: usize, height: usize) -> Self {
        Self { rbuf: RenderingBuffer::new(width, height, Self::bpp()) }
    }
    /// Bytes per pixel
    pub fn bpp() -> usize { 4 }
    /// Width of atlas in pixels
    pub fn width(&self) -> usize {
        self.rbuf.width
    }
    /// Height of atlas in pixels
    pub fn height(&self) -> usize {
        self.rbuf.height
    }
    /// Size of the atlas in bytes; width * height * bpp
    pub fn size(&self) -> usize {
        self.rbuf.len()
    }
    /// Clear the atlas, all components set to 255
    ///
    ///     use shelf_accum::{Atlas,Rgba8};
    ///
    ///     let mut atlas = Atlas::new(2,2);
    ///     assert_eq!(atlas.get((1,1)), Rgba8::new(0,0,0,0));
    ///     atlas.clear();
    ///     assert_eq!(atlas.get((1,1)), Rgba8::white());
    ///
    pub fn clear(&mut self) {
        self.rbuf.clear();
    }
    /// Pixel at (`x`,`y`)
    ///
    /// Panics if the location is outside of the atlas
    pub fn get(&self, id: (usize, usize)) -> Rgba8 {
        Rgba8::from_slice(&self.rbuf[id])
    }
    /// Gray level (red component) at (`x`,`y`)
    pub fn gray(&self, id: (usize, usize)) -> u8 {
        self.rbuf[id][0]
    }
    /// Set pixel at (`x`,`y`) to `c`
    ///
    /// Panics if the location is outside of the atlas
    pub fn set(&mut self, id: (usize, usize), c: Rgba8) {
        self.rbuf[id].copy_from_slice(&c.to_array());
    }
    /// Bytes in a single row of the atlas
    pub fn stride(&self) -> usize {
        self.rbuf.stride()
    }
    /// Mutable row-major pixel data
    pub(crate) fn data_mut(&mut self) -> &mut [u8] {
        &mut self.rbuf.data
    }
    /// Write the atlas to a PNG file
    pub fn to_file<P: AsRef<Path>>(&self, filename: P) -> Result<(), Error> {
        crate::ppm::write_file(self.pixeldata(), self.width(), self.height(), filename)
    }
    /// Read an atlas from an image file
    pub fn from_file<P: AsRef<Path>>(filename: P) -> Result<Self, Error> {
        let (data, width, height) = crate::ppm::read_file(filename)?;
        Ok(Self { rbuf: RenderingBuffer { data, width, height, bpp: Self::bpp() } })
    }
}

/// Access Pixeldata from an Atlas
impl PixelData for Atlas {
    fn pixeldata(&self) -> &[u8] {
        &self.rbuf.data
    }
}

#[cfg(test)]
mod tests {
    use super::Atlas;
    use crate::PixelData;
    use crate::Rgba8;

    #[test]
    fn atlas_pixels() {
        let mut atlas = Atlas::new(3, 2);
        assert_eq!(atlas.size(), 24);
        assert_eq!(atlas.stride(), 12);

        atlas.clear();
        atlas.set((2,1), Rgba8::gray(10));
        assert_eq!(atlas.get((2,1)), Rgba8::new(10,255,255,255));
        assert_eq!(atlas.gray((2,1)), 10);
        assert_eq!(&atlas.pixeldata()[20..], &[10,255,255,255]);

        atlas.set((0,0), Rgba8::black());
        assert_eq!(atlas.get((0,0)), Rgba8::black());
        assert_eq!(atlas.pixeldata().iter().filter(|&&v| v != 255).count(), 4);
    }

    #[test]
    #[should_panic]
    fn atlas_get_out_of_range() {
        let atlas = Atlas::new(3, 2);
        atlas.get((0,2));
    }
}
