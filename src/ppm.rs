//! Reading, writing and comparing of atlas image files
//!
//! The output format is chosen from the file extension; only PNG is
//! enabled.
//!
use std::convert::TryFrom;
use std::path::Path;

use log::debug;

use crate::error::Error;

/// Read an image as RGBA data, returning (data, width, height)
pub fn read_file<P: AsRef<Path>>(filename: P) -> Result<(Vec<u8>,usize,usize),Error> {
    let img = image::open(filename)?.to_rgba8();
    let (w, h) = img.dimensions();
    let buf = img.into_raw();
    Ok((buf, w as usize, h as usize))
}

/// Write RGBA data of width x height to an image file
///
/// Image dimensions are limited to `u32`; larger sizes return
/// `Error::DimensionTooLarge`
pub fn write_file<P: AsRef<Path>>(buf: &[u8], width: usize, height: usize, filename: P) -> Result<(), Error> {
    let too_large = || Error::DimensionTooLarge { width, height };
    let w = u32::try_from(width).map_err(|_| too_large())?;
    let h = u32::try_from(height).map_err(|_| too_large())?;
    image::save_buffer(filename, buf, w, h, image::ColorType::Rgba8)?;
    Ok(())
}

/// Compare two image files pixel by pixel
///
/// Returns true if both have the same dimensions and identical RGBA data
pub fn img_diff<P: AsRef<Path>>(f1: P, f2: P) -> Result<bool,Error> {
    let (d1,w1,h1) = read_file(f1)?;
    let (d2,w2,h2) = read_file(f2)?;
    if w1 != w2 || h1 != h2 {
        debug!("image sizes differ: {}x{} {}x{}", w1, h1, w2, h2);
        return Ok(false);
    }
    let mut flag = true;
    for (i,(v1,v2)) in d1.iter().zip(d2.iter()).enumerate() {
        if v1 != v2 {
            debug!("{} [{},{},{}]: {} {}", i, (i/4)%w1,(i/4)/w1,i%4, v1,v2);
            flag = false;
        }
    }
    Ok(flag)
}
