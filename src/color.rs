//! Colors

/// Convert an accumulated coverage value into a gray level
///
/// Coverage is clamped to [0,1] and inverted, so full coverage is
/// black (0) and no coverage is white (255).  Rounding is half away
/// from zero, the behavior of [f32::round]
///
///     use shelf_accum::coverage_to_gray;
///
///     assert_eq!(coverage_to_gray(0.0), 255);
///     assert_eq!(coverage_to_gray(0.5), 127);
///     assert_eq!(coverage_to_gray(1.0), 0);
///     assert_eq!(coverage_to_gray(1.5), 0);
///     assert_eq!(coverage_to_gray(-0.3), 255);
///
pub fn coverage_to_gray(coverage: f32) -> u8 {
    // f32::max drops NaN, so NaN reads as no coverage
    let c = coverage.max(0.0).min(1.0);
    255 - (c * 255.0).round() as u8
}

/// Color as Red, Green, Blue, and Alpha
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq)]
pub struct Rgba8 {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
    /// Alpha
    pub a: u8,
}

impl Rgba8 {
    /// White Color (255,255,255,255)
    pub fn white() -> Self {
        Self::new(255,255,255,255)
    }
    /// Black Color (0,0,0,255)
    pub fn black() -> Self {
        Self::new(0,0,0,255)
    }
    /// Create new color
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Rgba8 { r, g, b, a }
    }
    /// Atlas pixel for a gray level
    ///
    /// Gray is stored in the red channel, remaining channels are opaque white
    pub fn gray(g: u8) -> Self {
        Self::new(g,255,255,255)
    }
    /// Atlas pixel for an accumulated coverage value
    pub fn from_coverage(coverage: f32) -> Self {
        Self::gray(coverage_to_gray(coverage))
    }
    /// Create a color from the first 4 components of `v`
    pub fn from_slice(v: &[u8]) -> Self {
        Self::new(v[0],v[1],v[2],v[3])
    }
    /// Components as an array, in r,g,b,a order
    pub fn to_array(&self) -> [u8;4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<[u8;4]> for Rgba8 {
    fn from(c: [u8;4]) -> Rgba8 {
        Rgba8::new(c[0], c[1], c[2], c[3])
    }
}
