//! Coverage buffer
//!
//! Intermediate single channel surface filled by a rasterizer with signed
//! coverage deltas and read by the accumulator.

/// Coverage Buffer
///
/// One `f32` per pixel, row-major order.  The buffer can be reused from
/// draw to draw; it only needs to be at least as large as every atlas it
/// is accumulated into.  Memory usage is `4 * width * height` bytes.
#[derive(Debug,Default,Clone,PartialEq)]
pub struct CoverageBuffer {
    data: Vec<f32>,
    width: usize,
    height: usize,
}

impl CoverageBuffer {
    /// Create a new zeroed coverage buffer of width x height
    pub fn new(width: usize, height: usize) -> Self {
        Self { data: vec![0.0; width * height], width, height }
    }
    /// Create a coverage buffer from row-major values
    ///
    /// Returns None if `data` does not hold exactly width * height values
    ///
    ///     use shelf_accum::CoverageBuffer;
    ///
    ///     let cov = CoverageBuffer::from_vec(vec![0.5, 0.25], 1, 2).unwrap();
    ///     assert_eq!(cov.sample(0,1), 0.25);
    ///     assert!(CoverageBuffer::from_vec(vec![0.5], 1, 2).is_none());
    ///
    pub fn from_vec(data: Vec<f32>, width: usize, height: usize) -> Option<Self> {
        if data.len() != width.checked_mul(height)? {
            return None;
        }
        Some(Self { data, width, height })
    }
    /// Width in pixels
    pub fn width(&self) -> usize {
        self.width
    }
    /// Height in pixels
    pub fn height(&self) -> usize {
        self.height
    }
    /// Size of the buffer in bytes
    pub fn size(&self) -> usize {
        self.data.len() * std::mem::size_of::<f32>()
    }
    /// Reset all coverage to zero
    pub fn clear(&mut self) {
        self.data.iter_mut().for_each(|v| *v = 0.0);
    }
    /// Raw row-major coverage values
    pub fn data(&self) -> &[f32] {
        &self.data
    }
    /// Coverage at (`x`,`y`)
    ///
    /// Locations outside of the buffer read as zero coverage.  There is no
    /// clamping or wrapping of coordinates.
    ///
    ///     use shelf_accum::CoverageBuffer;
    ///
    ///     let mut cov = CoverageBuffer::new(2,2);
    ///     cov.set(1,1, 0.75);
    ///     assert_eq!(cov.sample(1,1), 0.75);
    ///     assert_eq!(cov.sample(2,1), 0.0);
    ///     assert_eq!(cov.sample(-1,0), 0.0);
    ///
    #[inline]
    pub fn sample(&self, x: i64, y: i64) -> f32 {
        if x < 0 || y < 0 {
            return 0.0;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return 0.0;
        }
        self.data[y * self.width + x]
    }
    /// Set coverage at (`x`,`y`)
    ///
    /// Locations outside of the buffer are ignored
    pub fn set(&mut self, x: usize, y: usize, v: f32) {
        if x >= self.width || y >= self.height {
            return;
        }
        self.data[y * self.width + x] = v;
    }
    /// Add a coverage delta at (`x`,`y`)
    ///
    /// Locations outside of the buffer are ignored
    pub fn add(&mut self, x: usize, y: usize, v: f32) {
        if x >= self.width || y >= self.height {
            return;
        }
        self.data[y * self.width + x] += v;
    }
}

#[cfg(test)]
mod tests {
    use super::CoverageBuffer;

    #[test]
    fn coverage_buffer_sample() {
        let mut cov = CoverageBuffer::new(3, 2);
        assert_eq!(cov.size(), 24);
        cov.set(0, 0, 0.5);
        cov.add(0, 0, 0.25);
        cov.add(2, 1, -0.5);
        assert_eq!(cov.sample(0, 0), 0.75);
        assert_eq!(cov.sample(2, 1), -0.5);
        assert_eq!(&cov.data()[3..], &[0.0, 0.0, -0.5]);

        // No wrapping to the next row
        assert_eq!(cov.sample(3, 0), 0.0);
        assert_eq!(cov.sample(0, 2), 0.0);
        assert_eq!(cov.sample(i64::MIN, i64::MAX), 0.0);

        cov.set(10, 10, 1.0);
        cov.add(10, 0, 1.0);
        assert_eq!(cov.data().iter().filter(|&&v| v != 0.0).count(), 2);

        cov.clear();
        assert!(cov.data().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn coverage_buffer_from_vec() {
        let cov = CoverageBuffer::from_vec(vec![1.0; 6], 2, 3).unwrap();
        assert_eq!((cov.width(), cov.height()), (2, 3));
        assert!(CoverageBuffer::from_vec(vec![], usize::MAX, 2).is_none());
        assert!(CoverageBuffer::from_vec(vec![], 0, 0).is_some());
    }
}
