//! Column accumulation
//!
//! Turns a buffer of coverage deltas into gray levels in the atlas.  Every
//! (column, shelf) pair is an independent work unit which scans its column
//! from the top of the shelf to the bottom, keeping a running sum of the
//! coverage seen so far.  The running sum is written to the atlas at every
//! row after being clamped to [0,1] and converted with
//! [coverage_to_gray](../fn.coverage_to_gray.html).
//!
//! The parallel dispatch splits every shelf into strips of neighboring
//! columns and hands each strip to a worker.  Inside a strip every column
//! keeps its own running sum while rows are visited top to bottom.

use std::ops::Range;

use log::{debug, trace, warn};
use rayon::prelude::*;

use crate::atlas::Atlas;
use crate::color::Rgba8;
use crate::coverage::CoverageBuffer;
use crate::error::Error;
use crate::geometry::AtlasGeometry;

/// Dispatches smaller than this many pixels run on the calling thread
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 4096;

/// Columns of a shelf handled by one parallel task
pub const DEFAULT_COLUMNS_PER_TASK: usize = 64;

/// Run a single work unit, flat dispatch index `index`
///
/// Writes rows `[shelf * shelf_height, (shelf + 1) * shelf_height)` of
/// column `index % atlas_width`, and nothing else.  The atlas must be
/// large enough to hold the shelf; this is only checked in debug builds
/// (release builds panic on the out of range pixel instead).
///
///     use shelf_accum::{accumulate_unit, Atlas, AtlasGeometry, CoverageBuffer};
///
///     let g = AtlasGeometry::new(1, 3).unwrap();
///     let cov = CoverageBuffer::from_vec(vec![0.5, 0.5, 0.5], 1, 3).unwrap();
///     let mut atlas = Atlas::new(1, 3);
///     accumulate_unit(0, &g, &cov, &mut atlas);
///     assert_eq!(atlas.gray((0,0)), 127);
///     assert_eq!(atlas.gray((0,1)), 0);
///     assert_eq!(atlas.gray((0,2)), 0);
///
pub fn accumulate_unit(index: usize, geometry: &AtlasGeometry, input: &CoverageBuffer, output: &mut Atlas) {
    let unit = geometry.work_unit(index);
    debug_assert!(unit.column < output.width(), "column {} outside atlas width {}", unit.column, output.width());
    debug_assert!(unit.rows.end <= output.height(), "shelf {} ends at row {} past atlas height {}",
                  unit.shelf, unit.rows.end, output.height());

    let x = unit.column as i64;
    let mut coverage = 0.0f32;
    for y in unit.rows {
        coverage += input.sample(x, y as i64);
        output.set((unit.column, y), Rgba8::from_coverage(coverage));
    }
}

/// Column strip of one shelf
///
/// `rows` holds the pixels of `columns` for every row of the shelf, top to
/// bottom.  Strips never overlap, so each can be handed to its own worker.
struct Strip<'a> {
    shelf: usize,
    columns: Range<usize>,
    rows: Vec<&'a mut [u8]>,
}

/// Split the shelf bands of `data` into strips of at most `cols` columns
fn split_strips<'a>(data: &'a mut [u8], geometry: &AtlasGeometry, stride: usize, cols: usize) -> Vec<Strip<'a>> {
    let width = geometry.atlas_width();
    let shelf_height = geometry.shelf_height();
    let per_shelf = (width + cols - 1) / cols;
    let mut strips = Vec::with_capacity(data.len() / (stride * shelf_height) * per_shelf);
    for (shelf, band) in data.chunks_mut(stride * shelf_height).enumerate() {
        let first = strips.len();
        for j in 0 .. per_shelf {
            let x0 = j * cols;
            strips.push(Strip { shelf,
                                columns: x0 .. (x0 + cols).min(width),
                                rows: Vec::with_capacity(shelf_height) });
        }
        for row in band.chunks_mut(stride) {
            let (pixels, _) = row.split_at_mut(width * Atlas::bpp());
            for (strip, piece) in strips[first ..].iter_mut().zip(pixels.chunks_mut(cols * Atlas::bpp())) {
                strip.rows.push(piece);
            }
        }
    }
    strips
}

/// Accumulate one strip; `sums` is scratch space for the running sums
fn accumulate_strip(geometry: &AtlasGeometry, input: &CoverageBuffer, strip: &mut Strip<'_>, sums: &mut Vec<f32>) {
    trace!("accumulate shelf {} columns {:?}", strip.shelf, strip.columns);
    sums.clear();
    sums.resize(strip.columns.len(), 0.0);
    let x0 = strip.columns.start;
    for (row, y) in strip.rows.iter_mut().zip(geometry.shelf_rows(strip.shelf)) {
        let y = y as i64;
        let pixels = row.chunks_exact_mut(Atlas::bpp());
        for (i, (pix, sum)) in pixels.zip(sums.iter_mut()).enumerate() {
            *sum += input.sample((x0 + i) as i64, y);
            pix.copy_from_slice(&Rgba8::from_coverage(*sum).to_array());
        }
    }
}

/// Column Accumulator
///
/// Host side entry point; validates the dispatch against the atlas and
/// then runs every work unit.
///
///     use shelf_accum::{Accumulator, Atlas, AtlasGeometry, CoverageBuffer, Rgba8};
///
///     let g = AtlasGeometry::new(4, 3).unwrap();
///     let mut cov = CoverageBuffer::new(4, 6);
///     cov.set(1, 3, 1.0);
///     let mut atlas = Atlas::new(4, 6);
///     Accumulator::new(g).run(&cov, &mut atlas).unwrap();
///     assert_eq!(atlas.get((1,2)), Rgba8::white());
///     assert_eq!(atlas.get((1,3)), Rgba8::gray(0));
///     assert_eq!(atlas.get((1,5)), Rgba8::gray(0));
///
#[derive(Debug,Clone)]
pub struct Accumulator {
    geometry: AtlasGeometry,
    shelves: Option<usize>,
    parallel: bool,
    parallel_threshold: usize,
    columns_per_task: usize,
}

impl Accumulator {
    /// Create a new accumulator
    ///
    /// By default every complete shelf of the output atlas is accumulated
    /// and large dispatches run in parallel
    pub fn new(geometry: AtlasGeometry) -> Self {
        Self { geometry,
               shelves: None,
               parallel: true,
               parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
               columns_per_task: DEFAULT_COLUMNS_PER_TASK,
        }
    }
    /// Accumulate exactly `shelves` shelves
    pub fn with_shelves(mut self, shelves: usize) -> Self {
        self.shelves = Some(shelves);
        self
    }
    /// Enable or disable the parallel dispatch
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
    /// Smallest dispatch, in pixels, that runs in parallel
    pub fn with_parallel_threshold(mut self, pixels: usize) -> Self {
        self.parallel_threshold = pixels;
        self
    }
    /// Columns of a shelf handled by one parallel task, at least 1
    pub fn with_columns_per_task(mut self, columns: usize) -> Self {
        self.columns_per_task = columns.max(1);
        self
    }
    /// Atlas geometry of the dispatch
    pub fn geometry(&self) -> &AtlasGeometry {
        &self.geometry
    }
    /// Number of shelves accumulated into `output`
    pub fn shelf_count(&self, output: &Atlas) -> usize {
        self.shelves.unwrap_or_else(|| self.geometry.shelves_for_height(output.height()))
    }
    /// Check the dispatch fits in `output`, returning the shelf count
    pub fn validate(&self, output: &Atlas) -> Result<usize, Error> {
        self.check(output).map_err(|err| {
            warn!("{}", err);
            err
        })
    }
    fn check(&self, output: &Atlas) -> Result<usize, Error> {
        let shelves = self.shelf_count(output);
        let height = self.geometry.dispatch_len(shelves)
            .and_then(|_| self.geometry.atlas_height(shelves))
            .ok_or(Error::DispatchOverflow { shelves })?;
        let width = self.geometry.atlas_width();
        if output.width() < width || output.height() < height {
            return Err(Error::AtlasTooSmall {
                required: (width, height),
                actual: (output.width(), output.height()),
            });
        }
        Ok(shelves)
    }
    /// Run every work unit of the dispatch
    ///
    /// Nothing is written if validation fails
    pub fn run(&self, input: &CoverageBuffer, output: &mut Atlas) -> Result<(), Error> {
        let shelves = self.validate(output)?;
        let width = self.geometry.atlas_width();
        let shelf_height = self.geometry.shelf_height();
        let pixels = width * shelf_height * shelves;
        let parallel = self.is_parallel(pixels);
        debug!("accumulate {} shelves of {}x{} ({} units) parallel: {}",
               shelves, width, shelf_height, shelves * width, parallel);
        if pixels == 0 {
            return Ok(());
        }

        let geometry = &self.geometry;
        let stride = output.stride();
        let data = &mut output.data_mut()[.. stride * shelf_height * shelves];
        if parallel {
            let mut strips = split_strips(data, geometry, stride, self.columns_per_task);
            strips.par_iter_mut()
                .for_each_init(Vec::new, |sums, strip| {
                    accumulate_strip(geometry, input, strip, sums);
                });
        } else {
            let mut sums = Vec::with_capacity(width);
            for strip in split_strips(data, geometry, stride, width).iter_mut() {
                accumulate_strip(geometry, input, strip, &mut sums);
            }
        }
        Ok(())
    }
    /// True if a dispatch of `pixels` pixels runs in parallel
    fn is_parallel(&self, pixels: usize) -> bool {
        self.parallel && pixels >= self.parallel_threshold
    }
    /// Run every work unit on the calling thread, one unit at a time
    ///
    /// Units are visited in flat index order.  The result is identical to
    /// [run](#method.run).
    pub fn run_serial(&self, input: &CoverageBuffer, output: &mut Atlas) -> Result<(), Error> {
        let shelves = self.validate(output)?;
        let n = shelves * self.geometry.atlas_width();
        debug!("accumulate {} units serially", n);
        for index in 0 .. n {
            accumulate_unit(index, &self.geometry, input, output);
        }
        Ok(())
    }
}
