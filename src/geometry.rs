//! Atlas geometry and work unit indexing

use std::ops::Range;

use crate::error::Error;

/// Shape of a shelf packed atlas
///
/// The atlas is `atlas_width` pixels wide and split into horizontal
/// shelves of `shelf_height` rows each.
#[derive(Debug,Copy,Clone,PartialEq,Eq,Hash)]
pub struct AtlasGeometry {
    atlas_width: usize,
    shelf_height: usize,
}

/// A single (column, shelf) pair of the dispatch
///
/// Each work unit is one serial, top to bottom scan over `rows` in `column`.
#[derive(Debug,Clone,PartialEq,Eq)]
pub struct WorkUnit {
    /// Pixel column in the atlas
    pub column: usize,
    /// Shelf index, counting from the top
    pub shelf: usize,
    /// Rows covered by the shelf, `[first, last)`
    pub rows: Range<usize>,
}

impl AtlasGeometry {
    /// Create a new geometry, both dimensions must be non-zero
    ///
    ///     use shelf_accum::AtlasGeometry;
    ///
    ///     let g = AtlasGeometry::new(4, 3).unwrap();
    ///     assert_eq!(g.dispatch_len(2), Some(8));
    ///     assert!(AtlasGeometry::new(0, 3).is_err());
    ///
    pub fn new(atlas_width: usize, shelf_height: usize) -> Result<Self, Error> {
        if atlas_width == 0 || shelf_height == 0 {
            return Err(Error::ZeroDimension { atlas_width, shelf_height });
        }
        Ok(Self { atlas_width, shelf_height })
    }
    /// Columns per shelf
    pub fn atlas_width(&self) -> usize {
        self.atlas_width
    }
    /// Rows per shelf
    pub fn shelf_height(&self) -> usize {
        self.shelf_height
    }
    /// Number of complete shelves that fit in `height` rows
    pub fn shelves_for_height(&self, height: usize) -> usize {
        height / self.shelf_height
    }
    /// Size of the flat index space for `shelves` shelves
    pub fn dispatch_len(&self, shelves: usize) -> Option<usize> {
        shelves.checked_mul(self.atlas_width)
    }
    /// Rows touched by `shelves` shelves
    pub fn atlas_height(&self, shelves: usize) -> Option<usize> {
        shelves.checked_mul(self.shelf_height)
    }
    /// Rows belonging to shelf `shelf`
    pub fn shelf_rows(&self, shelf: usize) -> Range<usize> {
        let first = shelf * self.shelf_height;
        first .. first + self.shelf_height
    }
    /// Work unit for flat dispatch index `index`
    ///
    ///     use shelf_accum::AtlasGeometry;
    ///
    ///     let g = AtlasGeometry::new(4, 3).unwrap();
    ///     let unit = g.work_unit(6);
    ///     assert_eq!(unit.column, 2);
    ///     assert_eq!(unit.shelf, 1);
    ///     assert_eq!(unit.rows, 3..6);
    ///
    pub fn work_unit(&self, index: usize) -> WorkUnit {
        let column = index % self.atlas_width;
        let shelf = index / self.atlas_width;
        WorkUnit { column, shelf, rows: self.shelf_rows(shelf) }
    }
}

#[cfg(test)]
mod tests {
    use super::AtlasGeometry;
    use std::collections::HashSet;

    #[test]
    fn work_units_partition_atlas() {
        let g = AtlasGeometry::new(5, 4).unwrap();
        let shelves = 3;
        let mut seen = HashSet::new();
        for i in 0 .. g.dispatch_len(shelves).unwrap() {
            let unit = g.work_unit(i);
            assert!(unit.column < 5);
            assert!(unit.shelf < shelves);
            for y in unit.rows {
                assert!(seen.insert((unit.column, y)), "({},{}) written twice", unit.column, y);
            }
        }
        assert_eq!(seen.len(), 5 * g.atlas_height(shelves).unwrap());
    }

    #[test]
    fn geometry_limits() {
        let g = AtlasGeometry::new(4, 3).unwrap();
        assert_eq!(g.shelves_for_height(8), 2);
        assert_eq!(g.shelves_for_height(2), 0);
        assert_eq!(g.dispatch_len(usize::MAX), None);
        assert_eq!(g.atlas_height(usize::MAX), None);
        assert_eq!(g.shelf_rows(0), 0..3);
        assert!(AtlasGeometry::new(4, 0).is_err());
    }
}
