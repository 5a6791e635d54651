
extern crate shelf_accum;

use shelf_accum::{Accumulator, Atlas, AtlasGeometry, CoverageBuffer, Rgba8};

#[test]
fn t02_half_coverage() {
    let geom = AtlasGeometry::new(1, 3).unwrap();
    let cov = CoverageBuffer::from_vec(vec![0.5, 0.5, 0.5], 1, 3).unwrap();

    // Cumulative sums 0.5, 1.0, 1.5; 127.5 rounds up to 128
    let expected = [127, 0, 0];

    let mut atlas = Atlas::new(1, 3);
    Accumulator::new(geom).run(&cov, &mut atlas).unwrap();
    for (y, &g) in expected.iter().enumerate() {
        assert_eq!(atlas.get((0,y)), Rgba8::new(g,255,255,255), "row {}", y);
    }

    let mut serial = Atlas::new(1, 3);
    Accumulator::new(geom).run_serial(&cov, &mut serial).unwrap();
    assert_eq!(atlas, serial);
}
