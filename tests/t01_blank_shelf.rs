
extern crate shelf_accum;

#[test]
fn t01_blank_shelf() {
    let geom = shelf_accum::AtlasGeometry::new(4, 3).unwrap();
    let cov = shelf_accum::CoverageBuffer::new(4, 3);
    let mut atlas = shelf_accum::Atlas::new(4, 3);

    shelf_accum::Accumulator::new(geom).with_shelves(1).run(&cov, &mut atlas).unwrap();

    for y in 0 .. atlas.height() {
        for x in 0 .. atlas.width() {
            assert_eq!(atlas.get((x,y)), shelf_accum::Rgba8::new(255,255,255,255), "pix({},{})", x, y);
        }
    }
}
