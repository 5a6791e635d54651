
extern crate shelf_accum;

use shelf_accum::{Accumulator, Atlas, AtlasGeometry, CoverageBuffer};

fn tmp(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("shelf_accum_{}_{}", std::process::id(), name))
}

#[test]
fn t05_atlas_png() {
    let (w, h) = (64, 48);
    let geom = AtlasGeometry::new(w, 16).unwrap();

    // A filled triangle per shelf, encoded as enter/leave deltas
    let mut cov = CoverageBuffer::new(w, h);
    for shelf in 0 .. 3 {
        let top = shelf * 16;
        for x in 4 .. 60 {
            let depth = (x.min(63 - x) - 4) / 3;
            let depth = depth.min(14);
            cov.add(x, top + 1, 1.0);
            cov.add(x, top + 1 + depth, -1.0);
        }
    }

    let mut atlas = Atlas::new(w, h);
    Accumulator::new(geom).with_parallel_threshold(0).run(&cov, &mut atlas).unwrap();

    let f1 = tmp("atlas.png");
    atlas.to_file(&f1).unwrap();
    let back = Atlas::from_file(&f1).unwrap();
    assert_eq!(back, atlas);

    let mut serial = Atlas::new(w, h);
    Accumulator::new(geom).run_serial(&cov, &mut serial).unwrap();
    let f2 = tmp("atlas_serial.png");
    serial.to_file(&f2).unwrap();
    assert!(shelf_accum::ppm::img_diff(&f1, &f2).unwrap());

    let _ = std::fs::remove_file(&f1);
    let _ = std::fs::remove_file(&f2);
}
