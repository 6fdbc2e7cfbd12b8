//! Scaling regression test
//!
//! Upscales and resizes synthetic glyphs and checks exact output
//! dimensions and the majority vote on uniform blocks.

use glyphscan_color::binarize;
use glyphscan_core::Rgb;
use glyphscan_test::{RegParams, glyph_from_art};
use glyphscan_transform::{apportion, resize, upscale};

#[test]
fn scale_reg() {
    let mut rp = RegParams::new("scale");

    let ring = glyph_from_art(&["#####", "#...#", "#...#", "#...#", "#####"]).unwrap();
    let tall = glyph_from_art(&["##", "#.", "#.", "#.", "#.", "#.", "##"]).unwrap();

    // --- Upscale by 3 triples both axes ---
    for glyph in [&ring, &tall] {
        let up = upscale(glyph, 3).unwrap();
        rp.compare_values(3.0 * glyph.width() as f64, up.width() as f64, 0.0);
        rp.compare_values(3.0 * glyph.height() as f64, up.height() as f64, 0.0);
        rp.compare_values(9.0 * glyph.count_black() as f64, up.count_black() as f64, 0.0);
        rp.write_grid(&up).unwrap();
    }

    // --- Resize always hits the target exactly ---
    for (h, w) in [(200, 200), (25, 10), (1, 9), (5, 5)] {
        let out = resize(&tall, h, w).unwrap();
        rp.compare_values(h as f64, out.height() as f64, 0.0);
        rp.compare_values(w as f64, out.width() as f64, 0.0);
    }

    // --- Uniform 3x3 blocks vote back to their source pixel ---
    let up = upscale(&ring, 3).unwrap();
    let down = resize(&up, 5, 5).unwrap();
    rp.compare_grids(&ring, &down);

    // --- Resize output is pure black and white ---
    let gray = ring.map(|px| if px.is_black() { px } else { Rgb::new(250, 250, 250) });
    let out = resize(&gray, 50, 50).unwrap();
    rp.compare_grids(&binarize(&out), &out);

    // --- Apportion covers the axis exactly ---
    let bounds = apportion(200, 5);
    rp.compare_values(6.0, bounds.len() as f64, 0.0);
    rp.compare_values(40.0, (bounds[1] - bounds[0]) as f64, 0.0);
    rp.compare_values(200.0, bounds[5] as f64, 0.0);

    assert!(rp.cleanup(), "scale regression test failed");
}
