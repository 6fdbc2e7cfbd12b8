//! Binarization regression test
//!
//! Renders a glyph line in several shades of gray over off-white paper
//! and checks that binarization recovers exactly the ink mask.

use glyphscan_color::{BINARIZE_THRESHOLD, binarize};
use glyphscan_core::{PixelGrid, Rgb};
use glyphscan_test::{RegParams, compose_line, glyph_from_art};

fn tint(mask: &PixelGrid, ink: Rgb, paper: Rgb) -> PixelGrid {
    mask.map(|px| if px.is_black() { ink } else { paper })
}

#[test]
fn binarize_reg() {
    let mut rp = RegParams::new("binarize");

    let ring = glyph_from_art(&["####", "#..#", "#..#", "####"]).unwrap();
    let tee = glyph_from_art(&["###", ".#.", ".#.", ".#."]).unwrap();
    let mask = compose_line(&[&ring, &tee], &[1, 3], 1, 1).unwrap();
    eprintln!("Mask size: {}x{}", mask.width(), mask.height());

    // --- Dark inks on light paper all map back to the mask ---
    let paper = Rgb::new(240, 235, 230);
    for ink in [
        Rgb::BLACK,
        Rgb::new(80, 80, 80),
        Rgb::new(154, 155, 155),
        Rgb::new(200, 40, 40),
    ] {
        let page = tint(&mask, ink, paper);
        let bin = binarize(&page);
        rp.compare_grids(&mask, &bin);
        rp.write_grid(&bin).unwrap();
    }

    // --- Ink just above the threshold disappears ---
    let faint = tint(&mask, Rgb::new(155, 155, 155), paper);
    let bin = binarize(&faint);
    rp.compare_values(0.0, bin.count_black() as f64, 0.0);

    // --- Dimensions are preserved ---
    rp.compare_values(mask.width() as f64, bin.width() as f64, 0.0);
    rp.compare_values(mask.height() as f64, bin.height() as f64, 0.0);

    // --- The cut sits between channel sums 464 and 465 ---
    rp.compare_values(465.0, BINARIZE_THRESHOLD as f64, 0.0);
    let edge = tint(&mask, Rgb::new(155, 155, 154), Rgb::new(155, 155, 155));
    rp.compare_grids(&mask, &binarize(&edge));

    assert!(rp.cleanup(), "binarize regression test failed");
}
