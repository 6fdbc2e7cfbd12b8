//! Segmentation regression test
//!
//! Cuts synthetic pages into lines and glyphs, and checks small line
//! merging, space inference, glued glyph splitting and stripping.

use glyphscan_core::{GlyphImage, PixelGrid};
use glyphscan_recog::{
    Axis, add_spaces, find_spans, prepare_page, split_chars, split_double_chars, split_lines,
    strip,
};
use glyphscan_test::{RegParams, compose_line, glyph_from_art, stack_lines};

fn dotted_i() -> PixelGrid {
    glyph_from_art(&["#", ".", "#", "#", "#", "#", "#"]).unwrap()
}

#[test]
fn segment_reg() {
    let mut rp = RegParams::new("segment");

    let i = dotted_i();
    let bar = glyph_from_art(&["#", "#", "#", "#", "#"]).unwrap();
    let ring = glyph_from_art(&["#####", "#...#", "#...#", "#...#", "#####"]).unwrap();

    // --- The dot of an 'i' joins the line below it ---
    let line = compose_line(&[&i, &i], &[2, 2], 2, 1).unwrap();
    let page = prepare_page(&line, 3).unwrap();
    rp.write_grid(&page).unwrap();
    let merged = split_lines(&page, true).unwrap();
    let unmerged = split_lines(&page, false).unwrap();
    rp.compare_values(1.0, merged.len() as f64, 0.0);
    rp.compare_values(2.0, unmerged.len() as f64, 0.0);
    rp.compare_values(21.0, merged[0].height() as f64, 0.0);

    // --- Two stacked lines stay two lines ---
    let l1 = compose_line(&[&ring, &bar], &[2, 2], 2, 1).unwrap();
    let l2 = compose_line(&[&bar, &i], &[2, 2], 2, 1).unwrap();
    let page = prepare_page(&stack_lines(&[l1, l2], 2).unwrap(), 3).unwrap();
    rp.write_grid(&page).unwrap();
    let lines = split_lines(&page, true).unwrap();
    rp.compare_values(2.0, lines.len() as f64, 0.0);

    // --- One connected blob is one span ---
    let spans = find_spans(&ring, Axis::Columns).unwrap();
    rp.compare_values(1.0, spans.len() as f64, 0.0);
    rp.compare_values(5.0, spans[0].len() as f64, 0.0);

    // --- A wide gap becomes a space before the third glyph ---
    let line = compose_line(&[&bar, &bar, &bar], &[2, 2, 8], 2, 0).unwrap();
    let chars = split_chars(&line).unwrap();
    let glyphs = add_spaces(&line, chars).unwrap();
    let layout: String = glyphs
        .iter()
        .map(|g| if g.is_space() { ' ' } else { 'x' })
        .collect();
    rp.compare_strings("xx x", &layout);

    // --- Two touching bars separate at their shared edge ---
    let pair = glyph_from_art(&[
        "###.###",
        "###.###",
        "#######",
        "###.###",
        "###.###",
    ])
    .unwrap();
    let narrow = glyph_from_art(&["##", "##", "##", "##", "##"]).unwrap();
    let glyphs = vec![
        GlyphImage::Pixels(narrow.clone()),
        GlyphImage::Pixels(pair.clone()),
    ];
    let out = split_double_chars(glyphs).unwrap();
    // Row 2 bridges every column, so no seam exists and nothing changes
    rp.compare_values(2.0, out.len() as f64, 0.0);

    let open = glyph_from_art(&[
        "###.###",
        "###.###",
        "###.###",
        "###.###",
        "###.###",
    ])
    .unwrap();
    let out = split_double_chars(vec![
        GlyphImage::Pixels(narrow.clone()),
        GlyphImage::Pixels(open),
    ])
    .unwrap();
    let widths: Vec<f64> = out
        .iter()
        .filter_map(GlyphImage::pixels)
        .map(|g| g.width() as f64)
        .collect();
    rp.compare_values(3.0, widths.len() as f64, 0.0);
    rp.compare_values(4.0, widths[1], 0.0);
    rp.compare_values(3.0, widths[2], 0.0);

    // --- Stripping trims only blank outer rows ---
    let padded = compose_line(&[&i], &[1], 1, 3).unwrap();
    let once = strip(&padded).unwrap();
    rp.compare_values(7.0, once.height() as f64, 0.0);
    rp.compare_values(3.0, once.width() as f64, 0.0);
    rp.compare_grids(&once, &strip(&once).unwrap());

    assert!(rp.cleanup(), "segment regression test failed");
}
