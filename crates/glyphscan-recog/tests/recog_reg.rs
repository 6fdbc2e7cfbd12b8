//! Recognition regression test
//!
//! Builds a two-glyph template library, recognizes synthetic two-line
//! pages with both methods and two upscale factors, and round-trips
//! templates through a directory store.

use glyphscan_core::PixelGrid;
use glyphscan_recog::{
    DirectoryStore, RecogError, RecogMethod, RecogOptions, Recognizer, TemplateLibrary,
    recognize, save_alphabet,
};
use glyphscan_test::{RegParams, compose_line, glyph_from_art, scratch_dir, stack_lines};
use std::path::Path;
use std::sync::Arc;

fn ring() -> PixelGrid {
    glyph_from_art(&["#####", "#...#", "#...#", "#...#", "#####"]).unwrap()
}

fn bar() -> PixelGrid {
    glyph_from_art(&["#", "#", "#", "#", "#"]).unwrap()
}

/// "ol o" above "lo l"
fn two_line_page() -> PixelGrid {
    let (o, l) = (ring(), bar());
    let top = compose_line(&[&o, &l, &o], &[2, 2, 8], 2, 1).unwrap();
    let bottom = compose_line(&[&l, &o, &l], &[2, 2, 8], 2, 1).unwrap();
    stack_lines(&[top, bottom], 3).unwrap()
}

#[test]
fn recog_reg() {
    let mut rp = RegParams::new("recog");

    let page = two_line_page();
    rp.write_grid(&page).unwrap();

    // --- Squares: one space per line, one line break ---
    let library =
        TemplateLibrary::from_glyphs(RecogMethod::Squares, [('o', ring()), ('l', bar())])
            .unwrap();
    let text = recognize(&page, &library, "squares").unwrap();
    rp.compare_strings("ol o\nlo l", &text);

    // --- Outline: hole category alone separates the two glyphs ---
    let library =
        TemplateLibrary::from_glyphs(RecogMethod::Outline, [('o', ring()), ('l', bar())])
            .unwrap();
    let recognizer = Recognizer::new(
        Arc::new(library),
        RecogOptions::default().with_method(RecogMethod::Outline),
    )
    .unwrap();
    let report = recognizer.recognize_detailed(&page).unwrap();
    rp.compare_strings("ol o\nlo l", &report.text());
    rp.compare_values(2.0, report.lines.len() as f64, 0.0);
    rp.compare_values(0.0, report.failures.len() as f64, 0.0);

    // --- Templates and pages upscaled by 2 instead of 3 ---
    let glyphs = [('o', ring()), ('l', bar())];
    let library =
        Arc::new(TemplateLibrary::from_glyphs_scaled(RecogMethod::Squares, 2, glyphs).unwrap());
    let halved =
        Recognizer::new(library.clone(), RecogOptions::default().with_upscale_factor(2)).unwrap();
    rp.compare_strings("ol o\nlo l", &halved.recognize(&page).unwrap());
    let mismatched = Recognizer::new(library, RecogOptions::default());
    rp.compare_values(
        1.0,
        matches!(mismatched, Err(RecogError::ScaleMismatch { .. })) as u8 as f64,
        0.0,
    );

    // --- Unknown method is rejected up front ---
    let err = recognize(&page, recognizer.library(), "contour").unwrap_err();
    rp.compare_values(
        1.0,
        matches!(err, RecogError::UnknownMethod(_)) as u8 as f64,
        0.0,
    );

    assert!(rp.cleanup(), "recog regression test failed");
}

#[test]
fn recog_library_store_reg() {
    let mut rp = RegParams::new("recog_library_store");

    let (o, l) = (ring(), bar());
    let alphabet = compose_line(&[&o, &l], &[2, 3], 2, 2).unwrap();
    rp.write_grid(&alphabet).unwrap();

    let dir = scratch_dir("recog_library_store").unwrap();
    let mut store = DirectoryStore::new(&dir);
    let saved = save_alphabet(&alphabet, &['o', 'l'], &mut store).unwrap();
    rp.compare_values(2.0, saved as f64, 0.0);
    rp.compare_values(
        1.0,
        Path::new(&dir).join("char_o.png").is_file() as u8 as f64,
        0.0,
    );
    rp.compare_values(
        1.0,
        Path::new(&dir).join("char_l.png").is_file() as u8 as f64,
        0.0,
    );

    // --- Saved glyphs are the upscaled, stripped crops ---
    let library = TemplateLibrary::load(&store, &['o', 'l'], RecogMethod::Squares).unwrap();
    rp.compare_values(2.0, library.len() as f64, 0.0);

    let page = compose_line(&[&o, &l], &[2, 6], 2, 1).unwrap();
    let text = recognize(&page, &library, "squares").unwrap();
    rp.compare_strings("o l", &text);

    // --- A label with no stored glyph fails the load ---
    let missing = TemplateLibrary::load(&store, &['o', 'Q'], RecogMethod::Squares);
    rp.compare_values(
        1.0,
        matches!(missing, Err(RecogError::MissingTemplate('Q'))) as u8 as f64,
        0.0,
    );

    assert!(rp.cleanup(), "recog library store regression test failed");
}
