//! Synthetic glyph and page fixtures
//!
//! Tests build their inputs from ASCII art instead of shipping binary
//! images: `#` is a black pixel, anything else is white.

use crate::error::{TestError, TestResult};
use glyphscan_core::{PixelGrid, Rgb};

/// Build a black-and-white grid from ASCII art rows.
///
/// ```
/// use glyphscan_test::glyph_from_art;
///
/// let bar = glyph_from_art(&["##", "##"]).unwrap();
/// assert_eq!(bar.width(), 2);
/// ```
pub fn glyph_from_art(rows: &[&str]) -> TestResult<PixelGrid> {
    let rows: Vec<Vec<Rgb>> = rows
        .iter()
        .map(|row| {
            row.chars()
                .map(|c| if c == '#' { Rgb::BLACK } else { Rgb::WHITE })
                .collect()
        })
        .collect();
    PixelGrid::from_rows(&rows).map_err(|e| TestError::InvalidFixture(e.to_string()))
}

/// Lay glyphs out left to right on one line.
///
/// `gaps[i]` white columns precede glyph `i` (`gaps[0]` is the left
/// margin); `trailing` white columns follow the last glyph. Glyphs are
/// bottom-aligned and the line is as tall as the tallest glyph plus
/// `margin` white rows above and below.
pub fn compose_line(
    glyphs: &[&PixelGrid],
    gaps: &[u32],
    trailing: u32,
    margin: u32,
) -> TestResult<PixelGrid> {
    if glyphs.is_empty() || glyphs.len() != gaps.len() {
        return Err(TestError::InvalidFixture(format!(
            "{} glyphs but {} gaps",
            glyphs.len(),
            gaps.len()
        )));
    }
    let glyph_h = glyphs.iter().map(|g| g.height()).max().unwrap_or(1);
    let width: u32 = glyphs.iter().map(|g| g.width()).sum::<u32>() + gaps.iter().sum::<u32>() + trailing;
    let height = glyph_h + 2 * margin;
    let mut line = blank(width, height)?;

    let mut x0 = 0;
    for (glyph, gap) in glyphs.iter().zip(gaps) {
        x0 += gap;
        let y0 = margin + glyph_h - glyph.height();
        paste(&mut line, glyph, x0, y0);
        x0 += glyph.width();
    }
    Ok(line)
}

/// Stack lines top to bottom, left-aligned, separated by `gap` white
/// rows. Narrower lines are padded with white on the right.
pub fn stack_lines(lines: &[PixelGrid], gap: u32) -> TestResult<PixelGrid> {
    if lines.is_empty() {
        return Err(TestError::InvalidFixture("no lines".to_string()));
    }
    let width = lines.iter().map(|l| l.width()).max().unwrap_or(1);
    let height =
        lines.iter().map(|l| l.height()).sum::<u32>() + gap * (lines.len() as u32 - 1);
    let mut page = blank(width, height)?;

    let mut y0 = 0;
    for line in lines {
        paste(&mut page, line, 0, y0);
        y0 += line.height() + gap;
    }
    Ok(page)
}

fn blank(width: u32, height: u32) -> TestResult<PixelGrid> {
    PixelGrid::new(width, height, Rgb::WHITE).map_err(|e| TestError::InvalidFixture(e.to_string()))
}

fn paste(dst: &mut PixelGrid, src: &PixelGrid, x0: u32, y0: u32) {
    for y in 0..src.height() {
        for x in 0..src.width() {
            dst.set_pixel_unchecked(x0 + x, y0 + y, src.get_pixel_unchecked(x, y));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_from_art() {
        let g = glyph_from_art(&["#.", ".#"]).unwrap();
        assert_eq!(g.get_pixel(0, 0), Some(Rgb::BLACK));
        assert_eq!(g.get_pixel(1, 0), Some(Rgb::WHITE));
        assert!(glyph_from_art(&["##", "#"]).is_err());
    }

    #[test]
    fn test_compose_line_geometry() {
        let a = glyph_from_art(&["##", "##", "##"]).unwrap();
        let b = glyph_from_art(&["#", "#"]).unwrap();
        let line = compose_line(&[&a, &b], &[1, 3], 2, 1).unwrap();
        assert_eq!(line.width(), 1 + 2 + 3 + 1 + 2);
        assert_eq!(line.height(), 5);
        // b is bottom-aligned: rows 2..4 of the line
        assert_eq!(line.get_pixel(6, 1), Some(Rgb::WHITE));
        assert_eq!(line.get_pixel(6, 2), Some(Rgb::BLACK));
        assert_eq!(line.get_pixel(6, 3), Some(Rgb::BLACK));
    }

    #[test]
    fn test_stack_lines_pads_width() {
        let a = glyph_from_art(&["###"]).unwrap();
        let b = glyph_from_art(&["#"]).unwrap();
        let page = stack_lines(&[a, b], 2).unwrap();
        assert_eq!(page.width(), 3);
        assert_eq!(page.height(), 4);
        assert_eq!(page.get_pixel(2, 3), Some(Rgb::WHITE));
        assert_eq!(page.get_pixel(0, 3), Some(Rgb::BLACK));
    }
}
