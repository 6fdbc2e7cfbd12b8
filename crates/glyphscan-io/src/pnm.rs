//! PNM (Portable Any Map) format support
//!
//! Reads PGM (P5) and PPM (P6) binary images with a maxval of 255 or
//! less, and writes P6. Samples are rescaled to 0..=255 when maxval is
//! below 255.

use crate::{IoError, IoResult};
use glyphscan_core::{PixelGrid, Rgb};
use std::io::{BufRead, Read, Write};

/// Read a PNM image (P5/P6) from a reader.
///
/// # Arguments
/// * `reader` - A buffered reader positioned at the `P5`/`P6` magic
pub fn read_pnm<R: BufRead>(mut reader: R) -> IoResult<PixelGrid> {
    let magic = read_token(&mut reader)?;
    let channels = match magic.as_str() {
        "P5" => 1,
        "P6" => 3,
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported PNM variant: {}",
                other
            )));
        }
    };

    let width = read_number(&mut reader, "width")?;
    let height = read_number(&mut reader, "height")?;
    let maxval = read_number(&mut reader, "maxval")?;
    if maxval == 0 || maxval > 255 {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported PNM maxval: {}",
            maxval
        )));
    }

    let len = (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(channels))
        .ok_or_else(|| {
            IoError::InvalidData(format!("PNM dimensions too large: {}x{}", width, height))
        })?;
    // Grow with the stream so a lying header cannot force the allocation
    let mut data = Vec::new();
    reader.by_ref().take(len as u64).read_to_end(&mut data)?;
    if data.len() < len {
        return Err(IoError::InvalidData(format!(
            "truncated PNM pixel data: expected {} bytes, got {}",
            len,
            data.len()
        )));
    }

    let scale = |v: u8| -> u8 {
        if maxval == 255 {
            v
        } else {
            (u32::from(v.min(maxval as u8)) * 255 / maxval) as u8
        }
    };
    let pixels: Vec<Rgb> = data
        .chunks_exact(channels)
        .map(|c| {
            if channels == 1 {
                let v = scale(c[0]);
                Rgb::new(v, v, v)
            } else {
                Rgb::new(scale(c[0]), scale(c[1]), scale(c[2]))
            }
        })
        .collect();

    Ok(PixelGrid::from_raw(width, height, pixels)?)
}

/// Write a grid as binary PPM (P6).
pub fn write_pnm<W: Write>(grid: &PixelGrid, mut writer: W) -> IoResult<()> {
    write!(writer, "P6\n{} {}\n255\n", grid.width(), grid.height())?;
    let data: Vec<u8> = grid
        .data()
        .iter()
        .flat_map(|px| [px.r, px.g, px.b])
        .collect();
    writer.write_all(&data)?;
    Ok(())
}

/// Read one whitespace-delimited header token, skipping `#` comments.
///
/// Consumes exactly one whitespace byte after the token, so after the
/// maxval token the reader sits on the first sample byte.
fn read_token<R: BufRead>(reader: &mut R) -> IoResult<String> {
    let mut token = String::new();
    let mut byte = [0u8; 1];
    loop {
        if reader.read(&mut byte)? == 0 {
            if token.is_empty() {
                return Err(IoError::InvalidData("truncated PNM header".to_string()));
            }
            return Ok(token);
        }
        let c = byte[0];
        if c == b'#' && token.is_empty() {
            let mut comment = Vec::new();
            reader.read_until(b'\n', &mut comment)?;
            continue;
        }
        if c.is_ascii_whitespace() {
            if token.is_empty() {
                continue;
            }
            return Ok(token);
        }
        token.push(c as char);
    }
}

fn read_number<R: BufRead>(reader: &mut R, field: &str) -> IoResult<u32> {
    let token = read_token(reader)?;
    token
        .parse()
        .map_err(|_| IoError::InvalidData(format!("bad PNM {}: {:?}", field, token)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_pgm_with_comment() {
        let mut data = b"P5\n# made by hand\n3 1\n255\n".to_vec();
        data.extend_from_slice(&[0, 100, 255]);
        let grid = read_pnm(Cursor::new(data)).unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(
            grid.row(0),
            &[Rgb::BLACK, Rgb::new(100, 100, 100), Rgb::WHITE]
        );
    }

    #[test]
    fn test_read_ppm_rescales_maxval() {
        let mut data = b"P6 1 1 15 ".to_vec();
        data.extend_from_slice(&[15, 0, 5]);
        let grid = read_pnm(Cursor::new(data)).unwrap();
        assert_eq!(grid.get_pixel(0, 0), Some(Rgb::new(255, 0, 85)));
    }

    #[test]
    fn test_ppm_roundtrip() {
        let mut grid = PixelGrid::new(3, 2, Rgb::WHITE).unwrap();
        grid.set_pixel(2, 1, Rgb::new(1, 2, 3)).unwrap();
        let mut buffer = Vec::new();
        write_pnm(&grid, &mut buffer).unwrap();
        assert!(buffer.starts_with(b"P6\n3 2\n255\n"));
        assert_eq!(read_pnm(Cursor::new(buffer)).unwrap(), grid);
    }

    #[test]
    fn test_read_pnm_errors() {
        assert!(matches!(
            read_pnm(Cursor::new(b"P4\n1 1\n".to_vec())),
            Err(IoError::UnsupportedFormat(_))
        ));
        assert!(matches!(
            read_pnm(Cursor::new(b"P5\nx 1\n255\n".to_vec())),
            Err(IoError::InvalidData(_))
        ));
        assert!(matches!(
            read_pnm(Cursor::new(b"P5\n2 2\n255\n\x00".to_vec())),
            Err(IoError::InvalidData(_))
        ));
    }

    #[test]
    fn test_read_pnm_rejects_oversized_header() {
        // width * height * 3 overflows usize
        assert!(matches!(
            read_pnm(Cursor::new(
                b"P6\n4294967295 4294967295\n255\n\x00\x00\x00".to_vec()
            )),
            Err(IoError::InvalidData(_))
        ));
        // Fits in usize but the stream holds only three samples
        assert!(matches!(
            read_pnm(Cursor::new(b"P6\n100000 100000\n255\n\x00\x00\x00".to_vec())),
            Err(IoError::InvalidData(_))
        ));
    }
}
