//! PNG image format support
//!
//! Every PNG flavor is decoded to 8-bit RGB. Palette and low-depth gray
//! images are expanded and 16-bit samples stripped by the decoder; alpha
//! is dropped.

use crate::{IoError, IoResult};
use glyphscan_core::{PixelGrid, Rgb};
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<PixelGrid> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::EXPAND | Transformations::STRIP_16);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let (color_type, bit_depth) = reader.output_color_type();
    if bit_depth != BitDepth::Eight {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported PNG output depth: {:?}",
            bit_depth
        )));
    }
    let samples = match color_type {
        ColorType::Grayscale => 1,
        ColorType::GrayscaleAlpha => 2,
        ColorType::Rgb => 3,
        ColorType::Rgba => 4,
        ColorType::Indexed => {
            return Err(IoError::UnsupportedFormat(
                "PNG palette was not expanded".to_string(),
            ));
        }
    };

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let width = output_info.width;
    let height = output_info.height;
    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];

    let mut pixels = Vec::with_capacity(width as usize * height as usize);
    for y in 0..height as usize {
        let row = &data[y * bytes_per_row..];
        for x in 0..width as usize {
            let idx = x * samples;
            let px = if samples < 3 {
                Rgb::new(row[idx], row[idx], row[idx])
            } else {
                Rgb::new(row[idx], row[idx + 1], row[idx + 2])
            };
            pixels.push(px);
        }
    }

    Ok(PixelGrid::from_raw(width, height, pixels)?)
}

/// Write a PNG image as 8-bit RGB
pub fn write_png<W: Write>(grid: &PixelGrid, writer: W) -> IoResult<()> {
    let mut encoder = Encoder::new(writer, grid.width(), grid.height());
    encoder.set_color(ColorType::Rgb);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    let data: Vec<u8> = grid
        .data()
        .iter()
        .flat_map(|px| [px.r, px.g, px.b])
        .collect();

    writer
        .write_image_data(&data)
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_png_roundtrip_rgb() {
        let mut grid = PixelGrid::new(5, 4, Rgb::WHITE).unwrap();
        grid.set_pixel(0, 0, Rgb::new(255, 0, 0)).unwrap();
        grid.set_pixel(1, 1, Rgb::new(0, 255, 0)).unwrap();
        grid.set_pixel(4, 3, Rgb::BLACK).unwrap();

        let mut buffer = Vec::new();
        write_png(&grid, &mut buffer).unwrap();
        let decoded = read_png(Cursor::new(buffer)).unwrap();

        assert_eq!(decoded, grid);
    }

    #[test]
    fn test_png_grayscale_expands_to_rgb() {
        let mut buffer = Vec::new();
        {
            let mut encoder = Encoder::new(&mut buffer, 3, 1);
            encoder.set_color(ColorType::Grayscale);
            encoder.set_depth(BitDepth::Eight);
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(&[0, 128, 255]).unwrap();
        }

        let grid = read_png(Cursor::new(buffer)).unwrap();
        assert_eq!(grid.row(0), &[Rgb::BLACK, Rgb::new(128, 128, 128), Rgb::WHITE]);
    }

    #[test]
    fn test_png_alpha_is_dropped() {
        let mut buffer = Vec::new();
        {
            let mut encoder = Encoder::new(&mut buffer, 2, 1);
            encoder.set_color(ColorType::Rgba);
            encoder.set_depth(BitDepth::Eight);
            let mut writer = encoder.write_header().unwrap();
            writer
                .write_image_data(&[10, 20, 30, 0, 40, 50, 60, 255])
                .unwrap();
        }

        let grid = read_png(Cursor::new(buffer)).unwrap();
        assert_eq!(grid.row(0), &[Rgb::new(10, 20, 30), Rgb::new(40, 50, 60)]);
    }

    #[test]
    fn test_png_garbage_is_decode_error() {
        let err = read_png(Cursor::new(vec![0u8; 16])).unwrap_err();
        assert!(matches!(err, IoError::DecodeError(_)));
    }
}
