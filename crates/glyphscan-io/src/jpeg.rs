//! JPEG image format support
//!
//! Reads JPEG images using the `jpeg-decoder` crate. Grayscale and RGB
//! streams are supported; CMYK is rejected. Writing is not supported.

use crate::{IoError, IoResult};
use glyphscan_core::{PixelGrid, Rgb};
use jpeg_decoder::{Decoder, PixelFormat};
use std::io::Read;

/// Read a JPEG image from a reader.
///
/// # Arguments
/// * `reader` - A reader positioned at the JPEG SOI marker (`FF D8`)
///
/// # Returns
/// An RGB grid. Grayscale samples are replicated into all channels.
pub fn read_jpeg<R: Read>(reader: R) -> IoResult<PixelGrid> {
    let mut decoder = Decoder::new(reader);
    let data = decoder
        .decode()
        .map_err(|e| IoError::DecodeError(format!("JPEG decode error: {}", e)))?;
    let info = decoder
        .info()
        .ok_or_else(|| IoError::DecodeError("JPEG header missing".to_string()))?;

    let width = u32::from(info.width);
    let height = u32::from(info.height);

    let pixels: Vec<Rgb> = match info.pixel_format {
        PixelFormat::L8 => data.iter().map(|&v| Rgb::new(v, v, v)).collect(),
        // Big-endian 16-bit samples: keep the high byte
        PixelFormat::L16 => data
            .chunks_exact(2)
            .map(|c| Rgb::new(c[0], c[0], c[0]))
            .collect(),
        PixelFormat::RGB24 => data
            .chunks_exact(3)
            .map(|c| Rgb::new(c[0], c[1], c[2]))
            .collect(),
        PixelFormat::CMYK32 => {
            return Err(IoError::UnsupportedFormat(
                "CMYK JPEG is not supported".to_string(),
            ));
        }
    };

    Ok(PixelGrid::from_raw(width, height, pixels)?)
}
