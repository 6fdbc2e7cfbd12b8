//! glyphscan-io - Image I/O for glyphscan
//!
//! Decodes PNG, JPEG and binary PNM files into [`PixelGrid`]s and writes
//! grids back out as PNG or PPM. The input format is sniffed from the
//! file's magic bytes, never from its extension.
//!
//! # Example
//!
//! ```no_run
//! use glyphscan_io::{read_image, write_image};
//!
//! let page = read_image("page.png").unwrap();
//! write_image(&page, "copy.png").unwrap();
//! ```

mod error;
pub mod format;
#[cfg(feature = "jpeg")]
pub mod jpeg;
#[cfg(feature = "png-format")]
pub mod png;
#[cfg(feature = "pnm")]
pub mod pnm;

pub use error::{IoError, IoResult};
pub use format::{ImageFormat, detect_format, detect_format_from_bytes};

use glyphscan_core::PixelGrid;
use std::fs::File;
use std::io::{BufReader, BufWriter, Cursor, Write};
use std::path::Path;

/// Read an image from a file path.
///
/// # Errors
///
/// Returns [`IoError::Io`] when the file cannot be opened,
/// [`IoError::UnsupportedFormat`] for unknown or disabled formats, and
/// [`IoError::DecodeError`] when the decoder rejects the data.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<PixelGrid> {
    let format = detect_format(&path)?;
    let file = File::open(&path)?;
    read_image_format(BufReader::new(file), format)
}

/// Read an image from an in-memory buffer.
pub fn read_image_mem(data: &[u8]) -> IoResult<PixelGrid> {
    let format = detect_format_from_bytes(data)?;
    read_image_format(Cursor::new(data), format)
}

fn read_image_format<R>(reader: R, format: ImageFormat) -> IoResult<PixelGrid>
where
    R: std::io::BufRead + std::io::Seek,
{
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::read_png(reader),
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => jpeg::read_jpeg(reader),
        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => pnm::read_pnm(reader),
        #[allow(unreachable_patterns)]
        other => Err(IoError::UnsupportedFormat(format!(
            "{:?} support not enabled",
            other
        ))),
    }
}

/// Write an image to a file path.
///
/// The format follows the path's extension; unknown or missing
/// extensions fall back to PNG.
pub fn write_image<P: AsRef<Path>>(grid: &PixelGrid, path: P) -> IoResult<()> {
    let format = ImageFormat::from_path(&path).unwrap_or(ImageFormat::Png);
    write_image_format(grid, path, format)
}

/// Write an image to a file path in an explicit format.
///
/// # Errors
///
/// Returns [`IoError::UnsupportedFormat`] for JPEG, which is read-only.
pub fn write_image_format<P: AsRef<Path>>(
    grid: &PixelGrid,
    path: P,
    format: ImageFormat,
) -> IoResult<()> {
    if format == ImageFormat::Jpeg {
        return Err(IoError::UnsupportedFormat(
            "writing JPEG is not supported".to_string(),
        ));
    }
    let mut writer = BufWriter::new(File::create(path)?);
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::write_png(grid, &mut writer)?,
        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => pnm::write_pnm(grid, &mut writer)?,
        #[allow(unreachable_patterns)]
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "{:?} support not enabled",
                other
            )));
        }
    }
    writer.flush()?;
    Ok(())
}
