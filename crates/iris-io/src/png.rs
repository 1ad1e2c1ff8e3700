//! PNG format support.
//!
//! Reads any PNG the `png` crate decodes and normalizes it to 8-bit RGB or
//! RGBA, the two layouts the filters accept:
//!
//! - palette images are expanded (RGBA if they carry transparency)
//! - 16-bit samples are stripped to their high byte
//! - grayscale is replicated to RGB, grayscale+alpha to RGBA
//!
//! Writing always produces 8-bit RGB or RGBA.
//!
//! # Example
//!
//! ```rust,no_run
//! use iris_io::png;
//!
//! let image = png::read("input.png")?;
//! png::write("output.png", &image)?;
//! # Ok::<(), iris_io::IoError>(())
//! ```

use crate::{IoError, IoResult};
use iris_core::{ImageBuffer, Raster};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Seek, Write};
use std::path::Path;
use tracing::{debug, trace};

/// Reads a PNG file from the given path.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<ImageBuffer> {
    let path = path.as_ref();
    trace!(path = %path.display(), "png::read");
    let file = File::open(path)?;
    decode(BufReader::new(file))
}

/// Decodes a PNG stream.
pub fn decode<R: BufRead + Seek>(reader: R) -> IoResult<ImageBuffer> {
    let mut decoder = png::Decoder::new(reader);
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
    let mut reader = decoder.read_info()?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::Decode("cannot determine output buffer size".into()))?;
    let mut buf = vec![0u8; buf_size];
    let info = reader.next_frame(&mut buf)?;
    buf.truncate(info.buffer_size());

    if info.bit_depth != png::BitDepth::Eight {
        return Err(IoError::Decode(format!(
            "unexpected bit depth after normalization: {:?}",
            info.bit_depth
        )));
    }

    let (height, width) = (info.height as usize, info.width as usize);
    let (channels, data) = match info.color_type {
        png::ColorType::Rgb => (3, buf),
        png::ColorType::Rgba => (4, buf),
        png::ColorType::Grayscale => {
            debug!("expanding grayscale PNG to RGB");
            (3, buf.iter().flat_map(|&g| [g, g, g]).collect())
        }
        png::ColorType::GrayscaleAlpha => {
            debug!("expanding grayscale+alpha PNG to RGBA");
            let rgba = buf
                .chunks_exact(2)
                .flat_map(|ga| [ga[0], ga[0], ga[0], ga[1]])
                .collect();
            (4, rgba)
        }
        png::ColorType::Indexed => {
            return Err(IoError::Decode("palette was not expanded".into()));
        }
    };

    Ok(ImageBuffer::from_raw(height, width, channels, data)?)
}

/// Writes an image to a PNG file.
pub fn write<P: AsRef<Path>, R: Raster + ?Sized>(path: P, image: &R) -> IoResult<()> {
    let path = path.as_ref();
    trace!(path = %path.display(), "png::write");
    let file = File::create(path)?;
    encode(BufWriter::new(file), image)
}

/// Encodes an image as an 8-bit PNG stream.
///
/// # Errors
///
/// [`IoError::Encode`] for dimensions PNG cannot represent, which includes
/// zero width or height.
pub fn encode<W: Write, R: Raster + ?Sized>(writer: W, image: &R) -> IoResult<()> {
    let layout = image.layout();
    let color_type = if layout.has_alpha() {
        png::ColorType::Rgba
    } else {
        png::ColorType::Rgb
    };
    let dim = |n: usize| {
        u32::try_from(n).ok().filter(|&n| n > 0).ok_or_else(|| {
            IoError::Encode(format!(
                "cannot encode {}x{} image",
                layout.width(),
                layout.height()
            ))
        })
    };

    let mut encoder = png::Encoder::new(writer, dim(layout.width())?, dim(layout.height())?);
    encoder.set_color(color_type);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(png::Compression::default());
    encoder.set_source_srgb(png::SrgbRenderingIntent::Perceptual);

    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(image.as_bytes())?;
    png_writer.finish()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn encode_raw(
        width: u32,
        height: u32,
        color: png::ColorType,
        depth: png::BitDepth,
        data: &[u8],
    ) -> Vec<u8> {
        let mut out = Vec::new();
        let mut encoder = png::Encoder::new(&mut out, width, height);
        encoder.set_color(color);
        encoder.set_depth(depth);
        let mut writer = encoder.write_header().unwrap();
        writer.write_image_data(data).unwrap();
        writer.finish().unwrap();
        out
    }

    #[test]
    fn test_roundtrip_rgb_in_memory() {
        let image = ImageBuffer::from_fn(5, 7, 3, |r, c, ch| (r * 50 + c * 9 + ch) as u8).unwrap();
        let mut bytes = Vec::new();
        encode(&mut bytes, &image).unwrap();

        let loaded = decode(Cursor::new(bytes)).unwrap();
        assert_eq!(loaded, image);
    }

    #[test]
    fn test_roundtrip_rgba_view() {
        let image = ImageBuffer::from_fn(3, 2, 4, |r, c, ch| (r * 80 + c * 40 + ch * 3) as u8).unwrap();
        let mut bytes = Vec::new();
        encode(&mut bytes, &image.view()).unwrap();

        let loaded = decode(Cursor::new(bytes)).unwrap();
        assert_eq!(loaded.shape(), [3, 2, 4]);
        assert_eq!(loaded, image);
    }

    #[test]
    fn test_grayscale_expands_to_rgb() {
        let bytes = encode_raw(2, 1, png::ColorType::Grayscale, png::BitDepth::Eight, &[10, 200]);
        let loaded = decode(Cursor::new(bytes)).unwrap();
        assert_eq!(loaded.shape(), [1, 2, 3]);
        assert_eq!(loaded.as_bytes(), &[10, 10, 10, 200, 200, 200]);
    }

    #[test]
    fn test_grayscale_alpha_expands_to_rgba() {
        let bytes = encode_raw(1, 1, png::ColorType::GrayscaleAlpha, png::BitDepth::Eight, &[77, 128]);
        let loaded = decode(Cursor::new(bytes)).unwrap();
        assert_eq!(loaded.as_bytes(), &[77, 77, 77, 128]);
    }

    #[test]
    fn test_sixteen_bit_is_stripped() {
        // Big-endian samples; the high byte survives.
        let data = [0x12, 0x34, 0xab, 0xcd, 0xff, 0x00];
        let bytes = encode_raw(1, 1, png::ColorType::Rgb, png::BitDepth::Sixteen, &data);
        let loaded = decode(Cursor::new(bytes)).unwrap();
        assert_eq!(loaded.as_bytes(), &[0x12, 0xab, 0xff]);
    }

    #[test]
    fn test_empty_image_rejected() {
        let image = ImageBuffer::new(0, 4, 3).unwrap();
        let err = encode(Vec::new(), &image).unwrap_err();
        assert!(matches!(err, IoError::Encode(_)));
    }

    #[test]
    fn test_garbage_rejected() {
        let err = decode(Cursor::new(b"definitely not a png".to_vec())).unwrap_err();
        assert!(matches!(err, IoError::Decode(_) | IoError::Io(_)));
    }
}
