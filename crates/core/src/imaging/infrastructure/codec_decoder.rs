use thiserror::Error;

use crate::imaging::domain::image_decoder::ImageDecoder;
use crate::shared::frame::Frame;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("empty image buffer")]
    EmptyBuffer,
    #[error("undecodable image data: {0}")]
    Malformed(#[from] image::ImageError),
    #[error("decoded image has no pixels")]
    EmptyImage,
}

/// Decodes encoded image bytes into an RGB [`Frame`] using the `image`
/// crate's codecs. Container format is sniffed from the bytes.
pub struct CodecImageDecoder;

impl CodecImageDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CodecImageDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageDecoder for CodecImageDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<Frame, Box<dyn std::error::Error>> {
        if bytes.is_empty() {
            return Err(Box::new(DecodeError::EmptyBuffer));
        }

        let decoded = image::load_from_memory(bytes).map_err(DecodeError::Malformed)?;
        let rgb = decoded.to_rgb8();
        let (width, height) = rgb.dimensions();
        if width == 0 || height == 0 {
            return Err(Box::new(DecodeError::EmptyImage));
        }

        Ok(Frame::new(rgb.into_raw(), width, height, 3))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32, pixel: [u8; 3]) -> Vec<u8> {
        let mut img = image::RgbImage::new(width, height);
        for p in img.pixels_mut() {
            *p = image::Rgb(pixel);
        }
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn test_decodes_png_dimensions_and_channels() {
        let decoder = CodecImageDecoder::new();
        let frame = decoder.decode(&png_bytes(40, 30, [50, 100, 200])).unwrap();
        assert_eq!(frame.width(), 40);
        assert_eq!(frame.height(), 30);
        assert_eq!(frame.channels(), 3);
    }

    #[test]
    fn test_decoded_pixels_survive_round_trip() {
        let decoder = CodecImageDecoder::new();
        let frame = decoder.decode(&png_bytes(4, 4, [50, 100, 200])).unwrap();
        assert_eq!(&frame.data()[..3], &[50, 100, 200]);
    }

    #[test]
    fn test_empty_buffer_is_rejected() {
        let decoder = CodecImageDecoder::new();
        let result = decoder.decode(&[]);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("empty"));
    }

    #[test]
    fn test_garbage_bytes_are_rejected() {
        let decoder = CodecImageDecoder::new();
        assert!(decoder.decode(b"definitely not an image").is_err());
    }

    #[test]
    fn test_truncated_png_is_rejected() {
        let decoder = CodecImageDecoder::new();
        let bytes = png_bytes(16, 16, [0, 0, 0]);
        assert!(decoder.decode(&bytes[..bytes.len() / 2]).is_err());
    }
}
