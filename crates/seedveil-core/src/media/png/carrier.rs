//! In-memory PNG carrier: an RGB pixel grid plus its textual metadata.

use std::io::Cursor;

use image::RgbImage;

use super::lsb_codec;
use crate::bits;
use crate::error::SeedveilError;
use crate::permutation::Seed;
use crate::result::Result;

/// Text chunk keyword the embedder fills with the hidden message. Image
/// generation tools store their prompt under the same keyword.
pub const PARAMETERS_KEYWORD: &str = "parameters";

/// One tEXt entry of a PNG file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextChunk {
    pub keyword: String,
    pub text: String,
}

/// A decoded PNG.
///
/// Pixels are held as RGB. Alpha, grayscale and palette sources are
/// normalized on decode, the way an interactive editor converts them
/// before handing the image on. Textual chunks ride along so a re-encode
/// keeps them verbatim.
#[derive(Debug, Clone)]
pub struct PngCarrier {
    pixels: RgbImage,
    texts: Vec<TextChunk>,
}

impl PngCarrier {
    pub fn new(pixels: RgbImage) -> Self {
        Self {
            pixels,
            texts: Vec::new(),
        }
    }

    pub fn pixels(&self) -> &RgbImage {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut RgbImage {
        &mut self.pixels
    }

    pub fn texts(&self) -> &[TextChunk] {
        &self.texts
    }

    /// Text stored under `keyword`, when present.
    pub fn text(&self, keyword: &str) -> Option<&str> {
        self.texts
            .iter()
            .find(|chunk| chunk.keyword == keyword)
            .map(|chunk| chunk.text.as_str())
    }

    /// Insert or replace a text chunk.
    pub fn set_text(&mut self, keyword: &str, text: &str) {
        if let Some(chunk) = self.texts.iter_mut().find(|chunk| chunk.keyword == keyword) {
            chunk.text = text.to_string();
        } else {
            self.texts.push(TextChunk {
                keyword: keyword.to_string(),
                text: text.to_string(),
            });
        }
    }

    /// Number of message bits this carrier can hold.
    pub fn capacity_bits(&self) -> usize {
        lsb_codec::capacity_bits(&self.pixels)
    }

    /// Hide `message` in the pixel LSBs and mirror it into the
    /// `"parameters"` text chunk. Other chunks stay as they are.
    pub fn embed_message(&mut self, message: &str, seed: Seed) {
        lsb_codec::embed(&mut self.pixels, &bits::to_bits(message), seed);
        self.set_text(PARAMETERS_KEYWORD, message);
    }

    /// Recover the message hidden under `seed`.
    pub fn extract_message(&self, seed: Seed) -> String {
        lsb_codec::extract(&self.pixels, seed)
    }

    /// Decode a PNG byte stream.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let mut decoder = png::Decoder::new(Cursor::new(bytes));
        decoder.set_transformations(png::Transformations::normalize_to_color8());
        let mut reader = decoder
            .read_info()
            .map_err(|_| SeedveilError::InvalidImageMedia)?;

        let mut buf = vec![0; reader.output_buffer_size()];
        let frame = reader
            .next_frame(&mut buf)
            .map_err(|_| SeedveilError::InvalidImageMedia)?;
        buf.truncate(frame.buffer_size());

        let rgb = to_rgb(&buf, frame.color_type)?;
        let pixels = RgbImage::from_raw(frame.width, frame.height, rgb)
            .ok_or(SeedveilError::InvalidImageMedia)?;
        let texts = reader
            .info()
            .uncompressed_latin1_text
            .iter()
            .map(|chunk| TextChunk {
                keyword: chunk.keyword.clone(),
                text: chunk.text.clone(),
            })
            .collect();

        Ok(Self { pixels, texts })
    }

    /// Encode back to PNG bytes, RGB-8 with every text chunk attached.
    pub fn encode(&self) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        let mut encoder = png::Encoder::new(&mut out, self.pixels.width(), self.pixels.height());
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        for chunk in &self.texts {
            encoder
                .add_text_chunk(chunk.keyword.clone(), chunk.text.clone())
                .map_err(|_| SeedveilError::ImageEncodingError)?;
        }

        let mut writer = encoder
            .write_header()
            .map_err(|_| SeedveilError::ImageEncodingError)?;
        writer
            .write_image_data(self.pixels.as_raw())
            .map_err(|_| SeedveilError::ImageEncodingError)?;
        writer
            .finish()
            .map_err(|_| SeedveilError::ImageEncodingError)?;

        Ok(out)
    }
}

/// Normalize an 8-bit sample buffer to packed RGB.
fn to_rgb(data: &[u8], color_type: png::ColorType) -> Result<Vec<u8>> {
    let rgb = match color_type {
        png::ColorType::Rgb => data.to_vec(),
        png::ColorType::Rgba => data
            .chunks_exact(4)
            .flat_map(|px| [px[0], px[1], px[2]])
            .collect(),
        png::ColorType::Grayscale => data.iter().flat_map(|&luma| [luma, luma, luma]).collect(),
        png::ColorType::GrayscaleAlpha => data
            .chunks_exact(2)
            .flat_map(|px| [px[0], px[0], px[0]])
            .collect(),
        // expanded away by the decode transformations
        png::ColorType::Indexed => return Err(SeedveilError::InvalidImageMedia),
    };
    Ok(rgb)
}
