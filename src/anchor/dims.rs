use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use image::{DynamicImage, GenericImageView, ImageDecoder, ImageFormat, ImageReader};

use crate::error::{AnchorError, AnchorResult};

/// Shape of a decoded image as `(height, width, channels)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageDims {
    pub height: u32,
    pub width: u32,
    pub channels: u8,
}

impl ImageDims {
    pub fn new(height: u32, width: u32, channels: u8) -> Self {
        Self {
            height,
            width,
            channels,
        }
    }

    /// True for colour images that carry at least an RGB triple.
    pub fn is_rgb(&self) -> bool {
        self.channels >= 3
    }
}

impl From<&DynamicImage> for ImageDims {
    fn from(image: &DynamicImage) -> Self {
        let (width, height) = image.dimensions();
        Self {
            height,
            width,
            channels: image.color().channel_count(),
        }
    }
}

/// Reads the shape of an image file from its header, without decoding pixels.
///
/// Palette PNGs report a single channel: the stored plane holds palette
/// indices, not colour samples.
pub fn read_image_dims(path: &Path) -> AnchorResult<ImageDims> {
    let reader = ImageReader::open(path)
        .and_then(ImageReader::with_guessed_format)
        .map_err(|e| AnchorError::io(path, e))?;

    if reader.format() == Some(ImageFormat::Png) && is_palette_png(path)? {
        let (width, height) = reader.into_dimensions()?;
        return Ok(ImageDims::new(height, width, 1));
    }

    let decoder = reader.into_decoder()?;
    let (width, height) = decoder.dimensions();
    Ok(ImageDims::new(height, width, decoder.color_type().channel_count()))
}

fn is_palette_png(path: &Path) -> AnchorResult<bool> {
    let file = File::open(path).map_err(|e| AnchorError::io(path, e))?;
    let mut decoder = png::Decoder::new(BufReader::new(file));
    let info = decoder.read_header_info()?;
    Ok(info.color_type == png::ColorType::Indexed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, RgbImage};
    use tempfile::TempDir;

    #[test]
    fn reads_shape_from_decoded_image() {
        let rgb = DynamicImage::ImageRgb8(RgbImage::new(40, 30));
        assert_eq!(ImageDims::from(&rgb), ImageDims::new(30, 40, 3));

        let gray = DynamicImage::ImageLuma8(GrayImage::new(5, 7));
        let dims = ImageDims::from(&gray);
        assert_eq!(dims.channels, 1);
        assert!(!dims.is_rgb());
    }

    #[test]
    fn header_shape_matches_file() {
        let dir = TempDir::new().expect("tempdir");
        let rgb_path = dir.path().join("rgb.png");
        RgbImage::new(12, 9).save(&rgb_path).expect("save rgb");
        assert_eq!(read_image_dims(&rgb_path).expect("dims"), ImageDims::new(9, 12, 3));

        let gray_path = dir.path().join("gray.jpg");
        GrayImage::new(6, 4).save(&gray_path).expect("save gray");
        assert_eq!(read_image_dims(&gray_path).expect("dims"), ImageDims::new(4, 6, 1));
    }

    #[test]
    fn palette_png_counts_as_single_channel() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("palette.png");
        let file = File::create(&path).expect("create");
        let mut encoder = png::Encoder::new(std::io::BufWriter::new(file), 4, 2);
        encoder.set_color(png::ColorType::Indexed);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_palette(vec![255u8, 0, 0, 0, 0, 255]);
        let mut writer = encoder.write_header().expect("header");
        writer.write_image_data(&[0, 1, 0, 1, 1, 0, 1, 0]).expect("pixels");
        writer.finish().expect("finish");

        // the decoded image is expanded to RGB, the header is not
        let decoded = image::open(&path).expect("open");
        assert_eq!(decoded.color().channel_count(), 3);
        let dims = read_image_dims(&path).expect("dims");
        assert_eq!(dims, ImageDims::new(2, 4, 1));
        assert!(!dims.is_rgb());
    }
}
