#![allow(dead_code)]

use image::{GrayImage, Luma, Rgb, RgbImage};
use std::fs;
use std::path::Path;

/// Writes a white RGB image with a dark text-like bar, so the file decodes
/// to a 3-channel image of the requested size.
pub fn write_rgb_image(path: &Path, width: u32, height: u32) {
    let mut img = RgbImage::from_pixel(width, height, Rgb([255, 255, 255]));
    let bar_top = height / 3;
    let bar_bottom = (2 * height / 3).max(bar_top + 1);
    for y in bar_top..bar_bottom {
        for x in width / 8..(7 * width / 8) {
            img.put_pixel(x, y, Rgb([20, 20, 20]));
        }
    }
    img.save(path).expect("failed to write rgb image");
}

/// Writes a single-channel image, the kind the reorganizer must discard.
pub fn write_gray_image(path: &Path, width: u32, height: u32) {
    GrayImage::from_pixel(width, height, Luma([128]))
        .save(path)
        .expect("failed to write gray image");
}

/// Writes an 8-bit indexed PNG. It decodes to RGB but stores one index plane.
pub fn write_palette_png(path: &Path, width: u32, height: u32) {
    let file = fs::File::create(path).expect("failed to create palette png");
    let mut encoder = png::Encoder::new(std::io::BufWriter::new(file), width, height);
    encoder.set_color(png::ColorType::Indexed);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_palette(vec![255u8, 255, 255, 20, 20, 20]);
    let mut writer = encoder.write_header().expect("failed to write png header");
    let indices: Vec<u8> = (0..width * height).map(|i| (i % 2) as u8).collect();
    writer.write_image_data(&indices).expect("failed to write png data");
    writer.finish().expect("failed to finish png");
}

pub fn write_label(path: &Path, contents: &str) {
    fs::write(path, contents).expect("failed to write label");
}

pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("read_dir")
        .filter_map(Result::ok)
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
