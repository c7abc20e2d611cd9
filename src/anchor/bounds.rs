//! Per-strip vertical extent of a quadrilateral, measured by drawing its four
//! edges onto a scratch mask and scanning each strip's column band.

use image::{GrayImage, Luma};
use imageproc::drawing::draw_line_segment_mut;
use log::debug;

use super::{clip_segment, ImageDims};
use crate::label::Quadrilateral;

const EDGE: u8 = 255;

/// Topmost and bottommost edge rows found inside one strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripBounds {
    pub top: u32,
    pub bottom: u32,
}

/// Draws the quadrilateral outline as 1-pixel lines on a fresh mask.
///
/// Each edge is clipped to the image before drawing, so only on-mask pixels
/// are visited however far outside the corners lie.
pub fn rasterize_edges(dims: ImageDims, quad: &Quadrilateral) -> GrayImage {
    let mut mask = GrayImage::new(dims.width, dims.height);
    let [lt, lb, rb, rt] = quad.pixel_corners();

    // left, top, right, bottom
    for (start, end) in [(lt, lb), (lt, rt), (rb, rt), (rb, lb)] {
        if let Some((start, end)) = clip_segment(start, end, dims.width, dims.height) {
            draw_line_segment_mut(&mut mask, start, end, Luma([EDGE]));
        }
    }
    mask
}

/// Returns one entry per pair, in order. A strip the outline never crosses
/// yields `None`, so index `i` of the result always belongs to `pairs[i]`.
pub fn cal_bound_y(
    dims: ImageDims,
    pairs: &[(u32, u32)],
    quad: &Quadrilateral,
) -> Vec<Option<StripBounds>> {
    let mask = rasterize_edges(dims, quad);

    pairs
        .iter()
        .map(|&(x_start, x_end)| {
            let bounds = strip_bounds(&mask, x_start, x_end);
            if bounds.is_none() {
                debug!("no edge pixel in columns {x_start}..={x_end}");
            }
            bounds
        })
        .collect()
}

fn strip_bounds(mask: &GrayImage, x_start: u32, x_end: u32) -> Option<StripBounds> {
    if mask.width() == 0 || x_start >= mask.width() {
        return None;
    }
    let x_end = x_end.min(mask.width() - 1);
    let top = first_edge_row(mask, x_start, x_end, 0..mask.height())?;
    let bottom = first_edge_row(mask, x_start, x_end, (0..mask.height()).rev())?;
    Some(StripBounds { top, bottom })
}

fn first_edge_row(
    mask: &GrayImage,
    x_start: u32,
    x_end: u32,
    mut rows: impl Iterator<Item = u32>,
) -> Option<u32> {
    rows.find(|&y| (x_start..=x_end).any(|x| mask.get_pixel(x, y)[0] == EDGE))
}
