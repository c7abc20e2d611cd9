//! Splits a quadrilateral text region into fixed-width CTPN anchors.

use log::debug;
use serde::Serialize;

use super::{cal_bound_y, ImageDims};
use crate::error::{AnchorError, AnchorResult};
use crate::label::Quadrilateral;

const ANCHOR_WIDTH: u32 = 16;

/// Configuration for anchor generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnchorConfig {
    /// Width of every strip in pixels.
    pub anchor_width: u32,
}

impl Default for AnchorConfig {
    fn default() -> Self {
        Self {
            anchor_width: ANCHOR_WIDTH,
        }
    }
}

/// Ground-truth anchor for one vertical strip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Anchor {
    /// Strip index; the strip covers columns `position * width ..= (position + 1) * width - 1`.
    pub position: u32,
    pub center_y: f64,
    pub height: u32,
}

/// Column ranges `(start, end)` (inclusive) of the strips spanned by `quad`.
///
/// The right-hand strip is dropped when `right * width + width - 1` would pass
/// the image width.
pub fn strip_pairs(
    dims: ImageDims,
    quad: &Quadrilateral,
    anchor_width: u32,
) -> AnchorResult<Vec<(u32, u32)>> {
    if anchor_width == 0 {
        return Err(AnchorError::InvalidAnchorWidth);
    }
    let width = f64::from(anchor_width);
    let image_width = f64::from(dims.width);

    let max_strips = (image_width / width).ceil();

    // Coordinates far outside the image collapse onto the nearest valid strip index.
    let left = (quad.min_left_x().max(0.0) / width).floor().clamp(0.0, max_strips) as i64;
    let mut right = (quad.max_right_x().min(image_width) / width)
        .ceil()
        .clamp(0.0, max_strips) as i64;
    if right * i64::from(anchor_width) + i64::from(anchor_width) - 1 > i64::from(dims.width) {
        right -= 1;
    }

    let pairs = (left..right)
        .map(|i| {
            let i = i as u32;
            (i * anchor_width, (i + 1) * anchor_width - 1)
        })
        .collect();
    Ok(pairs)
}

/// Generates the anchors of one quadrilateral.
///
/// Strips that the rasterized outline never crosses produce no anchor; the
/// remaining anchors keep the index of the strip they were measured in.
pub fn generate_gt_anchor(
    dims: ImageDims,
    quad: &Quadrilateral,
    config: &AnchorConfig,
) -> AnchorResult<Vec<Anchor>> {
    let pairs = strip_pairs(dims, quad, config.anchor_width)?;
    if pairs.is_empty() {
        debug!("quadrilateral {:?} spans no strip", quad.coords());
        return Ok(Vec::new());
    }

    let bounds = cal_bound_y(dims, &pairs, quad);
    let anchors = pairs
        .iter()
        .zip(bounds)
        .filter_map(|(&(x_start, _), found)| {
            let b = found?;
            Some(Anchor {
                position: x_start / config.anchor_width,
                center_y: (f64::from(b.top) + f64::from(b.bottom)) / 2.0,
                height: b.bottom - b.top + 1,
            })
        })
        .collect::<Vec<_>>();

    debug!("{} strips, {} anchors", pairs.len(), anchors.len());
    Ok(anchors)
}
