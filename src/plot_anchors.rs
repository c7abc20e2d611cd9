use image::{DynamicImage, Rgb, RgbImage};
use imageproc::drawing::{draw_hollow_rect_mut, draw_line_segment_mut};
use imageproc::rect::Rect;

use crate::anchor::{clip_segment, Anchor, AnchorConfig};
use crate::label::Quadrilateral;

const QUAD_COLOR: Rgb<u8> = Rgb([255, 0, 0]);
const ANCHOR_COLORS: [Rgb<u8>; 4] = [
    Rgb([0, 200, 0]),
    Rgb([0, 120, 255]),
    Rgb([255, 160, 0]),
    Rgb([200, 0, 200]),
];

/// Pixel rectangle covered by an anchor, or `None` for an empty one.
pub fn anchor_rect(anchor: &Anchor, anchor_width: u32) -> Option<Rect> {
    if anchor.height == 0 || anchor_width == 0 {
        return None;
    }
    let left = (anchor.position * anchor_width) as i32;
    let top = (anchor.center_y - f64::from(anchor.height - 1) / 2.0).round() as i32;
    Some(Rect::at(left, top).of_size(anchor_width, anchor.height))
}

/// Draws every quadrilateral outline and its anchors onto a copy of `image`.
///
/// `anchors[i]` must belong to `quads[i]`; extra entries on either side are ignored.
pub fn render_anchor_overlay(
    image: &DynamicImage,
    quads: &[Quadrilateral],
    anchors: &[Vec<Anchor>],
    config: &AnchorConfig,
) -> RgbImage {
    let mut canvas = image.to_rgb8();

    for (i, (quad, strips)) in quads.iter().zip(anchors).enumerate() {
        let color = ANCHOR_COLORS[i % ANCHOR_COLORS.len()];
        for rect in strips.iter().filter_map(|a| anchor_rect(a, config.anchor_width)) {
            draw_hollow_rect_mut(&mut canvas, rect, color);
        }

        let corners = [
            quad.left_top(),
            quad.left_bottom(),
            quad.right_bottom(),
            quad.right_top(),
        ];
        let (width, height) = canvas.dimensions();
        for k in 0..corners.len() {
            let next = corners[(k + 1) % corners.len()];
            if let Some((start, end)) = clip_segment(corners[k], next, width, height) {
                draw_line_segment_mut(&mut canvas, start, end, QUAD_COLOR);
            }
        }
    }

    canvas
}
