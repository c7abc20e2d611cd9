use std::path::Path;

use log::info;

use crate::anchor::{generate_gt_anchor, read_image_dims, Anchor, AnchorConfig, ImageDims};
use crate::error::AnchorResult;
use crate::label::{read_label_file, Quadrilateral};

/// Anchors for every quadrilateral, in label order.
pub fn anchors_for_quads(
    dims: ImageDims,
    quads: &[Quadrilateral],
    config: &AnchorConfig,
) -> AnchorResult<Vec<Vec<Anchor>>> {
    quads
        .iter()
        .map(|q| generate_gt_anchor(dims, q, config))
        .collect()
}

/// Loads an image and its label file and returns one anchor list per label line.
pub fn get_anchors_from_image(
    image_path: &Path,
    label_path: &Path,
    config: &AnchorConfig,
) -> AnchorResult<Vec<Vec<Anchor>>> {
    let dims = read_image_dims(image_path)?;
    let quads = read_label_file(label_path)?;
    let anchors = anchors_for_quads(dims, &quads, config)?;

    info!(
        "{}: {} regions, {} anchors",
        image_path.display(),
        quads.len(),
        anchors.iter().map(Vec::len).sum::<usize>()
    );
    Ok(anchors)
}
