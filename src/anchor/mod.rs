pub mod bounds;
pub mod clip;
pub use clip::clip_segment;
pub use bounds::{cal_bound_y, StripBounds};
pub mod dims;
pub use dims::{read_image_dims, ImageDims};
pub mod generate;
pub use generate::{generate_gt_anchor, strip_pairs, Anchor, AnchorConfig};
