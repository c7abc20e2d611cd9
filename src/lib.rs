//! Ground-truth anchors for CTPN-style text detectors.
//!
//! Quadrilateral text annotations are cut into fixed-width vertical strips;
//! each strip becomes an `(position, center_y, height)` anchor.

pub mod anchor;
pub mod dataset;
pub mod error;
pub mod label;
pub mod plot_anchors;

pub use crate::anchor::{generate_gt_anchor, Anchor, AnchorConfig, ImageDims};
pub use crate::error::{AnchorError, AnchorResult};
pub use crate::label::Quadrilateral;
