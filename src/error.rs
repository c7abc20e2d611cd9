//! Error type shared by label parsing, anchor generation and dataset passes.

use std::path::PathBuf;

/// Errors raised while turning annotations into anchors.
#[derive(Debug, thiserror::Error)]
pub enum AnchorError {
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("png header error: {0}")]
    Png(#[from] png::DecodingError),

    #[error("io error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: field {field} is not a number: {value:?}")]
    Parse {
        line: usize,
        field: usize,
        value: String,
    },

    #[error("line {line}: expected 8 coordinates, found {found}")]
    MissingFields { line: usize, found: usize },

    #[error("coordinate {index} is not finite")]
    NonFiniteCoordinate { index: usize },

    #[error("anchor width must be at least 1 pixel")]
    InvalidAnchorWidth,

    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}

impl AnchorError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type AnchorResult<T> = std::result::Result<T, AnchorError>;
