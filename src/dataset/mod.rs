pub mod extract;
pub use extract::{anchors_for_quads, get_anchors_from_image};
pub mod reorganize;
pub use reorganize::{reorganize_dataset, ReorganizeOptions, ReorganizeReport};

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{AnchorError, AnchorResult};

pub fn is_image_file(path: &Path) -> bool {
    let Some(ext) = path.extension().and_then(OsStr::to_str) else {
        return false;
    };
    matches!(
        ext.to_ascii_lowercase().as_str(),
        "png" | "jpg" | "jpeg" | "bmp" | "gif" | "tif" | "tiff" | "webp"
    )
}

/// Regular files directly inside `dir`, sorted by file name.
pub fn sorted_files(dir: &Path) -> AnchorResult<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(AnchorError::NotADirectory(dir.to_path_buf()));
    }
    let mut files: Vec<PathBuf> = fs::read_dir(dir)
        .map_err(|e| AnchorError::io(dir, e))?
        .filter_map(Result::ok)
        .map(|e| e.path())
        .filter(|p| p.is_file())
        .collect();
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}
