//! Dataset clean-up pass: pairs images with labels, drops pairs whose image is
//! not RGB, and renames the rest to `0.<ext>`/`0.txt`, `1.<ext>`/`1.txt`, ...

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};

use super::{is_image_file, sorted_files};
use crate::anchor::read_image_dims;
use crate::error::{AnchorError, AnchorResult};

const STAGING_PREFIX: &str = ".reorganize-staging-";

#[derive(Debug, Clone, Copy, Default)]
pub struct ReorganizeOptions {
    /// Compute the report without touching the filesystem.
    pub dry_run: bool,
}

/// Old and new locations of one surviving image/label pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamedPair {
    pub image_from: PathBuf,
    pub image_to: PathBuf,
    pub label_from: PathBuf,
    pub label_to: PathBuf,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReorganizeReport {
    pub kept: Vec<RenamedPair>,
    /// Image and label paths deleted because the image was not RGB.
    pub removed: Vec<(PathBuf, PathBuf)>,
    /// Files left alone because the other directory ran out of partners.
    pub unpaired: Vec<PathBuf>,
}

/// Reorganizes `image_dir` and `label_dir` in place.
///
/// Images and `.txt` labels are each sorted by file name and paired by
/// position.
pub fn reorganize_dataset(
    image_dir: &Path,
    label_dir: &Path,
    options: ReorganizeOptions,
) -> AnchorResult<ReorganizeReport> {
    let images: Vec<PathBuf> = sorted_files(image_dir)?
        .into_iter()
        .filter(|p| is_image_file(p) && !is_staging_file(p))
        .collect();
    let labels: Vec<PathBuf> = sorted_files(label_dir)?
        .into_iter()
        .filter(|p| p.extension().and_then(OsStr::to_str) == Some("txt") && !is_staging_file(p))
        .collect();

    let mut report = ReorganizeReport::default();
    let paired = images.len().min(labels.len());
    report.unpaired.extend(images[paired..].iter().cloned());
    report.unpaired.extend(labels[paired..].iter().cloned());
    for path in &report.unpaired {
        warn!("no partner for {}, leaving it in place", path.display());
    }

    for (image_path, label_path) in images.iter().zip(&labels) {
        let dims = read_image_dims(image_path)?;
        if !dims.is_rgb() {
            warn!(
                "bad image {} ({} channel(s)), removing it and {}",
                image_path.display(),
                dims.channels,
                label_path.display()
            );
            report.removed.push((image_path.clone(), label_path.clone()));
            continue;
        }

        let n = report.kept.len();
        let ext = image_path
            .extension()
            .and_then(OsStr::to_str)
            .map(str::to_ascii_lowercase)
            .unwrap_or_else(|| "jpg".to_string());
        report.kept.push(RenamedPair {
            image_from: image_path.clone(),
            image_to: image_dir.join(format!("{n}.{ext}")),
            label_from: label_path.clone(),
            label_to: label_dir.join(format!("{n}.txt")),
        });
    }

    if options.dry_run {
        info!(
            "dry run: would keep {} pairs, remove {}",
            report.kept.len(),
            report.removed.len()
        );
        return Ok(report);
    }

    for (image_path, label_path) in &report.removed {
        remove_file(image_path)?;
        remove_file(label_path)?;
    }

    // Move every survivor aside first so a final name never lands on a file
    // that has not been renamed yet.
    let mut staged = Vec::with_capacity(report.kept.len());
    for (n, pair) in report.kept.iter().enumerate() {
        let image_stage = staging_path(&pair.image_to, n);
        let label_stage = staging_path(&pair.label_to, n);
        rename(&pair.image_from, &image_stage)?;
        rename(&pair.label_from, &label_stage)?;
        staged.push((image_stage, label_stage));
    }
    for (pair, (image_stage, label_stage)) in report.kept.iter().zip(&staged) {
        rename(image_stage, &pair.image_to)?;
        rename(label_stage, &pair.label_to)?;
    }

    info!(
        "kept {} pairs, removed {}, {} unpaired",
        report.kept.len(),
        report.removed.len(),
        report.unpaired.len()
    );
    Ok(report)
}

/// Leftovers of an interrupted run; they are never paired as data.
fn is_staging_file(path: &Path) -> bool {
    let is_staged = path
        .file_name()
        .and_then(OsStr::to_str)
        .is_some_and(|name| name.starts_with(STAGING_PREFIX));
    if is_staged {
        warn!("skipping staging leftover {}", path.display());
    }
    is_staged
}

fn staging_path(target: &Path, n: usize) -> PathBuf {
    let name = target
        .file_name()
        .and_then(OsStr::to_str)
        .unwrap_or_default();
    target.with_file_name(format!("{STAGING_PREFIX}{n}-{name}"))
}

fn remove_file(path: &Path) -> AnchorResult<()> {
    fs::remove_file(path).map_err(|e| AnchorError::io(path, e))
}

fn rename(from: &Path, to: &Path) -> AnchorResult<()> {
    fs::rename(from, to).map_err(|e| AnchorError::io(from, e))
}
