use clap::{Parser, Subcommand};
use log::{error, info, warn};
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use ctpn_anchors::dataset::{
    anchors_for_quads, is_image_file, reorganize_dataset, sorted_files, ReorganizeOptions,
};
use ctpn_anchors::label::read_label_file;
use ctpn_anchors::plot_anchors::render_anchor_overlay;
use ctpn_anchors::{AnchorConfig, ImageDims};

#[derive(Parser, Debug)]
#[command(
    name = "anchor_cli",
    about = "Turn quadrilateral text labels into CTPN ground-truth anchors",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write one anchor JSON file per image
    Anchors {
        /// Directory containing input images
        #[arg(short = 'd', long = "dir")]
        dir: PathBuf,

        /// Directory containing `<image stem>.txt` labels (defaults to --dir)
        #[arg(short = 'l', long = "labels")]
        labels: Option<PathBuf>,

        /// Output directory for `<image stem>.json`
        #[arg(short = 'o', long = "out", default_value = "anchors")]
        out: PathBuf,

        /// Strip width in pixels
        #[arg(short = 'w', long = "anchor-width", default_value_t = AnchorConfig::default().anchor_width,
              value_parser = clap::value_parser!(u32).range(1..))]
        anchor_width: u32,

        /// Also write `<image stem>_plot.png` with quads and anchors drawn in
        #[arg(long = "plot", short = 'p')]
        plot: bool,
    },
    /// Drop non-RGB image/label pairs and rename the rest to 0..n
    Reorganize {
        #[arg(long = "images")]
        images: PathBuf,

        #[arg(long = "labels")]
        labels: PathBuf,

        /// Report what would change without touching any file
        #[arg(long = "dry-run")]
        dry_run: bool,
    },
}

fn write_text_file(path: &Path, contents: &str) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, contents)?;
    Ok(())
}

fn process_image(
    image_path: &Path,
    label_path: &Path,
    out: &Path,
    config: &AnchorConfig,
    plot: bool,
) -> Result<(), Box<dyn Error>> {
    let img = image::open(image_path)?;
    let dims = ImageDims::from(&img);
    let quads = read_label_file(label_path)?;
    let anchors = anchors_for_quads(dims, &quads, config)?;

    let stem = image_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let out_json = out.join(format!("{stem}.json"));
    write_text_file(&out_json, &serde_json::to_string_pretty(&anchors)?)?;
    info!(
        "{} -> {} ({} regions)",
        image_path.display(),
        out_json.display(),
        quads.len()
    );

    if plot {
        let out_plot = out.join(format!("{stem}_plot.png"));
        render_anchor_overlay(&img, &quads, &anchors, config).save(&out_plot)?;
    }
    Ok(())
}

fn run_anchors(
    dir: &Path,
    labels: &Path,
    out: &Path,
    config: &AnchorConfig,
    plot: bool,
) -> Result<(), Box<dyn Error>> {
    let images: Vec<PathBuf> = sorted_files(dir)?
        .into_iter()
        .filter(|p| is_image_file(p))
        .collect();

    if images.is_empty() {
        warn!("No images found in {}", dir.display());
        return Ok(());
    }

    let mut failed = 0usize;
    for image_path in &images {
        let Some(stem) = image_path.file_stem() else {
            continue;
        };
        let label_path = labels.join(format!("{}.txt", stem.to_string_lossy()));
        if !label_path.is_file() {
            warn!("No label {} for {}", label_path.display(), image_path.display());
            continue;
        }
        if let Err(e) = process_image(image_path, &label_path, out, config, plot) {
            error!("Failed on {}: {e}", image_path.display());
            failed += 1;
        }
    }

    info!("{} images processed, {failed} failed", images.len());
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Anchors {
            dir,
            labels,
            out,
            anchor_width,
            plot,
        } => {
            let labels = labels.unwrap_or_else(|| dir.clone());
            let config = AnchorConfig { anchor_width };
            run_anchors(&dir, &labels, &out, &config, plot)?;
        }
        Command::Reorganize {
            images,
            labels,
            dry_run,
        } => {
            let report = reorganize_dataset(&images, &labels, ReorganizeOptions { dry_run })?;
            for (image, _) in &report.removed {
                println!("Bad image: {}", image.display());
            }
            for pair in &report.kept {
                println!("{} -> {}", pair.image_from.display(), pair.image_to.display());
            }
        }
    }

    Ok(())
}
