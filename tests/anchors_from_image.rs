mod common;

use common::{write_label, write_rgb_image};
use ctpn_anchors::dataset::get_anchors_from_image;
use ctpn_anchors::{AnchorConfig, AnchorError};
use tempfile::TempDir;

#[test]
fn one_anchor_list_per_label_line() {
    let dir = TempDir::new().expect("tempdir");
    let image_path = dir.path().join("0.jpg");
    let label_path = dir.path().join("0.txt");
    write_rgb_image(&image_path, 128, 64);
    write_label(
        &label_path,
        "0,10,0,50,31,50,31,10,hello\n20.0,5.0,20.0,30.0,90.0,30.0,90.0,5.0,world,again\n",
    );

    let anchors = get_anchors_from_image(&image_path, &label_path, &AnchorConfig::default())
        .expect("anchors");
    assert_eq!(anchors.len(), 2);

    assert_eq!(anchors[0].len(), 2);
    assert!(anchors[0].iter().all(|a| a.height == 41 && a.center_y == 30.0));

    // floor(20 / 16) = 1, ceil(90 / 16) = 6
    let positions: Vec<u32> = anchors[1].iter().map(|a| a.position).collect();
    assert_eq!(positions, vec![1, 2, 3, 4, 5]);
    assert!(anchors[1].iter().all(|a| a.height == 26));
}

#[test]
fn malformed_coordinate_fails() {
    let dir = TempDir::new().expect("tempdir");
    let image_path = dir.path().join("0.png");
    let label_path = dir.path().join("0.txt");
    write_rgb_image(&image_path, 64, 64);
    write_label(&label_path, "0,10,0,50,31,50,abc,10,hello\n");

    let err = get_anchors_from_image(&image_path, &label_path, &AnchorConfig::default())
        .expect_err("non-numeric field");
    assert!(matches!(err, AnchorError::Parse { line: 1, field: 6, .. }), "{err}");
}

#[test]
fn missing_label_file_is_io_error() {
    let dir = TempDir::new().expect("tempdir");
    let image_path = dir.path().join("0.png");
    write_rgb_image(&image_path, 64, 64);

    let err = get_anchors_from_image(&image_path, &dir.path().join("0.txt"), &AnchorConfig::default())
        .expect_err("no label");
    assert!(matches!(err, AnchorError::Io { .. }), "{err}");
}
