//! MTWI-style text-region labels.
//!
//! Each line of a label file reads `x1,y1,x2,y2,x3,y3,x4,y4,text`, corners in
//! left-top, left-bottom, right-bottom, right-top order. Only the coordinates
//! are consumed; the transcription is ignored.

use std::fs;
use std::path::Path;

use crate::error::{AnchorError, AnchorResult};

const COORD_FIELDS: usize = 8;

/// Four-corner text region annotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quadrilateral {
    coords: [f64; COORD_FIELDS],
}

impl Quadrilateral {
    /// Builds a quadrilateral from `[x1, y1, x2, y2, x3, y3, x4, y4]`.
    pub fn new(coords: [f64; COORD_FIELDS]) -> AnchorResult<Self> {
        if let Some(index) = coords.iter().position(|c| !c.is_finite()) {
            return Err(AnchorError::NonFiniteCoordinate { index });
        }
        Ok(Self { coords })
    }

    pub fn coords(&self) -> &[f64; COORD_FIELDS] {
        &self.coords
    }

    pub fn left_top(&self) -> (f64, f64) {
        (self.coords[0], self.coords[1])
    }

    pub fn left_bottom(&self) -> (f64, f64) {
        (self.coords[2], self.coords[3])
    }

    pub fn right_bottom(&self) -> (f64, f64) {
        (self.coords[4], self.coords[5])
    }

    pub fn right_top(&self) -> (f64, f64) {
        (self.coords[6], self.coords[7])
    }

    /// Leftmost x of the left edge.
    pub fn min_left_x(&self) -> f64 {
        self.coords[0].min(self.coords[2])
    }

    /// Rightmost x of the right edge.
    pub fn max_right_x(&self) -> f64 {
        self.coords[4].max(self.coords[6])
    }

    /// Corners snapped to pixel positions by truncation toward zero.
    pub fn pixel_corners(&self) -> [(f64, f64); 4] {
        let px = |v: f64| v.trunc();
        [
            (px(self.coords[0]), px(self.coords[1])),
            (px(self.coords[2]), px(self.coords[3])),
            (px(self.coords[4]), px(self.coords[5])),
            (px(self.coords[6]), px(self.coords[7])),
        ]
    }
}

/// Parses one label line. `line_no` is 1-based and only used for errors.
pub fn parse_label_line(line: &str, line_no: usize) -> AnchorResult<Quadrilateral> {
    let fields: Vec<&str> = line.splitn(COORD_FIELDS + 1, ',').collect();
    if fields.len() < COORD_FIELDS {
        return Err(AnchorError::MissingFields {
            line: line_no,
            found: fields.len(),
        });
    }

    let mut coords = [0f64; COORD_FIELDS];
    for (field, (slot, raw)) in coords.iter_mut().zip(&fields).enumerate() {
        *slot = raw.trim().parse::<f64>().map_err(|_| AnchorError::Parse {
            line: line_no,
            field,
            value: raw.to_string(),
        })?;
    }
    Quadrilateral::new(coords)
}

/// Parses every non-blank line of a label file's contents.
pub fn parse_label_text(text: &str) -> AnchorResult<Vec<Quadrilateral>> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| parse_label_line(line, i + 1))
        .collect()
}

/// Reads and parses a label file.
pub fn read_label_file(path: &Path) -> AnchorResult<Vec<Quadrilateral>> {
    let text = fs::read_to_string(path).map_err(|e| AnchorError::io(path, e))?;
    parse_label_text(&text)
}
