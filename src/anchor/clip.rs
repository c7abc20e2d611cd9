//! Line-segment clipping against the pixel rectangle of an image.

/// Clips the segment `start -> end` to `[0, width - 1] x [0, height - 1]`
/// (Liang-Barsky). Returns `None` when nothing of the segment lies inside.
///
/// The returned endpoints are safe to hand to `imageproc` line drawing: they
/// are in pixel range no matter how far outside the image the input points lie.
pub fn clip_segment(
    start: (f64, f64),
    end: (f64, f64),
    width: u32,
    height: u32,
) -> Option<((f32, f32), (f32, f32))> {
    if width == 0 || height == 0 {
        return None;
    }
    let x_max = f64::from(width - 1);
    let y_max = f64::from(height - 1);
    let (x0, y0) = start;
    let dx = end.0 - x0;
    let dy = end.1 - y0;

    let mut t_enter = 0f64;
    let mut t_exit = 1f64;
    for (p, q) in [(-dx, x0), (dx, x_max - x0), (-dy, y0), (dy, y_max - y0)] {
        if p == 0.0 {
            // parallel to this boundary
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t_exit {
                return None;
            }
            t_enter = t_enter.max(r);
        } else {
            if r < t_enter {
                return None;
            }
            t_exit = t_exit.min(r);
        }
    }

    let at = |t: f64| {
        (
            snap((x0 + t * dx).clamp(0.0, x_max)),
            snap((y0 + t * dy).clamp(0.0, y_max)),
        )
    };
    Some((at(t_enter), at(t_exit)))
}

/// Removes the rounding noise a far-away endpoint leaves on a border crossing,
/// so `63.0000001` and `62.9999999` both land on pixel 63.
fn snap(v: f64) -> f32 {
    let nearest = v.round();
    if (v - nearest).abs() < 1e-4 {
        nearest as f32
    } else {
        v as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inside_segment_is_unchanged() {
        assert_eq!(
            clip_segment((2.0, 3.0), (15.0, 12.0), 20, 20),
            Some(((2.0, 3.0), (15.0, 12.0)))
        );
    }

    #[test]
    fn far_endpoint_is_pulled_onto_border() {
        assert_eq!(
            clip_segment((0.0, 10.0), (3e9, 10.0), 64, 64),
            Some(((0.0, 10.0), (63.0, 10.0)))
        );
        assert_eq!(
            clip_segment((3e9, 20.0), (0.0, 20.0), 64, 64),
            Some(((63.0, 20.0), (0.0, 20.0)))
        );

        let ((x0, y0), (x1, y1)) =
            clip_segment((-1e300, 5.0), (1e300, 5.0), 64, 32).expect("crosses the image");
        assert!((0.0..=63.0).contains(&x0) && (0.0..=63.0).contains(&x1));
        assert_eq!((y0, y1), (5.0, 5.0));
    }

    #[test]
    fn diagonal_is_cut_at_entry_point() {
        assert_eq!(
            clip_segment((40.0, 20.0), (0.0, -20.0), 64, 64),
            Some(((40.0, 20.0), (20.0, 0.0)))
        );
    }

    #[test]
    fn outside_segment_is_dropped() {
        assert_eq!(clip_segment((0.0, -40.0), (0.0, -20.0), 64, 64), None);
        assert_eq!(clip_segment((70.0, 0.0), (90.0, 50.0), 64, 64), None);
        assert_eq!(clip_segment((0.0, 0.0), (5.0, 5.0), 0, 10), None);
    }
}
