use egui::{Color32, Pos2};

use crate::surface::Surface;

/// How a segment is painted. Joins and caps are always round.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub color: Color32,
    pub thickness: f32,
}

impl StrokeStyle {
    pub fn new(color: Color32, thickness: f32) -> Self {
        Self { color, thickness }
    }
}

/// Draw one segment of a stroke onto `surface`.
///
/// Consecutive segments share their end points, and each one is painted with
/// round caps, so a run of segments reads as a single line with round joins.
/// A zero-length segment paints nothing.
pub fn draw_segment(surface: &mut Surface, from: Pos2, to: Pos2, style: StrokeStyle) {
    if from == to {
        log::trace!("Zero-length segment at {:?}", from);
        return;
    }
    surface.paint_capsule(from, to, style.thickness / 2.0, style.color);
}

/// Squared distance from `point` to the segment `a`..`b`.
pub(crate) fn distance_sq_to_segment(point: Pos2, a: Pos2, b: Pos2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_sq();
    let t = if len_sq > 0.0 {
        ((point - a).dot(ab) / len_sq).clamp(0.0, 1.0)
    } else {
        0.0
    };
    (point - (a + ab * t)).length_sq()
}
