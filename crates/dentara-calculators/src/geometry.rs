//! 2D vector helpers for the landmark-based analyses.

use dentara_core::models::landmark::Landmark;

/// Angle in degrees at `vertex` between the rays vertex→a and vertex→b.
///
/// Magnitude only (0°–180°), via the dot-product formula. A zero-length ray
/// (a landmark coincident with the vertex) yields 0° rather than dividing
/// by zero.
pub(crate) fn angle_at(vertex: &Landmark, a: &Landmark, b: &Landmark) -> f64 {
    angle_between(
        (a.x - vertex.x, a.y - vertex.y),
        (b.x - vertex.x, b.y - vertex.y),
    )
}

/// Angle in degrees between the lines a1–a2 and b1–b2, taking each line's
/// direction as given (0°–180°).
pub(crate) fn angle_between_lines(a1: &Landmark, a2: &Landmark, b1: &Landmark, b2: &Landmark) -> f64 {
    angle_between((a2.x - a1.x, a2.y - a1.y), (b2.x - b1.x, b2.y - b1.y))
}

/// Signed perpendicular distance from `point` to the directed line a→b.
///
/// Positive values lie to the left of the direction of travel; the caller
/// fixes the clinical sign convention by its choice of line direction.
/// Returns 0.0 for a degenerate (zero-length) line.
pub(crate) fn signed_distance(point: &Landmark, a: &Landmark, b: &Landmark) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let length = (dx * dx + dy * dy).sqrt();
    if length == 0.0 {
        return 0.0;
    }
    (dx * (point.y - a.y) - dy * (point.x - a.x)) / length
}

fn angle_between(u: (f64, f64), v: (f64, f64)) -> f64 {
    let mag_u = (u.0 * u.0 + u.1 * u.1).sqrt();
    let mag_v = (v.0 * v.0 + v.1 * v.1).sqrt();
    if mag_u == 0.0 || mag_v == 0.0 {
        return 0.0;
    }
    let cos = ((u.0 * v.0 + u.1 * v.1) / (mag_u * mag_v)).clamp(-1.0, 1.0);
    cos.acos().to_degrees()
}
