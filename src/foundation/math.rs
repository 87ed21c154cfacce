use crate::foundation::core::Point;

pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

pub(crate) fn lerp_point(a: Point, b: Point, t: f64) -> Point {
    Point::new(lerp(a.x, b.x, t), lerp(a.y, b.y, t))
}

/// `n` evenly spaced values over `[lo, hi]`, both endpoints included.
///
/// `n == 1` yields `[lo]`, `n == 0` yields nothing.
pub(crate) fn linspace(lo: f64, hi: f64, n: usize) -> impl Iterator<Item = f64> {
    let denom = n.saturating_sub(1).max(1) as f64;
    (0..n).map(move |i| {
        if i + 1 == n && n > 1 {
            hi
        } else {
            lo + (hi - lo) * (i as f64 / denom)
        }
    })
}

/// Progress of frame `i` out of `n` in `[0, 1]`; a single frame sits at the end.
pub(crate) fn frame_progress(i: usize, n: usize) -> f64 {
    if n > 1 {
        i as f64 / (n - 1) as f64
    } else {
        1.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
