//! Spiral arcs between two construction points

use std::f64::consts::{PI, TAU};

use nalgebra::Point2;

/// Cartesian coordinates [NM] relative to the nominal turn center
pub type Point2D = Point2<f64>;

/// Default number of samples per arc
pub const ARC_SAMPLES: usize = 1000;

/// Polar coordinates (radius, angle) of a point
fn polar(p: &Point2D) -> (f64, f64) {
    (p.coords.norm(), p.y.atan2(p.x))
}

/// Wraps an angle difference into ]-π,π]
fn wrap(angle: f64) -> f64 {
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI {
        wrapped + TAU
    } else {
        wrapped
    }
}

/// Returns `n` points along the arc from `start` to `end`
///
/// The radius and the polar angle are interpolated linearly and independently;
/// the angle takes the shortest way round. The first sample is `start` itself and
/// `end` is left out, being the first sample of the next arc.
pub fn interpolate_arc(start: &Point2D, end: &Point2D, n: usize) -> Vec<Point2D> {
    if n == 0 {
        return vec![];
    }
    if start == end {
        return vec![*start; n];
    }
    let (r_0, angle_0) = polar(start);
    let (r_1, angle_1) = polar(end);
    let step = (r_1 - r_0) / n as f64;
    let angle_step = wrap(angle_1 - angle_0) / n as f64;
    let mut arc = Vec::with_capacity(n);
    arc.push(*start);
    arc.extend((1..n).map(|i| {
        let i = i as f64;
        let (sin, cos) = (angle_0 + i * angle_step).sin_cos();
        let r = r_0 + i * step;
        Point2D::new(r * cos, r * sin)
    }));
    arc
}
