use std::f64::consts::PI;

use serde::Serialize;

use super::{CurveParameters, KnotError, KnotResult, MIN_POINTS};

/// Cartesian axis selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Self; 3] = [Self::X, Self::Y, Self::Z];

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Z => "z",
        }
    }
}

/// Ordered samples of a knot. The last point connects back to the first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampledCurve {
    points: Vec<[f64; 3]>,
}

impl SampledCurve {
    #[must_use]
    pub fn new(points: Vec<[f64; 3]>) -> Self {
        Self { points }
    }

    #[must_use]
    pub fn points(&self) -> &[[f64; 3]] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Coordinates of one axis, in sample order.
    pub fn coordinates(&self, axis: Axis) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(move |p| p[axis.index()])
    }

    /// Index pairs `(n, n + 1)` including the closing pair `(len - 1, 0)`.
    pub fn segment_indices(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let len = self.points.len();
        (0..len).map(move |n| (n, (n + 1) % len))
    }

    /// Per-axis `(min, max)`; `None` for an empty curve.
    #[must_use]
    pub fn bounds(&self) -> Option<([f64; 3], [f64; 3])> {
        if self.points.is_empty() {
            return None;
        }
        let mut min = [f64::INFINITY; 3];
        let mut max = [f64::NEG_INFINITY; 3];
        for point in &self.points {
            for axis in 0..3 {
                min[axis] = min[axis].min(point[axis]);
                max[axis] = max[axis].max(point[axis]);
            }
        }
        Some((min, max))
    }
}

/// Fixed plane positions for the three shadow projections.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProjectionOffsets {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl ProjectionOffsets {
    /// `offset_ratio × min(axis)` for every axis.
    pub fn from_curve(curve: &SampledCurve, offset_ratio: f64) -> KnotResult<Self> {
        let (min, _) = curve
            .bounds()
            .ok_or_else(|| KnotError::invalid("points", "curve has no samples"))?;
        Ok(Self {
            x: min[0] * offset_ratio,
            y: min[1] * offset_ratio,
            z: min[2] * offset_ratio,
        })
    }

    #[must_use]
    pub const fn get(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Replaces the `axis` coordinate of `point` with the shadow plane.
    #[must_use]
    pub fn flatten(&self, point: [f64; 3], axis: Axis) -> [f64; 3] {
        let mut flat = point;
        flat[axis.index()] = self.get(axis);
        flat
    }
}

/// `count` evenly spaced values over `[start, stop]`, both ends included.
///
/// The last value is exactly `stop`.
#[must_use]
pub fn linspace(start: f64, stop: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (count - 1) as f64;
            let mut values: Vec<f64> = (0..count).map(|i| i as f64 * step + start).collect();
            values[count - 1] = stop;
            values
        }
    }
}

/// Samples the knot described by `params` over `t ∈ [-π, π]`.
///
/// The interval is closed, so for integer frequencies the first and last
/// sample coincide and the closing segment has (near) zero length.
pub fn sample_knot(params: &CurveParameters) -> KnotResult<(SampledCurve, ProjectionOffsets)> {
    params.validate()?;
    debug_assert!(params.n_points >= MIN_POINTS);

    let points: Vec<[f64; 3]> = linspace(-PI, PI, params.n_points)
        .into_iter()
        .map(|t| {
            [
                (params.a * t + params.phi1).cos(),
                (params.b * t + params.phi2).cos(),
                (params.c * t).cos(),
            ]
        })
        .collect();

    let curve = SampledCurve::new(points);
    let offsets = ProjectionOffsets::from_curve(&curve, params.offset_ratio)?;

    log::debug!(
        "sampled knot a={} b={} c={} with {} points, offsets ({:.4}, {:.4}, {:.4})",
        params.a,
        params.b,
        params.c,
        curve.len(),
        offsets.x,
        offsets.y,
        offsets.z
    );

    Ok((curve, offsets))
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use super::{Axis, ProjectionOffsets, SampledCurve, linspace, sample_knot};
    use crate::knot::CurveParameters;

    #[test]
    fn linspace_includes_both_endpoints() {
        let values = linspace(-PI, PI, 5);
        assert_eq!(values.len(), 5);
        assert_eq!(values[0], -PI);
        assert_eq!(values[4], PI);
        assert!((values[2]).abs() < 1e-12);
    }

    #[test]
    fn reference_knot_first_point() {
        let params = CurveParameters::default();
        let (curve, _) = sample_knot(&params).expect("sampling succeeds");
        let first = curve.points()[0];
        assert_eq!(first[0], (3.0 * -PI + FRAC_PI_2).cos());
        assert_eq!(first[1], (4.0 * -PI + FRAC_PI_2).cos());
        assert_eq!(first[2], (2.0 * -PI).cos());
    }

    #[test]
    fn coordinates_stay_in_unit_cube() {
        for (a, b, c) in [(3.0, 4.0, 2.0), (1.0, 1.0, 1.0), (20.0, 7.0, 13.0)] {
            let params = CurveParameters::default()
                .with_frequencies(a, b, c)
                .with_points(257);
            let (curve, _) = sample_knot(&params).expect("sampling succeeds");
            assert_eq!(curve.len(), 257);
            assert!(
                curve
                    .points()
                    .iter()
                    .flatten()
                    .all(|v| (-1.0..=1.0).contains(v))
            );
        }
    }

    #[test]
    fn offsets_scale_axis_minimum() {
        let params = CurveParameters::default().with_offset_ratio(2.0);
        let (curve, offsets) = sample_knot(&params).expect("sampling succeeds");
        for axis in Axis::ALL {
            let min = curve.coordinates(axis).fold(f64::INFINITY, f64::min);
            assert_eq!(offsets.get(axis), 2.0 * min);
        }
    }

    #[test]
    fn two_points_form_a_closed_pair() {
        let params = CurveParameters::default().with_points(2);
        let (curve, _) = sample_knot(&params).expect("two points are enough");
        let pairs: Vec<_> = curve.segment_indices().collect();
        assert_eq!(pairs, vec![(0, 1), (1, 0)]);
    }

    #[test]
    fn one_point_is_rejected() {
        let params = CurveParameters::default().with_points(1);
        assert!(sample_knot(&params).is_err());
    }

    #[test]
    fn flatten_replaces_single_axis() {
        let offsets = ProjectionOffsets {
            x: -1.5,
            y: -1.4,
            z: -1.3,
        };
        assert_eq!(offsets.flatten([0.1, 0.2, 0.3], Axis::Y), [0.1, -1.4, 0.3]);
    }

    #[test]
    fn empty_curve_has_no_offsets() {
        let curve = SampledCurve::new(Vec::new());
        assert!(curve.bounds().is_none());
        assert!(ProjectionOffsets::from_curve(&curve, 1.5).is_err());
    }
}
