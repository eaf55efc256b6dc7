use std::f64::consts::FRAC_PI_2;

use serde::{Deserialize, Serialize};

use super::{KnotError, KnotResult};

/// Distance factor between the knot and its shadow planes.
pub const DEFAULT_OFFSET_RATIO: f64 = 1.5;

/// Smallest sample count that still forms a closed loop.
pub const MIN_POINTS: usize = 2;

/// Largest accepted sample count; the sliders stop at 600.
pub const MAX_POINTS: usize = 10_000;

/// Parameter tuple describing one Lissajous knot.
///
/// Frequencies are stored as `f64`: integer values give a closed knot,
/// other values are accepted and simply produce an open curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveParameters {
    /// Frequency of the x coordinate.
    pub a: f64,
    /// Frequency of the y coordinate.
    pub b: f64,
    /// Frequency of the z coordinate.
    pub c: f64,
    /// Phase of the x coordinate in radians.
    pub phi1: f64,
    /// Phase of the y coordinate in radians.
    pub phi2: f64,
    /// Number of samples over `[-π, π]`.
    pub n_points: usize,
    /// Shadow plane position relative to the curve minimum.
    pub offset_ratio: f64,
}

impl Default for CurveParameters {
    fn default() -> Self {
        Self {
            a: 3.0,
            b: 4.0,
            c: 2.0,
            phi1: FRAC_PI_2,
            phi2: FRAC_PI_2,
            n_points: 100,
            offset_ratio: DEFAULT_OFFSET_RATIO,
        }
    }
}

impl CurveParameters {
    /// Creates a parameter tuple with the default offset ratio.
    #[must_use]
    pub const fn new(a: f64, b: f64, c: f64, phi1: f64, phi2: f64, n_points: usize) -> Self {
        Self {
            a,
            b,
            c,
            phi1,
            phi2,
            n_points,
            offset_ratio: DEFAULT_OFFSET_RATIO,
        }
    }

    #[must_use]
    pub const fn with_frequencies(mut self, a: f64, b: f64, c: f64) -> Self {
        self.a = a;
        self.b = b;
        self.c = c;
        self
    }

    #[must_use]
    pub const fn with_phases(mut self, phi1: f64, phi2: f64) -> Self {
        self.phi1 = phi1;
        self.phi2 = phi2;
        self
    }

    #[must_use]
    pub const fn with_points(mut self, n_points: usize) -> Self {
        self.n_points = n_points;
        self
    }

    #[must_use]
    pub const fn with_offset_ratio(mut self, offset_ratio: f64) -> Self {
        self.offset_ratio = offset_ratio;
        self
    }

    /// True when all three frequencies are integers, i.e. the sampled curve
    /// returns exactly to its starting point.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        [self.a, self.b, self.c]
            .iter()
            .all(|f| f.is_finite() && f.fract() == 0.0)
    }

    /// Checks the invariants the sampler relies on.
    pub fn validate(&self) -> KnotResult<()> {
        if self.n_points < MIN_POINTS {
            return Err(KnotError::invalid(
                "n_points",
                format!(
                    "at least {MIN_POINTS} points are required, got {}",
                    self.n_points
                ),
            ));
        }
        if self.n_points > MAX_POINTS {
            return Err(KnotError::invalid(
                "n_points",
                format!(
                    "at most {MAX_POINTS} points are supported, got {}",
                    self.n_points
                ),
            ));
        }

        let scalars = [
            ("a", self.a),
            ("b", self.b),
            ("c", self.c),
            ("phi1", self.phi1),
            ("phi2", self.phi2),
            ("offset_ratio", self.offset_ratio),
        ];
        for (name, value) in scalars {
            if !value.is_finite() {
                return Err(KnotError::invalid(name, format!("{value} is not finite")));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{CurveParameters, DEFAULT_OFFSET_RATIO, MAX_POINTS};
    use crate::knot::KnotError;

    #[test]
    fn default_matches_reference_knot() {
        let params = CurveParameters::default();
        assert_eq!((params.a, params.b, params.c), (3.0, 4.0, 2.0));
        assert_eq!(params.n_points, 100);
        assert_eq!(params.offset_ratio, DEFAULT_OFFSET_RATIO);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn rejects_single_point() {
        let err = CurveParameters::default()
            .with_points(1)
            .validate()
            .unwrap_err();
        assert!(matches!(
            err,
            KnotError::InvalidParameter { name: "n_points", .. }
        ));
    }

    #[test]
    fn rejects_huge_point_counts() {
        assert!(CurveParameters::default().with_points(MAX_POINTS).validate().is_ok());
        for n_points in [MAX_POINTS + 1, MAX_POINTS * 1_000, usize::MAX] {
            let err = CurveParameters::default()
                .with_points(n_points)
                .validate()
                .unwrap_err();
            assert!(matches!(
                err,
                KnotError::InvalidParameter { name: "n_points", .. }
            ));
        }
    }

    #[test]
    fn rejects_non_finite_phase() {
        let err = CurveParameters::default()
            .with_phases(f64::NAN, 0.0)
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("phi1"));
    }

    #[test]
    fn closed_only_for_integer_frequencies() {
        assert!(CurveParameters::default().is_closed());
        assert!(
            !CurveParameters::default()
                .with_frequencies(3.5, 4.0, 2.0)
                .is_closed()
        );
    }
}
