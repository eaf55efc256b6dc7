//! Scene assembly: turns a sampled knot into styled line segments.
//!
//! Every index pair `(n, n + 1 mod len)` of the curve yields four segments:
//! the knot itself and one shadow per axis. A shadow keeps two real
//! coordinates and pins the third to the precomputed offset plane, so the
//! three shadows sit just outside the knot's bounding box.

mod camera;
mod style;

pub use camera::{
    CAMERA_PRESETS, Camera, CameraPreset, ProjectionKind, camera_preset, default_camera,
};
pub use style::{AxisLayout, Layout, LineStyle, SceneOptions, TRANSPARENT, Theme, Title};

use serde::Serialize;

use crate::knot::{Axis, KnotError, KnotResult, MIN_POINTS, ProjectionOffsets, SampledCurve};

/// The four segment groups of a knot scene, in draw order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupKind {
    Knot,
    XShadow,
    YShadow,
    ZShadow,
}

impl GroupKind {
    pub const ALL: [Self; 4] = [Self::Knot, Self::XShadow, Self::YShadow, Self::ZShadow];

    /// Legend label.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Knot => "3D",
            Self::XShadow => "X Offset",
            Self::YShadow => "Y Offset",
            Self::ZShadow => "Z Offset",
        }
    }

    /// Axis pinned to its offset plane, `None` for the knot itself.
    #[must_use]
    pub const fn flattened_axis(self) -> Option<Axis> {
        match self {
            Self::Knot => None,
            Self::XShadow => Some(Axis::X),
            Self::YShadow => Some(Axis::Y),
            Self::ZShadow => Some(Axis::Z),
        }
    }
}

/// A single straight line piece of a group.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LineSegment {
    pub start: [f64; 3],
    pub end: [f64; 3],
    /// Only the first segment of a group carries a legend entry.
    pub show_legend: bool,
}

/// Segments sharing one legend entry and one style.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegmentGroup {
    pub kind: GroupKind,
    pub name: &'static str,
    pub style: LineStyle,
    pub segments: Vec<LineSegment>,
}

/// One segment with the group metadata a renderer needs to draw it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trace<'a> {
    pub name: &'static str,
    pub style: &'a LineStyle,
    pub segment: &'a LineSegment,
}

/// Renderable description of a knot and its shadows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub groups: Vec<SegmentGroup>,
    pub layout: Layout,
    pub camera_presets: &'static [CameraPreset],
}

impl Scene {
    #[must_use]
    pub fn group(&self, kind: GroupKind) -> Option<&SegmentGroup> {
        self.groups.iter().find(|group| group.kind == kind)
    }

    /// Total number of segments over all groups.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.groups.iter().map(|group| group.segments.len()).sum()
    }

    /// Segments interleaved per curve index: knot, x, y, z, then the next
    /// index.
    pub fn traces(&self) -> impl Iterator<Item = Trace<'_>> + '_ {
        let per_group = self
            .groups
            .iter()
            .map(|group| group.segments.len())
            .max()
            .unwrap_or(0);
        (0..per_group).flat_map(move |index| {
            self.groups.iter().filter_map(move |group| {
                group.segments.get(index).map(|segment| Trace {
                    name: group.name,
                    style: &group.style,
                    segment,
                })
            })
        })
    }

    /// Looks up one of this scene's camera presets, ignoring case.
    #[must_use]
    pub fn camera(&self, name: &str) -> Option<&'static CameraPreset> {
        let wanted = name.trim();
        if wanted.is_empty() {
            return None;
        }
        self.camera_presets
            .iter()
            .find(|preset| preset.name.eq_ignore_ascii_case(wanted))
    }
}

/// Builds the scene for `curve` with the default figure options.
pub fn build_scene(curve: &SampledCurve, offsets: &ProjectionOffsets) -> KnotResult<Scene> {
    build_scene_with_options(curve, offsets, &SceneOptions::default())
}

/// Builds the scene for `curve`; fails when the curve has fewer than two
/// points.
pub fn build_scene_with_options(
    curve: &SampledCurve,
    offsets: &ProjectionOffsets,
    options: &SceneOptions,
) -> KnotResult<Scene> {
    if curve.len() < MIN_POINTS {
        return Err(KnotError::invalid(
            "points",
            format!(
                "a closed loop needs at least {MIN_POINTS} points, got {}",
                curve.len()
            ),
        ));
    }

    let groups: Vec<SegmentGroup> = GroupKind::ALL
        .iter()
        .map(|&kind| build_group(kind, curve, offsets, options))
        .collect();

    let scene = Scene {
        groups,
        layout: Layout::from_options(options),
        camera_presets: &CAMERA_PRESETS,
    };

    log::debug!(
        "assembled scene with {} groups and {} segments",
        scene.groups.len(),
        scene.segment_count()
    );

    Ok(scene)
}

fn build_group(
    kind: GroupKind,
    curve: &SampledCurve,
    offsets: &ProjectionOffsets,
    options: &SceneOptions,
) -> SegmentGroup {
    let points = curve.points();
    let project = |point: [f64; 3]| match kind.flattened_axis() {
        Some(axis) => offsets.flatten(point, axis),
        None => point,
    };

    let segments = curve
        .segment_indices()
        .map(|(from, to)| LineSegment {
            start: project(points[from]),
            end: project(points[to]),
            show_legend: from == 0,
        })
        .collect();

    let style = match kind {
        GroupKind::Knot => options.primary.clone(),
        _ => options.secondary.clone(),
    };

    SegmentGroup {
        kind,
        name: kind.name(),
        style,
        segments,
    }
}

#[cfg(test)]
mod tests {
    use super::{CAMERA_PRESETS, GroupKind, SceneOptions, build_scene, build_scene_with_options};
    use crate::knot::{CurveParameters, ProjectionOffsets, SampledCurve, sample_knot};

    fn reference_scene() -> super::Scene {
        let (curve, offsets) = sample_knot(&CurveParameters::default()).expect("sampling");
        build_scene(&curve, &offsets).expect("scene")
    }

    #[test]
    fn every_group_closes_the_loop() {
        let (curve, offsets) = sample_knot(&CurveParameters::default()).expect("sampling");
        let scene = build_scene(&curve, &offsets).expect("scene");
        assert_eq!(scene.groups.len(), 4);
        for group in &scene.groups {
            assert_eq!(group.segments.len(), 100);
            let last = group.segments.last().expect("non-empty group");
            assert_eq!(last.end, group.segments[0].start);
        }
        let knot = scene.group(GroupKind::Knot).expect("knot group");
        assert_eq!(knot.segments[99].start, curve.points()[99]);
        assert_eq!(knot.segments[99].end, curve.points()[0]);
    }

    #[test]
    fn only_first_segment_has_legend() {
        let scene = reference_scene();
        for group in &scene.groups {
            assert!(group.segments[0].show_legend);
            assert!(group.segments[1..].iter().all(|s| !s.show_legend));
        }
    }

    #[test]
    fn shadows_use_fixed_offset_planes() {
        let (curve, offsets) = sample_knot(&CurveParameters::default()).expect("sampling");
        let scene = build_scene(&curve, &offsets).expect("scene");

        let x = scene.group(GroupKind::XShadow).expect("x shadow");
        assert!(x.segments.iter().all(|s| s.start[0] == offsets.x && s.end[0] == offsets.x));
        let y = scene.group(GroupKind::YShadow).expect("y shadow");
        assert!(y.segments.iter().all(|s| s.start[1] == offsets.y && s.end[1] == offsets.y));
        let z = scene.group(GroupKind::ZShadow).expect("z shadow");
        assert!(z.segments.iter().all(|s| s.start[2] == offsets.z && s.end[2] == offsets.z));

        let point = curve.points()[10];
        assert_eq!(x.segments[10].start, [offsets.x, point[1], point[2]]);
    }

    #[test]
    fn styles_follow_options() {
        let scene = reference_scene();
        let knot = scene.group(GroupKind::Knot).expect("knot");
        assert_eq!(knot.style.color, "darkgoldenrod");
        assert_eq!(knot.style.width, 6.0);
        let shadow = scene.group(GroupKind::ZShadow).expect("z shadow");
        assert_eq!(shadow.style.color, "mediumspringgreen");
        assert_eq!(shadow.style.width, 3.0);
    }

    #[test]
    fn traces_interleave_groups() {
        let scene = reference_scene();
        let names: Vec<_> = scene.traces().take(5).map(|trace| trace.name).collect();
        assert_eq!(names, ["3D", "X Offset", "Y Offset", "Z Offset", "3D"]);
        assert_eq!(scene.traces().count(), scene.segment_count());
    }

    #[test]
    fn rejects_single_point_curve() {
        let curve = SampledCurve::new(vec![[0.0, 0.0, 0.0]]);
        let offsets = ProjectionOffsets {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        };
        assert!(build_scene_with_options(&curve, &offsets, &SceneOptions::default()).is_err());
    }

    #[test]
    fn camera_lookup_ignores_curve() {
        let scene = reference_scene();
        let top = scene.camera("top").expect("top preset");
        assert_eq!(top.camera.eye, [0.0, 0.0, 2.5]);
        assert_eq!(scene.camera_presets.len(), 6);
    }

    #[test]
    fn camera_lookup_uses_scene_presets() {
        let mut scene = reference_scene();
        scene.camera_presets = &CAMERA_PRESETS[..2];
        assert!(scene.camera(" TOP ").is_some());
        assert!(scene.camera("Front").is_none());
        assert!(scene.camera("").is_none());
    }
}
