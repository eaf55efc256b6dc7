//! Camera presets for the knot view.

use serde::{Deserialize, Serialize};

/// Camera projection type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectionKind {
    /// Objects farther away appear smaller.
    Perspective,
    /// No perspective distortion; shadows keep their true shape.
    Orthographic,
}

/// Eye position, up vector and look-at center of a scene camera.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Camera {
    pub eye: [f64; 3],
    pub up: [f64; 3],
    pub center: [f64; 3],
}

impl Camera {
    #[must_use]
    pub const fn looking_at_origin(eye: [f64; 3], up: [f64; 3]) -> Self {
        Self {
            eye,
            up,
            center: [0.0, 0.0, 0.0],
        }
    }
}

/// Named camera shortcut. Switching presets never touches the curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CameraPreset {
    pub name: &'static str,
    pub camera: Camera,
}

/// Preset table, in button order.
pub const CAMERA_PRESETS: [CameraPreset; 6] = [
    CameraPreset {
        name: "Default",
        camera: Camera::looking_at_origin([1.5, 1.5, 1.5], [0.0, 0.0, 1.0]),
    },
    CameraPreset {
        name: "Top",
        camera: Camera::looking_at_origin([0.0, 0.0, 2.5], [0.0, 1.0, 0.0]),
    },
    CameraPreset {
        name: "Lateral Right",
        camera: Camera::looking_at_origin([2.5, 0.0, 0.0], [0.0, 0.0, 1.0]),
    },
    CameraPreset {
        name: "Lateral Left",
        camera: Camera::looking_at_origin([-2.5, 0.0, 0.0], [0.0, 0.0, 1.0]),
    },
    CameraPreset {
        name: "Front",
        camera: Camera::looking_at_origin([0.0, 2.5, 0.0], [0.0, 1.0, 1.0]),
    },
    CameraPreset {
        name: "Rear",
        camera: Camera::looking_at_origin([0.0, -2.5, 0.0], [0.0, 1.0, 1.0]),
    },
];

/// The preset the scene opens with.
#[must_use]
pub const fn default_camera() -> Camera {
    CAMERA_PRESETS[0].camera
}

/// Finds a preset by name, ignoring case and surrounding whitespace.
#[must_use]
pub fn camera_preset(name: &str) -> Option<&'static CameraPreset> {
    let wanted = name.trim();
    if wanted.is_empty() {
        return None;
    }
    CAMERA_PRESETS
        .iter()
        .find(|preset| preset.name.eq_ignore_ascii_case(wanted))
}

#[cfg(test)]
mod tests {
    use super::{CAMERA_PRESETS, camera_preset, default_camera};

    #[test]
    fn top_preset_looks_down_z() {
        let top = camera_preset("Top").expect("top preset exists");
        assert_eq!(top.camera.eye, [0.0, 0.0, 2.5]);
        assert_eq!(top.camera.up, [0.0, 1.0, 0.0]);
        assert_eq!(top.camera.center, [0.0, 0.0, 0.0]);
    }

    #[test]
    fn lookup_ignores_case_and_padding() {
        let preset = camera_preset("  lateral left ").expect("lookup succeeds");
        assert_eq!(preset.camera.eye, [-2.5, 0.0, 0.0]);
        assert!(camera_preset("").is_none());
        assert!(camera_preset("Isometric").is_none());
    }

    #[test]
    fn all_presets_share_origin_center() {
        assert!(
            CAMERA_PRESETS
                .iter()
                .all(|preset| preset.camera.center == [0.0, 0.0, 0.0])
        );
        assert_eq!(default_camera().eye, [1.5, 1.5, 1.5]);
    }
}
