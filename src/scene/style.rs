//! Line styling and figure layout.

use serde::{Deserialize, Serialize};

use super::camera::{Camera, ProjectionKind, default_camera};
use crate::knot::Axis;

/// Fully transparent CSS color, used for plot and page backgrounds.
pub const TRANSPARENT: &str = "rgba(0, 0, 0, 0)";

/// Stroke color and width of a segment group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    /// Any CSS color string.
    pub color: String,
    /// Stroke width in pixels.
    pub width: f64,
}

impl LineStyle {
    #[must_use]
    pub fn new(color: impl Into<String>, width: f64) -> Self {
        Self {
            color: color.into(),
            width,
        }
    }

    /// Bold style of the knot itself.
    #[must_use]
    pub fn primary() -> Self {
        Self::new("darkgoldenrod", 6.0)
    }

    /// Thin style of the shadow projections.
    #[must_use]
    pub fn secondary() -> Self {
        Self::new("mediumspringgreen", 3.0)
    }
}

/// Renderer template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    #[serde(rename = "plotly_dark")]
    Dark,
    #[serde(rename = "plotly_white")]
    Light,
}

/// Scene configuration.
///
/// `Default` reproduces the reference figure: 850×850 px, dark theme,
/// orthographic projection, golden knot with green shadows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneOptions {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub theme: Theme,
    pub projection: ProjectionKind,
    pub background: String,
    pub primary: LineStyle,
    pub secondary: LineStyle,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            title: "Lissajous Knot".to_owned(),
            width: 850,
            height: 850,
            theme: Theme::Dark,
            projection: ProjectionKind::Orthographic,
            background: TRANSPARENT.to_owned(),
            primary: LineStyle::primary(),
            secondary: LineStyle::secondary(),
        }
    }
}

impl SceneOptions {
    #[must_use]
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_size(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }
}

/// Title placement: bold, anchored to the top-left corner of the plot.
///
/// `x` and `y` are fractions of the figure area (`"paper"` coordinates).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
    pub bold: bool,
    pub x_ref: &'static str,
    pub y_ref: &'static str,
    pub x: f64,
    pub y: f64,
    pub x_anchor: &'static str,
    pub y_anchor: &'static str,
    /// Gap in pixels below the title text.
    pub pad_bottom: u32,
}

impl Title {
    /// Bold title pinned to the top-left corner of the figure.
    #[must_use]
    pub fn top_left(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: true,
            x_ref: "paper",
            y_ref: "paper",
            x: 0.0,
            y: 1.0,
            x_anchor: "left",
            y_anchor: "bottom",
            pad_bottom: 3,
        }
    }
}

/// Display flags of one scene axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisLayout {
    pub axis: Axis,
    pub title: &'static str,
    pub show_tick_labels: bool,
    pub show_grid: bool,
    pub show_line: bool,
    pub zero_line: bool,
    pub show_background: bool,
}

impl AxisLayout {
    /// Bare axis: the line is drawn, everything else is hidden.
    #[must_use]
    pub const fn bare(axis: Axis) -> Self {
        Self {
            axis,
            title: axis.label(),
            show_tick_labels: false,
            show_grid: false,
            show_line: true,
            zero_line: false,
            show_background: false,
        }
    }
}

/// Figure-level metadata of a [`Scene`](super::Scene).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub title: Title,
    pub theme: Theme,
    pub width: u32,
    pub height: u32,
    pub plot_background: String,
    pub paper_background: String,
    pub projection: ProjectionKind,
    pub axes: [AxisLayout; 3],
    pub camera: Camera,
}

impl Layout {
    #[must_use]
    pub fn from_options(options: &SceneOptions) -> Self {
        Self {
            title: Title::top_left(options.title.clone()),
            theme: options.theme,
            width: options.width,
            height: options.height,
            plot_background: options.background.clone(),
            paper_background: options.background.clone(),
            projection: options.projection,
            axes: Axis::ALL.map(AxisLayout::bare),
            camera: default_camera(),
        }
    }
}
