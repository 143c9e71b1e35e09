//! Framing calculator for the circular avatar viewport.
//!
//! Given whether an image is loaded, a zoom factor and a percentage offset,
//! produce the background paint parameters the card preview applies to the
//! avatar circle.
//!
//! Scale policy
//! ------------
//! The painted width is `max(100, zoom * 100)` percent of the viewport with
//! the height left at `auto`. Zoom values below 1 therefore never shrink the
//! image under the viewport width, so the circle is always fully covered.
//! Zoom below 1 is still accepted by the control; it simply bottoms out at
//! 100%.

use serde::{Deserialize, Serialize};

/// Smallest zoom the control allows.
pub const ZOOM_MIN: f64 = 0.5;
/// Largest zoom the control allows.
pub const ZOOM_MAX: f64 = 3.0;
/// Zoom slider granularity.
pub const ZOOM_STEP: f64 = 0.01;
pub const ZOOM_DEFAULT: f64 = 1.0;

pub const OFFSET_MIN: f64 = 0.0;
pub const OFFSET_MAX: f64 = 100.0;
pub const OFFSET_DEFAULT: f64 = 50.0;

/// Lower bound of the painted scale, in percent of the viewport width.
pub const MIN_SCALE_PERCENT: f64 = 100.0;

/// Fractional position of the image inside the viewport, each axis in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: clamp_offset(x),
            y: clamp_offset(y),
        }
    }

    pub fn centered() -> Self {
        Self {
            x: OFFSET_DEFAULT,
            y: OFFSET_DEFAULT,
        }
    }
}

impl Default for Offset {
    fn default() -> Self {
        Self::centered()
    }
}

/// Background parameters for a loaded image.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FramingParams {
    pub scale_percent: f64,
    pub position_x: f64,
    pub position_y: f64,
}

impl FramingParams {
    /// CSS `background-size` value, e.g. `250% auto`.
    pub fn background_size(&self) -> String {
        format!("{}% auto", trim_float(self.scale_percent))
    }

    /// CSS `background-position` value, e.g. `50% 50%`.
    pub fn background_position(&self) -> String {
        format!(
            "{}% {}%",
            trim_float(self.position_x),
            trim_float(self.position_y)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Framing {
    /// No image loaded; the renderer paints the placeholder fill and caption.
    Placeholder,
    Image(FramingParams),
}

impl Framing {
    pub fn params(&self) -> Option<&FramingParams> {
        match self {
            Framing::Placeholder => None,
            Framing::Image(params) => Some(params),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Framing::Placeholder)
    }
}

pub fn compute_framing(has_image: bool, zoom: f64, offset: Offset) -> Framing {
    if !has_image {
        return Framing::Placeholder;
    }

    Framing::Image(FramingParams {
        scale_percent: (zoom * 100.0).max(MIN_SCALE_PERCENT),
        position_x: offset.x,
        position_y: offset.y,
    })
}

pub fn clamp_zoom(zoom: f64) -> f64 {
    if zoom.is_nan() {
        return ZOOM_DEFAULT;
    }
    zoom.clamp(ZOOM_MIN, ZOOM_MAX)
}

pub fn clamp_offset(value: f64) -> f64 {
    if value.is_nan() {
        return OFFSET_DEFAULT;
    }
    value.clamp(OFFSET_MIN, OFFSET_MAX)
}

/// Drop float noise so `2.5 * 100.0` prints as `250`, not `250.00000000000003`.
fn trim_float(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        format!("{rounded:.0}")
    } else {
        format!("{rounded}")
    }
}
