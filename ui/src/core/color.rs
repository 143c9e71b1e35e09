//! Score colorizer: maps a 0–100 score onto a red → orange → green gradient.
//!
//! The gradient is two linear segments joined at 50:
//! - `0..50`   red `(255, 0, 0)` → orange `(255, 165, 0)`
//! - `50..=100` orange `(255, 165, 0)` → green `(100, 255, 0)`
//!
//! Used for both the slider accent color and the progress bar fill.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Highest score the gradient covers. Larger inputs are clamped to this.
pub const SCORE_MAX: u8 = 100;

const MIDPOINT: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS functional notation, e.g. `rgb(255, 83, 0)`.
    pub fn css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Color for a score in `0..=100`.
pub fn color_for(score: u8) -> Rgb {
    let score = f64::from(score.min(SCORE_MAX));

    if score < MIDPOINT {
        let ratio = score / MIDPOINT;
        Rgb::new(255, channel(165.0 * ratio), 0)
    } else {
        let ratio = (score - MIDPOINT) / MIDPOINT;
        Rgb::new(channel(255.0 - 155.0 * ratio), channel(165.0 + 90.0 * ratio), 0)
    }
}

fn channel(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gradient_endpoints() {
        assert_eq!(color_for(0), Rgb::new(255, 0, 0));
        assert_eq!(color_for(50), Rgb::new(255, 165, 0));
        assert_eq!(color_for(100), Rgb::new(100, 255, 0));
    }

    #[test]
    fn quarter_points_round_half_up() {
        // 165 * 0.5 = 82.5
        assert_eq!(color_for(25), Rgb::new(255, 83, 0));
        // 255 - 77.5 = 177.5, 165 + 45 = 210
        assert_eq!(color_for(75), Rgb::new(178, 210, 0));
    }

    #[test]
    fn segments_agree_at_midpoint() {
        let lower = Rgb::new(255, channel(165.0 * (50.0 / 50.0)), 0);
        let upper = Rgb::new(channel(255.0 - 155.0 * 0.0), channel(165.0 + 90.0 * 0.0), 0);
        assert_eq!(lower, upper);
        assert_eq!(color_for(50), upper);
    }

    #[test]
    fn adjacent_scores_change_gradually() {
        for score in 0..SCORE_MAX {
            let a = color_for(score);
            let b = color_for(score + 1);
            let delta = |x: u8, y: u8| (i16::from(x) - i16::from(y)).abs();
            assert!(delta(a.r, b.r) <= 4, "red jump at {score}");
            assert!(delta(a.g, b.g) <= 4, "green jump at {score}");
            assert_eq!(a.b, 0);
            assert_eq!(b.b, 0);
        }
    }

    #[test]
    fn out_of_range_scores_clamp_to_green() {
        assert_eq!(color_for(101), color_for(100));
        assert_eq!(color_for(u8::MAX), Rgb::new(100, 255, 0));
    }

    #[test]
    fn repeated_calls_match() {
        for score in 0..=SCORE_MAX {
            assert_eq!(color_for(score), color_for(score));
        }
    }

    #[test]
    fn css_notation() {
        assert_eq!(color_for(25).css(), "rgb(255, 83, 0)");
    }
}
