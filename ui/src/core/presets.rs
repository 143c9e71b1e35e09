//! Editor defaults and quick-pick chip presets.

use super::state::ScoreBar;

pub const DEFAULT_TITLE: &str = "CHAD";
pub const DEFAULT_MINDSET: &str = "Bluepilled";
pub const DEFAULT_STRATEGY: &str = "Genemaxx";
pub const DEFAULT_JAW_TYPE: &str = "Mogger";
pub const DEFAULT_BREATHING: &str = "Nose breather";
pub const DEFAULT_APPEAL: &str = "Jordan Barrett";
pub const DEFAULT_PSL_LABEL: &str = "7";

/// Shown on the card when the title field is cleared.
pub const FALLBACK_TITLE: &str = DEFAULT_TITLE;

pub const MINDSETS: &[&str] = &["Bluepilled", "Redpilled", "Blackpilled", "Purplepilled", "Sigma"];
pub const STRATEGIES: &[&str] = &["Genemaxx", "Looksmaxx", "Gymmaxx", "Mewing", "Moneymaxx"];
pub const JAW_TYPES: &[&str] = &["Mogger", "Strong", "Average", "Soft", "Razor"];

pub fn default_score(bar: ScoreBar) -> u8 {
    match bar {
        ScoreBar::Psl => 65,
        ScoreBar::Mindset => 90,
        ScoreBar::Strategy => 75,
        ScoreBar::Jaw => 92,
        ScoreBar::Breathing => 78,
        ScoreBar::Appeal => 88,
    }
}
