//! Card form state: free-text fields plus six clamped score bars.

use serde::{Deserialize, Serialize};

use super::color::SCORE_MAX;
use super::presets;

/// Editable text fields on the card. None of them are validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextField {
    Title,
    Mindset,
    Strategy,
    JawType,
    Breathing,
    Appeal,
    PslScoreLabel,
}

impl TextField {
    pub const ALL: [TextField; 7] = [
        TextField::Title,
        TextField::Mindset,
        TextField::Strategy,
        TextField::JawType,
        TextField::Breathing,
        TextField::Appeal,
        TextField::PslScoreLabel,
    ];

    /// Quick-pick presets shown under the input, if the field has any.
    pub fn chips(&self) -> &'static [&'static str] {
        match self {
            TextField::Mindset => presets::MINDSETS,
            TextField::Strategy => presets::STRATEGIES,
            TextField::JawType => presets::JAW_TYPES,
            _ => &[],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBar {
    Psl,
    Mindset,
    Strategy,
    Jaw,
    Breathing,
    Appeal,
}

impl ScoreBar {
    /// Display order on both the controls panel and the card.
    pub const ALL: [ScoreBar; 6] = [
        ScoreBar::Psl,
        ScoreBar::Mindset,
        ScoreBar::Strategy,
        ScoreBar::Jaw,
        ScoreBar::Breathing,
        ScoreBar::Appeal,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ScoreBar::Psl => "psl",
            ScoreBar::Mindset => "mindset",
            ScoreBar::Strategy => "strategy",
            ScoreBar::Jaw => "jaw",
            ScoreBar::Breathing => "breathing",
            ScoreBar::Appeal => "appeal",
        }
    }

    /// Text field whose value is printed next to this bar on the card.
    pub fn text_field(&self) -> TextField {
        match self {
            ScoreBar::Psl => TextField::PslScoreLabel,
            ScoreBar::Mindset => TextField::Mindset,
            ScoreBar::Strategy => TextField::Strategy,
            ScoreBar::Jaw => TextField::JawType,
            ScoreBar::Breathing => TextField::Breathing,
            ScoreBar::Appeal => TextField::Appeal,
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

/// Fixed-size map from bar to score; every stored value is in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBars([u8; 6]);

impl ScoreBars {
    pub fn get(&self, bar: ScoreBar) -> u8 {
        self.0[bar.index()]
    }

    pub fn set(&mut self, bar: ScoreBar, score: i64) {
        self.0[bar.index()] = clamp_score(score);
    }

    pub fn iter(&self) -> impl Iterator<Item = (ScoreBar, u8)> + '_ {
        ScoreBar::ALL.into_iter().map(|bar| (bar, self.get(bar)))
    }
}

impl Default for ScoreBars {
    fn default() -> Self {
        let mut scores = [0u8; 6];
        for bar in ScoreBar::ALL {
            scores[bar.index()] = presets::default_score(bar);
        }
        Self(scores)
    }
}

pub fn clamp_score(score: i64) -> u8 {
    score.clamp(0, i64::from(SCORE_MAX)) as u8
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardState {
    pub title: String,
    pub mindset: String,
    pub strategy: String,
    pub jaw_type: String,
    pub breathing: String,
    pub appeal: String,
    pub psl_score_label: String,
    pub score_bars: ScoreBars,
}

impl CardState {
    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::Title => &self.title,
            TextField::Mindset => &self.mindset,
            TextField::Strategy => &self.strategy,
            TextField::JawType => &self.jaw_type,
            TextField::Breathing => &self.breathing,
            TextField::Appeal => &self.appeal,
            TextField::PslScoreLabel => &self.psl_score_label,
        }
    }

    pub fn set_text(&mut self, field: TextField, value: String) {
        let slot = match field {
            TextField::Title => &mut self.title,
            TextField::Mindset => &mut self.mindset,
            TextField::Strategy => &mut self.strategy,
            TextField::JawType => &mut self.jaw_type,
            TextField::Breathing => &mut self.breathing,
            TextField::Appeal => &mut self.appeal,
            TextField::PslScoreLabel => &mut self.psl_score_label,
        };
        *slot = value;
    }

    pub fn score(&self, bar: ScoreBar) -> u8 {
        self.score_bars.get(bar)
    }

    pub fn set_score(&mut self, bar: ScoreBar, score: i64) {
        self.score_bars.set(bar, score);
    }

    /// Title as printed on the card; an empty field falls back to the default.
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            presets::FALLBACK_TITLE
        } else {
            &self.title
        }
    }
}

impl Default for CardState {
    fn default() -> Self {
        Self {
            title: presets::DEFAULT_TITLE.to_string(),
            mindset: presets::DEFAULT_MINDSET.to_string(),
            strategy: presets::DEFAULT_STRATEGY.to_string(),
            jaw_type: presets::DEFAULT_JAW_TYPE.to_string(),
            breathing: presets::DEFAULT_BREATHING.to_string(),
            appeal: presets::DEFAULT_APPEAL.to_string(),
            psl_score_label: presets::DEFAULT_PSL_LABEL.to_string(),
            score_bars: ScoreBars::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_presets() {
        let state = CardState::default();
        assert_eq!(state.title, "CHAD");
        assert_eq!(state.text(TextField::Breathing), "Nose breather");
        assert_eq!(state.score(ScoreBar::Psl), 65);
        assert_eq!(state.score(ScoreBar::Jaw), 92);
        assert_eq!(state.score(ScoreBar::Appeal), 88);
    }

    #[test]
    fn scores_clamp_into_range() {
        let mut state = CardState::default();
        state.set_score(ScoreBar::Mindset, 140);
        assert_eq!(state.score(ScoreBar::Mindset), 100);
        state.set_score(ScoreBar::Mindset, -3);
        assert_eq!(state.score(ScoreBar::Mindset), 0);
        state.set_score(ScoreBar::Mindset, 42);
        assert_eq!(state.score(ScoreBar::Mindset), 42);
    }

    #[test]
    fn score_updates_touch_only_their_bar() {
        let mut state = CardState::default();
        state.set_score(ScoreBar::Breathing, 10);
        let scores: Vec<_> = state.score_bars.iter().map(|(_, s)| s).collect();
        assert_eq!(scores, vec![65, 90, 75, 92, 10, 88]);
    }

    #[test]
    fn text_fields_accept_anything() {
        let mut state = CardState::default();
        for field in TextField::ALL {
            state.set_text(field, String::new());
            assert_eq!(state.text(field), "");
        }
        state.set_text(TextField::PslScoreLabel, "eleven / 10 ✨".into());
        assert_eq!(state.psl_score_label, "eleven / 10 ✨");
    }

    #[test]
    fn empty_title_falls_back() {
        let mut state = CardState::default();
        state.set_text(TextField::Title, "GIGA".into());
        assert_eq!(state.display_title(), "GIGA");
        state.set_text(TextField::Title, String::new());
        assert_eq!(state.display_title(), "CHAD");
    }

    #[test]
    fn only_three_fields_have_chips() {
        let with_chips: Vec<_> = TextField::ALL
            .into_iter()
            .filter(|f| !f.chips().is_empty())
            .collect();
        assert_eq!(
            with_chips,
            vec![TextField::Mindset, TextField::Strategy, TextField::JawType]
        );
    }
}
