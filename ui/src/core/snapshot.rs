//! Render-time view of the session: everything the card preview paints.

use serde::Serialize;

use super::color::{color_for, Rgb};
use super::framing::{compute_framing, Framing};
use super::session::ImageFrame;
use super::state::{CardState, ScoreBar};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarSnapshot {
    pub bar: ScoreBar,
    pub score: u8,
    pub color: Rgb,
    /// Text printed above the bar on the card.
    pub value: String,
}

impl BarSnapshot {
    /// CSS width of the filled portion of the progress bar.
    pub fn fill_width(&self) -> String {
        format!("{}%", self.score)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardSnapshot {
    pub title: String,
    pub mindset: String,
    pub strategy: String,
    pub jaw_type: String,
    pub breathing: String,
    pub appeal: String,
    pub psl_score_label: String,
    pub framing: Framing,
    /// Background image for the avatar circle when `framing` is not the placeholder.
    pub image_url: Option<String>,
    pub bars: Vec<BarSnapshot>,
}

impl CardSnapshot {
    pub fn capture(card: &CardState, frame: &ImageFrame) -> Self {
        let bars = ScoreBar::ALL
            .into_iter()
            .map(|bar| {
                let score = card.score(bar);
                BarSnapshot {
                    bar,
                    score,
                    color: color_for(score),
                    value: card.text(bar.text_field()).to_string(),
                }
            })
            .collect();

        Self {
            title: card.display_title().to_string(),
            mindset: card.mindset.clone(),
            strategy: card.strategy.clone(),
            jaw_type: card.jaw_type.clone(),
            breathing: card.breathing.clone(),
            appeal: card.appeal.clone(),
            psl_score_label: card.psl_score_label.clone(),
            framing: compute_framing(frame.has_image(), frame.zoom, frame.offset),
            image_url: frame.source.as_ref().map(|src| src.data_url.clone()),
            bars,
        }
    }

    pub fn bar(&self, bar: ScoreBar) -> Option<&BarSnapshot> {
        self.bars.iter().find(|snap| snap.bar == bar)
    }
}
