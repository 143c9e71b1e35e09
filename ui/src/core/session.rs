//! The editor session: card fields, avatar frame and upload generations,
//! mutated only through [`CardMessage`] values.

use tracing::{debug, info, warn};

use super::decode::{DecodeTicket, DecodeTracker, ImageSource};
use super::error::EditorResult;
use super::framing::{self, Offset};
use super::snapshot::CardSnapshot;
use super::state::{CardState, ScoreBar, TextField};

/// Avatar image plus how it sits inside the circular viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageFrame {
    pub source: Option<ImageSource>,
    pub zoom: f64,
    pub offset: Offset,
}

impl ImageFrame {
    pub fn has_image(&self) -> bool {
        self.source.is_some()
    }

    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = framing::clamp_zoom(zoom);
    }

    pub fn set_offset_x(&mut self, x: f64) {
        self.offset.x = framing::clamp_offset(x);
    }

    pub fn set_offset_y(&mut self, y: f64) {
        self.offset.y = framing::clamp_offset(y);
    }
}

impl Default for ImageFrame {
    fn default() -> Self {
        Self {
            source: None,
            zoom: framing::ZOOM_DEFAULT,
            offset: Offset::centered(),
        }
    }
}

/// One user edit, or the completion of an upload.
#[derive(Debug, Clone, PartialEq)]
pub enum CardMessage {
    Text(TextField, String),
    Score(ScoreBar, i64),
    Zoom(f64),
    OffsetX(f64),
    OffsetY(f64),
    ImageDecoded {
        ticket: DecodeTicket,
        result: EditorResult<ImageSource>,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditorSession {
    pub card: CardState,
    pub frame: ImageFrame,
    decodes: DecodeTracker,
}

impl EditorSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new upload. Any upload still in flight becomes stale.
    pub fn begin_upload(&mut self) -> DecodeTicket {
        let ticket = self.decodes.issue();
        debug!(generation = ticket.generation(), "image upload started");
        ticket
    }

    pub fn apply(&mut self, message: CardMessage) {
        match message {
            CardMessage::Text(field, value) => self.card.set_text(field, value),
            CardMessage::Score(bar, score) => self.card.set_score(bar, score),
            CardMessage::Zoom(zoom) => self.frame.set_zoom(zoom),
            CardMessage::OffsetX(x) => self.frame.set_offset_x(x),
            CardMessage::OffsetY(y) => self.frame.set_offset_y(y),
            CardMessage::ImageDecoded { ticket, result } => self.finish_upload(ticket, result),
        }
    }

    fn finish_upload(&mut self, ticket: DecodeTicket, result: EditorResult<ImageSource>) {
        if !self.decodes.is_current(ticket) {
            debug!(
                generation = ticket.generation(),
                "dropping stale image decode"
            );
            return;
        }

        match result {
            Ok(source) => {
                info!(
                    generation = ticket.generation(),
                    mime = %source.mime,
                    dimensions = ?source.dimensions,
                    "image decoded"
                );
                self.frame.source = Some(source);
            }
            Err(err) => {
                warn!(
                    generation = ticket.generation(),
                    "image decode failed, showing placeholder: {err}"
                );
                self.frame.source = None;
            }
        }
    }

    pub fn snapshot(&self) -> CardSnapshot {
        CardSnapshot::capture(&self.card, &self.frame)
    }
}
