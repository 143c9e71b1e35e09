//! Turning picked file bytes into a displayable image, and deciding which
//! decode result wins when uploads overlap.
//!
//! Every upload takes a [`DecodeTicket`] from the session's [`DecodeTracker`]
//! before its bytes are read. Completions carry the ticket back; only the
//! most recently issued ticket may change the frame. Older completions are
//! dropped whatever order they finish in.

use std::io::Cursor;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::{ImageError, ImageFormat, ImageReader};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::{EditorError, EditorResult};

/// A decoded image ready to be painted as a CSS background.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSource {
    pub data_url: String,
    pub mime: String,
    /// Pixel size, when the format could be read locally.
    pub dimensions: Option<(u32, u32)>,
}

impl ImageSource {
    fn encode(bytes: &[u8], mime: &str, dimensions: Option<(u32, u32)>) -> Self {
        Self {
            data_url: format!("data:{mime};base64,{}", STANDARD.encode(bytes)),
            mime: mime.to_string(),
            dimensions,
        }
    }
}

/// Generation number of one upload request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DecodeTicket(u64);

impl DecodeTicket {
    pub fn generation(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DecodeTracker {
    latest: u64,
}

impl DecodeTracker {
    /// Start a new request; it supersedes every ticket issued before it.
    pub fn issue(&mut self) -> DecodeTicket {
        self.latest += 1;
        DecodeTicket(self.latest)
    }

    pub fn is_current(&self, ticket: DecodeTicket) -> bool {
        ticket.0 == self.latest
    }

    pub fn latest(&self) -> Option<DecodeTicket> {
        (self.latest > 0).then_some(DecodeTicket(self.latest))
    }
}

const SVG_MIME: &str = "image/svg+xml";

/// Validate raw file bytes and wrap them in a `data:` URL for display.
pub fn decode_image(bytes: &[u8]) -> EditorResult<ImageSource> {
    decode_named(bytes, None)
}

/// Like [`decode_image`], with the picked file's name as a format hint.
///
/// Raster formats are sniffed from their magic bytes and only their header is
/// read. SVG is parsed to confirm it is a document. Anything still unknown is
/// accepted when the file name names an image type the browser can paint.
pub fn decode_named(bytes: &[u8], file_name: Option<&str>) -> EditorResult<ImageSource> {
    if bytes.is_empty() {
        return Err(EditorError::EmptyFile);
    }

    if let Ok(format) = image::guess_format(bytes) {
        return raster(bytes, format);
    }
    if let Some(size) = svg_size(bytes) {
        return Ok(ImageSource::encode(bytes, SVG_MIME, Some(size)));
    }
    match file_name.and_then(mime_from_name) {
        Some(mime) => {
            debug!(mime, "passing through image without local decoder");
            Ok(ImageSource::encode(bytes, mime, None))
        }
        None => Err(EditorError::UnsupportedFormat),
    }
}

fn raster(bytes: &[u8], format: ImageFormat) -> EditorResult<ImageSource> {
    let mime = format.to_mime_type();
    match ImageReader::with_format(Cursor::new(bytes), format).into_dimensions() {
        Ok(size) => Ok(ImageSource::encode(bytes, mime, Some(size))),
        // Recognised but not compiled in (AVIF); the browser paints it anyway.
        Err(ImageError::Unsupported(_)) => Ok(ImageSource::encode(bytes, mime, None)),
        Err(err) => Err(EditorError::decode(err.to_string())),
    }
}

fn svg_size(bytes: &[u8]) -> Option<(u32, u32)> {
    let tree = usvg::Tree::from_data(bytes, &usvg::Options::default()).ok()?;
    let size = tree.size();
    Some((size.width().ceil() as u32, size.height().ceil() as u32))
}

fn mime_from_name(name: &str) -> Option<&'static str> {
    let (_, ext) = name.rsplit_once('.')?;
    let ext = ext.to_ascii_lowercase();
    if ext == "svg" || ext == "svgz" {
        return Some(SVG_MIME);
    }
    ImageFormat::from_extension(&ext).map(|format| format.to_mime_type())
}
