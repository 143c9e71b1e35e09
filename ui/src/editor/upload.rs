//! Reading the picked file and decoding it off the event handler.

use std::sync::Arc;

use dioxus::html::FileEngine;
use tracing::debug;

use crate::core::decode::{decode_named, ImageSource};
use crate::core::error::{EditorError, EditorResult};

/// Name of the first picked file, if the picker returned any.
pub(crate) fn first_file(files: &Arc<dyn FileEngine>) -> Option<String> {
    files.files().into_iter().next()
}

pub(crate) async fn read_and_decode(
    files: Arc<dyn FileEngine>,
    name: String,
) -> EditorResult<ImageSource> {
    let bytes = files
        .read_file(&name)
        .await
        .ok_or_else(|| EditorError::file_read(format!("unable to read {name}")))?;
    debug!(file = %name, bytes = bytes.len(), "read picked file");
    decode_named(&bytes, Some(&name))
}
