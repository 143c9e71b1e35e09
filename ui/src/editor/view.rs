use dioxus::prelude::*;
use futures_util::StreamExt;
use tracing::debug;

use crate::core::platform;
use crate::core::session::{CardMessage, EditorSession};

use super::controls::ControlsPanel;
use super::preview::CardPreview;
use super::upload;

/// Single-screen editor. Owns the session for the lifetime of the page.
///
/// Field edits are applied synchronously by the controls. Uploads take a
/// ticket, read and decode in a spawned future, then post the result back
/// through the coroutine channel where the session decides whether the
/// ticket is still the latest.
#[component]
pub fn CardEditor() -> Element {
    let session = use_signal(EditorSession::new);

    let decoder = use_coroutine(move |mut rx: UnboundedReceiver<CardMessage>| {
        let mut session = session;
        async move {
            while let Some(message) = rx.next().await {
                session.with_mut(|s| s.apply(message));
            }
        }
    });

    let handle_upload = move |evt: FormEvent| {
        let mut session = session;
        let Some(files) = evt.files() else {
            return;
        };
        let Some(name) = upload::first_file(&files) else {
            debug!("file picker closed without a selection");
            return;
        };

        let ticket = session.with_mut(EditorSession::begin_upload);
        let tx = decoder.tx();
        platform::spawn_future(async move {
            let result = upload::read_and_decode(files, name).await;
            let _ = tx.unbounded_send(CardMessage::ImageDecoded { ticket, result });
        });
    };

    let snapshot = session.read().snapshot();

    rsx! {
        div { class: "editor",
            ControlsPanel { session, on_upload: handle_upload }
            CardPreview { snapshot }
        }
    }
}
