use dioxus::prelude::*;

use crate::editor::CardEditor;

#[component]
pub fn Editor() -> Element {
    rsx! {
        section { class: "page page-editor",
            CardEditor {}
        }
    }
}
