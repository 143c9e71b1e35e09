use dioxus::prelude::*;

use crate::i18n::{self, ActiveLocale};
use crate::t;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Brand header with the locale picker.
///
/// A successful switch is written to the shell's [`ActiveLocale`], which
/// re-renders every component that called [`i18n::use_locale`].
#[component]
pub fn AppNavbar() -> Element {
    i18n::init();

    let active = try_use_context::<ActiveLocale>();
    let selected = i18n::use_locale();
    let langs = use_hook(i18n::available_languages);

    let switch = move |evt: FormEvent| {
        let tag = evt.value();
        if let Err(err) = i18n::set_language(&tag) {
            tracing::warn!(lang = %tag, "locale switch failed: {err}");
            return;
        }
        tracing::info!(lang = %tag, "locale switched");
        if let Some(ActiveLocale(mut current)) = active {
            current.set(tag);
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        // Release desktop builds have no asset server.
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header { id: "navbar", class: "navbar",
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-link",
                        span { class: "navbar__brand-spark", aria_hidden: "true" }
                        span { class: "navbar__brand-mark", "Jawmax" }
                    }
                    span { class: "navbar__brand-subtitle", {t!("tagline")} }
                }

                if langs.len() > 1 {
                    div { class: "navbar__locale",
                        label { class: "visually-hidden", r#for: "locale-select",
                            {t!("nav-language-label")}
                        }
                        select {
                            id: "locale-select",
                            value: "{selected}",
                            oninput: switch,
                            for tag in langs.iter() {
                                option { key: "{tag}", value: "{tag}", "{tag}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
