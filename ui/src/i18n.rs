//! Localized strings for the editor.
//!
//! Fluent bundles live under `i18n/<lang>/jawmax-ui.ftl` and are embedded at
//! compile time. `en-US` is the fallback; every other locale must define the
//! same message ids (checked by `tests/locale_keys.rs`).
//!
//! Views call [`init`] (idempotent) and look strings up with [`t!`](crate::t).
//! Components that render translated text call [`use_locale`] so they
//! re-render when the navbar switches language.
use std::sync::Once;

use dioxus::prelude::*;
use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::LanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// Looks a message up in the shared [`LOADER`].
///
/// `t!("control-zoom")`, or with Fluent arguments `t!("bar-label", name = "psl")`.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

const DOMAIN: &str = "jawmax-ui";
const FALLBACK: &str = "en-US";

#[derive(Embed)]
#[folder = "i18n"]
struct Locales;

pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = FALLBACK.parse().expect("fallback tag parses");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Load bundles for the platform's preferred languages.
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        match i18n_embed::select(&*LOADER, &Locales, &requested) {
            Ok(selected) => tracing::debug!(?selected, "locale selected"),
            Err(err) => tracing::warn!("locale selection failed, using {FALLBACK}: {err}"),
        }
    });
}

/// Tag of the bundle currently answering lookups.
pub fn current_language() -> String {
    LOADER
        .current_languages()
        .first()
        .map(ToString::to_string)
        .unwrap_or_else(|| FALLBACK.to_string())
}

/// Reactive locale tag provided by the platform shell.
#[derive(Clone, Copy, PartialEq)]
pub struct ActiveLocale(pub Signal<String>);

/// Subscribe the calling component to locale changes.
///
/// Returns the active tag, or an empty string when no shell provided one.
pub fn use_locale() -> String {
    try_use_context::<ActiveLocale>()
        .map(|ActiveLocale(tag)| tag())
        .unwrap_or_default()
}

/// Switch the active locale. Unparseable tags are ignored.
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let Ok(lang) = tag.parse::<LanguageIdentifier>() else {
        return Ok(());
    };
    i18n_embed::select(&*LOADER, &Locales, &[lang]).map(|_| ())
}

/// Embedded locale tags, sorted, for the navbar picker.
pub fn available_languages() -> Vec<String> {
    let mut langs: Vec<String> = Locales::iter()
        .filter_map(|path| path.split('/').next().map(str::to_owned))
        .collect();
    langs.sort();
    langs.dedup();
    langs
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}
