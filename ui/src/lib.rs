//! Shared UI crate for Jawmax. The editor core and every view live here;
//! the platform crates only launch it.

pub mod core;
pub mod editor;
pub mod i18n;
pub mod views;

/// Shared theme stylesheet, inlined by both platform shells.
pub const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/theme/main.css"
));

pub mod components {
    // Localized application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::AppNavbar;
}
