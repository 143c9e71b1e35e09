#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use ui::components::AppNavbar;
use ui::i18n::ActiveLocale;
use ui::views::Editor;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopNavbar)]
    #[route("/")]
    Editor {},
}

#[cfg(feature = "desktop")]
fn main() {
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(format!("Jawmax – v{}", env!("CARGO_PKG_VERSION")))
                    .with_maximized(true),
            ),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    LaunchBuilder::server().launch(App);
}

#[component]
fn App() -> Element {
    let locale = use_hook(|| {
        ui::i18n::init();
        dioxus::logger::tracing::info!(
            platform = ui::core::platform::platform_string(),
            locale = %ui::i18n::current_language(),
            "starting Jawmax"
        );
        ui::i18n::current_language()
    });
    let active = use_signal(move || locale);
    use_context_provider(|| ActiveLocale(active));

    rsx! {
        // Inlined; desktop ships no asset directory.
        document::Style { "{ui::THEME_CSS}" }
        Router::<Route> {}
    }
}

/// Layout route: shared navbar above the routed page.
#[component]
fn DesktopNavbar() -> Element {
    rsx! {
        AppNavbar {}
        Outlet::<Route> {}
    }
}
