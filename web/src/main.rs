use dioxus::prelude::*;

use ui::components::AppNavbar;
use ui::i18n::ActiveLocale;
use ui::views::Editor;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Editor {},
}

fn main() {
    dioxus::launch(App);
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
        document::Title { "Jawmax" }
        document::Style { "{ui::THEME_CSS}" }
        Router::<Route> {}
    }
}

/// Layout route: shared navbar above the routed page.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar {}
        Outlet::<Route> {}
    }
}
