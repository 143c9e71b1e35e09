use dioxus::prelude::*;

use crate::core::framing::Framing;
use crate::core::snapshot::{BarSnapshot, CardSnapshot};
use crate::core::state::ScoreBar;
use crate::{i18n, t};

/// Placeholder fill for the avatar circle when no image is loaded.
const PLACEHOLDER_FILL: &str = "#2b2b2b";

#[component]
pub fn CardPreview(snapshot: CardSnapshot) -> Element {
    let _locale = i18n::use_locale();
    let avatar = avatar_style(&snapshot);

    rsx! {
        div { class: "editor__preview",
            div { class: "card",
                div { class: "card__avatar-wrap",
                    if snapshot.framing.is_placeholder() {
                        div {
                            class: "card__avatar card__avatar--placeholder",
                            style: "{avatar}",
                            {t!("card-upload-prompt")}
                        }
                    } else {
                        div { class: "card__avatar", style: "{avatar}" }
                    }
                }

                div { class: "card__title-row",
                    div { class: "card__title", "{snapshot.title}" }
                }
                div { class: "card__subtitle", "PSL SCALE" }

                div { class: "card-info",
                    div { class: "card-info__grid",
                        for snap in snapshot.bars.iter() {
                            InfoBlock {
                                key: "{snap.bar.key()}",
                                label: info_label(snap.bar),
                                bar: snap.clone(),
                            }
                        }
                    }
                }

                div { class: "card__badge", "JAWMAX" }
            }
        }
    }
}

#[component]
fn InfoBlock(label: String, bar: BarSnapshot) -> Element {
    let color = bar.color.css();
    let width = bar.fill_width();

    rsx! {
        div { class: "card-info__block",
            div { class: "card-info__label", "{label}" }
            div { class: "card-info__value", "{bar.value}" }
            div { class: "card-bar",
                div {
                    class: "card-bar__fill",
                    style: "width: {width}; background: {color};",
                }
            }
        }
    }
}

fn avatar_style(snapshot: &CardSnapshot) -> String {
    match (&snapshot.framing, snapshot.image_url.as_deref()) {
        (Framing::Image(params), Some(url)) => format!(
            "background-image: url('{url}'); background-size: {}; background-position: {}; background-repeat: no-repeat;",
            params.background_size(),
            params.background_position()
        ),
        _ => format!("background-color: {PLACEHOLDER_FILL};"),
    }
}

fn info_label(bar: ScoreBar) -> String {
    match bar {
        ScoreBar::Psl => t!("info-psl-score"),
        ScoreBar::Mindset => t!("info-mindset"),
        ScoreBar::Strategy => t!("info-strategy"),
        ScoreBar::Jaw => t!("info-jaw-type"),
        ScoreBar::Breathing => t!("info-breathing"),
        ScoreBar::Appeal => t!("info-appeal"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::decode::ImageSource;
    use crate::core::framing::Offset;
    use crate::core::session::ImageFrame;
    use crate::core::state::CardState;

    #[test]
    fn placeholder_paints_flat_fill() {
        let snap = CardSnapshot::capture(&CardState::default(), &ImageFrame::default());
        assert_eq!(avatar_style(&snap), "background-color: #2b2b2b;");
    }

    #[test]
    fn image_paints_background_params() {
        let frame = ImageFrame {
            source: Some(ImageSource {
                data_url: "data:image/png;base64,AAAA".into(),
                mime: "image/png".into(),
                dimensions: Some((2, 2)),
            }),
            zoom: 0.7,
            offset: Offset::new(40.0, 55.0),
        };
        let snap = CardSnapshot::capture(&CardState::default(), &frame);
        let style = avatar_style(&snap);
        assert!(style.contains("url('data:image/png;base64,AAAA')"));
        assert!(style.contains("background-size: 100% auto;"));
        assert!(style.contains("background-position: 40% 55%;"));
    }
}
