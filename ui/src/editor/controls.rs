use dioxus::prelude::*;

use crate::core::color::{color_for, SCORE_MAX};
use crate::core::framing::{OFFSET_MAX, OFFSET_MIN, ZOOM_MAX, ZOOM_MIN, ZOOM_STEP};
use crate::core::session::{CardMessage, EditorSession};
use crate::core::state::TextField;
use crate::{i18n, t};

/// Left-hand panel: image picker, framing sliders, text fields and score sliders.
///
/// Every control turns its input event into a `CardMessage` and applies it to
/// the session right away. The file picker is the exception: it hands the raw
/// event to `on_upload`, which owns the async read/decode.
#[component]
pub fn ControlsPanel(session: Signal<EditorSession>, on_upload: EventHandler<FormEvent>) -> Element {
    let _locale = i18n::use_locale();
    let mut session = session;
    let current = session.read();
    let card = &current.card;
    let frame = &current.frame;

    let mut dispatch = move |message: CardMessage| session.with_mut(|s| s.apply(message));

    rsx! {
        aside { class: "editor__controls",
            h2 { class: "editor__heading", {t!("controls-title")} }
            div { class: "editor-panel",
                label { class: "editor-label",
                    {t!("control-profile-image")}
                    input {
                        r#type: "file",
                        accept: "image/*",
                        class: "editor-file",
                        onchange: move |evt| on_upload.call(evt),
                    }
                }

                div { class: "editor-grid",
                    RangeInput {
                        label: t!("control-zoom"),
                        min: ZOOM_MIN,
                        max: ZOOM_MAX,
                        step: ZOOM_STEP,
                        value: frame.zoom,
                        on_change: move |v: f64| dispatch(CardMessage::Zoom(v)),
                    }
                    RangeInput {
                        label: t!("control-offset-x"),
                        min: OFFSET_MIN,
                        max: OFFSET_MAX,
                        step: 1.0,
                        value: frame.offset.x,
                        on_change: move |v: f64| dispatch(CardMessage::OffsetX(v)),
                    }
                    RangeInput {
                        label: t!("control-offset-y"),
                        min: OFFSET_MIN,
                        max: OFFSET_MAX,
                        step: 1.0,
                        value: frame.offset.y,
                        on_change: move |v: f64| dispatch(CardMessage::OffsetY(v)),
                    }
                }

                for field in TextField::ALL {
                    TextInput {
                        key: "{field:?}",
                        label: field_label(field),
                        value: card.text(field).to_string(),
                        chips: field.chips(),
                        on_change: move |v: String| dispatch(CardMessage::Text(field, v)),
                    }
                }

                div { class: "editor-sliders",
                    for (bar, score) in card.score_bars.iter() {
                        ScoreSlider {
                            key: "{bar.key()}",
                            label: t!("bar-label", name = bar.key()),
                            score,
                            on_change: move |v: i64| dispatch(CardMessage::Score(bar, v)),
                        }
                    }
                }
            }
        }
    }
}

/// Text input with optional quick-pick chips underneath.
#[component]
fn TextInput(
    label: String,
    value: String,
    chips: &'static [&'static str],
    on_change: EventHandler<String>,
) -> Element {
    rsx! {
        div { class: "editor-field",
            label { class: "editor-label",
                "{label}"
                input {
                    class: "editor-input",
                    value: "{value}",
                    oninput: move |evt: FormEvent| on_change.call(evt.value()),
                }
            }
            if !chips.is_empty() {
                div { class: "editor-chips",
                    for chip in chips.iter().copied() {
                        button {
                            key: "{chip}",
                            r#type: "button",
                            class: format!(
                                "editor-chip {}",
                                if chip == value { "editor-chip--active" } else { "" }
                            ),
                            onclick: move |_| on_change.call(chip.to_string()),
                            "{chip}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn RangeInput(
    label: String,
    min: f64,
    max: f64,
    step: f64,
    value: f64,
    on_change: EventHandler<f64>,
) -> Element {
    rsx! {
        label { class: "editor-label",
            "{label}"
            input {
                r#type: "range",
                class: "editor-range",
                min: "{min}",
                max: "{max}",
                step: "{step}",
                value: "{value}",
                oninput: move |evt: FormEvent| {
                    if let Ok(parsed) = evt.value().parse::<f64>() {
                        on_change.call(parsed);
                    }
                },
            }
        }
    }
}

/// 0–100 slider tinted with the score color, plus a swatch bar beneath it.
#[component]
fn ScoreSlider(label: String, score: u8, on_change: EventHandler<i64>) -> Element {
    let color = color_for(score).css();

    rsx! {
        div { class: "editor-slider",
            label { class: "editor-label", "{label}" }
            input {
                r#type: "range",
                class: "editor-range editor-range--score",
                min: "0",
                max: "{SCORE_MAX}",
                step: "1",
                value: "{score}",
                style: "accent-color: {color};",
                oninput: move |evt: FormEvent| {
                    if let Ok(parsed) = evt.value().parse::<f64>() {
                        on_change.call(parsed.round() as i64);
                    }
                },
            }
            div { class: "editor-slider__swatch", style: "background: {color};" }
        }
    }
}

fn field_label(field: TextField) -> String {
    match field {
        TextField::Title => t!("field-title"),
        TextField::Mindset => t!("field-mindset"),
        TextField::Strategy => t!("field-strategy"),
        TextField::JawType => t!("field-jaw-type"),
        TextField::Breathing => t!("field-breathing"),
        TextField::Appeal => t!("field-appeal"),
        TextField::PslScoreLabel => t!("field-psl-score"),
    }
}
