//! Yew view components for the CropSight UI.

use wasm_bindgen_futures::spawn_local;
use web_sys::{File, HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use cropsight::i18n::{self, Locale};
use cropsight::Diagnosis;

use crate::api::{self, PredictReply};
use crate::config::{CHAT_FALLBACK_MESSAGE, GAUGE_CONTAINER_ID, OFFLINE_MESSAGE};

/// Dropdown selecting the interface language.
#[derive(Properties, PartialEq)]
pub struct LanguagePickerProps {
    pub locale: Locale,
    pub on_change: Callback<Locale>,
}

#[function_component(LanguagePicker)]
pub fn language_picker(props: &LanguagePickerProps) -> Html {
    let onchange = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_change.emit(Locale::from_tag(&select.value()));
        })
    };

    html! {
        <select class="language-select" onchange={onchange}>
            { for Locale::ALL.iter().map(|locale| html! {
                <option value={locale.tag()} selected={*locale == props.locale}>
                    { locale.label() }
                </option>
            }) }
        </select>
    }
}

/// Banner shown while the browser reports no connectivity.
#[derive(Properties, PartialEq)]
pub struct OfflineBannerProps {
    pub online: bool,
}

#[function_component(OfflineBanner)]
pub fn offline_banner(props: &OfflineBannerProps) -> Html {
    if props.online {
        return html! {};
    }
    html! {
        <div id="offlineIndicator" class="offline-indicator">
            { "📡 " }{ OFFLINE_MESSAGE }
        </div>
    }
}

/// Image picker card for the detect flow.
#[derive(Properties, PartialEq)]
pub struct UploadCardProps {
    pub locale: Locale,
    pub busy: bool,
    pub on_pick: Callback<File>,
}

#[function_component(UploadCard)]
pub fn upload_card(props: &UploadCardProps) -> Html {
    let onchange = {
        let on_pick = props.on_pick.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Some(file) = input.files().and_then(|list| list.get(0)) {
                on_pick.emit(file);
            }
            // Clear the input so picking the same file again re-triggers.
            input.set_value("");
        })
    };

    html! {
        <div class="card upload-card">
            <h2>{ i18n::get(props.locale, "detectTitle") }</h2>
            <p class="card-subtitle">{ i18n::get(props.locale, "detectSubtitle") }</p>
            <label for="imageUpload">{ i18n::get(props.locale, "uploadLabel") }</label>
            <input
                id="imageUpload"
                type="file"
                accept=".png,.jpg,.jpeg"
                onchange={onchange}
                disabled={props.busy}
            />
            <p class="upload-hint">{ i18n::get(props.locale, "uploadHint") }</p>
            if props.busy {
                <p class="processing">{ i18n::get(props.locale, "loading") }</p>
            }
        </div>
    }
}

/// Analysis result: verdict, confidence gauge, and care advice.
#[derive(Properties, PartialEq)]
pub struct ResultCardProps {
    pub locale: Locale,
    pub reply: PredictReply,
    pub diagnosis: Diagnosis,
    pub on_reset: Callback<()>,
}

#[function_component(ResultCard)]
pub fn result_card(props: &ResultCardProps) -> Html {
    let verdict = if props.diagnosis.is_positive {
        props.reply.label.clone()
    } else {
        "No disease detected".to_string()
    };

    html! {
        <div class="card result-card">
            <h2>{ i18n::get(props.locale, "resultTitle") }</h2>
            <div class="result-summary">
                // The gauge driver renders into this element by id.
                <div class="gauge-wrap" id={GAUGE_CONTAINER_ID}></div>
                <div class="verdict">
                    <h3>{ verdict }</h3>
                    <p>{ format!(
                        "{}: {}%",
                        i18n::get(props.locale, "confidence"),
                        props.diagnosis.confidence_percent()
                    ) }</p>
                </div>
            </div>
            if props.diagnosis.is_positive && !props.reply.treatment.is_empty() {
                <h3>{ i18n::get(props.locale, "treatmentTitle") }</h3>
                <ul class="advice-list">
                    { for props.reply.treatment.iter().map(|line| html! { <li>{ line.as_str() }</li> }) }
                </ul>
            }
            if props.diagnosis.is_positive && !props.reply.prevention.is_empty() {
                <h3>{ i18n::get(props.locale, "preventionTitle") }</h3>
                <ul class="advice-list">
                    { for props.reply.prevention.iter().map(|line| html! { <li>{ line.as_str() }</li> }) }
                </ul>
            }
            <button class="btn-secondary" onclick={props.on_reset.reform(|_| ())}>
                { i18n::get(props.locale, "btnAnalyzeAnother") }
            </button>
        </div>
    }
}

#[derive(Clone, PartialEq)]
struct ChatLine {
    from_user: bool,
    text: String,
}

/// Floating chat widget backed by the `/api/chat` endpoint.
#[derive(Properties, PartialEq)]
pub struct ChatWidgetProps {
    pub locale: Locale,
}

#[function_component(ChatWidget)]
pub fn chat_widget(props: &ChatWidgetProps) -> Html {
    let open = use_state(|| false);
    let pending = use_state(|| false);
    let draft = use_state(String::new);
    let history = use_state(|| {
        vec![ChatLine {
            from_user: false,
            text: i18n::get(props.locale, "chatGreeting").to_string(),
        }]
    });

    let toggle = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(!*open))
    };

    let oninput = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(input.value());
        })
    };

    let send = {
        let draft = draft.clone();
        let pending = pending.clone();
        let history = history.clone();
        Callback::from(move |_: ()| {
            if *pending {
                return;
            }
            let message = draft.trim().to_string();
            if message.is_empty() {
                return;
            }

            let mut lines = (*history).clone();
            lines.push(ChatLine {
                from_user: true,
                text: message.clone(),
            });
            history.set(lines.clone());
            draft.set(String::new());
            pending.set(true);

            let history = history.clone();
            let pending = pending.clone();
            spawn_local(async move {
                let reply = match api::send_chat(&message).await {
                    Ok(text) => text,
                    Err(err) => {
                        log::warn!("chat request failed: {}", err);
                        CHAT_FALLBACK_MESSAGE.to_string()
                    }
                };
                lines.push(ChatLine {
                    from_user: false,
                    text: reply,
                });
                history.set(lines);
                pending.set(false);
            });
        })
    };

    let onkeydown = {
        let send = send.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" && !e.shift_key() {
                e.prevent_default();
                send.emit(());
            }
        })
    };

    html! {
        <div class="chat-widget">
            <button class="chat-toggle" onclick={toggle.clone()} aria-label="Open chat">
                { "🤖" }
            </button>
            if *open {
                <div class="chat-panel">
                    <div class="chat-header">
                        <div>
                            <h3>{ i18n::get(props.locale, "chatTitle") }</h3>
                            <p>{ i18n::get(props.locale, "chatSubtitle") }</p>
                        </div>
                        <button class="chat-close" onclick={toggle}>{ "×" }</button>
                    </div>
                    <div class="chat-messages">
                        { for history.iter().map(|line| {
                            let class = if line.from_user { "chat-message user" } else { "chat-message bot" };
                            html! {
                                <div class={class}>
                                    <div class="message-content">{ line.text.as_str() }</div>
                                </div>
                            }
                        }) }
                        if *pending {
                            <div class="chat-message bot">
                                <div class="message-content typing">{ "…" }</div>
                            </div>
                        }
                    </div>
                    <div class="chat-input-row">
                        <input
                            type="text"
                            value={(*draft).clone()}
                            placeholder={i18n::get(props.locale, "chatPlaceholder")}
                            oninput={oninput}
                            onkeydown={onkeydown}
                            disabled={*pending}
                        />
                        <button
                            class="chat-send"
                            onclick={send.reform(|_: MouseEvent| ())}
                            disabled={*pending}
                        >
                            { "➤" }
                        </button>
                    </div>
                </div>
            }
        </div>
    }
}
