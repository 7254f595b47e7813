//! Main module for the CropSight web frontend using Yew.
//! Wires UI components, browser hooks, and the imperative widget drivers.

use wasm_bindgen_futures::spawn_local;
use web_sys::File;
use yew::prelude::*;

use cropsight::i18n;
use cropsight::toast::Kind;
use cropsight::Diagnosis;

mod api;
mod components;
mod config;
mod gauge_dom;
mod hooks;
mod registry;
mod toast_dom;
mod utils;

use api::PredictReply;
use components::{ChatWidget, LanguagePicker, OfflineBanner, ResultCard, UploadCard};
use gauge_dom::draw_gauge;
use toast_dom::show_toast;

/// Primary application component.
#[function_component(App)]
fn app() -> Html {
    let (locale, set_locale) = hooks::use_locale();
    let online = hooks::use_online_status();
    let (_contrast, toggle_contrast) = hooks::use_high_contrast();

    let analysis = use_state(|| None::<(PredictReply, Diagnosis)>);
    let analyzing = use_state(|| false);

    let on_pick = {
        let analysis = analysis.clone();
        let analyzing = analyzing.clone();
        Callback::from(move |file: File| {
            if let Err(message) =
                utils::validate_upload(&file.name(), file.size(), config::MAX_UPLOAD_BYTES)
            {
                show_toast(&message, Kind::Error);
                return;
            }

            analyzing.set(true);
            let analysis = analysis.clone();
            let analyzing = analyzing.clone();
            spawn_local(async move {
                match api::predict(&file).await {
                    Ok(reply) => match Diagnosis::from_score(reply.score) {
                        Ok(diagnosis) => {
                            analysis.set(Some((reply, diagnosis)));
                            show_toast("Analysis complete", Kind::Success);
                        }
                        Err(err) => {
                            log::error!("prediction score rejected: {}", err);
                            show_toast("Analysis failed. Please try again.", Kind::Error);
                        }
                    },
                    Err(err) => {
                        log::warn!("prediction request failed: {}", err);
                        show_toast("Analysis failed. Please try again.", Kind::Error);
                    }
                }
                analyzing.set(false);
            });
        })
    };

    // Draw the gauge once the result card is in the document. Re-running
    // for a new result implicitly cancels the previous animation via the
    // target's generation counter.
    use_effect_with((*analysis).clone(), |analysis| {
        if let Some((_, diagnosis)) = analysis {
            draw_gauge(
                f64::from(diagnosis.confidence_percent()),
                config::GAUGE_CONTAINER_ID,
            );
        }
    });

    let on_reset = {
        let analysis = analysis.clone();
        Callback::from(move |_: ()| analysis.set(None))
    };

    let t = |key: &'static str| i18n::get(locale, key);

    html! {
        <div class="app">
            <nav id="navbar" class={classes!("navbar", (!online).then_some("offline"))}>
                <span class="brand">{ t("appName") }</span>
                <div class="nav-links">
                    <a href="#home">{ t("navHome") }</a>
                    <a href="#detect">{ t("navDetect") }</a>
                    <a href="#schemes">{ t("navSchemes") }</a>
                </div>
                <div class="nav-controls">
                    <LanguagePicker locale={locale} on_change={set_locale} />
                    <button
                        class="contrast-toggle"
                        onclick={toggle_contrast.reform(|_: MouseEvent| ())}
                        aria-label="Toggle high contrast"
                    >
                        { "◐" }
                    </button>
                </div>
            </nav>

            <OfflineBanner online={online} />

            <header class="hero" id="home">
                <h1>{ t("heroTitle") }</h1>
                <p class="hero-subtitle">{ t("heroSubtitle") }</p>
                <p class="hero-description">{ t("heroDescription") }</p>
            </header>

            <main class="content" id="detect">
                if let Some((reply, diagnosis)) = (*analysis).clone() {
                    <ResultCard
                        locale={locale}
                        reply={reply}
                        diagnosis={diagnosis}
                        on_reset={on_reset}
                    />
                } else {
                    <UploadCard locale={locale} busy={*analyzing} on_pick={on_pick} />
                }
            </main>

            <ChatWidget locale={locale} />

            <footer class="footer">
                <p>{ t("footerTagline") }</p>
            </footer>
        </div>
    }
}

/// Entry point: logging, panic hook, and the Yew renderer.
fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    yew::Renderer::<App>::new().render();
}
