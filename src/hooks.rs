//! Custom hooks wiring browser state into components.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use cropsight::i18n::Locale;
use cropsight::toast::Kind;

use crate::config::{OFFLINE_MESSAGE, ONLINE_MESSAGE, STORAGE_KEY_CONTRAST, STORAGE_KEY_LANG};
use crate::toast_dom::show_toast;
use crate::utils::{storage_get, storage_set};

/// Track browser connectivity and announce transitions via toasts.
#[hook]
pub fn use_online_status() -> bool {
    let online = use_state(|| gloo_utils::window().navigator().on_line());

    {
        let online = online.clone();
        use_effect_with((), move |_| {
            // A page that loads offline gets the same announcement as a
            // transition would.
            if !*online {
                show_toast(OFFLINE_MESSAGE, Kind::Error);
            }

            let window = gloo_utils::window();
            let on_online = {
                let online = online.clone();
                Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
                    online.set(true);
                    show_toast(ONLINE_MESSAGE, Kind::Success);
                })
            };
            let on_offline = {
                let online = online.clone();
                Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
                    online.set(false);
                    show_toast(OFFLINE_MESSAGE, Kind::Error);
                })
            };
            let _ = window
                .add_event_listener_with_callback("online", on_online.as_ref().unchecked_ref());
            let _ = window
                .add_event_listener_with_callback("offline", on_offline.as_ref().unchecked_ref());

            move || {
                let window = gloo_utils::window();
                let _ = window.remove_event_listener_with_callback(
                    "online",
                    on_online.as_ref().unchecked_ref(),
                );
                let _ = window.remove_event_listener_with_callback(
                    "offline",
                    on_offline.as_ref().unchecked_ref(),
                );
            }
        });
    }

    *online
}

/// Persisted interface language plus a setter that records the choice.
#[hook]
pub fn use_locale() -> (Locale, Callback<Locale>) {
    let locale = use_state(|| {
        storage_get(STORAGE_KEY_LANG)
            .map(|tag| Locale::from_tag(&tag))
            .unwrap_or_default()
    });

    // Mirror the active language onto <html lang=".."> for accessibility.
    use_effect_with(*locale, |locale| {
        let _ = gloo_utils::document_element().set_attribute("lang", locale.tag());
    });

    let set_locale = {
        let locale = locale.clone();
        Callback::from(move |next: Locale| {
            storage_set(STORAGE_KEY_LANG, next.tag());
            locale.set(next);
        })
    };

    (*locale, set_locale)
}

/// Persisted high-contrast preference applied as a body class.
#[hook]
pub fn use_high_contrast() -> (bool, Callback<()>) {
    let enabled = use_state(|| storage_get(STORAGE_KEY_CONTRAST).as_deref() == Some("true"));

    use_effect_with(*enabled, |enabled| {
        if let Some(body) = gloo_utils::document().body() {
            let classes = body.class_list();
            let result = if *enabled {
                classes.add_1("high-contrast")
            } else {
                classes.remove_1("high-contrast")
            };
            if result.is_err() {
                log::warn!("failed to toggle the high-contrast class");
            }
        }
    });

    let toggle = {
        let enabled = enabled.clone();
        Callback::from(move |_: ()| {
            let next = !*enabled;
            storage_set(STORAGE_KEY_CONTRAST, if next { "true" } else { "false" });
            show_toast(
                if next {
                    "High Contrast Mode Enabled"
                } else {
                    "Standard Mode Enabled"
                },
                Kind::Success,
            );
            enabled.set(next);
        })
    };

    (*enabled, toggle)
}
