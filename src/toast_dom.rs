//! DOM driver for the toast queue.
//!
//! Holds the process-wide queue behind a `thread_local` and translates the
//! [`Command`]s it emits into DOM mutations. Toast elements live in a
//! singleton container that is created on first use and kept for the rest
//! of the page session.

use std::cell::RefCell;

use cropsight::defaults::TOAST_SETTLE_MS;
use cropsight::toast::{Command, Kind, Toast, ToastQueue};
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsValue;
use web_sys::Element;

use crate::config::TOAST_CONTAINER_ID;
use crate::utils::on_next_frame;

thread_local! {
    static QUEUE: RefCell<ToastQueue> = RefCell::new(ToastQueue::new());
    static ACTIVE_ELEMENT: RefCell<Option<Element>> = RefCell::new(None);
    // At most one deadline is pending at a time; replacing the handle
    // drops (and thereby cancels) the previous timer.
    static PENDING_TIMER: RefCell<Option<Timeout>> = RefCell::new(None);
}

/// Enqueue a notification with the default display duration.
pub fn show_toast(message: &str, kind: Kind) {
    let commands = QUEUE.with(|q| q.borrow_mut().push(message, kind));
    apply_commands(commands);
}

fn apply_commands(commands: Vec<Command>) {
    for command in commands {
        match command {
            Command::Show(toast) => show(toast),
            Command::Hide => hide(),
            Command::Remove => remove(),
        }
    }
}

fn show(toast: Toast) {
    let duration_ms = toast.duration_ms;
    match append_element(&toast) {
        Ok(element) => {
            ACTIVE_ELEMENT.with(|slot| *slot.borrow_mut() = Some(element.clone()));
            // Double-frame deferral: the hidden initial state must be
            // committed to the render tree before the visible class lands,
            // otherwise the show transition is skipped.
            on_next_frame(move || {
                on_next_frame(move || {
                    let _ = element.class_list().add_1("show");
                });
            });
            schedule(duration_ms);
        }
        Err(err) => {
            // The queue must keep draining even when a render blows up;
            // a stuck showing flag would stall it permanently.
            log::error!("toast render failed: {:?}", err);
            let commands = QUEUE.with(|q| q.borrow_mut().abort_active());
            apply_commands(commands);
        }
    }
}

fn hide() {
    ACTIVE_ELEMENT.with(|slot| {
        if let Some(element) = slot.borrow().as_ref() {
            let _ = element.class_list().remove_1("show");
        }
    });
    schedule(TOAST_SETTLE_MS);
}

fn remove() {
    if let Some(element) = ACTIVE_ELEMENT.with(|slot| slot.borrow_mut().take()) {
        element.remove();
    }
}

fn schedule(delay_ms: f64) {
    let timer = Timeout::new(delay_ms.round() as u32, move || {
        let commands = QUEUE.with(|q| q.borrow_mut().advance(delay_ms));
        apply_commands(commands);
    });
    PENDING_TIMER.with(|slot| *slot.borrow_mut() = Some(timer));
}

fn append_element(toast: &Toast) -> Result<Element, JsValue> {
    let document = gloo_utils::document();
    let container = match document.get_element_by_id(TOAST_CONTAINER_ID) {
        Some(existing) => existing,
        None => {
            let created = document.create_element("div")?;
            created.set_id(TOAST_CONTAINER_ID);
            created.set_attribute(
                "style",
                "position: fixed; bottom: 20px; right: 20px; z-index: 9999; \
                 display: flex; flex-direction: column; gap: 10px;",
            )?;
            let body = document
                .body()
                .ok_or_else(|| JsValue::from_str("document has no body"))?;
            body.append_child(&created)?;
            created
        }
    };

    let element = document.create_element("div")?;
    element.set_class_name(&format!("toast {}", toast.kind.css_class()));
    element.set_inner_html(&toast.body_html());
    container.append_child(&element)?;
    Ok(element)
}
