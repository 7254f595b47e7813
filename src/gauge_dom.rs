//! DOM driver for the confidence gauge.
//!
//! `draw_gauge` validates its input, replaces the target's contents with
//! fresh SVG markup, and then steps the pure animation from
//! [`cropsight::gauge`] on a frame-rate interval, feeding it real elapsed
//! time. Redrawing a target bumps its generation, which turns any older
//! in-flight animation for the same target into a no-op.

use std::cell::RefCell;
use std::rc::Rc;

use cropsight::gauge::{self, GaugeAnimation};
use gloo_timers::callback::Interval;
use web_sys::Element;

use crate::config::FRAME_MS;
use crate::registry;
use crate::utils::now_ms;

/// Render an animated confidence gauge into the element with id `target_id`.
///
/// Invalid percentages and missing targets are logged and otherwise
/// ignored; neither mutates the document.
pub fn draw_gauge(percentage: f64, target_id: &str) {
    let percent = match gauge::validate_percent(percentage) {
        Ok(p) => p,
        Err(err) => {
            log::error!("gauge: {}", err);
            return;
        }
    };
    let Some(container) = gloo_utils::document().get_element_by_id(target_id) else {
        log::warn!("gauge container not found: {}", target_id);
        return;
    };

    let generation = registry::bump(target_id);
    container.set_inner_html(&gauge::svg_markup(percent));
    let fill = container.query_selector(".gauge-fill").ok().flatten();
    let label = container.query_selector(".confidence-value").ok().flatten();

    animate(
        GaugeAnimation::new(percent),
        container,
        fill,
        label,
        target_id.to_owned(),
        generation,
    );
}

fn animate(
    mut animation: GaugeAnimation,
    container: Element,
    fill: Option<Element>,
    label: Option<Element>,
    target_id: String,
    generation: u64,
) {
    let mut last_tick = now_ms();
    // The interval hands itself to its own callback so completion (or
    // staleness) can cancel the timer instead of leaking it.
    let handle: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
    let slot = handle.clone();

    let interval = Interval::new(FRAME_MS, move || {
        // A newer draw on this target, or a detached container, makes this
        // animation stale; stop without touching the DOM.
        if !registry::is_current(&target_id, generation) || !container.is_connected() {
            slot.borrow_mut().take();
            return;
        }

        let now = now_ms();
        let done = animation.advance(now - last_tick);
        last_tick = now;

        let frame = animation.frame();
        if let Some(fill) = fill.as_ref() {
            let _ = fill.set_attribute("stroke-dashoffset", &format!("{:.3}", frame.offset));
        }
        if let Some(label) = label.as_ref() {
            label.set_text_content(Some(&format!("{}%", frame.label_percent)));
        }

        if done {
            slot.borrow_mut().take();
        }
    });
    *handle.borrow_mut() = Some(interval);
}
