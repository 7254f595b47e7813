//! Thread-local generation registry for gauge render targets.
//!
//! Every `draw_gauge` call bumps the generation of its target id. Timer
//! callbacks capture the generation they were started under and check it
//! before touching the DOM, so an animation belonging to an earlier draw of
//! the same target becomes a no-op instead of corrupting the fresh one.
//! Thread-local to avoid synchronization overhead in WASM.

use std::cell::RefCell;
use std::collections::HashMap;

thread_local! {
    static GENERATIONS: RefCell<HashMap<String, u64>> = RefCell::new(HashMap::new());
}

/// Start a new generation for `target_id` and return it.
pub fn bump(target_id: &str) -> u64 {
    GENERATIONS.with(|map| {
        let mut map = map.borrow_mut();
        let slot = map.entry(target_id.to_owned()).or_insert(0);
        *slot += 1;
        *slot
    })
}

/// Whether `generation` is still the live one for `target_id`.
pub fn is_current(target_id: &str, generation: u64) -> bool {
    GENERATIONS.with(|map| map.borrow().get(target_id).copied() == Some(generation))
}
