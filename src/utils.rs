//! Small DOM and validation helpers shared by the app shell.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Monotonic-ish timestamp in milliseconds for animation deltas.
///
/// `performance.now()` where available, wall clock otherwise.
pub fn now_ms() -> f64 {
    gloo_utils::window()
        .performance()
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

/// Run `f` on the next animation-frame boundary.
///
/// Nest two calls to defer past the frame in which an element was inserted;
/// a class added in the same frame would skip its CSS transition.
pub fn on_next_frame<F>(f: F)
where
    F: FnOnce() + 'static,
{
    let cb = Closure::once_into_js(f);
    if let Err(err) = gloo_utils::window().request_animation_frame(cb.unchecked_ref()) {
        log::warn!("requestAnimationFrame unavailable: {:?}", err);
    }
}

/// Read a persisted preference; `None` when storage is unavailable or unset.
pub fn storage_get(key: &str) -> Option<String> {
    let storage = gloo_utils::window().local_storage().ok().flatten()?;
    storage.get_item(key).ok().flatten()
}

/// Persist a preference, best effort.
pub fn storage_set(key: &str, value: &str) {
    let Ok(Some(storage)) = gloo_utils::window().local_storage() else {
        return;
    };
    if storage.set_item(key, value).is_err() {
        log::warn!("failed to persist preference {}", key);
    }
}

/// Validate a picked file by name and size before uploading.
pub fn validate_upload(file_name: &str, size_bytes: f64, max_bytes: f64) -> Result<(), String> {
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase());
    match extension.as_deref() {
        Some("png" | "jpg" | "jpeg") => {}
        _ => return Err("Invalid file type. Use JPG/PNG.".to_string()),
    }
    if size_bytes > max_bytes {
        return Err("Image is too large. Maximum size is 5MB.".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::validate_upload;

    const MAX: f64 = 5.0 * 1024.0 * 1024.0;

    #[test]
    fn accepts_supported_image_types() {
        assert!(validate_upload("leaf.png", 1024.0, MAX).is_ok());
        assert!(validate_upload("leaf.JPG", 1024.0, MAX).is_ok());
        assert!(validate_upload("seed.sample.jpeg", 1024.0, MAX).is_ok());
    }

    #[test]
    fn rejects_other_types() {
        assert!(validate_upload("leaf.gif", 1024.0, MAX).is_err());
        assert!(validate_upload("leaf.png.exe", 1024.0, MAX).is_err());
        assert!(validate_upload("noextension", 1024.0, MAX).is_err());
    }

    #[test]
    fn rejects_oversized_files() {
        assert!(validate_upload("leaf.png", MAX + 1.0, MAX).is_err());
        assert!(validate_upload("leaf.png", MAX, MAX).is_ok());
    }
}
