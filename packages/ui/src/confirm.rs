/// Ask the user to confirm with the browser's blocking `confirm()` dialog.
/// A missing window counts as "no".
#[cfg(target_arch = "wasm32")]
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Outside the browser there is nobody to ask.
#[cfg(not(target_arch = "wasm32"))]
pub fn confirm(_message: &str) -> bool {
    true
}
