//! Blocking browser dialogs used for failures and destructive confirmations.
//!
//! Off the web there is no dialog to show; messages go to the log and
//! confirmations are accepted.

pub fn alert(message: &str) {
    tracing::error!("{message}");
    #[cfg(target_arch = "wasm32")]
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

pub fn confirm(message: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::info!("confirm (auto-accepted): {message}");
        true
    }
}
