//! Browser Dialogs

use mshexa_core::live_list::Prompter;

/// Native `confirm` / `alert`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserDialog;

impl Prompter for BrowserDialog {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }

    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
}
