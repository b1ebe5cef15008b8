use std::sync::OnceLock;

use sokha_core::Locale;

/// Process-lifetime presentation context: the device's display locale and
/// accessibility preference. Pure presentation state, not business state —
/// initialized once on first mount and never torn down. The per-session
/// locale in [`sokha_core::SessionIdentity`] always wins for questionnaire
/// content; this only drives surrounding chrome.
#[derive(Debug, Clone, Copy)]
pub struct AppContext {
    pub locale: Locale,
    pub high_contrast: bool,
}

static CONTEXT: OnceLock<AppContext> = OnceLock::new();

impl AppContext {
    /// Install the context. Only the first call wins; later calls return
    /// the already-installed value.
    pub fn init(locale: Locale, high_contrast: bool) -> &'static AppContext {
        CONTEXT.get_or_init(|| AppContext {
            locale,
            high_contrast,
        })
    }

    /// The installed context, or defaults when nothing initialized it yet.
    pub fn current() -> AppContext {
        CONTEXT.get().copied().unwrap_or(AppContext {
            locale: Locale::En,
            high_contrast: false,
        })
    }
}
