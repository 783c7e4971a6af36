//! Color tokens for the participants list kit.
//!
//! The hex palette below backs the CSS custom properties declared in
//! `GLOBAL_STYLES`. Components reference the `var(...)` tokens so a host
//! application can retheme by overriding the custom properties.

use rosterkit_core::Tone;

// === SURFACES ===
pub const SURFACE: &str = "#141417";
pub const SURFACE_RAISED: &str = "#1e1e22";
pub const SURFACE_HOVER: &str = "#2a2a30";
pub const BORDER: &str = "#2e2e34";

// === TEXT ===
pub const TEXT_PRIMARY: &str = "#f5f5f7";
pub const TEXT_SECONDARY: &str = "rgba(245, 245, 247, 0.65)";

// === SEMANTIC LABELS (hex values behind the label tokens) ===
pub const SUCCESS: &str = "#2fa85b";
pub const WARNING: &str = "#d9820a";
pub const DANGER: &str = "#e25252";
pub const SECONDARY: &str = "#9b9ba3";

// === LABEL TOKENS ===
pub const LABEL_SUCCESS_TEXT: &str = "var(--label-success-text)";
pub const LABEL_WARNING_TEXT: &str = "var(--label-warning-text)";
pub const LABEL_ERROR_TEXT: &str = "var(--label-error-text)";
pub const LABEL_SECONDARY_TEXT: &str = "var(--label-secondary-text)";

/// Map a severity tone onto its label color token.
pub fn tone_fill(tone: Tone) -> &'static str {
    match tone {
        Tone::Success => LABEL_SUCCESS_TEXT,
        Tone::Warning => LABEL_WARNING_TEXT,
        Tone::Error => LABEL_ERROR_TEXT,
        Tone::Secondary => LABEL_SECONDARY_TEXT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_tone_has_a_token() {
        assert_eq!(tone_fill(Tone::Success), "var(--label-success-text)");
        assert_eq!(tone_fill(Tone::Warning), "var(--label-warning-text)");
        assert_eq!(tone_fill(Tone::Error), "var(--label-error-text)");
        assert_eq!(tone_fill(Tone::Secondary), "var(--label-secondary-text)");
    }
}
