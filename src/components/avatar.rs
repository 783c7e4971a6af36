//! Avatar badge component.
//!
//! Shows an image when a source is configured, otherwise initials, and a
//! placeholder glyph when neither is available.

use dioxus::prelude::*;

/// Opaque avatar configuration, forwarded verbatim by list items.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AvatarConfig {
    /// Initials to show when no image is configured
    pub initials: Option<String>,
    /// Image URL or data URI
    pub image_src: Option<String>,
    /// Accessible label, usually the display name
    pub label: Option<String>,
}

/// Derive up to two initials from a display name.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Circular avatar badge.
#[component]
pub fn Avatar(#[props(default)] config: AvatarConfig, #[props(default = 32)] size: u32) -> Element {
    let dimensions = format!("width: {size}px; height: {size}px;");
    let label = config.label.clone().unwrap_or_default();
    let shown_initials = config
        .initials
        .clone()
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| "?".to_string());

    rsx! {
        div {
            class: "avatar",
            style: "{dimensions}",
            title: "{label}",
            if let Some(src) = config.image_src.clone() {
                img { class: "avatar-image", src: "{src}", alt: "{label}" }
            } else {
                span { class: "avatar-initials", "{shown_initials}" }
            }
        }
    }
}
