//! Styled text lines for list items.

use dioxus::prelude::*;

/// Text style variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextType {
    /// Primary line, full contrast
    #[default]
    BodyPrimary,
    /// Secondary line, reduced contrast and size
    BodySecondary,
}

impl TextType {
    pub fn class(self) -> &'static str {
        match self {
            TextType::BodyPrimary => "text-body-primary",
            TextType::BodySecondary => "text-body-secondary",
        }
    }
}

/// One line of styled text.
#[component]
pub fn Text(#[props(default)] text_type: TextType, children: Element) -> Element {
    let class = text_type.class();

    rsx! {
        p { class: "{class}", {children} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_type_classes() {
        assert_eq!(TextType::BodyPrimary.class(), "text-body-primary");
        assert_eq!(TextType::BodySecondary.class(), "text-body-secondary");
    }
}
