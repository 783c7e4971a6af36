//! Pill shaped button.

use dioxus::prelude::*;

/// Color profiles shared by the pill and circle buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonColor {
    Join,
    Cancel,
    Message,
}

impl ButtonColor {
    pub fn class(self) -> &'static str {
        match self {
            ButtonColor::Join => "btn-join",
            ButtonColor::Cancel => "btn-cancel",
            ButtonColor::Message => "btn-message",
        }
    }
}

/// A pill shaped pressable button.
///
/// Pressing with no handler bound is a no-op.
#[component]
pub fn ButtonPill(
    #[props(default = None)] color: Option<ButtonColor>,
    #[props(default = false)] disabled: bool,
    #[props(default = false)] ghost: bool,
    #[props(default = false)] outline: bool,
    #[props(default = 40)] size: u32,
    #[props(default = None)] id: Option<String>,
    #[props(default = None)] class: Option<String>,
    #[props(default = None)] style: Option<String>,
    #[props(default = None)] onpress: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let color_class = color.map(ButtonColor::class).unwrap_or_default();
    let ghost_class = if ghost { "ghost" } else { "" };
    let outline_class = if outline { "outline" } else { "" };
    let extra_class = class.unwrap_or_default();
    let button_id = id.unwrap_or_default();
    let button_style = format!("height: {size}px; {}", style.unwrap_or_default());

    rsx! {
        button {
            class: "btn-pill {color_class} {ghost_class} {outline_class} {extra_class}",
            id: "{button_id}",
            style: "{button_style}",
            disabled: disabled,
            onclick: move |evt| {
                if let Some(handler) = onpress {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_classes() {
        assert_eq!(ButtonColor::Join.class(), "btn-join");
        assert_eq!(ButtonColor::Cancel.class(), "btn-cancel");
        assert_eq!(ButtonColor::Message.class(), "btn-message");
    }
}
