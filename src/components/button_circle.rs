//! Small circular action button.

use dioxus::prelude::*;

use super::button_pill::ButtonColor;

/// A circular pressable control, sized for inline row actions.
///
/// Pressing with no handler bound is a no-op.
#[component]
pub fn ButtonCircle(
    #[props(default = None)] color: Option<ButtonColor>,
    #[props(default = false)] disabled: bool,
    #[props(default = false)] ghost: bool,
    #[props(default = 28)] size: u32,
    #[props(default = None)] class: Option<String>,
    #[props(default = None)] onpress: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let color_class = color.map(ButtonColor::class).unwrap_or_default();
    let ghost_class = if ghost { "ghost" } else { "" };
    let extra_class = class.unwrap_or_default();
    let button_style = format!("width: {size}px; height: {size}px;");

    rsx! {
        button {
            class: "btn-circle {color_class} {ghost_class} {extra_class}",
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
    fn ghost_class_toggles() {
        let ghost_class = |ghost: bool| if ghost { "ghost" } else { "" };
        assert_eq!(ghost_class(true), "ghost");
        assert_eq!(ghost_class(false), "");
    }

    #[test]
    fn cancel_color_for_dismiss_control() {
        assert_eq!(ButtonColor::Cancel.class(), "btn-cancel");
    }
}
