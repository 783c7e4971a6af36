//! Base layout for list item rows.
//!
//! A horizontal container with three conventional sections (start, middle,
//! end). The base owns no state; pointer enter/leave events are forwarded
//! to the caller so it can track hover itself.

use dioxus::prelude::*;

/// Outer shape of a list item row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListItemShape {
    #[default]
    Rectangle,
    Pilled,
}

impl ListItemShape {
    pub fn class(self) -> &'static str {
        match self {
            ListItemShape::Rectangle => "",
            ListItemShape::Pilled => "is-pilled",
        }
    }
}

/// Horizontal slot within a list item row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionPosition {
    Start,
    Middle,
    End,
}

impl SectionPosition {
    pub fn class(self) -> &'static str {
        match self {
            SectionPosition::Start => "section-start",
            SectionPosition::Middle => "section-middle",
            SectionPosition::End => "section-end",
        }
    }
}

/// Row container for list items.
#[component]
pub fn ListItemBase(
    #[props(default = 50)] size: u32,
    #[props(default)] shape: ListItemShape,
    #[props(default = None)] id: Option<String>,
    #[props(default = None)] class: Option<String>,
    #[props(default = None)] style: Option<String>,
    #[props(default = None)] onmouseenter: Option<EventHandler<MouseEvent>>,
    #[props(default = None)] onmouseleave: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let shape_class = shape.class();
    let extra_class = class.unwrap_or_default();
    let row_id = id.unwrap_or_default();
    let row_style = format!("height: {size}px; {}", style.unwrap_or_default());

    rsx! {
        div {
            class: "list-item-base {shape_class} {extra_class}",
            id: "{row_id}",
            style: "{row_style}",
            onmouseenter: move |evt| {
                if let Some(handler) = onmouseenter {
                    handler.call(evt);
                }
            },
            onmouseleave: move |evt| {
                if let Some(handler) = onmouseleave {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}

/// One section of a list item row.
#[component]
pub fn ListItemBaseSection(
    position: SectionPosition,
    #[props(default = None)] class: Option<String>,
    children: Element,
) -> Element {
    let position_class = position.class();
    let extra_class = class.unwrap_or_default();

    rsx! {
        div { class: "list-item-section {position_class} {extra_class}", {children} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_classes() {
        assert_eq!(ListItemShape::Rectangle.class(), "");
        assert_eq!(ListItemShape::Pilled.class(), "is-pilled");
    }

    #[test]
    fn section_classes() {
        assert_eq!(SectionPosition::Start.class(), "section-start");
        assert_eq!(SectionPosition::Middle.class(), "section-middle");
        assert_eq!(SectionPosition::End.class(), "section-end");
    }
}
