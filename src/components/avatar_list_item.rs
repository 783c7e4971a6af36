//! Avatar list item for in-meeting participants lists.
//!
//! Renders one participant row: avatar, scheduler status icon, one or two
//! text lines, and up to three action controls. All visible features are
//! derived fresh each render from the props and the hover flag; the hover
//! flag is the only state the component owns.

use dioxus::prelude::*;
use rosterkit_core::{
    mute_icon, text_layout, ActionKind, DisplayState, IconName, SchedulerState, TextLayout,
};

use super::avatar::{Avatar, AvatarConfig};
use super::button_circle::ButtonCircle;
use super::button_pill::ButtonColor;
use super::icon::{Icon, IconWeight};
use super::list_item_base::{ListItemBase, ListItemBaseSection, ListItemShape, SectionPosition};
use super::text::{Text, TextType};
use crate::theme::tone_fill;

#[derive(Props, Clone, PartialEq)]
pub struct AvatarListItemProps {
    /// Element id passed through to the row container
    #[props(default = None)]
    pub id: Option<String>,
    /// Extra class passed through to the row container
    #[props(default = None)]
    pub class: Option<String>,
    /// Inline style passed through to the row container
    #[props(default = None)]
    pub style: Option<String>,
    /// Scheduler availability shown next to the name
    #[props(default)]
    pub scheduler_state: SchedulerState,
    /// Primary text line
    pub first_line: String,
    /// Optional secondary text line
    #[props(default = None)]
    pub second_line: Option<String>,
    /// Selects the mute icon variant and its error fill
    #[props(default = false)]
    pub is_muted: bool,
    /// Action controls to enable; absent means none
    #[props(default = None)]
    pub display_actions: Option<Vec<ActionKind>>,
    /// Called when the hover dismiss control is pressed
    #[props(default = None)]
    pub on_hover_action: Option<EventHandler<()>>,
    /// Called when the mute toggle is pressed
    #[props(default = None)]
    pub on_press_mute_action: Option<EventHandler<()>>,
    /// Forwarded verbatim to the avatar
    #[props(default)]
    pub avatar_props: AvatarConfig,
}

/// One participant row.
#[component]
pub fn AvatarListItem(props: AvatarListItemProps) -> Element {
    let mut hovered = use_signal(|| false);

    let state = DisplayState::derive(
        props.scheduler_state,
        props.display_actions.as_deref(),
        *hovered.read(),
    );

    let on_hover_action = props.on_hover_action;
    let on_press_mute_action = props.on_press_mute_action;

    let mute = mute_icon(props.is_muted);
    let mute_fill = mute.fill.map(|tone| tone_fill(tone).to_string());

    let (primary, secondary) = match text_layout(&props.first_line, props.second_line.as_deref()) {
        TextLayout::OneLine { primary } => (primary.to_string(), None),
        TextLayout::TwoLine { primary, secondary } => {
            (primary.to_string(), Some(secondary.to_string()))
        }
    };

    rsx! {
        ListItemBase {
            size: 50,
            shape: ListItemShape::Pilled,
            id: props.id.clone(),
            class: props.class.clone(),
            style: props.style.clone(),
            onmouseenter: move |_| hovered.set(true),
            onmouseleave: move |_| hovered.set(false),

            ListItemBaseSection { position: SectionPosition::Start,
                Avatar { size: 32, config: props.avatar_props.clone() }
            }

            ListItemBaseSection { position: SectionPosition::Middle,
                if let Some(icon) = state.scheduler_icon {
                    Icon {
                        name: icon.name,
                        scale: 16,
                        weight: IconWeight::Bold,
                        fill_color: Some(tone_fill(icon.tone).to_string()),
                    }
                }
                div { class: "avatar-list-item-lines",
                    if let Some(secondary) = secondary {
                        Text { text_type: TextType::BodyPrimary, "{primary}" }
                        Text { text_type: TextType::BodySecondary, "{secondary}" }
                    } else {
                        Text { text_type: TextType::BodyPrimary, "{primary}" }
                    }
                }
            }

            ListItemBaseSection { position: SectionPosition::End,
                if state.hover_action_visible() {
                    ButtonCircle {
                        color: Some(ButtonColor::Cancel),
                        size: 28,
                        onpress: move |_| {
                            if let Some(handler) = on_hover_action {
                                handler.call(());
                            }
                        },
                        Icon { name: IconName::Cancel, scale: 16, weight: IconWeight::Bold }
                    }
                }
                if state.show_more_action {
                    ButtonCircle { ghost: true, size: 28,
                        Icon { name: IconName::More, scale: 16, weight: IconWeight::Bold }
                    }
                }
                if state.show_mute_action {
                    ButtonCircle {
                        ghost: true,
                        size: 28,
                        onpress: move |_| {
                            if let Some(handler) = on_press_mute_action {
                                handler.call(());
                            }
                        },
                        Icon {
                            name: mute.name,
                            scale: 16,
                            weight: IconWeight::Bold,
                            fill_color: mute_fill.clone(),
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rosterkit_core::Tone;

    #[test]
    fn muted_row_uses_error_fill() {
        let mute = mute_icon(true);
        let fill = mute.fill.map(|tone| tone_fill(tone).to_string());
        assert_eq!(mute.name, IconName::MicrophoneMuted);
        assert_eq!(fill.as_deref(), Some("var(--label-error-text)"));
    }

    #[test]
    fn unmuted_row_has_no_fill_override() {
        let mute = mute_icon(false);
        assert_eq!(mute.name, IconName::MicrophoneOn);
        assert!(mute.fill.is_none());
    }

    #[test]
    fn scheduler_tones_map_to_label_tokens() {
        let icon = SchedulerState::Available.icon().unwrap();
        assert_eq!(icon.tone, Tone::Success);
        assert_eq!(tone_fill(icon.tone), "var(--label-success-text)");

        let icon = SchedulerState::Unknown.icon().unwrap();
        assert_eq!(tone_fill(icon.tone), "var(--label-error-text)");
    }
}
