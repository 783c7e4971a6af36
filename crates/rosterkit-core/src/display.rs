//! Presentation state for participant list items.
//!
//! A list item's visible features are derived fresh on every render from the
//! caller-supplied properties plus the transient hover flag. The derivation
//! is a pure mapping with no caching, so identical inputs always produce
//! identical state.
//!
//! ## States
//!
//! | Scheduler state | Icon                          | Tone      |
//! |-----------------|-------------------------------|-----------|
//! | Available       | `scheduler-available`         | Success   |
//! | Unavailable     | `scheduler-unavailable`       | Warning   |
//! | Unknown         | `scheduler-unknown`           | Error     |
//! | QuietHours      | `scheduler-not-working-hours` | Secondary |
//! | None            | no icon                       |           |

use serde::{Deserialize, Deserializer, Serialize};

/// Scheduler availability of a participant, shown as a small icon next to
/// their name.
///
/// Unrecognized values fall back to [`SchedulerState::None`] when parsed,
/// which renders nothing. That fallback is deliberate: a stale or misspelled
/// state should degrade to an empty slot, never to an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum SchedulerState {
    /// Free according to their calendar
    Available,
    /// Busy according to their calendar
    Unavailable,
    /// Calendar could not be read
    Unknown,
    /// Outside their configured working hours
    QuietHours,
    /// No scheduler information requested
    #[default]
    None,
}

impl SchedulerState {
    /// Parse a state name. Returns `None` for anything unrecognized.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "available" => Some(Self::Available),
            "unavailable" => Some(Self::Unavailable),
            "unknown" => Some(Self::Unknown),
            "quietHours" => Some(Self::QuietHours),
            "none" => Some(Self::None),
            _ => None,
        }
    }

    /// Wire/display name of this state.
    pub fn name(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Unavailable => "unavailable",
            Self::Unknown => "unknown",
            Self::QuietHours => "quietHours",
            Self::None => "none",
        }
    }

    /// Status icon for this state, or `None` when nothing should render.
    pub fn icon(self) -> Option<StatusIcon> {
        match self {
            Self::Available => Some(StatusIcon {
                name: IconName::SchedulerAvailable,
                tone: Tone::Success,
            }),
            Self::Unavailable => Some(StatusIcon {
                name: IconName::SchedulerUnavailable,
                tone: Tone::Warning,
            }),
            Self::Unknown => Some(StatusIcon {
                name: IconName::SchedulerUnknown,
                tone: Tone::Error,
            }),
            Self::QuietHours => Some(StatusIcon {
                name: IconName::SchedulerQuietHours,
                tone: Tone::Secondary,
            }),
            Self::None => None,
        }
    }
}

impl std::fmt::Display for SchedulerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl<'de> Deserialize<'de> for SchedulerState {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(Self::from_name(&name).unwrap_or_default())
    }
}

/// An action control a caller can request on a list item.
///
/// Membership only: order is irrelevant and duplicates are harmless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActionKind {
    /// Dismiss control revealed while the pointer hovers the item
    CloseOnHover,
    /// Overflow menu control
    More,
    /// Mute toggle control
    Mute,
}

impl ActionKind {
    /// Parse an action name. Returns `None` for anything unrecognized.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "closeOnHover" => Some(Self::CloseOnHover),
            "more" => Some(Self::More),
            "mute" => Some(Self::Mute),
            _ => None,
        }
    }

    /// Wire/display name of this action.
    pub fn name(self) -> &'static str {
        match self {
            Self::CloseOnHover => "closeOnHover",
            Self::More => "more",
            Self::Mute => "mute",
        }
    }
}

/// Severity coding for status icons. The UI layer maps each tone onto a
/// semantic color token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Success,
    Warning,
    Error,
    Secondary,
}

/// Every icon the kit knows how to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconName {
    SchedulerAvailable,
    SchedulerUnavailable,
    SchedulerUnknown,
    SchedulerQuietHours,
    Cancel,
    More,
    MicrophoneMuted,
    MicrophoneOn,
}

impl IconName {
    /// Stable kebab-case name, used for CSS hooks and tests.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SchedulerAvailable => "scheduler-available",
            Self::SchedulerUnavailable => "scheduler-unavailable",
            Self::SchedulerUnknown => "scheduler-unknown",
            Self::SchedulerQuietHours => "scheduler-not-working-hours",
            Self::Cancel => "cancel",
            Self::More => "more",
            Self::MicrophoneMuted => "microphone-muted",
            Self::MicrophoneOn => "microphone-on",
        }
    }
}

impl std::fmt::Display for IconName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A status icon together with its severity tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusIcon {
    pub name: IconName,
    pub tone: Tone,
}

/// Icon selection for the mute toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MuteIcon {
    pub name: IconName,
    /// `Some(Tone::Error)` when muted. Unmuted carries no override so the
    /// icon inherits the ambient color.
    pub fill: Option<Tone>,
}

/// Select the microphone icon variant for the given mute flag.
pub fn mute_icon(is_muted: bool) -> MuteIcon {
    if is_muted {
        MuteIcon {
            name: IconName::MicrophoneMuted,
            fill: Some(Tone::Error),
        }
    } else {
        MuteIcon {
            name: IconName::MicrophoneOn,
            fill: None,
        }
    }
}

/// How the text block of a list item lays out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextLayout<'a> {
    OneLine { primary: &'a str },
    TwoLine { primary: &'a str, secondary: &'a str },
}

/// Pick the text layout for a first line and an optional second line.
///
/// An empty second line counts as absent.
pub fn text_layout<'a>(first_line: &'a str, second_line: Option<&'a str>) -> TextLayout<'a> {
    match second_line {
        Some(secondary) if !secondary.is_empty() => TextLayout::TwoLine {
            primary: first_line,
            secondary,
        },
        _ => TextLayout::OneLine {
            primary: first_line,
        },
    }
}

/// Visible features of a list item, recomputed on every render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayState {
    /// Icon next to the name, if any
    pub scheduler_icon: Option<StatusIcon>,
    /// Caller requested the hover dismiss control
    pub show_hover_action: bool,
    /// Caller requested the overflow menu control
    pub show_more_action: bool,
    /// Caller requested the mute toggle control
    pub show_mute_action: bool,
    /// Pointer is currently inside the item
    pub is_hovered: bool,
}

impl DisplayState {
    /// Derive the display state from the prop bag and the hover flag.
    ///
    /// An absent action collection suppresses all three controls.
    pub fn derive(
        scheduler: SchedulerState,
        actions: Option<&[ActionKind]>,
        hovered: bool,
    ) -> Self {
        let requested = |kind: ActionKind| actions.is_some_and(|list| list.contains(&kind));

        Self {
            scheduler_icon: scheduler.icon(),
            show_hover_action: requested(ActionKind::CloseOnHover),
            show_more_action: requested(ActionKind::More),
            show_mute_action: requested(ActionKind::Mute),
            is_hovered: hovered,
        }
    }

    /// The hover dismiss control renders only while the pointer is inside
    /// the item and the action was requested. The other controls are not
    /// hover gated.
    pub fn hover_action_visible(&self) -> bool {
        self.show_hover_action && self.is_hovered
    }
}
