//! Rosterkit: presentational UI components for in-meeting participants
//! lists, built with Dioxus.
//!
//! The centerpiece is [`components::AvatarListItem`], one participant row
//! with an avatar, a scheduler status icon, one or two text lines, and up
//! to three action controls (hover dismiss, overflow menu, mute toggle).
//! The row's visible features come from
//! [`rosterkit_core::DisplayState::derive`], a pure mapping from the prop
//! bag plus the hover flag; the components here only lay the result out.
//!
//! Hosts inject [`theme::GLOBAL_STYLES`] once and can retheme by
//! overriding the CSS custom properties it declares.

#![allow(non_snake_case)]

pub mod components;
pub mod theme;

pub use rosterkit_core::{
    mute_icon, text_layout, ActionKind, DisplayState, IconName, MuteIcon, Participant,
    ParticipantId, Roster, RosterError, SchedulerState, StatusIcon, TextLayout, Tone,
};
