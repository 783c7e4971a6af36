//! Rosterkit Core Library
//!
//! Presentation state and roster model for the in-meeting participants
//! list. This crate is framework free: it owns the enumerated scheduler
//! and action kinds, the pure derivation from props plus hover flag to a
//! list item's visible features, and the participant/roster data model
//! consumed by the UI crate.
//!
//! ## Overview
//!
//! Rendering a participant row is a pure mapping. The UI layer collects a
//! prop bag and the transient hover flag, calls
//! [`DisplayState::derive`], and hands the result to passive leaf
//! primitives. Nothing here is memoized or persisted; identical inputs
//! always yield identical state.
//!
//! ## Quick Start
//!
//! ```
//! use rosterkit_core::{ActionKind, DisplayState, SchedulerState};
//!
//! let actions = [ActionKind::CloseOnHover, ActionKind::Mute];
//! let state = DisplayState::derive(SchedulerState::Available, Some(&actions), false);
//!
//! assert!(state.scheduler_icon.is_some());
//! assert!(state.show_mute_action);
//! // The dismiss control stays hidden until the pointer hovers the row.
//! assert!(!state.hover_action_visible());
//! ```

pub mod display;
pub mod error;
pub mod roster;

// Re-exports
pub use display::{
    mute_icon, text_layout, ActionKind, DisplayState, IconName, MuteIcon, SchedulerState,
    StatusIcon, TextLayout, Tone,
};
pub use error::RosterError;
pub use roster::{Participant, ParticipantId, Roster};
