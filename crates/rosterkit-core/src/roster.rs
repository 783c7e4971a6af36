//! Participant and roster types for meeting views.
//!
//! A [`Roster`] is the data a meeting view feeds into the list item
//! components: one [`Participant`] per row. Rosters can be built in code or
//! loaded from a JSON fixture. Fixture parsing is lenient where the list
//! item itself is lenient: unknown scheduler states degrade to no icon and
//! unknown or malformed action entries are dropped, never surfaced as
//! errors.

use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};
use ulid::Ulid;

use crate::display::{ActionKind, SchedulerState};
use crate::error::RosterError;

/// Unique identifier for a participant.
///
/// Uses ULID for time-ordered identifiers that sort lexicographically.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParticipantId(pub Ulid);

impl ParticipantId {
    /// Create a new ParticipantId with the current timestamp.
    pub fn new() -> Self {
        Self(Ulid::new())
    }

    /// Parse from string representation.
    pub fn from_string(s: &str) -> Result<Self, ulid::DecodeError> {
        Ok(Self(Ulid::from_string(s)?))
    }
}

impl Default for ParticipantId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single participant row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    /// Unique identifier, generated when the fixture omits one
    #[serde(default)]
    pub id: ParticipantId,
    /// Display name, the primary text line
    pub name: String,
    /// Optional secondary text line (role, company, pronouns)
    #[serde(default)]
    pub role: Option<String>,
    /// Scheduler availability shown next to the name
    #[serde(default)]
    pub scheduler_state: SchedulerState,
    /// Whether the participant's microphone is muted
    #[serde(default)]
    pub is_muted: bool,
    /// Action controls requested for this row
    #[serde(default, deserialize_with = "lenient_actions")]
    pub actions: Vec<ActionKind>,
    /// Optional avatar image URL
    #[serde(default)]
    pub avatar_url: Option<String>,
    /// Unix timestamp of when the participant joined
    #[serde(default = "now_ts")]
    pub joined_at: i64,
}

fn now_ts() -> i64 {
    chrono::Utc::now().timestamp()
}

impl Participant {
    /// Create a participant with the given display name and defaults
    /// everywhere else.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ParticipantId::new(),
            name: name.into(),
            role: None,
            scheduler_state: SchedulerState::default(),
            is_muted: false,
            actions: Vec::new(),
            avatar_url: None,
            joined_at: now_ts(),
        }
    }

    /// Set the secondary text line.
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// Set the scheduler availability.
    pub fn with_scheduler(mut self, state: SchedulerState) -> Self {
        self.scheduler_state = state;
        self
    }

    /// Set the mute flag.
    pub fn with_muted(mut self, muted: bool) -> Self {
        self.is_muted = muted;
        self
    }

    /// Set the requested action controls.
    pub fn with_actions(mut self, actions: impl Into<Vec<ActionKind>>) -> Self {
        self.actions = actions.into();
        self
    }
}

/// Accept anything in the `actions` slot. Non-arrays and unrecognized
/// entries mean "not requested", matching the list item's own fallback.
fn lenient_actions<'de, D>(deserializer: D) -> Result<Vec<ActionKind>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Array(entries) => entries
            .iter()
            .filter_map(|entry| entry.as_str())
            .filter_map(ActionKind::from_name)
            .collect(),
        _ => Vec::new(),
    })
}

/// A meeting roster: the participants list plus optional meeting metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Roster {
    /// Meeting title shown above the list
    #[serde(default)]
    pub meeting_name: Option<String>,
    /// Participants in display order
    #[serde(default)]
    pub participants: Vec<Participant>,
}

impl Roster {
    /// Parse a roster from JSON text.
    pub fn from_json_str(raw: &str) -> Result<Self, RosterError> {
        let roster: Self = serde_json::from_str(raw)?;
        Ok(roster)
    }

    /// Load a roster from a JSON fixture file.
    pub fn load(path: &Path) -> Result<Self, RosterError> {
        let raw = std::fs::read_to_string(path)?;
        let roster = Self::from_json_str(&raw)?;
        tracing::debug!(
            "Loaded roster with {} participants from {:?}",
            roster.participants.len(),
            path
        );
        Ok(roster)
    }

    /// Earliest join timestamp, used as the meeting start time.
    pub fn started_at(&self) -> Option<i64> {
        self.participants.iter().map(|p| p.joined_at).min()
    }

    /// A built-in roster used when no fixture is supplied.
    pub fn sample() -> Self {
        use ActionKind::*;

        let participants = vec![
            Participant::new("Maya Okafor")
                .with_role("Host")
                .with_scheduler(SchedulerState::Available)
                .with_actions([More, Mute]),
            Participant::new("Jonas Lindqvist")
                .with_scheduler(SchedulerState::Unavailable)
                .with_muted(true)
                .with_actions([CloseOnHover, More, Mute]),
            Participant::new("Priya Raman")
                .with_role("Design")
                .with_scheduler(SchedulerState::QuietHours)
                .with_actions([CloseOnHover, Mute]),
            Participant::new("Sam Whitfield")
                .with_scheduler(SchedulerState::Unknown)
                .with_actions([CloseOnHover, More]),
            Participant::new("Lena Fischer").with_role("Guest"),
        ];

        Self {
            meeting_name: Some("Weekly sync".to_string()),
            participants,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_participant_gets_defaults() {
        let participant: Participant = serde_json::from_str(r#"{"name": "Ada"}"#).unwrap();
        assert_eq!(participant.name, "Ada");
        assert_eq!(participant.scheduler_state, SchedulerState::None);
        assert!(!participant.is_muted);
        assert!(participant.actions.is_empty());
        assert!(participant.role.is_none());
    }

    #[test]
    fn unknown_action_entries_are_dropped() {
        let participant: Participant = serde_json::from_str(
            r#"{"name": "Ada", "actions": ["mute", "wave", "more", 7]}"#,
        )
        .unwrap();
        assert_eq!(participant.actions, vec![ActionKind::Mute, ActionKind::More]);
    }

    #[test]
    fn non_array_actions_mean_none_requested() {
        let participant: Participant =
            serde_json::from_str(r#"{"name": "Ada", "actions": "mute"}"#).unwrap();
        assert!(participant.actions.is_empty());
    }

    #[test]
    fn started_at_is_earliest_join() {
        let mut roster = Roster::sample();
        roster.participants[0].joined_at = 100;
        roster.participants[1].joined_at = 50;
        assert_eq!(roster.started_at(), Some(50));

        assert_eq!(Roster::default().started_at(), None);
    }

    #[test]
    fn sample_roster_is_usable() {
        let roster = Roster::sample();
        assert!(!roster.participants.is_empty());
        assert!(roster
            .participants
            .iter()
            .any(|p| p.actions.contains(&ActionKind::CloseOnHover)));
    }
}
