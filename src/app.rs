//! Demo participants list window.

use dioxus::prelude::*;
use rosterkit::components::{initials, AvatarConfig, AvatarListItem, ButtonColor, ButtonPill};
use rosterkit::theme::GLOBAL_STYLES;

use crate::current_roster;

/// Format a unix timestamp as a relative time string.
fn format_relative_time(timestamp: i64) -> String {
    let now = chrono::Utc::now().timestamp();
    let elapsed = now.saturating_sub(timestamp).max(0);

    if elapsed < 60 {
        "just now".to_string()
    } else if elapsed < 3600 {
        format!("{}m ago", elapsed / 60)
    } else if elapsed < 86400 {
        format!("{}h ago", elapsed / 3600)
    } else {
        format!("{}d ago", elapsed / 86400)
    }
}

/// Root demo component.
///
/// Renders the roster as a list of [`AvatarListItem`] rows. The hover
/// dismiss control removes the row and the mute control toggles the
/// participant's mute flag, so both callbacks are exercised end to end.
#[component]
pub fn App() -> Element {
    let mut participants = use_signal(|| current_roster().participants.clone());

    let meeting_name = current_roster()
        .meeting_name
        .clone()
        .unwrap_or_else(|| "In this meeting".to_string());
    let started_label = current_roster().started_at().map(format_relative_time);

    let rows = participants.read().clone();
    let count = rows.len();

    rsx! {
        style { {GLOBAL_STYLES} }
        div { class: "roster-window",
            header { class: "roster-header",
                h2 { class: "roster-title",
                    "{meeting_name}"
                    span { class: "roster-count-badge", "({count})" }
                }
                if let Some(started) = started_label {
                    span { class: "roster-started", "Started {started}" }
                }
            }

            div { class: "roster-list",
                if rows.is_empty() {
                    p { class: "roster-empty", "Nobody here yet." }
                } else {
                    for participant in rows {
                        {
                            let row_id = format!("participant-{}", participant.id);
                            let id_for_dismiss = participant.id.clone();
                            let id_for_mute = participant.id.clone();
                            let name = participant.name.clone();
                            let avatar = AvatarConfig {
                                initials: Some(initials(&name)),
                                image_src: participant.avatar_url.clone(),
                                label: Some(name.clone()),
                            };

                            rsx! {
                                AvatarListItem {
                                    key: "{participant.id}",
                                    id: Some(row_id),
                                    scheduler_state: participant.scheduler_state,
                                    first_line: participant.name.clone(),
                                    second_line: participant.role.clone(),
                                    is_muted: participant.is_muted,
                                    display_actions: Some(participant.actions.clone()),
                                    avatar_props: avatar,
                                    on_hover_action: move |_| {
                                        tracing::info!("Dismissing participant {}", id_for_dismiss);
                                        participants.with_mut(|list| {
                                            list.retain(|p| p.id != id_for_dismiss);
                                        });
                                    },
                                    on_press_mute_action: move |_| {
                                        participants.with_mut(|list| {
                                            if let Some(p) =
                                                list.iter_mut().find(|p| p.id == id_for_mute)
                                            {
                                                p.is_muted = !p.is_muted;
                                                tracing::info!(
                                                    "Participant {} muted: {}",
                                                    p.name,
                                                    p.is_muted
                                                );
                                            }
                                        });
                                    },
                                }
                            }
                        }
                    }
                }
            }

            footer { class: "roster-footer",
                ButtonPill {
                    color: Some(ButtonColor::Cancel),
                    size: 36,
                    onpress: move |_| {
                        tracing::info!("Leaving meeting");
                        participants.with_mut(|list| list.clear());
                    },
                    "Leave meeting"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_time_buckets() {
        let now = chrono::Utc::now().timestamp();
        assert_eq!(format_relative_time(now), "just now");
        assert_eq!(format_relative_time(now - 120), "2m ago");
        assert_eq!(format_relative_time(now - 7200), "2h ago");
        assert_eq!(format_relative_time(now - 172800), "2d ago");
    }
}
