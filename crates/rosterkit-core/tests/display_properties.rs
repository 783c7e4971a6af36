//! Property-based tests for display state derivation
//!
//! Uses proptest to verify that the props-to-visual-state mapping is a
//! pure function with the documented gating behavior.

use proptest::prelude::*;
use rosterkit_core::{text_layout, ActionKind, DisplayState, SchedulerState, TextLayout};

// ============================================================================
// Strategy Generators
// ============================================================================

fn scheduler_state_strategy() -> impl Strategy<Value = SchedulerState> {
    prop_oneof![
        Just(SchedulerState::Available),
        Just(SchedulerState::Unavailable),
        Just(SchedulerState::Unknown),
        Just(SchedulerState::QuietHours),
        Just(SchedulerState::None),
    ]
}

fn action_kind_strategy() -> impl Strategy<Value = ActionKind> {
    prop_oneof![
        Just(ActionKind::CloseOnHover),
        Just(ActionKind::More),
        Just(ActionKind::Mute),
    ]
}

/// Optional action collections, including duplicates and empty lists.
fn actions_strategy() -> impl Strategy<Value = Option<Vec<ActionKind>>> {
    prop::option::of(prop::collection::vec(action_kind_strategy(), 0..6))
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Identical inputs always derive identical state.
    #[test]
    fn derivation_is_deterministic(
        scheduler in scheduler_state_strategy(),
        actions in actions_strategy(),
        hovered in any::<bool>(),
    ) {
        let first = DisplayState::derive(scheduler, actions.as_deref(), hovered);
        let second = DisplayState::derive(scheduler, actions.as_deref(), hovered);
        prop_assert_eq!(first, second);
    }

    /// A control is shown only when its action was requested.
    #[test]
    fn controls_require_membership(
        scheduler in scheduler_state_strategy(),
        actions in actions_strategy(),
        hovered in any::<bool>(),
    ) {
        let state = DisplayState::derive(scheduler, actions.as_deref(), hovered);
        let contains = |kind: ActionKind| {
            actions.as_deref().is_some_and(|list| list.contains(&kind))
        };

        prop_assert_eq!(state.show_hover_action, contains(ActionKind::CloseOnHover));
        prop_assert_eq!(state.show_more_action, contains(ActionKind::More));
        prop_assert_eq!(state.show_mute_action, contains(ActionKind::Mute));
    }

    /// The dismiss control is visible only while hovered; hover alone never
    /// reveals it.
    #[test]
    fn hover_gating_is_an_and(
        scheduler in scheduler_state_strategy(),
        actions in actions_strategy(),
        hovered in any::<bool>(),
    ) {
        let state = DisplayState::derive(scheduler, actions.as_deref(), hovered);
        prop_assert_eq!(
            state.hover_action_visible(),
            state.show_hover_action && hovered
        );
    }

    /// Hover only affects the dismiss control, never the other two.
    #[test]
    fn hover_does_not_leak_into_other_controls(
        scheduler in scheduler_state_strategy(),
        actions in actions_strategy(),
    ) {
        let hovered = DisplayState::derive(scheduler, actions.as_deref(), true);
        let idle = DisplayState::derive(scheduler, actions.as_deref(), false);

        prop_assert_eq!(hovered.show_more_action, idle.show_more_action);
        prop_assert_eq!(hovered.show_mute_action, idle.show_mute_action);
        prop_assert_eq!(hovered.scheduler_icon, idle.scheduler_icon);
    }

    /// Exactly the None state renders no icon.
    #[test]
    fn icon_present_unless_state_is_none(scheduler in scheduler_state_strategy()) {
        let state = DisplayState::derive(scheduler, None, false);
        prop_assert_eq!(
            state.scheduler_icon.is_none(),
            scheduler == SchedulerState::None
        );
    }

    /// Duplicate action entries behave like a set.
    #[test]
    fn duplicate_actions_are_harmless(
        actions in prop::collection::vec(action_kind_strategy(), 1..4)
    ) {
        let mut doubled = actions.clone();
        doubled.extend(actions.iter().copied());

        let from_single = DisplayState::derive(SchedulerState::None, Some(&actions), true);
        let from_doubled = DisplayState::derive(SchedulerState::None, Some(&doubled), true);
        prop_assert_eq!(from_single, from_doubled);
    }

    /// Name parsing accepts exactly the published names.
    #[test]
    fn arbitrary_names_never_panic(name in ".*") {
        if let Some(state) = SchedulerState::from_name(&name) {
            prop_assert_eq!(state.name(), name.as_str());
        }
        if let Some(kind) = ActionKind::from_name(&name) {
            prop_assert_eq!(kind.name(), name.as_str());
        }
    }

    /// The text block renders two lines exactly when a non-empty second
    /// line is supplied.
    #[test]
    fn text_layout_line_count(first in ".{0,40}", second in prop::option::of(".{0,40}")) {
        let layout = text_layout(&first, second.as_deref());
        match layout {
            TextLayout::TwoLine { primary, secondary } => {
                prop_assert_eq!(primary, &first);
                prop_assert!(!secondary.is_empty());
            }
            TextLayout::OneLine { primary } => {
                prop_assert_eq!(primary, &first);
                prop_assert!(second.as_deref().unwrap_or("").is_empty());
            }
        }
    }
}
