//! Inline SVG icon renderer.
//!
//! Icons are stroke based on a 24x24 viewbox. The optional `fill_color`
//! prop accepts a color token such as `var(--label-error-text)`; without
//! it the icon inherits `currentColor` from its surroundings.

use dioxus::prelude::*;
use rosterkit_core::IconName;

/// Stroke weight variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconWeight {
    #[default]
    Regular,
    Bold,
}

impl IconWeight {
    fn stroke_width(self) -> &'static str {
        match self {
            IconWeight::Regular => "2",
            IconWeight::Bold => "2.5",
        }
    }
}

const CIRCLE: &str = "M12 2a10 10 0 1 0 0 20 10 10 0 1 0 0-20Z";

/// Path data for each icon.
fn path_data(name: IconName) -> &'static [&'static str] {
    match name {
        IconName::SchedulerAvailable => &["M21.8 10A10 10 0 1 1 17 3.34", "m9 11 3 3L22 4"],
        IconName::SchedulerUnavailable => &[CIRCLE, "M8 12h8"],
        IconName::SchedulerUnknown => &[
            CIRCLE,
            "M9.09 9a3 3 0 0 1 5.83 1c0 2-3 3-3 3",
            "M12 17h.01",
        ],
        IconName::SchedulerQuietHours => &["M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z"],
        IconName::Cancel => &["M18 6 6 18", "m6 6 12 12"],
        IconName::More => &["M5 12h.01", "M12 12h.01", "M19 12h.01"],
        IconName::MicrophoneMuted => &[
            "m2 2 20 20",
            "M9 9v3a3 3 0 0 0 5.12 2.12",
            "M15 9.34V5a3 3 0 0 0-5.68-1.33",
            "M17 16.95A7 7 0 0 1 5 12v-2",
            "M19 10v2a7 7 0 0 1-.11 1.23",
            "M12 19v3",
        ],
        IconName::MicrophoneOn => &[
            "M12 2a3 3 0 0 0-3 3v7a3 3 0 0 0 6 0V5a3 3 0 0 0-3-3Z",
            "M19 10v2a7 7 0 0 1-14 0v-2",
            "M12 19v3",
        ],
    }
}

/// A single icon.
#[component]
pub fn Icon(
    name: IconName,
    #[props(default = 16)] scale: u32,
    #[props(default)] weight: IconWeight,
    #[props(default = None)] fill_color: Option<String>,
    #[props(default = None)] class: Option<String>,
) -> Element {
    let stroke = fill_color.unwrap_or_else(|| "currentColor".to_string());
    let stroke_width = weight.stroke_width();
    let extra_class = class.unwrap_or_default();

    rsx! {
        svg {
            class: "icon icon-{name} {extra_class}",
            width: "{scale}",
            height: "{scale}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "{stroke}",
            stroke_width: "{stroke_width}",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            for d in path_data(name) {
                path { d: "{d}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_icon_has_path_data() {
        let names = [
            IconName::SchedulerAvailable,
            IconName::SchedulerUnavailable,
            IconName::SchedulerUnknown,
            IconName::SchedulerQuietHours,
            IconName::Cancel,
            IconName::More,
            IconName::MicrophoneMuted,
            IconName::MicrophoneOn,
        ];
        for name in names {
            assert!(!path_data(name).is_empty(), "no paths for {name}");
        }
    }

    #[test]
    fn weight_maps_to_stroke_width() {
        assert_eq!(IconWeight::Regular.stroke_width(), "2");
        assert_eq!(IconWeight::Bold.stroke_width(), "2.5");
    }
}
