#![allow(non_snake_case)]

mod app;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use rosterkit::Roster;

/// Roster shown by the demo window, set once at startup.
static ROSTER: OnceLock<Roster> = OnceLock::new();

/// Get the active roster (fixture or built-in sample).
pub fn current_roster() -> &'static Roster {
    ROSTER.get_or_init(Roster::sample)
}

/// Participants list demo
#[derive(Parser, Debug)]
#[command(name = "rosterkit-desktop")]
#[command(about = "In-meeting participants list demo")]
struct Args {
    /// Path to a JSON roster fixture
    #[arg(short, long)]
    roster: Option<PathBuf>,

    /// Window title
    #[arg(short, long)]
    title: Option<String>,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let roster = match &args.roster {
        Some(path) => match Roster::load(path) {
            Ok(roster) => roster,
            Err(e) => {
                tracing::error!("Failed to load roster from {:?}: {}", path, e);
                Roster::sample()
            }
        },
        None => Roster::sample(),
    };

    tracing::info!(
        "Starting participants list with {} participants",
        roster.participants.len()
    );
    let _ = ROSTER.set(roster);

    let title = args.title.unwrap_or_else(|| "Participants".to_string());

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(380.0, 640.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
