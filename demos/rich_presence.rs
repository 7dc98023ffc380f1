//! Shows a rich presence entry until interrupted.
//!
//! Needs a running Discord client and the SDK shared library, either next to
//! the binary or pointed to by `DISCORD_GAME_SDK_PATH`:
//!
//! ```text
//! RUST_LOG=debug cargo run --example rich_presence -- 758184866411315221
//! ```
//!
//! With `--features profile-with-puffin` each frame is recorded by puffin.

use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use discord_game_sdk::prelude::*;
use tracing_subscriber::EnvFilter;

const FRAME: Duration = Duration::from_millis(16);

#[cfg(feature = "profile-with-puffin")]
static FRAME_VIEW: std::sync::OnceLock<puffin::GlobalFrameView> = std::sync::OnceLock::new();

#[cfg(feature = "profile-with-puffin")]
fn setup_profiler() {
    puffin::set_scopes_on(true);
    FRAME_VIEW.get_or_init(puffin::GlobalFrameView::default);
}

#[cfg(not(feature = "profile-with-puffin"))]
fn setup_profiler() {}

#[cfg(feature = "profile-with-puffin")]
fn end_frame() {
    puffin::GlobalProfiler::lock().new_frame();
}

#[cfg(not(feature = "profile-with-puffin"))]
fn end_frame() {}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());
    tracing_subscriber::fmt().with_env_filter(filter).init();
    setup_profiler();

    let client_id = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(758184866411315221);

    let discord = Discord::builder(client_id)
        .flags(CreateFlags::NO_REQUIRE_DISCORD)
        .log_level(LogLevel::Info)
        .build()
        .expect("Failed to start the Discord client");

    let started = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs() as i64)
        .unwrap_or_default();

    let activity = Activity {
        timestamps: ActivityTimestamps {
            start: started,
            end: 0,
        },
        party: ActivityParty {
            id: "demo-party".to_owned(),
            size: PartySize {
                current_size: 1,
                max_size: 4,
            },
        },
        ..Activity::default()
            .with_state("In the lobby")
            .with_details("Waiting for players")
    };

    let activities = discord
        .activity_manager()
        .expect("Failed to get the activity manager");
    activities
        .update_activity(&activity, |result| match result {
            Ok(()) => tracing::info!("rich presence updated"),
            Err(err) => tracing::warn!("rich presence rejected: {err}"),
        })
        .expect("Failed to send the activity");
    activities.on_activity_join(|secret| tracing::info!("join requested with secret {secret}"));

    let user = discord.user_manager().expect("Failed to get the user manager");
    user.on_current_user_update(|| tracing::info!("current user is now available"));

    loop {
        if let Err(err) = discord.run_callbacks() {
            tracing::error!("discord stopped: {err}");
            break;
        }
        end_frame();
        thread::sleep(FRAME);
    }
}
