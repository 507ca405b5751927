mod cli;

use std::path::Path;
use std::sync::Arc;

use engage_common::{ConversationId, EventBus, SdkEvent};
use engage_config::{SpotConfig, ThemeService};
use engage_conversation::{HttpRealtimeProvider, RealtimeService};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> engage_common::Result<()> {
    let args = cli::parse();

    let log_directive = args.log_level.as_deref().unwrap_or("engage=info");
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "engage=info".parse().expect("valid directive")),
            ),
        )
        .init();

    let config = match &args.config {
        Some(path) => SpotConfig::load_from_path(Path::new(path))?,
        None => {
            // No snapshot on disk; the demo assumes the server enabled realtime.
            let mut config = SpotConfig::default();
            config.mobile_sdk.realtime_enabled = Some(true);
            config
        }
    };

    let theme = ThemeService::from_config(&config.theme);
    info!(style = %theme.current(), "theme style resolved");

    let bus = EventBus::new(16);
    let mut events = bus.subscribe();
    tokio::spawn(async move {
        while let Ok(event) = events.recv().await {
            info!(?event, "sdk event");
        }
    });

    let conversation = ConversationId::new(args.conversation.clone());
    let provider = Arc::new(HttpRealtimeProvider::new(args.base_url.clone()));
    let (handle, mut updates) = RealtimeService::spawn(&config, provider)?;

    handle.start(conversation.clone()).await;
    bus.publish(SdkEvent::RealtimeStarted(conversation.clone()));
    info!(conversation = %conversation, base_url = %args.base_url, "polling started, ctrl-c to stop");

    loop {
        tokio::select! {
            maybe_update = updates.recv() => {
                let Some(update) = maybe_update else { break };
                let counts = update
                    .snapshot
                    .data
                    .as_ref()
                    .and_then(|d| d.total_count(&update.conversation_id));
                println!(
                    "[{}] messages={} notify={} next_poll_in={}s",
                    update.conversation_id,
                    counts.map_or_else(|| "?".into(), |c| c.to_string()),
                    update.should_user_be_notified,
                    update.time_offset_secs,
                );
            }
            _ = tokio::signal::ctrl_c() => {
                bus.publish(SdkEvent::RealtimeStopped(conversation.clone()));
                handle.stop(conversation.clone()).await;
                handle.shutdown().await;
                bus.publish(SdkEvent::Shutdown);
                break;
            }
        }
    }

    info!("bye");
    Ok(())
}
