//! Realtime polling service.
//!
//! Polls the realtime endpoint for one conversation at a time, on the
//! schedule the server dictates (`next_fetch - timestamp`), with bounded
//! retry on failure. A background task owns all mutable state; the
//! [`RealtimeHandle`] sends it commands, and successful fetches arrive on the
//! update receiver returned at spawn time. The service does not own its
//! consumer: dropping the receiver only discards updates.
//!
//! Fetch failures are never surfaced to the consumer. After four consecutive
//! failures polling stops silently for that conversation until an explicit
//! `start` or `refresh`.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use engage_common::{ConversationId, RealtimeError};
use engage_config::SpotConfig;
use tokio::sync::mpsc;
use tokio::time::Instant;
use tracing::{debug, error, info, warn};

use super::provider::RealtimeDataProvider;
use super::types::RealtimeSnapshot;

/// Retry interval used before any fetch has succeeded.
const DEFAULT_RETRY_OFFSET_SECS: i64 = 5;

/// Consecutive failures tolerated before polling gives up.
const MAX_FAILURES_IN_A_ROW: u32 = 3;

/// Suppression set size at which updates are reported as notifiable again.
const SUPPRESSION_NOTIFY_THRESHOLD: usize = 3;

/// Delivered to the consumer after every successful fetch.
#[derive(Debug, Clone)]
pub struct RealtimeUpdate {
    pub conversation_id: ConversationId,
    pub snapshot: RealtimeSnapshot,
    /// False when this conversation's notifications are suppressed and fewer
    /// than three conversations are suppressed overall.
    pub should_user_be_notified: bool,
    /// Seconds until the next scheduled poll, as dictated by the server.
    pub time_offset_secs: i64,
}

#[derive(Debug)]
enum Command {
    Start(ConversationId),
    Stop(ConversationId),
    Refresh,
    Shutdown,
}

pub struct RealtimeService;

impl RealtimeService {
    /// Spawn the polling task. Refuses with [`RealtimeError::Disabled`]
    /// unless the server config explicitly enables realtime.
    ///
    /// Returns `(handle, update_receiver)`.
    pub fn spawn(
        config: &SpotConfig,
        provider: Arc<dyn RealtimeDataProvider>,
    ) -> Result<(RealtimeHandle, mpsc::Receiver<RealtimeUpdate>), RealtimeError> {
        if !config.realtime_enabled() {
            debug!("realtime flag is not enabled in the configuration, refusing to start");
            return Err(RealtimeError::Disabled);
        }

        let (update_tx, update_rx) = mpsc::channel(64);
        let (command_tx, command_rx) = mpsc::channel(16);

        tokio::spawn(poll_loop(provider, update_tx, command_rx));

        Ok((RealtimeHandle { command_tx }, update_rx))
    }
}

/// Handle for driving the background polling task.
///
/// All methods are non-blocking sends; they are no-ops once the task has
/// shut down.
#[derive(Clone)]
pub struct RealtimeHandle {
    command_tx: mpsc::Sender<Command>,
}

impl RealtimeHandle {
    /// Track `conversation` and fetch immediately. Resets the failure
    /// counter; an already tracked conversation is replaced.
    pub async fn start(&self, conversation: ConversationId) {
        let _ = self.command_tx.send(Command::Start(conversation)).await;
    }

    /// Suppress update notifications for `conversation`. Polling continues
    /// internally; see `should_user_be_notified` on [`RealtimeUpdate`].
    pub async fn stop(&self, conversation: ConversationId) {
        let _ = self.command_tx.send(Command::Stop(conversation)).await;
    }

    /// Restart polling if it went idle, e.g. after the app returns to the
    /// foreground or the failure ceiling was hit.
    pub async fn refresh(&self) {
        let _ = self.command_tx.send(Command::Refresh).await;
    }

    /// End the background task.
    pub async fn shutdown(&self) {
        let _ = self.command_tx.send(Command::Shutdown).await;
    }
}

// ---------------------------------------------------------------------------
// Polling Loop
// ---------------------------------------------------------------------------

async fn poll_loop(
    provider: Arc<dyn RealtimeDataProvider>,
    update_tx: mpsc::Sender<RealtimeUpdate>,
    mut command_rx: mpsc::Receiver<Command>,
) {
    let mut conversation: Option<ConversationId> = None;
    let mut suppressed: HashSet<ConversationId> = HashSet::new();
    let mut failures_in_a_row: u32 = 0;
    // Last known good interval, used when rescheduling after a failure.
    let mut next_request_offset: i64 = DEFAULT_RETRY_OFFSET_SECS;
    let mut deadline: Option<Instant> = None;

    info!("realtime polling task starting");

    loop {
        let tick = deadline;
        let mut fetch_now = false;

        tokio::select! {
            maybe_cmd = command_rx.recv() => {
                match maybe_cmd {
                    Some(Command::Start(id)) => {
                        if let Some(old) = conversation.as_ref().filter(|c| **c != id) {
                            debug!(old = %old, new = %id, "switching tracked conversation");
                        }
                        conversation = Some(id);
                        failures_in_a_row = 0;
                        deadline = None;
                        fetch_now = true;
                    }
                    Some(Command::Stop(id)) => {
                        debug!(conversation = %id, "suppressing realtime notifications");
                        suppressed.insert(id);
                    }
                    Some(Command::Refresh) => {
                        if conversation.is_some()
                            && !provider.is_fetching()
                            && deadline.is_none()
                        {
                            debug!("refreshing realtime polling");
                            failures_in_a_row = 0;
                            fetch_now = true;
                        }
                    }
                    Some(Command::Shutdown) | None => break,
                }
            }
            _ = async move {
                match tick {
                    Some(at) => tokio::time::sleep_until(at).await,
                    None => std::future::pending().await,
                }
            } => {
                deadline = None;
                fetch_now = true;
            }
        }

        if !fetch_now {
            continue;
        }
        let Some(id) = conversation.clone() else {
            continue;
        };

        match provider.fetch(&id).await {
            Ok(snapshot) => {
                failures_in_a_row = 0;
                let offset = snapshot.next_fetch_offset();
                if offset > 0 {
                    next_request_offset = offset;
                    deadline = Some(Instant::now() + Duration::from_secs(offset as u64));
                } else {
                    // The server does not want another poll; stay idle until
                    // an explicit start or refresh.
                    debug!(conversation = %id, offset, "non-positive offset, polling idles");
                    deadline = None;
                }

                let should_user_be_notified = !(suppressed.contains(&id)
                    && suppressed.len() < SUPPRESSION_NOTIFY_THRESHOLD);
                let _ = update_tx
                    .send(RealtimeUpdate {
                        conversation_id: id,
                        snapshot,
                        should_user_be_notified,
                        time_offset_secs: offset,
                    })
                    .await;
            }
            Err(e) => {
                failures_in_a_row += 1;
                if failures_in_a_row > MAX_FAILURES_IN_A_ROW {
                    error!(conversation = %id, error = %e,
                        "realtime fetch failed past the retry ceiling, polling stops");
                    deadline = None;
                } else {
                    warn!(conversation = %id, error = %e, attempt = failures_in_a_row,
                        retry_in = next_request_offset, "realtime fetch failed, will retry");
                    deadline = Some(
                        Instant::now() + Duration::from_secs(next_request_offset as u64),
                    );
                }
            }
        }
    }

    info!("realtime polling task stopped");
}
