//! Debounced fetch driver for the explore controller.
//!
//! One tokio task owns the [`ExploreState`] for a run. Commands arrive on an
//! unbounded channel and re-arm a single replaceable debounce deadline; when
//! the deadline elapses, exactly one request is issued for the state as it
//! stands then. Completions come back on an internal channel tagged with
//! their sequence number and are offered to the controller, which discards
//! anything superseded. Snapshots go out on a `watch` channel after every
//! visible transition.
//!
//! The first fetch after spawn bypasses the debounce so the initial view
//! paints without an artificial delay.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::time::Instant;

use crate::catalog::CatalogSource;
use crate::types::ListingPage;

use super::controller::{ExploreCommand, ExploreState, ResponseOutcome};

/// Driver tuning; both values normally come from [`crate::config::Config`].
#[derive(Debug, Clone, Copy)]
pub struct FetcherOptions {
    /// Quiet period required before a change becomes a request.
    pub debounce: Duration,
}

impl Default for FetcherOptions {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(300),
        }
    }
}

/// Cheap clonable handle to a running explore driver.
///
/// Dropping every handle closes the command channel and ends the driver
/// task; in-flight requests resolve into a closed channel and are dropped.
#[derive(Clone)]
pub struct ExploreHandle {
    commands: mpsc::UnboundedSender<ExploreCommand>,
    snapshots: watch::Receiver<ExploreState>,
}

impl ExploreHandle {
    /// Send a command; silently a no-op once the driver has stopped.
    pub fn send(&self, command: ExploreCommand) {
        let _ = self.commands.send(command);
    }

    /// Latest published snapshot.
    pub fn snapshot(&self) -> ExploreState {
        self.snapshots.borrow().clone()
    }

    /// Subscribe to snapshot updates (for the TUI mirror task).
    pub fn subscribe(&self) -> watch::Receiver<ExploreState> {
        self.snapshots.clone()
    }
}

/// Spawn the driver for `initial`, issuing its first fetch immediately.
pub fn spawn(
    source: Arc<dyn CatalogSource>,
    initial: ExploreState,
    options: FetcherOptions,
) -> ExploreHandle {
    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let (snapshot_tx, snapshot_rx) = watch::channel(initial.clone());

    tokio::spawn(run(source, initial, options, command_rx, snapshot_tx));

    ExploreHandle {
        commands: command_tx,
        snapshots: snapshot_rx,
    }
}

async fn run(
    source: Arc<dyn CatalogSource>,
    mut state: ExploreState,
    options: FetcherOptions,
    mut commands: mpsc::UnboundedReceiver<ExploreCommand>,
    snapshots: watch::Sender<ExploreState>,
) {
    let (done_tx, mut done_rx) =
        mpsc::unbounded_channel::<(u64, std::result::Result<ListingPage, String>)>();

    // Initial fetch: no Pending stage on mount.
    issue(&mut state, &source, &done_tx);
    let _ = snapshots.send(state.clone());

    // The one outstanding debounce deadline; re-armed, never stacked.
    let mut deadline: Option<Instant> = None;

    loop {
        let debounce = async move {
            match deadline {
                Some(at) => tokio::time::sleep_until(at).await,
                None => futures::future::pending().await,
            }
        };

        tokio::select! {
            command = commands.recv() => {
                match command {
                    Some(command) => {
                        state = state.apply(command);
                        deadline = Some(Instant::now() + options.debounce);
                        let _ = snapshots.send(state.clone());
                    }
                    // Every handle dropped: the run is over.
                    None => break,
                }
            }
            _ = debounce => {
                deadline = None;
                issue(&mut state, &source, &done_tx);
                let _ = snapshots.send(state.clone());
            }
            Some((seq, result)) = done_rx.recv() => {
                match state.apply_result(seq, result) {
                    ResponseOutcome::Stale => {
                        tracing::debug!(seq, "discarding stale explore response");
                    }
                    outcome => {
                        if outcome == ResponseOutcome::Failed {
                            tracing::debug!(
                                seq,
                                error = state.last_error.as_deref().unwrap_or(""),
                                "explore request failed"
                            );
                        }
                        let _ = snapshots.send(state.clone());
                    }
                }
            }
        }
    }
}

/// Issue one request for the current snapshot on a spawned task.
fn issue(
    state: &mut ExploreState,
    source: &Arc<dyn CatalogSource>,
    done: &mpsc::UnboundedSender<(u64, std::result::Result<ListingPage, String>)>,
) {
    let request = state.begin_fetch();
    tracing::debug!(seq = request.seq, address = %state.address(), "issuing explore request");

    let source = Arc::clone(source);
    let done = done.clone();
    tokio::spawn(async move {
        let result = source
            .fetch_page(&request.snapshot)
            .await
            .map_err(|e| e.to_string());
        let _ = done.send((request.seq, result));
    });
}
