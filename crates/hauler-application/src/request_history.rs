//! Request history flow.
//!
//! Read side of the dashboard: the signed-in account's requests, newest
//! first, plus an optional live feed that re-reads the list whenever the
//! store reports a new request for that account.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use hauler_core::error::{HaulerError, Result};
use hauler_core::request::{PickupRequest, RequestEvent, RequestRepository};
use tokio::sync::broadcast::error::RecvError;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use crate::auth::AuthContext;

/// Formats a submission time the way history entries display it,
/// e.g. `Oct 8, 2025, 02:30 PM`.
pub fn format_submitted_at(at: &DateTime<Utc>) -> String {
    at.format("%b %-d, %Y, %I:%M %p").to_string()
}

pub struct RequestHistory {
    auth: Arc<AuthContext>,
    requests: Arc<dyn RequestRepository>,
    live: Mutex<Option<CancellationToken>>,
}

impl RequestHistory {
    pub fn new(auth: Arc<AuthContext>, requests: Arc<dyn RequestRepository>) -> Self {
        Self {
            auth,
            requests,
            live: Mutex::new(None),
        }
    }

    /// One-shot read of the signed-in account's requests, newest first.
    ///
    /// An account with no requests gets an empty list, not an error.
    pub async fn load(&self) -> Result<Vec<PickupRequest>> {
        let Some(account) = self.auth.state().account else {
            return Err(HaulerError::auth("sign in to view requests"));
        };
        let mut entries = self.requests.list_by_owner(&account.uid).await?;
        sort_newest_first(&mut entries);
        Ok(entries)
    }

    /// Starts a live feed over the signed-in account's requests.
    ///
    /// The receiver starts on the current list and gets a fresh one after
    /// every stored request of this account. Subscribing again replaces the
    /// previous feed; [`RequestHistory::release`] stops it.
    pub async fn subscribe(&self) -> Result<watch::Receiver<Vec<PickupRequest>>> {
        self.release();
        let Some(account) = self.auth.state().account else {
            return Err(HaulerError::auth("sign in to view requests"));
        };
        let uid = account.uid;

        let initial = {
            let mut entries = self.requests.list_by_owner(&uid).await?;
            sort_newest_first(&mut entries);
            entries
        };
        let (tx, rx) = watch::channel(initial);

        let cancel = CancellationToken::new();
        let token = cancel.clone();
        let mut events = self.requests.subscribe();
        let requests = Arc::clone(&self.requests);
        tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = token.cancelled() => break,
                    event = events.recv() => {
                        let relevant = match event {
                            Ok(RequestEvent::Appended { user_id }) => user_id == uid,
                            Err(RecvError::Lagged(skipped)) => {
                                tracing::warn!(
                                    "[RequestHistory] feed lagged, {} events skipped",
                                    skipped
                                );
                                // Cannot tell whose events were lost, re-read
                                true
                            }
                            Err(RecvError::Closed) => break,
                        };
                        if !relevant {
                            continue;
                        }
                        match requests.list_by_owner(&uid).await {
                            Ok(mut entries) => {
                                sort_newest_first(&mut entries);
                                if tx.send(entries).is_err() {
                                    // Every receiver is gone
                                    break;
                                }
                            }
                            Err(e) => {
                                tracing::warn!("[RequestHistory] feed refresh failed: {}", e);
                            }
                        }
                    }
                }
            }
            tracing::debug!("[RequestHistory] live feed stopped");
        });

        *self.live.lock().unwrap() = Some(cancel);
        Ok(rx)
    }

    /// Stops the live feed, if one is running. Idempotent.
    pub fn release(&self) {
        if let Some(cancel) = self.live.lock().unwrap().take() {
            cancel.cancel();
        }
    }
}

impl Drop for RequestHistory {
    fn drop(&mut self) {
        self.release();
    }
}

fn sort_newest_first(entries: &mut [PickupRequest]) {
    // Display order is owned here, whatever order the store returned
    entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}
