//! Background attendee fetching.
//!
//! Runs listing requests on the tokio runtime and reports completions back
//! to the UI loop over a channel.

use crate::attendees::{AttendeeClient, AttendeePage, FetchError, PageRequest};
use tokio::sync::mpsc::UnboundedSender;

/// A listing request tagged with its sequence number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// Monotonic sequence number; higher is newer
    pub seq: u64,
    /// What to fetch
    pub page: PageRequest,
}

/// Completion of a `FetchRequest`.
#[derive(Debug)]
pub struct FetchOutcome {
    /// Sequence number of the request this answers
    pub seq: u64,
    /// Listing page or failure
    pub result: Result<AttendeePage, FetchError>,
}

/// Spawn a fetch and send its outcome to `sender`.
///
/// # Arguments
/// * `client` - Listing API client
/// * `request` - Tagged request to run
/// * `sender` - Channel the outcome is delivered on
///
/// # Details
/// Requests are never cancelled. Ordering is left to the receiver, which
/// compares sequence numbers.
pub fn spawn_fetch(
    client: AttendeeClient,
    request: FetchRequest,
    sender: UnboundedSender<FetchOutcome>,
) {
    tokio::spawn(async move {
        tracing::debug!(
            seq = request.seq,
            page_index = request.page.page_index,
            query = ?request.page.query,
            "fetching attendees"
        );
        let result = client.fetch_page(&request.page).await;
        match &result {
            Ok(page) => tracing::debug!(
                seq = request.seq,
                rows = page.attendees.len(),
                total = page.total,
                "attendees fetched"
            ),
            Err(e) => tracing::warn!(seq = request.seq, "attendee fetch failed: {}", e),
        }
        if sender
            .send(FetchOutcome {
                seq: request.seq,
                result,
            })
            .is_err()
        {
            tracing::trace!(seq = request.seq, "fetch outcome dropped, UI loop has exited");
        }
    });
}
