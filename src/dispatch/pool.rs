//! Fixed-size worker pool that fans a batch of GET requests out over a
//! bounded number of concurrent tasks and fans the outcomes back in.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tokio::sync::mpsc;

use crate::dispatch::outcome::{Outcome, Tally};

/// Issues batches of GET requests with bounded concurrency.
///
/// Holds a shared `reqwest::Client` so concurrent batches reuse one
/// connection pool. Batches are otherwise fully independent.
#[derive(Clone)]
pub struct Dispatcher {
    client: reqwest::Client,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Send exactly `total` GET requests to `url`, at most `concurrent` in
    /// flight at any instant, and return the success/error tally.
    ///
    /// Blocks until every request has completed; there is no partial result.
    /// Individual request failures are logged and tallied as errors, never
    /// fatal to the batch. `concurrent` values below 1 are clamped to 1.
    pub async fn dispatch(&self, url: &str, total: usize, concurrent: usize) -> Tally {
        if total == 0 {
            return Tally::default();
        }

        let workers = worker_count(total, concurrent);
        tracing::debug!(url = %url, total, workers, "starting batch");

        // The work queue: tokens are opaque, so a countdown is enough.
        // Each decrement hands exactly one token to exactly one worker.
        let tokens = Arc::new(AtomicUsize::new(total));
        let (tx, mut rx) = mpsc::channel(total);

        for _ in 0..workers {
            let client = self.client.clone();
            let url = url.to_string();
            let tokens = Arc::clone(&tokens);
            let tx = tx.clone();

            tokio::spawn(async move {
                while take_token(&tokens) {
                    let outcome = fetch_one(&client, &url).await;
                    if tx.send(outcome).await.is_err() {
                        break;
                    }
                }
            });
        }

        // The channel closes once the last worker drops its sender, so this
        // loop sees all `total` outcomes before terminating.
        drop(tx);

        let mut tally = Tally::default();
        while let Some(outcome) = rx.recv().await {
            tracing::debug!(status = outcome.status_code(), "received status code");
            tally.record(outcome);
        }

        tracing::info!(
            url = %url,
            success = tally.success,
            errors = tally.errors,
            "batch complete"
        );
        tally
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Number of worker tasks for a batch: no more than `total` (extra workers
/// would have no tokens to take), never less than 1.
fn worker_count(total: usize, concurrent: usize) -> usize {
    if total == 0 {
        0
    } else {
        concurrent.clamp(1, total)
    }
}

/// Try to take one work token. Returns false once the queue is drained.
fn take_token(remaining: &AtomicUsize) -> bool {
    remaining
        .fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| n.checked_sub(1))
        .is_ok()
}

/// Perform one GET request and classify the result.
async fn fetch_one(client: &reqwest::Client, url: &str) -> Outcome {
    match client.get(url).send().await {
        // Dropping the response releases the connection regardless of status.
        Ok(response) => Outcome::Status(response.status().as_u16()),
        Err(e) => {
            tracing::warn!(error = %e, "GET request failed");
            Outcome::TransportFailure
        }
    }
}
