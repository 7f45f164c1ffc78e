//! Per-request outcomes and their reduction into a tally.

/// Result of one attempted GET request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// An HTTP exchange completed; holds the status code as returned,
    /// whatever it was (200, 404, 500, ...).
    Status(u16),
    /// No HTTP response was obtained (DNS failure, connection refused, ...).
    /// Tallied exactly like a 500 response.
    TransportFailure,
}

impl Outcome {
    /// Only a literal 200 counts as success.
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Status(200))
    }

    /// Status code for log lines. Transport failures report as 500,
    /// indistinguishable from a real 500 response.
    pub fn status_code(&self) -> u16 {
        match self {
            Outcome::Status(code) => *code,
            Outcome::TransportFailure => 500,
        }
    }
}

/// Final success/error counts for one batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    /// Number of outcomes that were exactly HTTP 200.
    pub success: u64,
    /// Everything else, transport failures included.
    pub errors: u64,
}

impl Tally {
    /// Fold one outcome into the counts.
    pub fn record(&mut self, outcome: Outcome) {
        if outcome.is_success() {
            self.success += 1;
        } else {
            self.errors += 1;
        }
    }

    pub fn total(&self) -> u64 {
        self.success + self.errors
    }
}
