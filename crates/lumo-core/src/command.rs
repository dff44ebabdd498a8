// ── Command API ──
//
// All write operations flow through a unified `Command` enum. The
// controller routes each variant to the appropriate endpoint and
// reports a `CommandOutcome`.

use crate::error::CoreError;

/// All possible write operations against the lights service.
#[derive(Debug, Clone)]
pub enum Command {
    /// Toggle each identifier independently, in the order given.
    Toggle { ids: Vec<String> },

    /// Set one bulb's brightness. `value` is the untyped decimal string
    /// from the command line; parsing happens in the orchestrator so a
    /// bad value aborts before any network call.
    SetBrightness { id: String, value: String },
}

/// Result of a command execution.
#[derive(Debug)]
pub enum CommandOutcome {
    /// The single mutation was accepted by the service.
    Applied,
    /// Per-target results of a multi-target operation.
    Batch(BatchOutcome),
}

// ── Batch aggregation ───────────────────────────────────────────────

/// Outcome of one target within a batch.
#[derive(Debug)]
pub struct TargetResult {
    pub id: String,
    pub outcome: Result<(), CoreError>,
}

impl TargetResult {
    pub fn is_failure(&self) -> bool {
        self.outcome.is_err()
    }
}

/// Aggregated outcome of applying an operation across one or more
/// targets. Entries appear in submission order; the batch never aborts
/// early, so there is exactly one entry per requested target.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub results: Vec<TargetResult>,
}

impl BatchOutcome {
    /// True iff at least one per-target call failed.
    pub fn is_failure(&self) -> bool {
        self.results.iter().any(TargetResult::is_failure)
    }

    /// The targets that failed, in submission order.
    pub fn failed(&self) -> impl Iterator<Item = &TargetResult> {
        self.results.iter().filter(|r| r.is_failure())
    }

    pub fn failed_count(&self) -> usize {
        self.failed().count()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
