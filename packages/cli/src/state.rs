//! Editor client state machine.
//!
//! ```text
//! Idle --edit--> Pending --settle--> Loading --response--> Idle
//!                  ^  |                 |
//!                  |  +--settle(blank)--+--> Idle (empty result)
//!                  +------edit----------+
//! ```
//!
//! Every request fired on settle gets a fresh generation number. Only the
//! response for the most recent generation is applied, so a slow response to
//! an older edit can never overwrite a newer result.

use common::ProblemCandidates;
use tracing::{debug, warn};

use crate::api::ClientError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    /// An edit is waiting for the settle window to elapse.
    Pending,
    /// A request for the current generation is outstanding.
    Loading,
}

/// What the results region shows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Outcome {
    #[default]
    Empty,
    Candidates(ProblemCandidates),
    Failed,
}

/// Action required once the settle window has elapsed.
#[derive(Debug, PartialEq, Eq)]
pub enum Settled {
    /// Blank code; the result was cleared without a request.
    Skipped,
    Request { generation: u64, code: String },
}

#[derive(Debug)]
pub struct EditorState {
    code: String,
    phase: Phase,
    outcome: Outcome,
    generation: u64,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorState {
    pub fn new() -> Self {
        Self {
            code: String::new(),
            phase: Phase::Idle,
            outcome: Outcome::Empty,
            generation: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    /// Generation of the most recently fired request.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn edit(&mut self, code: impl Into<String>) {
        self.code = code.into();
        self.phase = Phase::Pending;
    }

    pub fn settle(&mut self) -> Settled {
        // Bumped in both cases so a response to an earlier request is stale.
        self.generation += 1;

        if self.code.trim().is_empty() {
            self.phase = Phase::Idle;
            self.outcome = Outcome::Empty;
            return Settled::Skipped;
        }

        self.phase = Phase::Loading;
        Settled::Request {
            generation: self.generation,
            code: self.code.clone(),
        }
    }

    /// Apply a response. Returns false if it belonged to a superseded request.
    pub fn resolve(&mut self, generation: u64, result: Result<String, ClientError>) -> bool {
        if generation != self.generation {
            debug!(
                generation,
                current = self.generation,
                "Discarding stale classification"
            );
            return false;
        }

        self.outcome = match result {
            Ok(raw) => Outcome::Candidates(ProblemCandidates::parse(&raw)),
            Err(e) => {
                warn!(error = %e, "Error classifying problem");
                Outcome::Failed
            }
        };
        // An edit made while loading keeps the state pending.
        if self.phase == Phase::Loading {
            self.phase = Phase::Idle;
        }
        true
    }
}
