use crate::error::SearchError;
use crate::jobs::Job;
use crate::query::Query;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Loading {
        seq: u64,
    },
}

/// A request the caller is expected to send after a successful trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch {
    pub seq: u64,
    pub query: Query,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    Applied,
    /// The outcome belongs to a superseded request and was dropped.
    Stale,
}

/// Results and progress of the hashtag search.
///
/// Every transition consumes the previous state and returns the next one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchState {
    results: Vec<Job>,
    phase: Phase,
    next_seq: u64,
    last_error: Option<SearchError>,
}

impl SearchState {
    pub fn results(&self) -> &[Job] {
        &self.results
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn in_flight(&self) -> bool {
        matches!(self.phase, Phase::Loading { .. })
    }

    pub fn last_error(&self) -> Option<&SearchError> {
        self.last_error.as_ref()
    }

    /// Starts a search for `query_text`.
    ///
    /// Blank text leaves the state untouched. Triggering while a request is
    /// already loading supersedes it: only the newest sequence number is applied.
    pub fn trigger(mut self, query_text: &str) -> (Self, Option<Dispatch>) {
        let Some(query) = Query::parse(query_text) else {
            return (self, None);
        };

        self.next_seq += 1;
        let seq = self.next_seq;
        self.phase = Phase::Loading { seq };
        self.last_error = None;

        (self, Some(Dispatch { seq, query }))
    }

    /// Applies the outcome of request `seq`.
    ///
    /// Successful results replace the list wholesale. Failures keep the
    /// previous list and are remembered in `last_error`.
    pub fn settle(
        mut self,
        seq: u64,
        outcome: Result<Vec<Job>, SearchError>,
    ) -> (Self, Settlement) {
        if self.phase != (Phase::Loading { seq }) {
            return (self, Settlement::Stale);
        }

        match outcome {
            Ok(jobs) => self.results = jobs,
            Err(err) => self.last_error = Some(err),
        }
        self.phase = Phase::Idle;

        (self, Settlement::Applied)
    }
}
