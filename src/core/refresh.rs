//! Ordering of concurrent status refreshes.
//!
//! Refreshes are triggered from several places (file watches, timers, after a
//! checkout) and their git processes may finish in any order. A result is only
//! applied if no newer refresh has been issued since it started; older results
//! are discarded on arrival. Nothing is cancelled: the work still runs, its
//! result is simply dropped.

use crate::core::error::Result;
use crate::core::state::{FileStatusSummaryView, StatusSnapshot, StatusSummary};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Issuance position of one refresh request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RefreshTicket(u64);

/// Hands out strictly increasing tickets.
#[derive(Debug, Default)]
pub struct RefreshSequencer {
    issued: AtomicU64,
}

impl RefreshSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> RefreshTicket {
        RefreshTicket(self.issued.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether `ticket` is the most recently issued one.
    pub fn is_latest(&self, ticket: RefreshTicket) -> bool {
        self.issued.load(Ordering::SeqCst) == ticket.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    Applied(StatusSummary),
    Discarded,
}

#[derive(Debug, Default)]
struct StoreState {
    summary: StatusSummary,
    last_applied: Option<RefreshTicket>,
}

/// Owner of the current [`StatusSummary`].
///
/// Consumers only ever receive clones; every change replaces the stored value.
#[derive(Debug, Default)]
pub struct StatusStore {
    sequencer: RefreshSequencer,
    state: Mutex<StoreState>,
}

impl StatusStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a previously displayed summary, e.g. one restored from cache.
    pub fn with_summary(summary: StatusSummary) -> Self {
        Self {
            sequencer: RefreshSequencer::new(),
            state: Mutex::new(StoreState {
                summary,
                last_applied: None,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, StoreState> {
        // The state is replaced wholesale, so a poisoned guard still holds a valid value
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn summary(&self) -> StatusSummary {
        self.lock().summary.clone()
    }

    pub fn begin_refresh(&self) -> RefreshTicket {
        self.sequencer.issue()
    }

    /// Apply a finished refresh if it is still the newest one issued.
    pub fn complete_refresh(
        &self,
        ticket: RefreshTicket,
        snapshot: StatusSnapshot,
    ) -> Result<RefreshOutcome> {
        let mut state = self.lock();
        let superseded = state.last_applied.is_some_and(|last| last >= ticket);
        if superseded || !self.sequencer.is_latest(ticket) {
            log::debug!("Discarding stale status refresh {ticket:?}");
            return Ok(RefreshOutcome::Discarded);
        }

        let next = StatusSummary::from_snapshot(&state.summary.files, snapshot)?;
        state.summary = next.clone();
        state.last_applied = Some(ticket);
        Ok(RefreshOutcome::Applied(next))
    }

    /// Replace the file list with the result of a selection operation.
    pub fn apply<F>(&self, op: F) -> Result<StatusSummary>
    where
        F: FnOnce(Vec<FileStatusSummaryView>) -> Result<Vec<FileStatusSummaryView>>,
    {
        let mut state = self.lock();
        let files = op(state.summary.files.clone())?;
        state.summary.files = files;
        Ok(state.summary.clone())
    }
}
