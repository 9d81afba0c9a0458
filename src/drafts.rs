//! Keeps the state of every open transaction modal between requests.

use std::{
    collections::HashMap,
    sync::{
        Arc, Mutex, MutexGuard,
        atomic::{AtomicI64, Ordering},
    },
    time::{Duration, Instant},
};

use crate::{
    Error,
    order::{CloseReason, ModalState},
};

/// The ID of an open transaction modal.
pub type DraftId = i64;

/// How long a draft may go untouched before it is dropped.
///
/// A tab that is closed without dismissing its modal never sends a close
/// request, so its draft would otherwise stay in memory forever.
pub const DRAFT_IDLE_TIMEOUT: Duration = Duration::from_secs(30 * 60);

#[derive(Debug)]
struct DraftEntry {
    state: ModalState,
    submitting: bool,
    last_used: Instant,
}

impl DraftEntry {
    fn new(state: ModalState) -> Self {
        Self {
            state,
            submitting: false,
            last_used: Instant::now(),
        }
    }
}

/// The open transaction modals, shared by all request handlers.
///
/// Cloning the store gives another handle to the same modals.
#[derive(Debug, Clone)]
pub struct DraftStore {
    drafts: Arc<Mutex<HashMap<DraftId, DraftEntry>>>,
    next_id: Arc<AtomicI64>,
    idle_timeout: Duration,
}

impl Default for DraftStore {
    fn default() -> Self {
        Self::with_idle_timeout(DRAFT_IDLE_TIMEOUT)
    }
}

impl DraftStore {
    /// Create an empty store that drops drafts after [DRAFT_IDLE_TIMEOUT].
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store that drops drafts left untouched for longer
    /// than `idle_timeout`.
    pub fn with_idle_timeout(idle_timeout: Duration) -> Self {
        Self {
            drafts: Arc::default(),
            next_id: Arc::default(),
            idle_timeout,
        }
    }

    /// Keep `state` and return the ID to refer to it by.
    ///
    /// Drafts that have been idle for too long are dropped first.
    ///
    /// # Errors
    /// Returns [Error::DraftLockError] if the lock is poisoned.
    pub fn open(&self, state: ModalState) -> Result<DraftId, Error> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        let mut drafts = self.lock()?;
        self.drop_idle(&mut drafts);
        drafts.insert(id, DraftEntry::new(state));
        tracing::debug!("Opened transaction draft {id}");

        Ok(id)
    }

    /// Get a copy of the state of draft `id`.
    ///
    /// # Errors
    /// Returns [Error::DraftNotFound] if there is no open draft with that ID.
    pub fn get(&self, id: DraftId) -> Result<ModalState, Error> {
        let mut drafts = self.lock()?;
        let entry = drafts.get_mut(&id).ok_or(Error::DraftNotFound(id))?;
        entry.last_used = Instant::now();

        Ok(entry.state.clone())
    }

    /// Replace the state of draft `id` with the result of `update`.
    ///
    /// The draft is left as it was if `update` fails.
    ///
    /// # Errors
    /// Returns [Error::DraftNotFound] if there is no open draft with that ID,
    /// [Error::DraftSubmitting] while the draft is being submitted,
    /// or the error from `update`.
    pub fn update<F>(&self, id: DraftId, update: F) -> Result<ModalState, Error>
    where
        F: FnOnce(&ModalState) -> Result<ModalState, Error>,
    {
        let mut drafts = self.lock()?;
        let entry = drafts.get_mut(&id).ok_or(Error::DraftNotFound(id))?;
        if entry.submitting {
            return Err(Error::DraftSubmitting(id));
        }

        let new_state = update(&entry.state)?;
        entry.state = new_state.clone();
        entry.last_used = Instant::now();

        Ok(new_state)
    }

    /// Mark draft `id` as being submitted and return its state.
    ///
    /// Only one submit per draft can hold the claim. It is released by
    /// [DraftStore::release] or by closing the draft.
    ///
    /// # Errors
    /// Returns [Error::DraftNotFound] if there is no open draft with that ID,
    /// or [Error::DraftSubmitting] if another submit holds the claim.
    pub fn claim(&self, id: DraftId) -> Result<ModalState, Error> {
        let mut drafts = self.lock()?;
        let entry = drafts.get_mut(&id).ok_or(Error::DraftNotFound(id))?;
        if entry.submitting {
            return Err(Error::DraftSubmitting(id));
        }

        entry.submitting = true;
        entry.last_used = Instant::now();

        Ok(entry.state.clone())
    }

    /// Let draft `id` be changed and submitted again after a failed submit.
    ///
    /// Does nothing if the draft was closed in the meantime.
    ///
    /// # Errors
    /// Returns [Error::DraftLockError] if the lock is poisoned.
    pub fn release(&self, id: DraftId) -> Result<(), Error> {
        if let Some(entry) = self.lock()?.get_mut(&id) {
            entry.submitting = false;
            entry.last_used = Instant::now();
        }

        Ok(())
    }

    /// Close draft `id` and forget it.
    ///
    /// Closing a draft that is not open does nothing, so a modal can be
    /// dismissed twice without an error.
    ///
    /// # Errors
    /// Returns [Error::DraftLockError] if the lock is poisoned.
    pub fn close(&self, id: DraftId, reason: CloseReason) -> Result<(), Error> {
        match self.lock()?.remove(&id) {
            Some(entry) => {
                entry.state.close(reason);
            }
            None => tracing::debug!("Transaction draft {id} was already closed"),
        }

        Ok(())
    }

    /// The number of open drafts.
    pub fn len(&self) -> Result<usize, Error> {
        Ok(self.lock()?.len())
    }

    fn drop_idle(&self, drafts: &mut HashMap<DraftId, DraftEntry>) {
        let now = Instant::now();
        drafts.retain(|id, entry| {
            let keep =
                entry.submitting || now.duration_since(entry.last_used) <= self.idle_timeout;
            if !keep {
                tracing::debug!("Dropped idle transaction draft {id}");
            }
            keep
        });
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<DraftId, DraftEntry>>, Error> {
        self.drafts.lock().map_err(|error| {
            tracing::error!("could not acquire draft lock: {error}");
            Error::DraftLockError
        })
    }
}
