//! Two-step confirmation in front of [`RosterStore::clear`].

use crate::error::Result;
use crate::model::notice::Notice;
use crate::roster::{KeyValueStorage, RosterStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResetState {
    #[default]
    Closed,
    Confirming,
}

#[derive(Debug, Clone, Default)]
pub struct ResetFlow {
    state: ResetState,
}

impl ResetFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_confirming(&self) -> bool {
        self.state == ResetState::Confirming
    }

    /// Shows the "Are you sure?" prompt.
    pub fn open(&mut self) {
        self.state = ResetState::Confirming;
    }

    pub fn cancel(&mut self) {
        self.state = ResetState::Closed;
    }

    /// Clears the roster if the prompt is open; otherwise does nothing and
    /// returns `None`. The prompt closes either way.
    pub fn confirm<S: KeyValueStorage>(&mut self, store: &mut RosterStore<S>) -> Result<Option<Notice>> {
        if !self.is_confirming() {
            return Ok(None);
        }
        self.state = ResetState::Closed;
        store.clear()?;
        Ok(Some(Notice::reset()))
    }
}
