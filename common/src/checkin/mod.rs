//! The check-in dialog as an explicit state machine.
//!
//! ```text
//! Idle --select--> AwaitingSource --confirm--> Idle (record checked in)
//!                        |
//!                        +--cancel--> Idle (store untouched)
//! ```
//!
//! While awaiting a source the operator stages one [`Source`] option and,
//! for [`Source::Other`], a free-text answer. [`CheckInFlow::can_confirm`] is
//! what the view binds the confirm button's `disabled` attribute to;
//! [`CheckInFlow::confirm`] enforces the same rule.

use log::debug;

use crate::error::CheckInError;
use crate::model::attendee::AttendeeRecord;
use crate::model::notice::Notice;
use crate::model::source::Source;
use crate::roster::{KeyValueStorage, RosterStore};

/// Answers staged for the selected attendee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckInDraft {
    pub attendee: AttendeeRecord,
    pub source: Option<Source>,
    /// Only used when `source` is [`Source::Other`].
    pub other_text: String,
}

impl CheckInDraft {
    fn new(attendee: AttendeeRecord) -> Self {
        Self {
            attendee,
            source: None,
            other_text: String::new(),
        }
    }

    /// The string stored on the record: the option label, or the free text
    /// verbatim for "Other".
    pub fn resolved_source(&self) -> Result<String, CheckInError> {
        match self.source {
            None => Err(CheckInError::MissingSource),
            Some(Source::Other) if self.other_text.is_empty() => Err(CheckInError::MissingOtherText),
            Some(Source::Other) => Ok(self.other_text.clone()),
            Some(source) => Ok(source.label().to_string()),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.resolved_source().is_ok()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CheckInState {
    #[default]
    Idle,
    AwaitingSource(CheckInDraft),
}

#[derive(Debug, Clone, Default)]
pub struct CheckInFlow {
    state: CheckInState,
}

impl CheckInFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &CheckInState {
        &self.state
    }

    pub fn draft(&self) -> Option<&CheckInDraft> {
        match &self.state {
            CheckInState::AwaitingSource(draft) => Some(draft),
            CheckInState::Idle => None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.draft().is_some()
    }

    /// Opens the dialog for `attendee`, dropping anything staged before.
    pub fn select(&mut self, attendee: &AttendeeRecord) {
        debug!("check-in: selected {}", attendee.email);
        self.state = CheckInState::AwaitingSource(CheckInDraft::new(attendee.clone()));
    }

    /// Ignored while idle.
    pub fn set_source(&mut self, source: Source) {
        if let CheckInState::AwaitingSource(draft) = &mut self.state {
            draft.source = Some(source);
        }
    }

    /// Ignored while idle. Line breaks become spaces: an exported roster has
    /// one attendee per line.
    pub fn set_other_text(&mut self, text: impl Into<String>) {
        if let CheckInState::AwaitingSource(draft) = &mut self.state {
            draft.other_text = text.into().replace(['\r', '\n'], " ");
        }
    }

    pub fn can_confirm(&self) -> bool {
        self.draft().is_some_and(CheckInDraft::is_complete)
    }

    /// Checks the selected attendee in and returns to idle.
    ///
    /// Rejected without touching the store while the draft is incomplete. If
    /// the store fails to persist, the dialog stays open with its draft.
    pub fn confirm<S: KeyValueStorage>(
        &mut self,
        store: &mut RosterStore<S>,
    ) -> Result<Notice, CheckInError> {
        let draft = self.draft().ok_or(CheckInError::NotSelected)?;
        let source = draft.resolved_source()?;
        let email = draft.attendee.email.clone();

        store.update_by_email(&email, |record| record.check_in(source))?;

        let notice = Notice::checked_in(&draft.attendee);
        self.state = CheckInState::Idle;
        Ok(notice)
    }

    /// Closes the dialog without changing the store.
    pub fn cancel(&mut self) {
        self.state = CheckInState::Idle;
    }
}
