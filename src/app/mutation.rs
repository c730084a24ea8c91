//! Create, update and delete coordination.
//!
//! The coordinator owns the form and delete-confirmation state machines and
//! the table of requests in flight. Nothing touches the record store until a
//! reply arrives: a successful reply is reconciled into the store, a failed
//! one leaves it untouched.
//!
//! ```text
//! form:    Idle ──submit──▶ (Invalid | Submitting) ──reply──▶ (closed | Failed)
//! delete:  PendingConfirm ──confirm──▶ Confirmed ──reply──▶ closed
//!                └──cancel──▶ closed
//! ```

use super::store::RecordStore;
use crate::client::{Reply, RepositoryCall, RequestTag, UserRepository};
use crate::domain::{validate, FieldErrors, FormDraft, Result, RosterError, UserId, UserPayload, UserRecord};
use std::collections::BTreeMap;

/// Whether the form creates a new user or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit { id: UserId },
}

/// Lifecycle of an open form.
///
/// A form whose submit succeeds is closed, so there is no applied phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    /// Open and editable, nothing submitted yet.
    Idle,
    /// The last submit failed validation; errors are shown inline.
    Invalid,
    /// A request is in flight. Further submits are rejected.
    Submitting { ticket: u64 },
    /// The last request failed; the draft is kept for another attempt.
    Failed,
}

/// An open create/edit form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub mode: FormMode,
    pub draft: FormDraft,
    pub errors: FieldErrors,
    pub phase: FormPhase,
}

impl FormState {
    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        matches!(self.phase, FormPhase::Submitting { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeletePhase {
    PendingConfirm,
    Confirmed { ticket: u64 },
}

/// An open delete confirmation for one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteConfirm {
    pub id: UserId,
    /// `"{first} {last}"` captured when the dialog opened.
    pub name: String,
    pub phase: DeletePhase,
}

/// What to apply to the store once a request's reply succeeds.
#[derive(Debug, Clone, PartialEq, Eq)]
enum PendingMutation {
    Create { draft: FormDraft },
    Update { id: UserId, draft: FormDraft },
    Delete { id: UserId },
}

/// Outcome of feeding a reply to [`MutationCoordinator::complete`].
#[derive(Debug)]
pub enum Completion {
    /// The store was reconciled.
    Applied,
    /// The request failed; the store is unchanged.
    Failed(RosterError),
    /// The ticket does not belong to a mutation in flight.
    Ignored,
}

#[derive(Debug, Clone, Default)]
pub struct MutationCoordinator {
    form: Option<FormState>,
    confirm: Option<DeleteConfirm>,
    in_flight: BTreeMap<u64, PendingMutation>,
}

impl MutationCoordinator {
    #[must_use]
    pub const fn form(&self) -> Option<&FormState> {
        self.form.as_ref()
    }

    pub fn form_mut(&mut self) -> Option<&mut FormState> {
        self.form.as_mut()
    }

    #[must_use]
    pub const fn confirm(&self) -> Option<&DeleteConfirm> {
        self.confirm.as_ref()
    }

    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }

    pub fn open_create(&mut self) {
        self.form = Some(FormState {
            mode: FormMode::Create,
            draft: FormDraft::default(),
            errors: FieldErrors::default(),
            phase: FormPhase::Idle,
        });
    }

    pub fn open_edit(&mut self, record: &UserRecord) {
        self.form = Some(FormState {
            mode: FormMode::Edit { id: record.id },
            draft: FormDraft::from_record(record),
            errors: FieldErrors::default(),
            phase: FormPhase::Idle,
        });
    }

    /// Closes the form. A submit already in flight still reconciles when its
    /// reply arrives.
    pub fn cancel_form(&mut self) {
        self.form = None;
    }

    /// Validates the open form and builds its request.
    ///
    /// Returns `Ok(None)` when no form is open or a submit is already in flight.
    ///
    /// # Errors
    ///
    /// - [`RosterError::Validation`] if the draft fails validation. The errors are
    ///   also stored on the form and the form moves to [`FormPhase::Invalid`].
    /// - [`RosterError::NotFoundLocally`] if an edited record has left the store.
    /// - [`RosterError::Decode`] if the payload cannot be serialized.
    pub fn submit(
        &mut self,
        repository: &UserRepository,
        tag: RequestTag,
        store: &RecordStore,
    ) -> Result<Option<RepositoryCall>> {
        let Some(form) = self.form.as_mut() else {
            return Ok(None);
        };
        if form.is_submitting() {
            tracing::debug!("submit rejected while a request is in flight");
            return Ok(None);
        }

        form.errors = validate(&form.draft);
        if !form.errors.is_empty() {
            form.phase = FormPhase::Invalid;
            tracing::debug!(error_count = form.errors.len(), "form draft invalid");
            return Err(RosterError::Validation(form.errors.clone()));
        }

        let payload = UserPayload::from_draft(&form.draft);
        let (call, pending) = match form.mode {
            FormMode::Create => (
                repository.create(tag, &payload)?,
                PendingMutation::Create {
                    draft: form.draft.clone(),
                },
            ),
            FormMode::Edit { id } => {
                if !store.contains(id) {
                    return Err(RosterError::NotFoundLocally(id));
                }
                (
                    repository.update(tag, id, &payload)?,
                    PendingMutation::Update {
                        id,
                        draft: form.draft.clone(),
                    },
                )
            }
        };

        form.phase = FormPhase::Submitting { ticket: tag.ticket };
        self.in_flight.insert(tag.ticket, pending);
        tracing::debug!(ticket = tag.ticket, mode = ?form.mode, "form submitted");
        Ok(Some(call))
    }

    /// Opens the delete confirmation for `id`.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::NotFoundLocally`] if `id` is not in the store.
    pub fn request_delete(&mut self, id: UserId, store: &RecordStore) -> Result<()> {
        let record = store.get(id).ok_or(RosterError::NotFoundLocally(id))?;
        self.confirm = Some(DeleteConfirm {
            id,
            name: record.full_name(),
            phase: DeletePhase::PendingConfirm,
        });
        Ok(())
    }

    /// Confirms a pending delete and builds its request.
    ///
    /// Returns `None` when no confirmation is pending.
    pub fn confirm_delete(&mut self, repository: &UserRepository, tag: RequestTag) -> Option<RepositoryCall> {
        let confirm = self.confirm.as_mut()?;
        if confirm.phase != DeletePhase::PendingConfirm {
            return None;
        }
        confirm.phase = DeletePhase::Confirmed { ticket: tag.ticket };
        self.in_flight
            .insert(tag.ticket, PendingMutation::Delete { id: confirm.id });
        Some(repository.delete(tag, confirm.id))
    }

    /// Cancels a pending delete. Returns `false` if the delete was already
    /// confirmed and is in flight.
    pub fn cancel_delete(&mut self) -> bool {
        match self.confirm.as_ref().map(|confirm| confirm.phase) {
            Some(DeletePhase::Confirmed { .. }) => false,
            _ => {
                self.confirm = None;
                true
            }
        }
    }

    /// Reconciles a reply into `store`.
    ///
    /// A create gets the reply's id when present and unused, otherwise
    /// [`RecordStore::fallback_id`] for `now_millis`.
    pub fn complete(
        &mut self,
        ticket: u64,
        reply: Result<Reply>,
        store: &mut RecordStore,
        now_millis: i64,
    ) -> Completion {
        let Some(pending) = self.in_flight.remove(&ticket) else {
            tracing::debug!(ticket, "reply for unknown ticket ignored");
            return Completion::Ignored;
        };

        let reply = match reply {
            Ok(reply) => reply,
            Err(err) => {
                self.settle(ticket, false);
                return Completion::Failed(err);
            }
        };

        match pending {
            PendingMutation::Create { draft } => {
                let id = match reply {
                    Reply::Created { id: Some(id) } if !store.contains(id) => id,
                    _ => store.fallback_id(now_millis),
                };
                tracing::debug!(id, "created record reconciled");
                store.prepend(UserRecord::from_draft(id, &draft));
            }
            PendingMutation::Update { id, draft } => {
                if let Err(err) = store.update(id, &draft) {
                    tracing::debug!(error = %err, "update reply for record no longer present");
                }
            }
            PendingMutation::Delete { id } => {
                if let Err(err) = store.remove(id) {
                    tracing::debug!(error = %err, "delete reply for record no longer present");
                }
            }
        }

        self.settle(ticket, true);
        Completion::Applied
    }

    /// Drops all in-flight bookkeeping and closes any form or dialog.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Moves whichever UI element owns `ticket` out of its waiting phase.
    fn settle(&mut self, ticket: u64, succeeded: bool) {
        let owns_form = self
            .form
            .as_ref()
            .is_some_and(|form| form.phase == FormPhase::Submitting { ticket });
        if owns_form {
            if succeeded {
                self.form = None;
            } else if let Some(form) = self.form.as_mut() {
                form.phase = FormPhase::Failed;
            }
        }
        if self
            .confirm
            .as_ref()
            .is_some_and(|confirm| confirm.phase == DeletePhase::Confirmed { ticket })
        {
            self.confirm = None;
        }
    }
}
