//! The report workflow controller.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use equipreport_core::{EquipmentRecord, NewIssueReport};
use equipreport_store::{RecordStore, StoreError};

use crate::error::{ValidationError, WorkflowError};
use crate::notice::{Notice, NOTICE_TTL, SUBMIT_SUCCESS_MESSAGE, SUBMIT_SUCCESS_TTL};
use crate::session::{SessionState, SessionSnapshot};

/// Drives one reporting session against an injected [`RecordStore`].
///
/// The controller issues at most one store call at a time: an operation
/// entered while another is in flight is rejected with
/// [`WorkflowError::Busy`]. There is no other state machine — the session
/// goes idle → busy → idle (with an error, a success, or no notice) and is
/// reusable indefinitely.
///
/// Field setters mirror the user typing into the form; the two operations
/// read their inputs from the stored state, so a failed submission leaves
/// everything in place for a retry without re-entering data.
pub struct ReportWorkflow<S> {
    store: S,
    state: Arc<Mutex<SessionState>>,
    /// Cancels the currently scheduled notice clear, if one is pending.
    expiry: Mutex<Option<CancellationToken>>,
}

impl<S: RecordStore> ReportWorkflow<S> {
    /// Create a controller for a fresh, empty session.
    pub fn new(store: S) -> Self {
        Self {
            store,
            state: Arc::new(Mutex::new(SessionState::default())),
            expiry: Mutex::new(None),
        }
    }

    // -----------------------------------------------------------------
    // Form inputs
    // -----------------------------------------------------------------

    pub fn set_user_name(&self, value: &str) {
        self.lock().user_name = value.to_string();
    }

    pub fn set_equipment_id(&self, value: &str) {
        self.lock().equipment_id = value.to_string();
    }

    pub fn set_issue_description(&self, value: &str) {
        self.lock().issue_description = value.to_string();
    }

    /// A point-in-time copy of the session, for rendering.
    pub fn snapshot(&self) -> SessionSnapshot {
        self.lock().snapshot()
    }

    // -----------------------------------------------------------------
    // Operations
    // -----------------------------------------------------------------

    /// Look up the equipment row for the current id input.
    ///
    /// Exactly one keyed fetch per call — no retries, no caching. The busy
    /// flag is released on every exit path that acquired it.
    pub async fn lookup_equipment(&self) -> Result<EquipmentRecord, WorkflowError> {
        let equipment_id = {
            let mut state = self.lock();
            if state.busy {
                return Err(WorkflowError::Busy);
            }
            let trimmed = state.equipment_id.trim().to_string();
            if trimmed.is_empty() {
                drop(state);
                return Err(self.fail(ValidationError::MissingEquipmentId.into()));
            }
            state.busy = true;
            state.equipment = None;
            state.notice = None;
            trimmed
        };
        self.cancel_expiry();

        let outcome = self.store.fetch_equipment(&equipment_id).await;

        match outcome {
            Ok(record) => {
                {
                    let mut state = self.lock();
                    state.busy = false;
                    state.equipment = Some(record.clone());
                    state.notice = None;
                }
                tracing::info!(equipment_id = %equipment_id, "Equipment lookup succeeded");
                Ok(record)
            }
            Err(err) => {
                self.lock().busy = false;
                let err = match err {
                    StoreError::NotFound => {
                        tracing::info!(equipment_id = %equipment_id, "Equipment id not found");
                        WorkflowError::NotFound
                    }
                    StoreError::Api { status, body } => {
                        tracing::warn!(equipment_id = %equipment_id, status, body = %body, "Equipment lookup failed");
                        WorkflowError::Lookup
                    }
                    StoreError::Transport(msg) => {
                        tracing::warn!(equipment_id = %equipment_id, error = %msg, "Equipment lookup transport failure");
                        WorkflowError::Transport
                    }
                };
                Err(self.fail(err))
            }
        }
    }

    /// Submit an issue report against the fetched equipment.
    ///
    /// Preconditions are checked in order and the first failure wins:
    /// operator name, then a fetched record, then the description. On
    /// success every form field is reset, so the next report needs a fresh
    /// lookup; on store or transport failure the fields are preserved
    /// unchanged for resubmission.
    ///
    /// The report carries the current trimmed id input, not the fetched
    /// record's id: the id field stays editable after a lookup and is not
    /// re-verified, faithful to the original form. Repeated successes
    /// create independent, indistinguishable rows — there is no
    /// idempotency key and no deduplication.
    pub async fn submit_report(&self) -> Result<(), WorkflowError> {
        let report = {
            let mut state = self.lock();
            if state.busy {
                return Err(WorkflowError::Busy);
            }
            if state.user_name.trim().is_empty() {
                drop(state);
                return Err(self.fail(ValidationError::MissingName.into()));
            }
            if state.equipment.is_none() {
                drop(state);
                return Err(self.fail(ValidationError::NoEquipmentSelected.into()));
            }
            if state.issue_description.trim().is_empty() {
                drop(state);
                return Err(self.fail(ValidationError::MissingDescription.into()));
            }
            state.busy = true;
            state.notice = None;
            NewIssueReport::new(
                &state.user_name,
                &state.equipment_id,
                &state.issue_description,
            )
        };
        self.cancel_expiry();

        let outcome = self.store.insert_report(&report).await;

        match outcome {
            Ok(()) => {
                {
                    let mut state = self.lock();
                    state.busy = false;
                    state.reset_form();
                }
                tracing::info!(
                    equipment_id = %report.equipment_id,
                    user_name = %report.user_name,
                    "Issue report submitted",
                );
                self.set_notice(Notice::success(SUBMIT_SUCCESS_MESSAGE), SUBMIT_SUCCESS_TTL);
                Ok(())
            }
            Err(err) => {
                self.lock().busy = false;
                let err = match err {
                    StoreError::Transport(msg) => {
                        tracing::warn!(equipment_id = %report.equipment_id, error = %msg, "Report submission transport failure");
                        WorkflowError::Transport
                    }
                    other => {
                        tracing::warn!(equipment_id = %report.equipment_id, error = %other, "Report submission failed");
                        WorkflowError::Submit
                    }
                };
                Err(self.fail(err))
            }
        }
    }

    // -----------------------------------------------------------------
    // Notices
    // -----------------------------------------------------------------

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().expect("session state lock poisoned")
    }

    /// Record a failed outcome as an error notice and hand the error back.
    fn fail(&self, err: WorkflowError) -> WorkflowError {
        self.set_notice(Notice::error(err.to_string()), NOTICE_TTL);
        err
    }

    /// Replace the active notice and schedule its deferred clear.
    ///
    /// The previously scheduled clear is cancelled first, so a stale timer
    /// can never erase a newer message.
    fn set_notice(&self, notice: Notice, ttl: Duration) {
        self.cancel_expiry();
        self.lock().notice = Some(notice);
        self.schedule_expiry(ttl);
    }

    /// Cancel the pending notice clear, if any.
    fn cancel_expiry(&self) {
        let token = self
            .expiry
            .lock()
            .expect("expiry slot lock poisoned")
            .take();
        if let Some(token) = token {
            token.cancel();
        }
    }

    /// Spawn the deferred clear for the notice that was just set.
    fn schedule_expiry(&self, ttl: Duration) {
        let token = CancellationToken::new();
        let task_token = token.clone();
        let state = Arc::clone(&self.state);

        tokio::spawn(async move {
            tokio::select! {
                _ = task_token.cancelled() => {}
                _ = tokio::time::sleep(ttl) => {
                    let mut state = state.lock().expect("session state lock poisoned");
                    // A newer notice cancels this token before taking the
                    // slot, so the re-check closes the race between the
                    // timer firing and the cancellation.
                    if !task_token.is_cancelled() {
                        state.notice = None;
                    }
                }
            }
        });

        *self.expiry.lock().expect("expiry slot lock poisoned") = Some(token);
    }
}
