//! Lead capture form state
//!
//! The form moves `Editing -> Submitting -> Submitted`, falling back to
//! `Editing` when the store call fails. `Submitted` is terminal for the
//! lifetime of the form instance.

use chrono::Utc;
use lead_common::{validation, Challenge, Field, Lead};
use std::ops::Deref;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::agency::{Agency, CALL_BACK_DISPLAY, CALL_BACK_TEL};
use crate::error::{FormError, Result};
use crate::notify::{
    Toast, CONNECTION_ERROR_MESSAGE, SUBMISSION_ERROR_MESSAGE, SUBMITTED_MESSAGE,
};
use crate::store::LeadStore;

pub const SUBMIT_LABEL: &str = "Get My Free Growth Plan →";
pub const SUBMITTING_LABEL: &str = "Submitting...";
pub const SUCCESS_HEADLINE: &str = "We'll Be In Touch Soon!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Editing,
    Submitting,
    Submitted,
}

/// Values typed into the form so far, held as an unstamped lead
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadDraft(Lead);

impl LeadDraft {
    /// Freeze the draft into a lead stamped with `timestamp`
    pub fn to_lead(&self, timestamp: i64) -> Lead {
        Lead {
            timestamp,
            ..self.0.clone()
        }
    }
}

impl Deref for LeadDraft {
    type Target = Lead;

    fn deref(&self) -> &Lead {
        &self.0
    }
}

/// A frozen lead on its way to the store
pub struct PendingSubmission<S: ?Sized> {
    store: Arc<S>,
    lead: Lead,
}

impl<S: LeadStore + ?Sized> PendingSubmission<S> {
    pub fn lead(&self) -> &Lead {
        &self.lead
    }

    /// Perform the single store call for this submission
    pub async fn send(&self) -> anyhow::Result<()> {
        self.store.submit_lead(&self.lead).await
    }
}

/// What the form renders in its current state
#[derive(Debug, PartialEq, Eq)]
pub enum FormView<'a> {
    Form(FormFields<'a>),
    Success(SuccessPanel),
}

#[derive(Debug, PartialEq, Eq)]
pub struct FormFields<'a> {
    pub agency: Agency,
    pub draft: &'a LeadDraft,
    pub challenge_options: &'static [Challenge],
    pub submit_enabled: bool,
    pub submit_label: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct SuccessPanel {
    pub headline: &'static str,
    pub message: &'static str,
    pub call_back_display: &'static str,
    pub call_back_tel: &'static str,
}

/// One lead capture form, bound to the session's store handle
pub struct LeadForm<S: ?Sized> {
    agency: Agency,
    store: Option<Arc<S>>,
    draft: LeadDraft,
    phase: FormPhase,
    notifications: Vec<Toast>,
}

impl<S: LeadStore + ?Sized> LeadForm<S> {
    /// `store` is `None` when no connection to the lead store could be made
    pub fn new(agency: Agency, store: Option<Arc<S>>) -> Self {
        Self {
            agency,
            store,
            draft: LeadDraft::default(),
            phase: FormPhase::Editing,
            notifications: Vec::new(),
        }
    }

    pub fn agency(&self) -> Agency {
        self.agency
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn draft(&self) -> &LeadDraft {
        &self.draft
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    pub fn is_submitted(&self) -> bool {
        self.phase == FormPhase::Submitted
    }

    /// Whether the submit control is enabled
    pub fn can_submit(&self) -> bool {
        self.phase == FormPhase::Editing
    }

    /// Store a keystroke. Once submitted, the inputs are gone and edits are dropped.
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        if self.is_submitted() {
            debug!("Ignoring edit to {} on a submitted form", field);
            return;
        }

        *self.draft.0.field_mut(field) = value.into();
    }

    /// [`Self::update_field`] addressed by wire name, e.g. `businessName`
    pub fn update_field_by_name(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        let field: Field = name.parse()?;
        self.update_field(field, value);
        Ok(())
    }

    pub fn select_challenge(&mut self, challenge: Option<Challenge>) {
        let label = challenge.map(|c| c.label()).unwrap_or_default();
        self.update_field(Field::Challenge, label);
    }

    /// Start a submission.
    ///
    /// Checks what the form widgets enforce, then the store handle, then
    /// freezes the draft with the current time and enters `Submitting`.
    /// The draft itself is left untouched.
    pub fn begin_submit(&mut self) -> Result<PendingSubmission<S>> {
        match self.phase {
            FormPhase::Submitted => return Err(FormError::AlreadySubmitted),
            FormPhase::Submitting => return Err(FormError::AlreadySubmitting),
            FormPhase::Editing => {}
        }

        let lead = self.draft.to_lead(Utc::now().timestamp_millis());

        validation::validate_form_input(&lead)?;
        if !lead.challenge.is_empty() {
            lead.challenge.parse::<Challenge>()?;
        }

        let Some(store) = self.store.clone() else {
            warn!("Submit attempted without a lead store connection");
            self.notifications.push(Toast::error(CONNECTION_ERROR_MESSAGE));
            return Err(FormError::ConnectionUnavailable);
        };

        self.phase = FormPhase::Submitting;
        info!("Submitting lead for {} ({})", lead.business_name, self.agency);

        Ok(PendingSubmission { store, lead })
    }

    /// Record the outcome of the store call started by [`Self::begin_submit`].
    ///
    /// Outside `Submitting` the outcome is refused and the phase is kept.
    pub fn complete_submit(&mut self, outcome: anyhow::Result<()>) -> Result<()> {
        if self.phase != FormPhase::Submitting {
            warn!("Submission outcome received in phase {:?}", self.phase);
            return Err(FormError::NotSubmitting);
        }

        match outcome {
            Ok(()) => {
                self.phase = FormPhase::Submitted;
                self.notifications.push(Toast::success(SUBMITTED_MESSAGE));
                info!("Lead submitted for {}", self.draft.business_name);
                Ok(())
            }
            Err(e) => {
                self.phase = FormPhase::Editing;
                self.notifications.push(Toast::error(SUBMISSION_ERROR_MESSAGE));
                error!("Lead submission failed: {:#}", e);
                Err(FormError::SubmissionFailed(e.to_string()))
            }
        }
    }

    /// Submit the draft and wait for the store to answer.
    ///
    /// No retry is attempted; on failure the draft is kept so the visitor
    /// can submit again.
    pub async fn submit(&mut self) -> Result<()> {
        let pending = self.begin_submit()?;
        let outcome = pending.send().await;
        self.complete_submit(outcome)
    }

    /// Drain toasts raised since the last call
    pub fn take_notifications(&mut self) -> Vec<Toast> {
        std::mem::take(&mut self.notifications)
    }

    pub fn view(&self) -> FormView<'_> {
        match self.phase {
            FormPhase::Submitted => FormView::Success(SuccessPanel {
                headline: SUCCESS_HEADLINE,
                message: self.agency.success_message(),
                call_back_display: CALL_BACK_DISPLAY,
                call_back_tel: CALL_BACK_TEL,
            }),
            phase => FormView::Form(FormFields {
                agency: self.agency,
                draft: &self.draft,
                challenge_options: &Challenge::ALL,
                submit_enabled: phase == FormPhase::Editing,
                submit_label: if phase == FormPhase::Submitting {
                    SUBMITTING_LABEL
                } else {
                    SUBMIT_LABEL
                },
            }),
        }
    }
}
