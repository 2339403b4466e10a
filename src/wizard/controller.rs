//! Step controller shared by every flow
//!
//! Owns the current step index, the typed answers and the derived summary.
//! The summary is rebuilt after every change so the live panel never lags.

use tracing::{debug, info};

use super::answers::{Answers, Patch};
use super::step::{StepDescriptor, ValidationError};
use super::summary::DerivedSummary;
use crate::delivery::{DeliveryForm, DeliveryKind, MailLink, Recipients};
use crate::flows::{FieldOf, Flow, FlowVariant};

/// Result of pressing "Continue"
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Advanced { from: usize, to: usize },
    Blocked(ValidationError),
    /// Already on the last step; there is nothing further to move to
    AtLastStep,
}

/// Wizard state for one flow
#[derive(Debug, Clone)]
pub struct Wizard<F: Flow> {
    current: usize,
    answers: F::Answers,
    summary: DerivedSummary,
    error: Option<ValidationError>,
    delivery: Option<DeliveryForm>,
}

impl<F: Flow> Default for Wizard<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Flow> Wizard<F> {
    pub fn new() -> Self {
        Self::from_answers(F::Answers::default())
    }

    /// Start on step 0 with answers loaded from elsewhere (an answers file)
    pub fn from_answers(answers: F::Answers) -> Self {
        let summary = F::summarize(&answers);
        Self {
            current: 0,
            answers,
            summary,
            error: None,
            delivery: None,
        }
    }

    pub fn variant(&self) -> FlowVariant {
        F::VARIANT
    }

    pub fn steps(&self) -> &'static [StepDescriptor<FieldOf<F>>] {
        F::steps()
    }

    pub fn step_count(&self) -> usize {
        F::steps().len()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_step(&self) -> &'static StepDescriptor<FieldOf<F>> {
        &F::steps()[self.current]
    }

    pub fn is_last_step(&self) -> bool {
        self.current + 1 == self.step_count()
    }

    pub fn answers(&self) -> &F::Answers {
        &self.answers
    }

    pub fn summary(&self) -> &DerivedSummary {
        &self.summary
    }

    /// Message from the last blocked advance, recomputed after every edit
    pub fn error(&self) -> Option<&ValidationError> {
        self.error.as_ref()
    }

    pub fn validate_current(&self) -> Option<ValidationError> {
        self.current_step().validate(&self.answers)
    }

    /// Whether the "Continue" action should be enabled
    pub fn can_advance(&self) -> bool {
        !self.is_last_step() && self.validate_current().is_none()
    }

    pub fn advance(&mut self) -> StepOutcome {
        if let Some(error) = self.validate_current() {
            debug!(step = self.current_step().id, %error, "advance blocked");
            self.error = Some(error.clone());
            return StepOutcome::Blocked(error);
        }
        self.error = None;
        if self.is_last_step() {
            return StepOutcome::AtLastStep;
        }
        let from = self.current;
        self.current += 1;
        debug!(
            flow = F::VARIANT.key(),
            from = F::steps()[from].id,
            to = self.current_step().id,
            "step advanced"
        );
        StepOutcome::Advanced {
            from,
            to: self.current,
        }
    }

    /// Go back one step without validating. Returns `false` on step 0.
    pub fn retreat(&mut self) -> bool {
        if self.current == 0 {
            return false;
        }
        self.current -= 1;
        self.error = None;
        self.delivery = None;
        debug!(to = self.current_step().id, "step retreated");
        true
    }

    /// Merge a batch of edits. Returns how many were accepted.
    pub fn patch(&mut self, patch: impl Into<Patch<FieldOf<F>>>) -> usize {
        let mut applied = 0;
        for (field, edit) in patch.into().into_edits() {
            if self.answers.apply(field, edit) {
                applied += 1;
            } else {
                debug!(?field, "edit rejected");
            }
        }
        if applied > 0 {
            self.refresh();
        }
        applied
    }

    /// Mutate the typed answers directly
    pub fn update(&mut self, change: impl FnOnce(&mut F::Answers)) {
        change(&mut self.answers);
        self.refresh();
    }

    /// Back to step 0 with default answers
    pub fn reset(&mut self) {
        *self = Self::new();
        info!(flow = F::VARIANT.key(), "wizard reset");
    }

    /// Check every step in order, as the batch commands do before building a link
    pub fn validate_all(&self) -> crate::error::Result<()> {
        for (index, step) in F::steps().iter().enumerate() {
            if let Some(message) = step.validate(&self.answers) {
                return Err(crate::error::ConciergeError::IncompleteStep {
                    step: index + 1,
                    id: step.id,
                    message,
                });
            }
        }
        Ok(())
    }

    /// Open the contact modal. Only allowed on the last step.
    pub fn open_delivery(&mut self, kind: DeliveryKind) -> bool {
        if !self.is_last_step() {
            return false;
        }
        self.delivery = Some(DeliveryForm::new(kind));
        true
    }

    pub fn close_delivery(&mut self) {
        self.delivery = None;
    }

    pub fn delivery(&self) -> Option<&DeliveryForm> {
        self.delivery.as_ref()
    }

    pub fn delivery_mut(&mut self) -> Option<&mut DeliveryForm> {
        self.delivery.as_mut()
    }

    /// Build the mail link for the open modal
    pub fn submit_delivery(&self, recipients: &Recipients) -> Result<MailLink, ValidationError> {
        match &self.delivery {
            Some(form) => form.compose(F::VARIANT, &self.summary, recipients),
            None => Err(ValidationError::new("Choose how you want to receive your plan.")),
        }
    }

    fn refresh(&mut self) {
        self.summary = F::summarize(&self.answers);
        if self.error.is_some() {
            self.error = self.validate_current();
        }
    }
}
