//! Flow variants: step tables, typed answers and summaries
//!
//! Each flow is a zero-sized marker implementing [`Flow`]. The wizard
//! controller is generic over it, so both flows share navigation, validation
//! and delivery.

pub mod options;
pub mod relocation;
pub mod viewing_trip;

use std::fmt;
use std::path::Path;

use clap::ValueEnum;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::wizard::{Answers, DerivedSummary, StepDescriptor, Wizard};

pub use relocation::{Relocation, RelocationAnswers, RelocationField};
pub use viewing_trip::{ViewingTrip, ViewingTripAnswers, ViewingTripField};

/// Field enum of a flow's answers
pub type FieldOf<F> = <<F as Flow>::Answers as Answers>::Field;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum FlowVariant {
    Relocation,
    ViewingTrip,
}

impl FlowVariant {
    pub const ALL: [FlowVariant; 2] = [FlowVariant::Relocation, FlowVariant::ViewingTrip];

    pub fn key(self) -> &'static str {
        match self {
            FlowVariant::Relocation => "relocation",
            FlowVariant::ViewingTrip => "viewing-trip",
        }
    }

    /// Plan name used in summaries and subjects
    pub fn label(self) -> &'static str {
        match self {
            FlowVariant::Relocation => "Relocation plan",
            FlowVariant::ViewingTrip => "Viewing trip plan",
        }
    }

    pub fn tagline(self) -> &'static str {
        match self {
            FlowVariant::Relocation => "Plan a move to Dubai: home, area, services and budget",
            FlowVariant::ViewingTrip => "Plan a property viewing trip: dates, visa and viewings",
        }
    }
}

impl fmt::Display for FlowVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One wizard flow: its step table and how its answers are summarized
pub trait Flow: fmt::Debug + Clone + 'static {
    type Answers: Answers + Serialize + DeserializeOwned;

    const VARIANT: FlowVariant;

    fn steps() -> &'static [StepDescriptor<FieldOf<Self>>];

    fn summarize(answers: &Self::Answers) -> DerivedSummary;
}

/// Answers of either flow, as stored in an answers file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "flow", content = "answers", rename_all = "kebab-case")]
pub enum AnswerSheet {
    Relocation(RelocationAnswers),
    ViewingTrip(ViewingTripAnswers),
}

impl AnswerSheet {
    pub fn variant(&self) -> FlowVariant {
        match self {
            AnswerSheet::Relocation(_) => FlowVariant::Relocation,
            AnswerSheet::ViewingTrip(_) => FlowVariant::ViewingTrip,
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn summarize(&self) -> DerivedSummary {
        match self {
            AnswerSheet::Relocation(answers) => Relocation::summarize(answers),
            AnswerSheet::ViewingTrip(answers) => ViewingTrip::summarize(answers),
        }
    }

    /// Run every step's rules, reporting the first incomplete step
    pub fn validate(&self) -> Result<()> {
        match self {
            AnswerSheet::Relocation(answers) => {
                Wizard::<Relocation>::from_answers(answers.clone()).validate_all()
            }
            AnswerSheet::ViewingTrip(answers) => {
                Wizard::<ViewingTrip>::from_answers(answers.clone()).validate_all()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sheets_are_tagged_by_flow_key() {
        let sheet = AnswerSheet::ViewingTrip(ViewingTripAnswers::default());
        let json = sheet.to_json().unwrap();
        assert!(json.contains("\"flow\": \"viewing-trip\""));
        assert_eq!(AnswerSheet::from_json(&json).unwrap(), sheet);
    }

    #[test]
    fn partial_sheets_fill_defaults() {
        let sheet = AnswerSheet::from_json(
            r#"{"flow": "relocation", "answers": {"household": {"household": "family"}}}"#,
        )
        .unwrap();
        match sheet {
            AnswerSheet::Relocation(answers) => {
                assert_eq!(answers.priorities.speed, 50);
                assert!(answers.services.services.is_empty());
            }
            other => panic!("unexpected flow {:?}", other.variant()),
        }
    }

    #[test]
    fn empty_sheet_fails_on_the_first_step() {
        let sheet = AnswerSheet::Relocation(RelocationAnswers::default());
        let error = sheet.validate().unwrap_err();
        assert_eq!(
            error.to_string(),
            "step 1 (household) is incomplete: Choose your household size."
        );
    }
}
