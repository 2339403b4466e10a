//! Declarative step descriptors and the rule interpreter that validates them
//!
//! A step is plain data: which fields it shows and which rules gate the
//! "Continue" action. [`StepDescriptor::validate`] walks the rules in order
//! and reports the first one that fails, so rule order is message order.

use std::fmt;

use chrono::NaiveDate;

use super::answers::{options_of, Answers, Choice, ChoiceOption, FieldValue};
use crate::validation::parse_amount;

/// Inline message blocking navigation or submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// How a field is presented and edited
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// Short option list shown as a row of pills
    Segmented(Vec<ChoiceOption>),
    /// Longer option list shown as a vertical list
    Select(Vec<ChoiceOption>),
    MultiSelect(Vec<ChoiceOption>),
    Text { placeholder: &'static str },
    /// Free text that must parse as an amount when filled
    Amount { placeholder: &'static str },
    Slider { left: &'static str, right: &'static str },
}

impl FieldKind {
    pub fn options(&self) -> &[ChoiceOption] {
        match self {
            FieldKind::Segmented(options)
            | FieldKind::Select(options)
            | FieldKind::MultiSelect(options) => options,
            _ => &[],
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, FieldKind::Text { .. } | FieldKind::Amount { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec<F> {
    pub field: F,
    pub label: &'static str,
    pub kind: FieldKind,
    pub help: Option<&'static str>,
}

impl<F> FieldSpec<F> {
    pub fn segmented<C: Choice>(field: F, label: &'static str) -> Self {
        Self::with_kind(field, label, FieldKind::Segmented(options_of::<C>()))
    }

    pub fn select<C: Choice>(field: F, label: &'static str) -> Self {
        Self::with_kind(field, label, FieldKind::Select(options_of::<C>()))
    }

    pub fn multi<C: Choice>(field: F, label: &'static str) -> Self {
        Self::with_kind(field, label, FieldKind::MultiSelect(options_of::<C>()))
    }

    pub fn text(field: F, label: &'static str, placeholder: &'static str) -> Self {
        Self::with_kind(field, label, FieldKind::Text { placeholder })
    }

    pub fn amount(field: F, label: &'static str, placeholder: &'static str) -> Self {
        Self::with_kind(field, label, FieldKind::Amount { placeholder })
    }

    pub fn slider(field: F, label: &'static str, left: &'static str, right: &'static str) -> Self {
        Self::with_kind(field, label, FieldKind::Slider { left, right })
    }

    pub fn with_help(mut self, help: &'static str) -> Self {
        self.help = Some(help);
        self
    }

    fn with_kind(field: F, label: &'static str, kind: FieldKind) -> Self {
        Self {
            field,
            label,
            kind,
            help: None,
        }
    }
}

/// One validation rule attached to a step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule<F> {
    /// Field must be answered
    Required { field: F, message: &'static str },
    /// Field must be answered while `when` has the option `is` selected
    RequiredWhen {
        field: F,
        when: F,
        is: &'static str,
        message: &'static str,
    },
    /// Either every field in the group is answered or none is
    AllOrNothing {
        group: Vec<F>,
        message: &'static str,
    },
    /// Field must be answered as soon as any field in `any_of` is
    RequiredIfAny {
        field: F,
        any_of: Vec<F>,
        message: &'static str,
    },
    /// A filled text field must parse as an amount
    Amount { field: F, message: &'static str },
    /// A filled text field must be a `YYYY-MM-DD` calendar date
    Date { field: F, message: &'static str },
}

impl<F: Copy> Rule<F> {
    pub fn required(field: F, message: &'static str) -> Self {
        Rule::Required { field, message }
    }

    pub fn required_when(field: F, when: F, is: &'static str, message: &'static str) -> Self {
        Rule::RequiredWhen {
            field,
            when,
            is,
            message,
        }
    }

    pub fn all_or_nothing(group: Vec<F>, message: &'static str) -> Self {
        Rule::AllOrNothing { group, message }
    }

    pub fn required_if_any(field: F, any_of: Vec<F>, message: &'static str) -> Self {
        Rule::RequiredIfAny {
            field,
            any_of,
            message,
        }
    }

    pub fn amount(field: F, message: &'static str) -> Self {
        Rule::Amount { field, message }
    }

    pub fn date(field: F, message: &'static str) -> Self {
        Rule::Date { field, message }
    }

    /// Evaluate the rule, returning its message when it fails
    pub fn check<A: Answers<Field = F>>(&self, answers: &A) -> Option<ValidationError> {
        let failed = match self {
            Rule::Required { field, .. } => !answers.value(*field).is_filled(),
            Rule::RequiredWhen { field, when, is, .. } => {
                answers.value(*when).choice_key() == Some(*is)
                    && !answers.value(*field).is_filled()
            }
            Rule::AllOrNothing { group, .. } => {
                let filled = group
                    .iter()
                    .filter(|field| answers.value(**field).is_filled())
                    .count();
                filled > 0 && filled < group.len()
            }
            Rule::RequiredIfAny { field, any_of, .. } => {
                any_of.iter().any(|other| answers.value(*other).is_filled())
                    && !answers.value(*field).is_filled()
            }
            Rule::Amount { field, .. } => match answers.value(*field) {
                FieldValue::Text(text) if !text.trim().is_empty() => parse_amount(text).is_none(),
                _ => false,
            },
            Rule::Date { field, .. } => match answers.value(*field) {
                FieldValue::Text(text) if !text.trim().is_empty() => {
                    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").is_err()
                }
                _ => false,
            },
        };
        failed.then(|| ValidationError::new(self.message()))
    }

    /// Every field the rule reads
    pub fn fields(&self) -> Vec<F> {
        match self {
            Rule::Required { field, .. }
            | Rule::Amount { field, .. }
            | Rule::Date { field, .. } => vec![*field],
            Rule::RequiredWhen { field, when, .. } => vec![*field, *when],
            Rule::AllOrNothing { group, .. } => group.clone(),
            Rule::RequiredIfAny { field, any_of, .. } => {
                std::iter::once(*field).chain(any_of.iter().copied()).collect()
            }
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Rule::Required { message, .. }
            | Rule::RequiredWhen { message, .. }
            | Rule::AllOrNothing { message, .. }
            | Rule::RequiredIfAny { message, .. }
            | Rule::Amount { message, .. }
            | Rule::Date { message, .. } => message,
        }
    }
}

/// Static description of one wizard step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepDescriptor<F> {
    pub id: &'static str,
    pub title: &'static str,
    pub question: &'static str,
    pub fields: Vec<FieldSpec<F>>,
    pub rules: Vec<Rule<F>>,
}

impl<F: Copy + Eq> StepDescriptor<F> {
    pub fn new(id: &'static str, title: &'static str, question: &'static str) -> Self {
        Self {
            id,
            title,
            question,
            fields: Vec::new(),
            rules: Vec::new(),
        }
    }

    pub fn field(mut self, spec: FieldSpec<F>) -> Self {
        self.fields.push(spec);
        self
    }

    pub fn rule(mut self, rule: Rule<F>) -> Self {
        self.rules.push(rule);
        self
    }

    /// First failing rule's message, or `None` when the step may be left
    pub fn validate<A: Answers<Field = F>>(&self, answers: &A) -> Option<ValidationError> {
        self.rules.iter().find_map(|rule| rule.check(answers))
    }

    pub fn owns(&self, field: F) -> bool {
        self.fields.iter().any(|spec| spec.field == field)
    }

    pub fn spec(&self, field: F) -> Option<&FieldSpec<F>> {
        self.fields.iter().find(|spec| spec.field == field)
    }
}
