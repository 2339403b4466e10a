//! Tests for the declarative step tables of both flows

mod common;

use std::collections::HashSet;
use std::hash::Hash;

use common::{complete_relocation, complete_viewing_trip};
use concierge::flows::{
    AnswerSheet, FieldOf, Flow, Relocation, RelocationAnswers, RelocationField, ViewingTrip, ViewingTripField,
};
use concierge::wizard::{Answers, Edit, FieldKind, FieldValue, Patch, Wizard};

/// Rules may only read fields shown on their own step or an earlier one
fn assert_rules_look_backwards<F: Flow>()
where
    FieldOf<F>: Hash,
{
    let steps = F::steps();
    let mut seen = HashSet::new();
    for step in steps {
        for spec in &step.fields {
            assert!(seen.insert(spec.field), "{:?} shown twice", spec.field);
        }
        for rule in &step.rules {
            for field in rule.fields() {
                assert!(
                    seen.contains(&field),
                    "step {} reads {:?} before it is shown",
                    step.id,
                    field
                );
            }
        }
    }
}

fn assert_table_shape<F: Flow>(expected_ids: &[&str]) {
    let ids: Vec<&str> = F::steps().iter().map(|step| step.id).collect();
    assert_eq!(ids, expected_ids);

    let review = F::steps().last().unwrap();
    assert!(review.fields.is_empty());
    assert!(review.rules.is_empty());

    for step in F::steps() {
        for spec in &step.fields {
            match &spec.kind {
                FieldKind::Segmented(options)
                | FieldKind::Select(options)
                | FieldKind::MultiSelect(options) => {
                    assert!(!options.is_empty(), "{} has no options", spec.label)
                }
                _ => {}
            }
        }
    }
}

fn first_error<F: Flow>(answers: F::Answers, step: &str) -> Option<String> {
    let descriptor = F::steps().iter().find(|s| s.id == step).unwrap();
    descriptor
        .validate(&answers)
        .map(|error| error.message().to_string())
}

#[test]
fn test_relocation_table() {
    assert_table_shape::<Relocation>(&[
        "household",
        "area",
        "housing",
        "services",
        "priorities",
        "cost_of_living",
        "review",
    ]);
    assert_rules_look_backwards::<Relocation>();
}

#[test]
fn test_viewing_trip_table() {
    assert_table_shape::<ViewingTrip>(&[
        "traveller",
        "trip",
        "interests",
        "budget",
        "logistics",
        "review",
    ]);
    assert_rules_look_backwards::<ViewingTrip>();
}

#[test]
fn test_cost_of_living_is_all_or_nothing() {
    let blank = complete_relocation();
    assert_eq!(first_error::<Relocation>(blank.clone(), "cost_of_living"), None);

    let mut partial = blank.clone();
    partial.apply(RelocationField::Income, Edit::text("30000"));
    assert_eq!(
        first_error::<Relocation>(partial.clone(), "cost_of_living"),
        Some(
            "Fill in income, fixed costs and discretionary spend, or leave all three blank."
                .to_string()
        )
    );

    partial.apply(RelocationField::FixedCosts, Edit::text("12000"));
    partial.apply(RelocationField::Discretionary, Edit::text("lots"));
    assert_eq!(
        first_error::<Relocation>(partial.clone(), "cost_of_living"),
        Some("Enter discretionary spend as a number.".to_string())
    );

    partial.apply(RelocationField::Discretionary, Edit::text("5,000"));
    assert_eq!(
        first_error::<Relocation>(partial.clone(), "cost_of_living"),
        Some("Choose a savings goal.".to_string())
    );

    partial.apply(RelocationField::SavingsGoal, Edit::select("emergency-fund"));
    assert_eq!(first_error::<Relocation>(partial.clone(), "cost_of_living"), None);
    assert_eq!(
        Relocation::summarize(&partial).get("Net position"),
        Some("AED 13,000 per month")
    );
}

#[test]
fn test_trip_dates_switch_required_fields() {
    let mut answers = complete_viewing_trip();
    answers.apply(ViewingTripField::ArrivalDate, Edit::Clear);
    assert_eq!(
        first_error::<ViewingTrip>(answers.clone(), "trip"),
        Some("Add your arrival date.".to_string())
    );

    answers.apply(ViewingTripField::ArrivalDate, Edit::text("8 March"));
    assert_eq!(
        first_error::<ViewingTrip>(answers.clone(), "trip"),
        Some("Use YYYY-MM-DD for the arrival date.".to_string())
    );

    answers.apply(ViewingTripField::TripDates, Edit::select("flexible"));
    answers.apply(ViewingTripField::ArrivalDate, Edit::Clear);
    assert_eq!(
        first_error::<ViewingTrip>(answers.clone(), "trip"),
        Some("Choose a travel window.".to_string())
    );

    answers.apply(ViewingTripField::TravelWindow, Edit::select("next-month"));
    assert_eq!(first_error::<ViewingTrip>(answers, "trip"), None);
}

#[test]
fn test_mortgage_status_only_for_mortgages() {
    let mut wizard = Wizard::<ViewingTrip>::from_answers(complete_viewing_trip());
    wizard.patch(
        Patch::new()
            .set(ViewingTripField::Financing, Edit::select("cash"))
            .set(ViewingTripField::MortgageStatus, Edit::Clear),
    );
    assert!(wizard.validate_all().is_ok());

    wizard.patch((ViewingTripField::Financing, Edit::select("mortgage")));
    let error = wizard.validate_all().unwrap_err();
    assert_eq!(
        error.to_string(),
        "step 4 (budget) is incomplete: Tell us where your mortgage stands."
    );
}

#[test]
fn test_empty_answers_fail_on_the_first_rule() {
    assert_eq!(
        first_error::<Relocation>(RelocationAnswers::default(), "household"),
        Some("Choose your household size.".to_string())
    );
    assert_eq!(
        first_error::<Relocation>(RelocationAnswers::default(), "services"),
        Some("Choose at least one service.".to_string())
    );
    assert_eq!(
        first_error::<Relocation>(RelocationAnswers::default(), "priorities"),
        Some("Choose your spending priority.".to_string())
    );
}

#[test]
fn test_answers_file_sliders_are_clamped() {
    let sheet = AnswerSheet::from_json(
        r#"{"flow": "relocation", "answers": {"priorities": {"speed": 200, "cost_control": 100}}}"#,
    )
    .unwrap();
    let summary = sheet.summarize();
    assert_eq!(summary.get("Speed"), Some("100/100"));
    assert_eq!(summary.get("Cost control"), Some("100/100"));

    match sheet {
        AnswerSheet::Relocation(answers) => {
            assert_eq!(answers.value(RelocationField::Speed), FieldValue::Slider(100))
        }
        other => panic!("unexpected flow {:?}", other.variant()),
    }
}

#[test]
fn test_answers_file_rejects_negative_slider() {
    assert!(AnswerSheet::from_json(
        r#"{"flow": "relocation", "answers": {"priorities": {"speed": -5}}}"#
    )
    .is_err());
}
