//! Viewing-trip flow: traveller, dates, interests, budget and logistics, with
//! a visa check derived from nationality and trip length.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::options::{
    Accommodation, Financing, Interest, MortgageStatus, NationalityGroup, Party, PurchaseBudget,
    Purpose, TravelWindow, TripDates, TripExtra, TripLength,
};
use super::{Flow, FlowVariant};
use crate::calc::{check_visa, trip_nights, visa_allowance, VisaAllowance, VisaCheck};
use crate::wizard::{
    apply_choice, apply_many, apply_text, choice_value, label_or_dash, labels_or_dash,
    many_value, text_or_dash, Answers, Choice, DerivedSummary, Edit, FieldSpec, FieldValue, Rule,
    StepDescriptor,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewingTrip;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewingTripField {
    Party,
    Nationality,
    TripLength,
    TripDates,
    ArrivalDate,
    TravelWindow,
    Interests,
    Purpose,
    PurchaseBudget,
    Financing,
    MortgageStatus,
    Extras,
    Accommodation,
    Notes,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TravellerStep {
    pub party: Option<Party>,
    pub nationality: Option<NationalityGroup>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TripStep {
    pub length: Option<TripLength>,
    pub dates: Option<TripDates>,
    /// `YYYY-MM-DD`, only asked for fixed dates
    pub arrival_date: String,
    pub travel_window: Option<TravelWindow>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterestsStep {
    pub interests: BTreeSet<Interest>,
    pub purpose: Option<Purpose>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BudgetStep {
    pub purchase_budget: Option<PurchaseBudget>,
    pub financing: Option<Financing>,
    pub mortgage_status: Option<MortgageStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogisticsStep {
    pub extras: BTreeSet<TripExtra>,
    pub accommodation: Option<Accommodation>,
    pub notes: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewingTripAnswers {
    pub traveller: TravellerStep,
    pub trip: TripStep,
    pub interests: InterestsStep,
    pub budget: BudgetStep,
    pub logistics: LogisticsStep,
}

impl ViewingTripAnswers {
    pub fn visa_allowance(&self) -> VisaAllowance {
        visa_allowance(self.traveller.nationality)
    }

    pub fn visa_check(&self) -> VisaCheck {
        check_visa(self.visa_allowance(), trip_nights(self.trip.length))
    }
}

impl Answers for ViewingTripAnswers {
    type Field = ViewingTripField;

    fn value(&self, field: ViewingTripField) -> FieldValue<'_> {
        use ViewingTripField as F;
        match field {
            F::Party => choice_value(self.traveller.party),
            F::Nationality => choice_value(self.traveller.nationality),
            F::TripLength => choice_value(self.trip.length),
            F::TripDates => choice_value(self.trip.dates),
            F::ArrivalDate => FieldValue::Text(&self.trip.arrival_date),
            F::TravelWindow => choice_value(self.trip.travel_window),
            F::Interests => many_value(&self.interests.interests),
            F::Purpose => choice_value(self.interests.purpose),
            F::PurchaseBudget => choice_value(self.budget.purchase_budget),
            F::Financing => choice_value(self.budget.financing),
            F::MortgageStatus => choice_value(self.budget.mortgage_status),
            F::Extras => many_value(&self.logistics.extras),
            F::Accommodation => choice_value(self.logistics.accommodation),
            F::Notes => FieldValue::Text(&self.logistics.notes),
        }
    }

    fn apply(&mut self, field: ViewingTripField, edit: Edit) -> bool {
        use ViewingTripField as F;
        match field {
            F::Party => apply_choice(&mut self.traveller.party, edit),
            F::Nationality => apply_choice(&mut self.traveller.nationality, edit),
            F::TripLength => apply_choice(&mut self.trip.length, edit),
            F::TripDates => apply_choice(&mut self.trip.dates, edit),
            F::ArrivalDate => apply_text(&mut self.trip.arrival_date, edit),
            F::TravelWindow => apply_choice(&mut self.trip.travel_window, edit),
            F::Interests => apply_many(&mut self.interests.interests, edit),
            F::Purpose => apply_choice(&mut self.interests.purpose, edit),
            F::PurchaseBudget => apply_choice(&mut self.budget.purchase_budget, edit),
            F::Financing => apply_choice(&mut self.budget.financing, edit),
            F::MortgageStatus => apply_choice(&mut self.budget.mortgage_status, edit),
            F::Extras => apply_many(&mut self.logistics.extras, edit),
            F::Accommodation => apply_choice(&mut self.logistics.accommodation, edit),
            F::Notes => apply_text(&mut self.logistics.notes, edit),
        }
    }
}

static STEPS: Lazy<Vec<StepDescriptor<ViewingTripField>>> = Lazy::new(build_steps);

fn build_steps() -> Vec<StepDescriptor<ViewingTripField>> {
    use ViewingTripField as F;

    vec![
        StepDescriptor::new("traveller", "Who's travelling", "Tell us about your party.")
            .field(FieldSpec::segmented::<Party>(F::Party, "Travelling as"))
            .field(
                FieldSpec::select::<NationalityGroup>(F::Nationality, "Nationality")
                    .with_help("Decides which visa you arrive on"),
            )
            .rule(Rule::required(F::Party, "Choose who is travelling."))
            .rule(Rule::required(F::Nationality, "Choose your nationality group.")),
        StepDescriptor::new("trip", "Trip dates", "When would you like to visit?")
            .field(FieldSpec::segmented::<TripLength>(F::TripLength, "Trip length"))
            .field(FieldSpec::segmented::<TripDates>(F::TripDates, "Dates"))
            .field(FieldSpec::text(F::ArrivalDate, "Arrival date", "YYYY-MM-DD"))
            .field(FieldSpec::select::<TravelWindow>(F::TravelWindow, "Travel window"))
            .rule(Rule::required(F::TripLength, "Choose how long you will stay."))
            .rule(Rule::required(
                F::TripDates,
                "Tell us whether your dates are fixed.",
            ))
            .rule(Rule::required_when(
                F::ArrivalDate,
                F::TripDates,
                TripDates::Fixed.key(),
                "Add your arrival date.",
            ))
            .rule(Rule::date(F::ArrivalDate, "Use YYYY-MM-DD for the arrival date."))
            .rule(Rule::required_when(
                F::TravelWindow,
                F::TripDates,
                TripDates::Flexible.key(),
                "Choose a travel window.",
            )),
        StepDescriptor::new("interests", "What to view", "What would you like to see?")
            .field(FieldSpec::multi::<Interest>(F::Interests, "Property types"))
            .field(FieldSpec::segmented::<Purpose>(F::Purpose, "Buying to"))
            .rule(Rule::required(F::Interests, "Choose at least one property type."))
            .rule(Rule::required(F::Purpose, "Tell us why you are buying.")),
        StepDescriptor::new("budget", "Budget & financing", "How are you planning to buy?")
            .field(FieldSpec::select::<PurchaseBudget>(F::PurchaseBudget, "Purchase budget"))
            .field(FieldSpec::segmented::<Financing>(F::Financing, "Financing"))
            .field(FieldSpec::segmented::<MortgageStatus>(
                F::MortgageStatus,
                "Mortgage status",
            ))
            .rule(Rule::required(F::PurchaseBudget, "Choose your purchase budget."))
            .rule(Rule::required(F::Financing, "Tell us how you will finance."))
            .rule(Rule::required_when(
                F::MortgageStatus,
                F::Financing,
                Financing::Mortgage.key(),
                "Tell us where your mortgage stands.",
            )),
        StepDescriptor::new("logistics", "Trip logistics", "What should we arrange?")
            .field(
                FieldSpec::multi::<TripExtra>(F::Extras, "Extras")
                    .with_help("Optional"),
            )
            .field(FieldSpec::segmented::<Accommodation>(
                F::Accommodation,
                "Accommodation",
            ))
            .field(FieldSpec::text(F::Notes, "Anything else?", "Optional notes"))
            .rule(Rule::required(F::Accommodation, "Choose where you will stay.")),
        StepDescriptor::new("review", "Review & send", "Here is your viewing trip plan."),
    ]
}

impl Flow for ViewingTrip {
    type Answers = ViewingTripAnswers;

    const VARIANT: FlowVariant = FlowVariant::ViewingTrip;

    fn steps() -> &'static [StepDescriptor<ViewingTripField>] {
        STEPS.as_slice()
    }

    fn summarize(answers: &ViewingTripAnswers) -> DerivedSummary {
        let mut summary = DerivedSummary::new(FlowVariant::ViewingTrip.label());
        let trip = &answers.trip;
        let budget = &answers.budget;
        let logistics = &answers.logistics;

        summary.push("Travelling as", label_or_dash(answers.traveller.party));
        summary.push("Nationality", label_or_dash(answers.traveller.nationality));
        summary.push("Trip length", label_or_dash(trip.length));
        summary.push("Dates", label_or_dash(trip.dates));
        summary.push("Arrival date", text_or_dash(&trip.arrival_date));
        summary.push("Travel window", label_or_dash(trip.travel_window));
        summary.push("Interests", labels_or_dash(&answers.interests.interests));
        summary.push("Purpose", label_or_dash(answers.interests.purpose));
        summary.push("Purchase budget", label_or_dash(budget.purchase_budget));
        summary.push("Financing", label_or_dash(budget.financing));
        summary.push("Mortgage status", label_or_dash(budget.mortgage_status));
        summary.push("Extras", labels_or_dash(&logistics.extras));
        summary.push("Accommodation", label_or_dash(logistics.accommodation));
        summary.push("Notes", text_or_dash(&logistics.notes));
        summary.push("Visa allowance", answers.visa_allowance().to_string());
        summary.push("Visa check", answers.visa_check().to_string());
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_steps_ending_on_review() {
        let steps = ViewingTrip::steps();
        assert_eq!(steps.len(), 6);
        assert_eq!(steps[1].id, "trip");
        assert_eq!(steps[5].id, "review");
    }

    #[test]
    fn fixed_dates_need_a_real_arrival_date() {
        let step = &ViewingTrip::steps()[1];
        let mut answers = ViewingTripAnswers::default();
        answers.trip.length = Some(TripLength::OneWeek);
        answers.trip.dates = Some(TripDates::Fixed);
        assert_eq!(
            step.validate(&answers).unwrap().message(),
            "Add your arrival date."
        );

        answers.trip.arrival_date = "next tuesday".into();
        assert_eq!(
            step.validate(&answers).unwrap().message(),
            "Use YYYY-MM-DD for the arrival date."
        );

        answers.trip.arrival_date = "2026-11-03".into();
        assert!(step.validate(&answers).is_none());
    }

    #[test]
    fn mortgage_status_only_for_mortgage_buyers() {
        let step = &ViewingTrip::steps()[3];
        let mut answers = ViewingTripAnswers::default();
        answers.budget.purchase_budget = Some(PurchaseBudget::From2mTo5m);
        answers.budget.financing = Some(Financing::Cash);
        assert!(step.validate(&answers).is_none());

        answers.budget.financing = Some(Financing::Mortgage);
        assert_eq!(
            step.validate(&answers).unwrap().message(),
            "Tell us where your mortgage stands."
        );
    }

    #[test]
    fn summary_carries_the_visa_check() {
        let mut answers = ViewingTripAnswers::default();
        answers.traveller.nationality = Some(NationalityGroup::OnArrival30);
        answers.trip.length = Some(TripLength::OneWeek);
        let summary = ViewingTrip::summarize(&answers);
        assert_eq!(summary.get("Visa allowance"), Some("30 days"));
        assert_eq!(
            summary.get("Visa check"),
            Some("7 nights fits within 30 visa days")
        );
    }
}
