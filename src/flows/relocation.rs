//! Relocation flow: household, area, housing, services, priorities and a
//! cost-of-living preview, ending on a review step.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::options::{
    Area, AreaKnown, Bedrooms, BudgetBand, Household, Lifestyle, MoveWindow, PropertyType,
    SavingsGoal, Service, SpendingPriority, Tenure, YesNo,
};
use super::{Flow, FlowVariant};
use crate::calc::{
    estimate_spending, estimate_timeline, net_position, NetPosition, SpendingBand,
    SpendingInputs, TimelineEstimate, TimelineInputs,
};
use crate::wizard::{
    apply_choice, apply_many, apply_slider, apply_text, choice_value, deserialize_slider,
    label_or_dash, labels_or_dash, many_value, text_or_dash, Answers, Choice, DerivedSummary, Edit, FieldSpec,
    FieldValue, Rule, StepDescriptor, SLIDER_DEFAULT,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Relocation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelocationField {
    Household,
    Kids,
    MoveWindow,
    AreaKnown,
    PreferredArea,
    Lifestyle,
    PropertyType,
    Bedrooms,
    BudgetBand,
    Tenure,
    Services,
    Notes,
    Speed,
    CostControl,
    SpendingPriority,
    Income,
    FixedCosts,
    Discretionary,
    SavingsGoal,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HouseholdStep {
    pub household: Option<Household>,
    pub kids: Option<YesNo>,
    pub move_window: Option<MoveWindow>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AreaStep {
    pub area_known: Option<AreaKnown>,
    pub preferred_area: Option<Area>,
    pub lifestyle: Option<Lifestyle>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HousingStep {
    pub property_type: Option<PropertyType>,
    pub bedrooms: Option<Bedrooms>,
    pub budget_band: Option<BudgetBand>,
    pub tenure: Option<Tenure>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServicesStep {
    pub services: BTreeSet<Service>,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrioritiesStep {
    #[serde(deserialize_with = "deserialize_slider")]
    pub speed: u8,
    #[serde(deserialize_with = "deserialize_slider")]
    pub cost_control: u8,
    pub spending: Option<SpendingPriority>,
}

impl Default for PrioritiesStep {
    fn default() -> Self {
        Self {
            speed: SLIDER_DEFAULT,
            cost_control: SLIDER_DEFAULT,
            spending: None,
        }
    }
}

/// Amounts are kept as typed so the user sees exactly what they entered
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostOfLivingStep {
    pub income: String,
    pub fixed_costs: String,
    pub discretionary: String,
    pub savings_goal: Option<SavingsGoal>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelocationAnswers {
    pub household: HouseholdStep,
    pub area: AreaStep,
    pub housing: HousingStep,
    pub services: ServicesStep,
    pub priorities: PrioritiesStep,
    pub cost_of_living: CostOfLivingStep,
}

impl RelocationAnswers {
    pub fn timeline_inputs(&self) -> TimelineInputs {
        TimelineInputs {
            household: self.household.household,
            kids: self.household.kids,
            area_known: self.area.area_known,
            speed: self.priorities.speed,
            cost_control: self.priorities.cost_control,
        }
    }

    pub fn spending_inputs(&self) -> SpendingInputs {
        SpendingInputs {
            household: self.household.household,
            kids: self.household.kids,
            budget_band: self.housing.budget_band,
            priority: self.priorities.spending,
        }
    }

    pub fn timeline(&self) -> TimelineEstimate {
        estimate_timeline(&self.timeline_inputs())
    }

    pub fn spending(&self) -> SpendingBand {
        estimate_spending(&self.spending_inputs())
    }

    pub fn net_position(&self) -> NetPosition {
        let costs = &self.cost_of_living;
        net_position(&costs.income, &costs.fixed_costs, &costs.discretionary)
    }
}

impl Answers for RelocationAnswers {
    type Field = RelocationField;

    fn value(&self, field: RelocationField) -> FieldValue<'_> {
        use RelocationField as F;
        match field {
            F::Household => choice_value(self.household.household),
            F::Kids => choice_value(self.household.kids),
            F::MoveWindow => choice_value(self.household.move_window),
            F::AreaKnown => choice_value(self.area.area_known),
            F::PreferredArea => choice_value(self.area.preferred_area),
            F::Lifestyle => choice_value(self.area.lifestyle),
            F::PropertyType => choice_value(self.housing.property_type),
            F::Bedrooms => choice_value(self.housing.bedrooms),
            F::BudgetBand => choice_value(self.housing.budget_band),
            F::Tenure => choice_value(self.housing.tenure),
            F::Services => many_value(&self.services.services),
            F::Notes => FieldValue::Text(&self.services.notes),
            F::Speed => FieldValue::Slider(self.priorities.speed),
            F::CostControl => FieldValue::Slider(self.priorities.cost_control),
            F::SpendingPriority => choice_value(self.priorities.spending),
            F::Income => FieldValue::Text(&self.cost_of_living.income),
            F::FixedCosts => FieldValue::Text(&self.cost_of_living.fixed_costs),
            F::Discretionary => FieldValue::Text(&self.cost_of_living.discretionary),
            F::SavingsGoal => choice_value(self.cost_of_living.savings_goal),
        }
    }

    fn apply(&mut self, field: RelocationField, edit: Edit) -> bool {
        use RelocationField as F;
        match field {
            F::Household => apply_choice(&mut self.household.household, edit),
            F::Kids => apply_choice(&mut self.household.kids, edit),
            F::MoveWindow => apply_choice(&mut self.household.move_window, edit),
            F::AreaKnown => apply_choice(&mut self.area.area_known, edit),
            F::PreferredArea => apply_choice(&mut self.area.preferred_area, edit),
            F::Lifestyle => apply_choice(&mut self.area.lifestyle, edit),
            F::PropertyType => apply_choice(&mut self.housing.property_type, edit),
            F::Bedrooms => apply_choice(&mut self.housing.bedrooms, edit),
            F::BudgetBand => apply_choice(&mut self.housing.budget_band, edit),
            F::Tenure => apply_choice(&mut self.housing.tenure, edit),
            F::Services => apply_many(&mut self.services.services, edit),
            F::Notes => apply_text(&mut self.services.notes, edit),
            F::Speed => apply_slider(&mut self.priorities.speed, edit),
            F::CostControl => apply_slider(&mut self.priorities.cost_control, edit),
            F::SpendingPriority => apply_choice(&mut self.priorities.spending, edit),
            F::Income => apply_text(&mut self.cost_of_living.income, edit),
            F::FixedCosts => apply_text(&mut self.cost_of_living.fixed_costs, edit),
            F::Discretionary => apply_text(&mut self.cost_of_living.discretionary, edit),
            F::SavingsGoal => apply_choice(&mut self.cost_of_living.savings_goal, edit),
        }
    }
}

static STEPS: Lazy<Vec<StepDescriptor<RelocationField>>> = Lazy::new(build_steps);

fn build_steps() -> Vec<StepDescriptor<RelocationField>> {
    use RelocationField as F;
    let amounts = vec![F::Income, F::FixedCosts, F::Discretionary];

    vec![
        StepDescriptor::new("household", "Your household", "Who is making the move?")
            .field(FieldSpec::segmented::<Household>(F::Household, "Household"))
            .field(FieldSpec::segmented::<YesNo>(F::Kids, "Children moving with you"))
            .field(FieldSpec::select::<MoveWindow>(F::MoveWindow, "When are you moving?"))
            .rule(Rule::required(F::Household, "Choose your household size."))
            .rule(Rule::required(
                F::Kids,
                "Tell us whether children are moving with you.",
            ))
            .rule(Rule::required(F::MoveWindow, "Choose when you plan to move.")),
        StepDescriptor::new("area", "Where you'll live", "Do you already know the area?")
            .field(FieldSpec::segmented::<AreaKnown>(F::AreaKnown, "Area"))
            .field(
                FieldSpec::select::<Area>(F::PreferredArea, "Preferred area")
                    .with_help("Needed when you know the area"),
            )
            .field(
                FieldSpec::select::<Lifestyle>(F::Lifestyle, "Lifestyle")
                    .with_help("Helps us shortlist areas when you are not sure"),
            )
            .rule(Rule::required(
                F::AreaKnown,
                "Tell us whether you know the area.",
            ))
            .rule(Rule::required_when(
                F::PreferredArea,
                F::AreaKnown,
                AreaKnown::Known.key(),
                "Choose your preferred area.",
            ))
            .rule(Rule::required_when(
                F::Lifestyle,
                F::AreaKnown,
                AreaKnown::NotSure.key(),
                "Choose the lifestyle you are after.",
            )),
        StepDescriptor::new("housing", "Home & budget", "What kind of home are you looking for?")
            .field(FieldSpec::segmented::<PropertyType>(F::PropertyType, "Property type"))
            .field(FieldSpec::select::<Bedrooms>(F::Bedrooms, "Bedrooms"))
            .field(
                FieldSpec::select::<BudgetBand>(F::BudgetBand, "Monthly budget")
                    .with_help("Rent or mortgage per month"),
            )
            .field(FieldSpec::segmented::<Tenure>(F::Tenure, "Rent or buy"))
            .rule(Rule::required(F::PropertyType, "Choose a property type."))
            .rule(Rule::required(F::Bedrooms, "Choose how many bedrooms you need."))
            .rule(Rule::required(F::BudgetBand, "Choose your monthly budget."))
            .rule(Rule::required(F::Tenure, "Tell us whether you plan to rent or buy.")),
        StepDescriptor::new("services", "Services", "Which services would help your move?")
            .field(FieldSpec::multi::<Service>(F::Services, "Services"))
            .field(FieldSpec::text(F::Notes, "Anything else?", "Optional notes"))
            .rule(Rule::required(F::Services, "Choose at least one service.")),
        StepDescriptor::new("priorities", "Priorities", "How should we balance your move?")
            .field(FieldSpec::slider(F::Speed, "Speed", "Relaxed", "As fast as possible"))
            .field(FieldSpec::slider(F::CostControl, "Cost control", "Flexible", "Tight"))
            .field(FieldSpec::segmented::<SpendingPriority>(
                F::SpendingPriority,
                "Spending priority",
            ))
            .rule(Rule::required(
                F::SpendingPriority,
                "Choose your spending priority.",
            )),
        StepDescriptor::new(
            "cost_of_living",
            "Cost-of-living preview",
            "Want a quick look at your monthly position?",
        )
        .field(
            FieldSpec::amount(F::Income, "Monthly income", "AED")
                .with_help("Leave all three blank to skip"),
        )
        .field(FieldSpec::amount(F::FixedCosts, "Fixed costs", "AED"))
        .field(FieldSpec::amount(F::Discretionary, "Discretionary spend", "AED"))
        .field(FieldSpec::select::<SavingsGoal>(F::SavingsGoal, "Savings goal"))
        .rule(Rule::all_or_nothing(
            amounts.clone(),
            "Fill in income, fixed costs and discretionary spend, or leave all three blank.",
        ))
        .rule(Rule::amount(F::Income, "Enter your income as a number."))
        .rule(Rule::amount(F::FixedCosts, "Enter fixed costs as a number."))
        .rule(Rule::amount(
            F::Discretionary,
            "Enter discretionary spend as a number.",
        ))
        .rule(Rule::required_if_any(
            F::SavingsGoal,
            amounts,
            "Choose a savings goal.",
        )),
        StepDescriptor::new("review", "Review & send", "Here is your relocation plan."),
    ]
}

impl Flow for Relocation {
    type Answers = RelocationAnswers;

    const VARIANT: FlowVariant = FlowVariant::Relocation;

    fn steps() -> &'static [StepDescriptor<RelocationField>] {
        STEPS.as_slice()
    }

    fn summarize(answers: &RelocationAnswers) -> DerivedSummary {
        let mut summary = DerivedSummary::new(FlowVariant::Relocation.label());
        let household = &answers.household;
        let area = &answers.area;
        let housing = &answers.housing;
        let priorities = &answers.priorities;
        let costs = &answers.cost_of_living;

        summary.push("Household", label_or_dash(household.household));
        summary.push("Children", label_or_dash(household.kids));
        summary.push("Moving", label_or_dash(household.move_window));
        summary.push("Area known", label_or_dash(area.area_known));
        summary.push("Preferred area", label_or_dash(area.preferred_area));
        summary.push("Lifestyle", label_or_dash(area.lifestyle));
        summary.push("Property type", label_or_dash(housing.property_type));
        summary.push("Bedrooms", label_or_dash(housing.bedrooms));
        summary.push("Monthly budget", label_or_dash(housing.budget_band));
        summary.push("Tenure", label_or_dash(housing.tenure));
        summary.push("Services", labels_or_dash(&answers.services.services));
        summary.push("Notes", text_or_dash(&answers.services.notes));
        summary.push("Speed", format!("{}/100", priorities.speed));
        summary.push("Cost control", format!("{}/100", priorities.cost_control));
        summary.push("Spending priority", label_or_dash(priorities.spending));
        summary.push("Monthly income", text_or_dash(&costs.income));
        summary.push("Fixed costs", text_or_dash(&costs.fixed_costs));
        summary.push("Discretionary", text_or_dash(&costs.discretionary));
        summary.push("Savings goal", label_or_dash(costs.savings_goal));
        summary.push("Estimated timeline", answers.timeline().to_string());
        summary.push("Estimated spend", answers.spending().to_string());
        summary.push("Net position", answers.net_position().to_string());
        summary
    }
}
