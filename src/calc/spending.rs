use std::fmt;

use crate::flows::options::{BudgetBand, Household, SpendingPriority, YesNo};
use crate::validation::format_aed;

pub const BASELINE_AED: f64 = 12_000.0;
pub const COUPLE_AED: f64 = 4_500.0;
pub const FAMILY_AED: f64 = 9_000.0;
pub const KIDS_AED: f64 = 5_000.0;
pub const MIN_AED: f64 = 6_000.0;
pub const MAX_AED: f64 = 60_000.0;

/// Half-width of the displayed band around the estimate
const BAND_SPREAD: f64 = 0.10;
const BAND_ROUNDING: f64 = 500.0;

fn budget_delta(band: BudgetBand) -> f64 {
    match band {
        BudgetBand::Under10k => -4_000.0,
        BudgetBand::From10kTo20k => 0.0,
        BudgetBand::From20kTo35k => 6_000.0,
        BudgetBand::Over35k => 15_000.0,
    }
}

fn priority_delta(priority: SpendingPriority) -> f64 {
    match priority {
        SpendingPriority::Comfort => 3_000.0,
        SpendingPriority::Balanced => 0.0,
        SpendingPriority::SaveMore => -2_500.0,
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpendingInputs {
    pub household: Option<Household>,
    pub kids: Option<YesNo>,
    pub budget_band: Option<BudgetBand>,
    pub priority: Option<SpendingPriority>,
}

/// Monthly spend estimate with its rounded display band
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpendingBand {
    pub estimate: f64,
    pub low: f64,
    pub high: f64,
}

impl fmt::Display for SpendingBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let high = format_aed(self.high);
        write!(
            f,
            "{} to {} per month",
            format_aed(self.low),
            high.trim_start_matches("AED ")
        )
    }
}

pub fn estimate_spending(inputs: &SpendingInputs) -> SpendingBand {
    let mut estimate = BASELINE_AED;
    match inputs.household {
        Some(Household::Couple) => estimate += COUPLE_AED,
        Some(Household::Family) => estimate += FAMILY_AED,
        _ => {}
    }
    if inputs.kids == Some(YesNo::Yes) {
        estimate += KIDS_AED;
    }
    if let Some(band) = inputs.budget_band {
        estimate += budget_delta(band);
    }
    if let Some(priority) = inputs.priority {
        estimate += priority_delta(priority);
    }
    let estimate = estimate.clamp(MIN_AED, MAX_AED);

    SpendingBand {
        estimate,
        low: round_to_band(estimate * (1.0 - BAND_SPREAD)),
        high: round_to_band(estimate * (1.0 + BAND_SPREAD)),
    }
}

fn round_to_band(value: f64) -> f64 {
    (value / BAND_ROUNDING).round() * BAND_ROUNDING
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_answers_use_the_baseline() {
        let band = estimate_spending(&SpendingInputs::default());
        assert_eq!(band.estimate, 12_000.0);
        assert_eq!(band.to_string(), "AED 11,000 to 13,000 per month");
    }

    #[test]
    fn family_in_a_larger_home_on_comfort() {
        let band = estimate_spending(&SpendingInputs {
            household: Some(Household::Family),
            kids: Some(YesNo::Yes),
            budget_band: Some(BudgetBand::From20kTo35k),
            priority: Some(SpendingPriority::Comfort),
        });
        assert_eq!(band.estimate, 35_000.0);
        assert_eq!(band.low, 31_500.0);
        assert_eq!(band.high, 38_500.0);
    }

    #[test]
    fn couple_band_matches_display_example() {
        let band = estimate_spending(&SpendingInputs {
            household: Some(Household::Couple),
            kids: Some(YesNo::No),
            budget_band: Some(BudgetBand::From10kTo20k),
            priority: Some(SpendingPriority::Comfort),
        });
        assert_eq!(band.estimate, 19_500.0);
        assert_eq!(band.to_string(), "AED 17,500 to 21,500 per month");
    }

    #[test]
    fn clamps_to_the_floor() {
        let band = estimate_spending(&SpendingInputs {
            household: Some(Household::Single),
            kids: Some(YesNo::No),
            budget_band: Some(BudgetBand::Under10k),
            priority: Some(SpendingPriority::SaveMore),
        });
        assert_eq!(band.estimate, 6_000.0);
    }
}
