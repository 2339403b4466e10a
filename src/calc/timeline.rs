use std::fmt;

use crate::flows::options::{AreaKnown, Household, YesNo};
use crate::wizard::SLIDER_DEFAULT;

pub const BASE_WEEKS: f64 = 6.0;
pub const FAMILY_WEEKS: f64 = 2.0;
pub const KIDS_WEEKS: f64 = 2.0;
pub const UNKNOWN_AREA_WEEKS: f64 = 1.0;
pub const MIN_WEEKS: f64 = 4.0;
pub const MAX_WEEKS: f64 = 16.0;

/// Slider points per week of adjustment
const SLIDER_STEP: f64 = 25.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineInputs {
    pub household: Option<Household>,
    pub kids: Option<YesNo>,
    pub area_known: Option<AreaKnown>,
    /// 0 = relaxed, 100 = as fast as possible
    pub speed: u8,
    /// 0 = spend freely, 100 = keep costs tight
    pub cost_control: u8,
}

impl Default for TimelineInputs {
    fn default() -> Self {
        Self {
            household: None,
            kids: None,
            area_known: None,
            speed: SLIDER_DEFAULT,
            cost_control: SLIDER_DEFAULT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineEstimate {
    pub weeks: u32,
}

impl fmt::Display for TimelineEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} weeks", self.weeks)
    }
}

/// Estimated weeks from first call to keys in hand
pub fn estimate_timeline(inputs: &TimelineInputs) -> TimelineEstimate {
    let mut weeks = BASE_WEEKS;
    if inputs.household == Some(Household::Family) {
        weeks += FAMILY_WEEKS;
    }
    if inputs.kids == Some(YesNo::Yes) {
        weeks += KIDS_WEEKS;
    }
    if inputs.area_known == Some(AreaKnown::NotSure) {
        weeks += UNKNOWN_AREA_WEEKS;
    }
    weeks -= slider_weeks(inputs.speed);
    weeks += slider_weeks(inputs.cost_control);

    TimelineEstimate {
        weeks: weeks.clamp(MIN_WEEKS, MAX_WEEKS) as u32,
    }
}

fn slider_weeks(position: u8) -> f64 {
    ((f64::from(position.min(100)) - f64::from(SLIDER_DEFAULT)) / SLIDER_STEP).round()
}
