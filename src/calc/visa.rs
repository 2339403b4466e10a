use std::fmt;

use crate::flows::options::{NationalityGroup, TripLength};

/// Days of stay allowed on a standard pre-arranged visit visa
pub const VISIT_VISA_DAYS: u32 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisaAllowance {
    NotRequired,
    Days(u32),
    Unknown,
}

impl fmt::Display for VisaAllowance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VisaAllowance::NotRequired => f.write_str("No visa needed"),
            VisaAllowance::Days(days) => write!(f, "{} days", days),
            VisaAllowance::Unknown => f.write_str("To be confirmed"),
        }
    }
}

pub fn visa_allowance(group: Option<NationalityGroup>) -> VisaAllowance {
    match group {
        Some(NationalityGroup::Gcc) => VisaAllowance::NotRequired,
        Some(NationalityGroup::OnArrival30) => VisaAllowance::Days(30),
        Some(NationalityGroup::OnArrival90) => VisaAllowance::Days(90),
        Some(NationalityGroup::VisitVisa) => VisaAllowance::Days(VISIT_VISA_DAYS),
        Some(NationalityGroup::NotSure) | None => VisaAllowance::Unknown,
    }
}

/// Nights planned for a trip length, taking the upper end of each range
pub fn trip_nights(length: Option<TripLength>) -> Option<u32> {
    length.map(|length| match length {
        TripLength::ShortStay => 3,
        TripLength::MidStay => 5,
        TripLength::OneWeek => 7,
        TripLength::TwoWeeks => 14,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisaCheck {
    NotRequired,
    Fits { nights: u32, days: u32 },
    Exceeds { nights: u32, days: u32 },
    Unknown,
}

impl fmt::Display for VisaCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VisaCheck::NotRequired => f.write_str("No visa needed"),
            VisaCheck::Fits { nights, days } => {
                write!(f, "{} nights fits within {} visa days", nights, days)
            }
            VisaCheck::Exceeds { nights, days } => {
                write!(f, "{} nights exceeds {} visa days", nights, days)
            }
            VisaCheck::Unknown => f.write_str("Confirm visa with our team"),
        }
    }
}

pub fn check_visa(allowance: VisaAllowance, nights: Option<u32>) -> VisaCheck {
    match (allowance, nights) {
        (VisaAllowance::NotRequired, _) => VisaCheck::NotRequired,
        (VisaAllowance::Days(days), Some(nights)) if nights <= days => {
            VisaCheck::Fits { nights, days }
        }
        (VisaAllowance::Days(days), Some(nights)) => VisaCheck::Exceeds { nights, days },
        _ => VisaCheck::Unknown,
    }
}
