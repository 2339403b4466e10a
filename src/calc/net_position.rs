use std::fmt;

use crate::validation::{format_aed, parse_amount};

/// Shown instead of a figure when the inputs are incomplete
pub const UNAVAILABLE: &str = "—";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NetPosition {
    Unavailable,
    Monthly(f64),
}

impl NetPosition {
    pub fn amount(self) -> Option<f64> {
        match self {
            NetPosition::Monthly(value) => Some(value),
            NetPosition::Unavailable => None,
        }
    }
}

impl fmt::Display for NetPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetPosition::Unavailable => f.write_str(UNAVAILABLE),
            NetPosition::Monthly(value) => write!(f, "{} per month", format_aed(*value)),
        }
    }
}

/// Income minus fixed and discretionary costs, once all three parse
pub fn net_position(income: &str, fixed_costs: &str, discretionary: &str) -> NetPosition {
    match (
        parse_amount(income),
        parse_amount(fixed_costs),
        parse_amount(discretionary),
    ) {
        (Some(income), Some(fixed), Some(discretionary)) => {
            NetPosition::Monthly(income - fixed - discretionary)
        }
        _ => NetPosition::Unavailable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subtracts_costs_from_income() {
        let net = net_position("AED 30,000", "18000", "7,500");
        assert_eq!(net, NetPosition::Monthly(4_500.0));
        assert_eq!(net.to_string(), "AED 4,500 per month");
    }

    #[test]
    fn deficits_keep_their_sign() {
        assert_eq!(
            net_position("10000", "9000", "3000").to_string(),
            "AED -2,000 per month"
        );
    }

    #[test]
    fn any_missing_or_unparsable_input_is_unavailable() {
        assert_eq!(net_position("", "", ""), NetPosition::Unavailable);
        assert_eq!(net_position("30000", "", "5000"), NetPosition::Unavailable);
        assert_eq!(net_position("lots", "1000", "500").to_string(), UNAVAILABLE);
    }
}
