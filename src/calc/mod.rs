//! Derived-value calculators
//!
//! Pure functions from a partial answer set to illustrative figures. Every
//! coefficient lives in a named constant so the tables read like a tariff.

pub mod net_position;
pub mod spending;
pub mod timeline;
pub mod visa;

pub use net_position::{net_position, NetPosition, UNAVAILABLE};
pub use spending::{estimate_spending, SpendingBand, SpendingInputs};
pub use timeline::{estimate_timeline, TimelineEstimate, TimelineInputs};
pub use visa::{check_visa, trip_nights, visa_allowance, VisaAllowance, VisaCheck};
