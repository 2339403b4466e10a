//! Concierge: guided relocation and viewing-trip planner
//!
//! A step-by-step questionnaire for two flows (relocating to Dubai, planning a
//! property viewing trip). Answers feed small calculators whose results show
//! up in a live summary, and the finished plan is sent as a prefilled mail
//! link, either as an emailed summary or as a call booking.

pub mod calc;
pub mod cli;
pub mod config;
pub mod delivery;
pub mod error;
pub mod flows;
pub mod logging;
pub mod report;
pub mod utils;
pub mod validation;
pub mod wizard;
