//! Shared test utilities and fixture generators

#![allow(dead_code)]

use std::cell::RefCell;
use std::io::Write;

use concierge::delivery::{ContactCapture, MailLauncher, MailLink};
use concierge::error::Result;
use concierge::flows::{AnswerSheet, RelocationAnswers, ViewingTripAnswers};
use percent_encoding::percent_decode_str;
use tempfile::NamedTempFile;

/// Complete relocation answers:
/// - family with kids, area not sure, sliders untouched (11 weeks)
/// - cost-of-living step skipped entirely
pub const RELOCATION_JSON: &str = r#"{
  "flow": "relocation",
  "answers": {
    "household": {"household": "family", "kids": "yes", "move_window": "1-3-months"},
    "area": {"area_known": "not-sure", "lifestyle": "near-schools"},
    "housing": {"property_type": "villa", "bedrooms": "3", "budget_band": "20k-35k", "tenure": "rent"},
    "services": {"services": ["school-search", "visa-emirates-id"], "notes": "Two dogs"},
    "priorities": {"speed": 50, "cost_control": 50, "spending": "balanced"}
  }
}"#;

/// Complete viewing trip answers with fixed dates and a mortgage
pub const VIEWING_TRIP_JSON: &str = r#"{
  "flow": "viewing-trip",
  "answers": {
    "traveller": {"party": "couple", "nationality": "voa-30"},
    "trip": {"length": "4-5-nights", "dates": "fixed", "arrival_date": "2025-03-08"},
    "interests": {"interests": ["off-plan", "villas"], "purpose": "invest"},
    "budget": {"purchase_budget": "2m-5m", "financing": "mortgage", "mortgage_status": "pre-approved"},
    "logistics": {"extras": ["airport-pickup"], "accommodation": "hotel"}
  }
}"#;

pub fn relocation_sheet() -> AnswerSheet {
    AnswerSheet::from_json(RELOCATION_JSON).unwrap()
}

pub fn viewing_trip_sheet() -> AnswerSheet {
    AnswerSheet::from_json(VIEWING_TRIP_JSON).unwrap()
}

pub fn complete_relocation() -> RelocationAnswers {
    match relocation_sheet() {
        AnswerSheet::Relocation(answers) => answers,
        other => panic!("fixture is a {:?} sheet", other.variant()),
    }
}

pub fn complete_viewing_trip() -> ViewingTripAnswers {
    match viewing_trip_sheet() {
        AnswerSheet::ViewingTrip(answers) => answers,
        other => panic!("fixture is a {:?} sheet", other.variant()),
    }
}

pub fn sample_contact() -> ContactCapture {
    ContactCapture::new("Sara Haddad", "sara@example.com", "sara@example.com", "+971 50 123 4567")
}

/// Write JSON to a temp file that lives as long as the handle
pub fn write_answers_file(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// Value of a query parameter in a mailto URI, percent-decoded
pub fn query_param(uri: &str, name: &str) -> Option<String> {
    let (_, query) = uri.split_once('?')?;
    query.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key == name).then(|| percent_decode_str(value).decode_utf8_lossy().into_owned())
    })
}

/// Launcher that records links instead of spawning a mail client
#[derive(Debug, Default)]
pub struct RecordingLauncher {
    pub opened: RefCell<Vec<String>>,
}

impl MailLauncher for RecordingLauncher {
    fn open(&self, link: &MailLink) -> Result<()> {
        self.opened.borrow_mut().push(link.uri());
        Ok(())
    }
}
