//! Tests for contact capture, mail link composition and the launcher seam

mod common;

use common::{query_param, relocation_sheet, sample_contact, viewing_trip_sheet, RecordingLauncher};
use concierge::delivery::{
    booking_link, email_summary_link, BookingRequest, ContactCapture, ContactField,
    DeliveryForm, DeliveryKind, MailLauncher, Recipients, DEFAULT_CC, DEFAULT_PRIMARY,
};
use concierge::flows::FlowVariant;

#[test]
fn test_blank_email_disables_submit() {
    let mut form = DeliveryForm::new(DeliveryKind::EmailSummary);
    form.set(ContactField::Name, "Sara");
    form.set(ContactField::Phone, "050 123 4567");

    assert!(!form.can_submit());
    assert_eq!(
        form.validate().map(|e| e.message().to_string()),
        Some("Add your email.".to_string())
    );
    let sheet = relocation_sheet();
    let result = form.compose(sheet.variant(), &sheet.summarize(), &Recipients::default());
    assert!(result.is_err(), "no link without an email");
}

#[test]
fn test_email_confirmation_must_match() {
    let mut form = DeliveryForm::new(DeliveryKind::EmailSummary);
    form.set(ContactField::Name, "Sara");
    form.set(ContactField::Email, "sara@example.com");
    form.set(ContactField::ConfirmEmail, "sara@example.org");
    form.set(ContactField::Phone, "0501234567");
    assert_eq!(
        form.validate().map(|e| e.message().to_string()),
        Some("Emails do not match.".to_string())
    );

    // Surrounding whitespace is not a mismatch
    form.set(ContactField::ConfirmEmail, " sara@example.com ");
    assert!(form.can_submit());
}

#[test]
fn test_malformed_email_and_short_phone() {
    let contact = ContactCapture::new("Sara", "sara@", "sara@", "0501234567");
    assert_eq!(
        contact.validate().map(|e| e.message().to_string()),
        Some("Enter a valid email address.".to_string())
    );

    let contact = ContactCapture::new("Sara", "sara@example.com", "sara@example.com", "12-34");
    assert_eq!(
        contact.validate().map(|e| e.message().to_string()),
        Some("Enter a phone number with at least 7 digits.".to_string())
    );
}

#[test]
fn test_booking_link_carries_slot_and_contact() {
    let sheet = viewing_trip_sheet();
    let booking = BookingRequest::new(sample_contact(), "2025-03-10", "14:00");
    let link = booking_link(
        sheet.variant(),
        &booking,
        &sheet.summarize(),
        &Recipients::default(),
    )
    .unwrap();
    let uri = link.uri();

    assert!(uri.starts_with(&format!("mailto:{}?", DEFAULT_PRIMARY)));
    assert_eq!(query_param(&uri, "cc").as_deref(), Some(DEFAULT_CC));
    assert_eq!(
        query_param(&uri, "subject").as_deref(),
        Some("Call booking: Viewing trip plan - Sara Haddad")
    );

    let body = query_param(&uri, "body").unwrap();
    assert!(body.contains("Name: Sara Haddad\r\n"));
    assert!(body.contains("Email: sara@example.com\r\n"));
    assert!(body.contains("Phone: +971 50 123 4567\r\n"));
    assert!(body.contains("Requested date: 2025-03-10\r\nRequested time: 14:00\r\n"));
    assert!(body.contains("Visa allowance: 30 days"));
}

#[test]
fn test_booking_rejects_bad_slots() {
    let summary = viewing_trip_sheet().summarize();
    let cases = [
        ("", "14:00", "Pick a date for the call."),
        ("2025-02-30", "14:00", "Use YYYY-MM-DD for the date."),
        ("2025-03-10", "", "Pick a time for the call."),
        ("2025-03-10", "2pm", "Use HH:MM for the time."),
    ];
    for (date, time, message) in cases {
        let booking = BookingRequest::new(sample_contact(), date, time);
        let error = booking_link(
            FlowVariant::ViewingTrip,
            &booking,
            &summary,
            &Recipients::default(),
        )
        .unwrap_err();
        assert_eq!(error.message(), message, "date {:?} time {:?}", date, time);
    }
}

#[test]
fn test_email_body_orders_contact_then_summary() {
    let sheet = relocation_sheet();
    let summary = sheet.summarize();
    let link = email_summary_link(
        sheet.variant(),
        &sample_contact(),
        &summary,
        &Recipients::default(),
    )
    .unwrap();

    assert_eq!(link.subject, "Relocation plan request - Sara Haddad");
    let lines: Vec<&str> = link.body.split("\r\n").collect();
    assert_eq!(lines[0], "Name: Sara Haddad");
    assert_eq!(lines[3], "");
    assert_eq!(lines[4], "Relocation plan");
    assert_eq!(lines[5], "Household: Family");
    assert_eq!(lines.len(), 5 + summary.lines.len());
    assert!(link.body.contains("Notes: Two dogs"));
}

#[test]
fn test_configured_recipients_are_used() {
    let recipients = Recipients {
        primary: "desk@example.ae".to_string(),
        cc: "team+plans@example.ae".to_string(),
    };
    let sheet = relocation_sheet();
    let link = email_summary_link(
        sheet.variant(),
        &sample_contact(),
        &sheet.summarize(),
        &recipients,
    )
    .unwrap();
    let uri = link.uri();
    assert!(uri.starts_with("mailto:desk@example.ae?cc=team%2Bplans@example.ae&"));
    assert_eq!(query_param(&uri, "cc").as_deref(), Some("team+plans@example.ae"));
}

#[test]
fn test_launcher_receives_the_uri() {
    let sheet = relocation_sheet();
    let link = email_summary_link(
        sheet.variant(),
        &sample_contact(),
        &sheet.summarize(),
        &Recipients::default(),
    )
    .unwrap();

    let launcher = RecordingLauncher::default();
    launcher.open(&link).unwrap();
    assert_eq!(launcher.opened.borrow().as_slice(), [link.uri()]);
}
