use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::validation::{is_valid_email, phone_digits, sanitize_phone};
use crate::wizard::ValidationError;

/// Fewest digits accepted as a callable number
pub const MIN_PHONE_DIGITS: usize = 7;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

/// Contact details collected in the delivery modal
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactCapture {
    pub name: String,
    pub email: String,
    pub confirm_email: String,
    pub phone: String,
}

impl ContactCapture {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        confirm_email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            confirm_email: confirm_email.into(),
            phone: sanitize_phone(&phone.into()),
        }
    }

    /// Just the double-entry email check
    pub fn email_error(&self) -> Option<ValidationError> {
        let email = self.email.trim();
        if email.is_empty() {
            return Some(ValidationError::new("Add your email."));
        }
        if !is_valid_email(email) {
            return Some(ValidationError::new("Enter a valid email address."));
        }
        if self.confirm_email.trim() != email {
            return Some(ValidationError::new("Emails do not match."));
        }
        None
    }

    pub fn validate(&self) -> Option<ValidationError> {
        if self.name.trim().is_empty() {
            return Some(ValidationError::new("Add your name."));
        }
        if let Some(error) = self.email_error() {
            return Some(error);
        }
        if self.phone.trim().is_empty() {
            return Some(ValidationError::new("Add your phone number."));
        }
        if phone_digits(&self.phone) < MIN_PHONE_DIGITS {
            return Some(ValidationError::new("Enter a phone number with at least 7 digits."));
        }
        None
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_none()
    }

    /// `Name: ...`, `Email: ...`, `Phone: ...`
    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("Name: {}", self.name.trim()),
            format!("Email: {}", self.email.trim()),
            format!("Phone: {}", self.phone.trim()),
        ]
    }
}

/// Contact details plus the requested call slot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub contact: ContactCapture,
    pub date: String,
    pub time: String,
}

impl BookingRequest {
    pub fn new(contact: ContactCapture, date: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            contact,
            date: date.into(),
            time: time.into(),
        }
    }

    pub fn validate(&self) -> Option<ValidationError> {
        if let Some(error) = self.contact.validate() {
            return Some(error);
        }
        let date = self.date.trim();
        if date.is_empty() {
            return Some(ValidationError::new("Pick a date for the call."));
        }
        if NaiveDate::parse_from_str(date, DATE_FORMAT).is_err() {
            return Some(ValidationError::new("Use YYYY-MM-DD for the date."));
        }
        let time = self.time.trim();
        if time.is_empty() {
            return Some(ValidationError::new("Pick a time for the call."));
        }
        if NaiveTime::parse_from_str(time, TIME_FORMAT).is_err() {
            return Some(ValidationError::new("Use HH:MM for the time."));
        }
        None
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sara() -> ContactCapture {
        ContactCapture::new("Sara", "sara@example.com", "sara@example.com", "+971 50 123 4567")
    }

    #[test]
    fn complete_contact_validates() {
        assert!(sara().is_valid());
    }

    #[test]
    fn messages_follow_field_order() {
        let mut contact = sara();
        contact.name.clear();
        contact.email.clear();
        assert_eq!(contact.validate().unwrap().message(), "Add your name.");

        contact.name = "Sara".into();
        assert_eq!(contact.validate().unwrap().message(), "Add your email.");

        contact.email = "sara@example".into();
        assert_eq!(
            contact.validate().unwrap().message(),
            "Enter a valid email address."
        );

        contact.email = "sara@example.org".into();
        assert_eq!(contact.validate().unwrap().message(), "Emails do not match.");
    }

    #[test]
    fn short_phone_numbers_are_rejected() {
        let contact = ContactCapture::new("Sara", "s@x.ae", "s@x.ae", "12-34");
        assert_eq!(
            contact.validate().unwrap().message(),
            "Enter a phone number with at least 7 digits."
        );
    }

    #[test]
    fn phone_is_sanitized_on_capture() {
        let contact = ContactCapture::new("Sara", "s@x.ae", "s@x.ae", "tel: +971-50-1234567");
        assert_eq!(contact.phone, " +971-50-1234567");
    }

    #[test]
    fn booking_checks_date_and_time_formats() {
        let mut booking = BookingRequest::new(sara(), "", "");
        assert_eq!(booking.validate().unwrap().message(), "Pick a date for the call.");

        booking.date = "10/03/2025".into();
        assert_eq!(booking.validate().unwrap().message(), "Use YYYY-MM-DD for the date.");

        booking.date = "2025-03-10".into();
        assert_eq!(booking.validate().unwrap().message(), "Pick a time for the call.");

        booking.time = "2pm".into();
        assert_eq!(booking.validate().unwrap().message(), "Use HH:MM for the time.");

        booking.time = "14:00".into();
        assert!(booking.is_valid());
    }
}
