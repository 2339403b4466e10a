//! Delivery sub-flows reachable from the review step
//!
//! Both paths collect contact details and turn the plan summary into a mail
//! draft: one asks for the summary by email, the other books a call.

pub mod contact;
pub mod launcher;
pub mod mailto;

use tracing::info;

pub use contact::{BookingRequest, ContactCapture};
pub use launcher::{MailLauncher, SystemMailLauncher};
pub use mailto::{
    build_mail_link, encode_component, MailLink, Recipients, DEFAULT_CC, DEFAULT_PRIMARY,
};

use crate::flows::FlowVariant;
use crate::validation::sanitize_phone;
use crate::wizard::{DerivedSummary, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryKind {
    EmailSummary,
    Booking,
}

impl DeliveryKind {
    pub fn title(self) -> &'static str {
        match self {
            DeliveryKind::EmailSummary => "Email my plan",
            DeliveryKind::Booking => "Book a call",
        }
    }

    pub fn action(self) -> &'static str {
        match self {
            DeliveryKind::EmailSummary => "Send summary",
            DeliveryKind::Booking => "Request booking",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    ConfirmEmail,
    Phone,
    Date,
    Time,
}

impl ContactField {
    pub fn label(self) -> &'static str {
        match self {
            ContactField::Name => "Full name",
            ContactField::Email => "Email",
            ContactField::ConfirmEmail => "Confirm email",
            ContactField::Phone => "Phone",
            ContactField::Date => "Preferred date",
            ContactField::Time => "Preferred time",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            ContactField::Name => "Your name",
            ContactField::Email | ContactField::ConfirmEmail => "you@example.com",
            ContactField::Phone => "+971 50 000 0000",
            ContactField::Date => "YYYY-MM-DD",
            ContactField::Time => "HH:MM",
        }
    }
}

const EMAIL_FIELDS: &[ContactField] = &[
    ContactField::Name,
    ContactField::Email,
    ContactField::ConfirmEmail,
    ContactField::Phone,
];

const BOOKING_FIELDS: &[ContactField] = &[
    ContactField::Name,
    ContactField::Email,
    ContactField::ConfirmEmail,
    ContactField::Phone,
    ContactField::Date,
    ContactField::Time,
];

/// State of the open delivery modal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryForm {
    kind: DeliveryKind,
    booking: BookingRequest,
}

impl DeliveryForm {
    pub fn new(kind: DeliveryKind) -> Self {
        Self {
            kind,
            booking: BookingRequest::default(),
        }
    }

    pub fn kind(&self) -> DeliveryKind {
        self.kind
    }

    pub fn fields(&self) -> &'static [ContactField] {
        match self.kind {
            DeliveryKind::EmailSummary => EMAIL_FIELDS,
            DeliveryKind::Booking => BOOKING_FIELDS,
        }
    }

    pub fn value(&self, field: ContactField) -> &str {
        let contact = &self.booking.contact;
        match field {
            ContactField::Name => &contact.name,
            ContactField::Email => &contact.email,
            ContactField::ConfirmEmail => &contact.confirm_email,
            ContactField::Phone => &contact.phone,
            ContactField::Date => &self.booking.date,
            ContactField::Time => &self.booking.time,
        }
    }

    /// Phone input is sanitized as it is typed
    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        let contact = &mut self.booking.contact;
        match field {
            ContactField::Name => contact.name = value,
            ContactField::Email => contact.email = value,
            ContactField::ConfirmEmail => contact.confirm_email = value,
            ContactField::Phone => contact.phone = sanitize_phone(&value),
            ContactField::Date => self.booking.date = value,
            ContactField::Time => self.booking.time = value,
        }
    }

    pub fn contact(&self) -> &ContactCapture {
        &self.booking.contact
    }

    pub fn validate(&self) -> Option<ValidationError> {
        match self.kind {
            DeliveryKind::EmailSummary => self.booking.contact.validate(),
            DeliveryKind::Booking => self.booking.validate(),
        }
    }

    /// Whether the submit control is enabled
    pub fn can_submit(&self) -> bool {
        self.validate().is_none()
    }

    pub fn compose(
        &self,
        variant: FlowVariant,
        summary: &DerivedSummary,
        recipients: &Recipients,
    ) -> Result<MailLink, ValidationError> {
        match self.kind {
            DeliveryKind::EmailSummary => {
                email_summary_link(variant, &self.booking.contact, summary, recipients)
            }
            DeliveryKind::Booking => booking_link(variant, &self.booking, summary, recipients),
        }
    }
}

pub fn email_subject(variant: FlowVariant, name: &str) -> String {
    format!("{} request - {}", variant.label(), name.trim())
}

pub fn booking_subject(variant: FlowVariant, name: &str) -> String {
    format!("Call booking: {} - {}", variant.label(), name.trim())
}

fn compose_body(header: Vec<String>, summary: &DerivedSummary) -> String {
    let mut lines = header;
    lines.push(String::new());
    lines.push(summary.title.clone());
    lines.extend(summary.text_lines());
    lines.join("\n")
}

/// Mail draft carrying the plan summary
pub fn email_summary_link(
    variant: FlowVariant,
    contact: &ContactCapture,
    summary: &DerivedSummary,
    recipients: &Recipients,
) -> Result<MailLink, ValidationError> {
    if let Some(error) = contact.validate() {
        return Err(error);
    }
    let body = compose_body(contact.lines(), summary);
    let link = build_mail_link(recipients, &email_subject(variant, &contact.name), &body);
    info!(flow = variant.key(), kind = "email-summary", "mail link built");
    Ok(link)
}

/// Mail draft requesting a call at the given slot
pub fn booking_link(
    variant: FlowVariant,
    booking: &BookingRequest,
    summary: &DerivedSummary,
    recipients: &Recipients,
) -> Result<MailLink, ValidationError> {
    if let Some(error) = booking.validate() {
        return Err(error);
    }
    let mut header = booking.contact.lines();
    header.push(format!("Requested date: {}", booking.date.trim()));
    header.push(format!("Requested time: {}", booking.time.trim()));
    let body = compose_body(header, summary);
    let link = build_mail_link(
        recipients,
        &booking_subject(variant, &booking.contact.name),
        &body,
    );
    info!(flow = variant.key(), kind = "booking", "mail link built");
    Ok(link)
}
