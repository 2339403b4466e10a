//! `mailto:` link construction (RFC 6068)
//!
//! Subject and body are percent-encoded as RFC 3986 components: everything
//! but unreserved characters is escaped, so spaces become `%20` rather than
//! `+`. Body line breaks are normalised to CRLF before encoding.

use std::fmt;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

use crate::validation::is_valid_email;

pub const DEFAULT_PRIMARY: &str = "leads@dunesconcierge.ae";
pub const DEFAULT_CC: &str = "advisory@dunesconcierge.ae";

/// Everything except RFC 3986 unreserved characters
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Addresses keep their `@` readable
const ADDRESS: &AsciiSet = &COMPONENT.remove(b'@');

/// Where every enquiry goes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Recipients {
    pub primary: String,
    pub cc: String,
}

impl Default for Recipients {
    fn default() -> Self {
        Self {
            primary: DEFAULT_PRIMARY.to_string(),
            cc: DEFAULT_CC.to_string(),
        }
    }
}

impl Recipients {
    /// Name of the first malformed address, if any
    pub fn invalid_address(&self) -> Option<&str> {
        [&self.primary, &self.cc]
            .into_iter()
            .find(|address| !is_valid_email(address))
            .map(String::as_str)
    }
}

/// A ready-to-open mail draft
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailLink {
    pub to: String,
    pub cc: String,
    pub subject: String,
    /// Body with CRLF line breaks
    pub body: String,
}

impl MailLink {
    pub fn uri(&self) -> String {
        format!(
            "mailto:{}?cc={}&subject={}&body={}",
            encode_address(&self.to),
            encode_address(&self.cc),
            encode_component(&self.subject),
            encode_component(&self.body)
        )
    }
}

impl fmt::Display for MailLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.uri())
    }
}

pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

fn encode_address(value: &str) -> String {
    utf8_percent_encode(value.trim(), ADDRESS).to_string()
}

/// Assemble a mail draft. Pure: opening it is the launcher's job.
pub fn build_mail_link(recipients: &Recipients, subject: &str, body: &str) -> MailLink {
    MailLink {
        to: recipients.primary.trim().to_string(),
        cc: recipients.cc.trim().to_string(),
        subject: subject.to_string(),
        body: to_crlf(body),
    }
}

fn to_crlf(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\n', "\r\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_recipients_are_well_formed() {
        assert_eq!(Recipients::default().invalid_address(), None);
        let broken = Recipients {
            primary: "leads".into(),
            cc: DEFAULT_CC.into(),
        };
        assert_eq!(broken.invalid_address(), Some("leads"));
    }

    #[test]
    fn uri_layout() {
        let link = build_mail_link(&Recipients::default(), "Hi there", "a\nb");
        assert_eq!(
            link.uri(),
            "mailto:leads@dunesconcierge.ae?cc=advisory@dunesconcierge.ae\
             &subject=Hi%20there&body=a%0D%0Ab"
        );
    }

    #[test]
    fn reserved_characters_are_escaped() {
        assert_eq!(encode_component("a&b=c?d+e"), "a%26b%3Dc%3Fd%2Be");
        assert_eq!(encode_component("Beach & marina"), "Beach%20%26%20marina");
        assert_eq!(encode_component("—"), "%E2%80%94");
        assert_eq!(encode_component("safe-._~"), "safe-._~");
    }

    #[test]
    fn existing_crlf_is_not_doubled() {
        let link = build_mail_link(&Recipients::default(), "s", "a\r\nb\nc");
        assert_eq!(link.body, "a\r\nb\r\nc");
    }
}
