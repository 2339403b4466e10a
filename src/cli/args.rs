//! Command-line argument definitions using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::flows::FlowVariant;

/// Concierge - Plan a relocation or property viewing trip and send it as an enquiry
#[derive(Parser, Debug)]
#[command(name = "concierge")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Flow to open. If not provided, it is picked interactively.
    #[arg(short, long, value_enum)]
    pub flow: Option<FlowVariant>,

    /// Answers file (JSON) used to prefill the wizard.
    /// Its flow wins over the picker; it must agree with --flow when both are given.
    #[arg(short, long)]
    pub answers: Option<PathBuf>,

    /// Configuration file (JSON). Defaults to $CONCIERGE_CONFIG, then
    /// <config dir>/concierge/config.json, then built-in defaults.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Skip the confirmation before opening the mail client
    #[arg(long, default_value = "false")]
    pub no_confirm: bool,

    /// Verbose logging (overridden by $CONCIERGE_LOG)
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,
}

/// Contact details for the mailto command
#[derive(clap::Args, Debug, Clone, Default)]
pub struct ContactArgs {
    /// Full name
    #[arg(long)]
    pub name: String,

    /// Email address
    #[arg(long)]
    pub email: String,

    /// Email address again; must match --email
    #[arg(long)]
    pub confirm_email: String,

    /// Phone number (spaces and punctuation are stripped)
    #[arg(long)]
    pub phone: String,

    /// Call date (YYYY-MM-DD). With --time, builds a booking request.
    #[arg(long)]
    pub date: Option<String>,

    /// Call time (HH:MM). With --date, builds a booking request.
    #[arg(long)]
    pub time: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate an answers file and print its plan summary
    Summary {
        /// Answers file (JSON)
        #[arg(short, long)]
        answers: PathBuf,
    },

    /// Validate an answers file plus contact details and print the mail link
    Mailto {
        /// Answers file (JSON)
        #[arg(short, long)]
        answers: PathBuf,

        #[command(flatten)]
        contact: ContactArgs,

        /// Open the link in the default mail client
        #[arg(long, default_value = "false")]
        open: bool,
    },
}

impl ContactArgs {
    /// Booking date and time, when both are given
    pub fn booking_slot(&self) -> Result<Option<(&str, &str)>, String> {
        match (self.date.as_deref(), self.time.as_deref()) {
            (Some(date), Some(time)) => Ok(Some((date, time))),
            (None, None) => Ok(None),
            (Some(_), None) => Err("--date needs --time to book a call".to_string()),
            (None, Some(_)) => Err("--time needs --date to book a call".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flow_accepts_kebab_case_keys() {
        let cli = Cli::try_parse_from(["concierge", "--flow", "viewing-trip"]).unwrap();
        assert_eq!(cli.flow, Some(FlowVariant::ViewingTrip));
        assert!(cli.command.is_none());
        assert!(!cli.no_confirm);
    }

    #[test]
    fn booking_slot_needs_both_halves() {
        let mut contact = ContactArgs {
            date: Some("2025-03-10".to_string()),
            ..ContactArgs::default()
        };
        assert!(contact.booking_slot().is_err());
        contact.time = Some("14:00".to_string());
        assert_eq!(contact.booking_slot(), Ok(Some(("2025-03-10", "14:00"))));
    }
}
