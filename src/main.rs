//! Concierge: relocation and viewing-trip planner CLI
//!
//! Runs the interactive wizard by default. The `summary` and `mailto`
//! subcommands work from an answers file without a terminal UI.

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;

use concierge::cli::{
    confirm_open_mail_client, run_wizard, Cli, Commands, ContactArgs, WizardResult,
};
use concierge::config::ConciergeConfig;
use concierge::delivery::{
    booking_link, email_summary_link, BookingRequest, ContactCapture, MailLauncher,
    MailLink, SystemMailLauncher,
};
use concierge::error::ConciergeError;
use concierge::flows::AnswerSheet;
use concierge::logging::{init_tracing, log_file_path, LogTarget};
use concierge::report::display_summary;
use concierge::utils::{print_banner, print_completion, print_info, print_link, print_success};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle subcommands
    if let Some(command) = &cli.command {
        init_tracing(cli.verbose, LogTarget::Stderr);
        let config = load_config(&cli)?;
        return match command {
            Commands::Summary { answers } => run_summary(answers),
            Commands::Mailto {
                answers,
                contact,
                open,
            } => run_mailto(answers, contact, *open, &config),
        };
    }

    init_tracing(cli.verbose, LogTarget::File);
    let config = load_config(&cli)?;

    let sheet = match &cli.answers {
        Some(path) => Some(load_sheet(path)?),
        None => None,
    };
    if let (Some(sheet), Some(flow)) = (&sheet, cli.flow) {
        if sheet.variant() != flow {
            anyhow::bail!(
                "--flow {} does not match the answers file, which is a {}",
                flow.key(),
                sheet.variant().label().to_lowercase()
            );
        }
    }

    let (variant, kind, summary, link) = match run_wizard(cli.flow, sheet, &config)? {
        WizardResult::Submitted {
            variant,
            kind,
            summary,
            link,
        } => (variant, kind, summary, link),
        WizardResult::Quit | WizardResult::SwitchFlow => {
            println!("Cancelled by user.");
            return Ok(());
        }
    };

    print_banner(&config.brand, env!("CARGO_PKG_VERSION"));
    display_summary(&summary);
    print_link(&link);

    if cli.no_confirm || confirm_open_mail_client(kind)? {
        open_link(&link)?;
    } else {
        print_info("Copy the link above into your mail client when you are ready.");
    }
    print_completion(variant);
    if let Some(path) = log_file_path() {
        println!("    {}", style(format!("Log: {}", path.display())).dim());
    }
    Ok(())
}

fn load_config(cli: &Cli) -> Result<ConciergeConfig> {
    ConciergeConfig::load(cli.config.as_deref()).context("Failed to load configuration")
}

fn load_sheet(path: &Path) -> Result<AnswerSheet> {
    AnswerSheet::from_path(path)
        .with_context(|| format!("Failed to read answers file {}", path.display()))
}

/// Load and fully validate an answers file
fn load_complete_sheet(path: &Path) -> Result<AnswerSheet> {
    let sheet = load_sheet(path)?;
    sheet
        .validate()
        .with_context(|| format!("Answers in {} are incomplete", path.display()))?;
    Ok(sheet)
}

fn run_summary(answers: &Path) -> Result<()> {
    let sheet = load_complete_sheet(answers)?;
    display_summary(&sheet.summarize());
    Ok(())
}

fn run_mailto(answers: &Path, args: &ContactArgs, open: bool, config: &ConciergeConfig) -> Result<()> {
    let sheet = load_complete_sheet(answers)?;
    let variant = sheet.variant();
    let summary = sheet.summarize();
    let contact = ContactCapture::new(
        args.name.as_str(),
        args.email.as_str(),
        args.confirm_email.as_str(),
        args.phone.as_str(),
    );

    let slot = args.booking_slot().map_err(anyhow::Error::msg)?;
    let link = match slot {
        Some((date, time)) => {
            let booking = BookingRequest::new(contact, date, time);
            booking_link(variant, &booking, &summary, &config.recipients)
        }
        None => email_summary_link(variant, &contact, &summary, &config.recipients),
    }
    .map_err(ConciergeError::Contact)?;

    println!("{}", link.uri());
    if open {
        open_link(&link)?;
    }
    Ok(())
}

fn open_link(link: &MailLink) -> Result<()> {
    SystemMailLauncher
        .open(link)
        .context("Failed to open the mail client")?;
    print_success("Mail draft handed to your mail client");
    Ok(())
}
