//! Terminal styling for the output printed around the wizard

use console::{style, Emoji};

use crate::delivery::MailLink;
use crate::flows::FlowVariant;

// Emoji icons with fallbacks for terminals that don't support them
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "[*] ");
pub static ROCKET: Emoji<'_, '_> = Emoji("🚀 ", ">> ");
pub static MAIL: Emoji<'_, '_> = Emoji("✉️  ", "");
pub static LINK: Emoji<'_, '_> = Emoji("🔗 ", "");

/// Print the application banner
pub fn print_banner(brand: &str, version: &str) {
    println!();
    println!("    {}", style(brand).cyan().bold());
    println!(
        "    {}",
        style("Relocation and viewing-trip planning, one step at a time").dim()
    );
    println!("    {}", style(format!("v{}", version)).dim());
    println!("    {}", style("━".repeat(50)).dim());
    println!();
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("    {} {}", style("✓").green().bold(), style(message).green());
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("    {} {}", INFO, message);
}

/// Print a mail link with its recipients
///
/// The URI is printed whole so it can be copied into a mail client by hand.
pub fn print_link(link: &MailLink) {
    for line in link_lines(link) {
        println!("{}", line);
    }
}

fn link_lines(link: &MailLink) -> Vec<String> {
    vec![
        format!("    {} To: {}", MAIL, style(&link.to).white().bold()),
        format!("       Cc: {}", style(&link.cc).dim()),
        format!("       Subject: {}", link.subject),
        String::new(),
        format!("    {} {}", LINK, style(link.uri()).cyan()),
        String::new(),
    ]
}

/// Print the final completion message
pub fn print_completion(variant: FlowVariant) {
    println!();
    println!(
        "    {} {}",
        ROCKET,
        style(format!("{} ready!", variant.label())).green().bold()
    );
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delivery::{build_mail_link, Recipients};

    #[test]
    fn printed_link_is_the_whole_uri() {
        let body = "Name: Sara Haddad\r\n".repeat(40);
        let link = build_mail_link(&Recipients::default(), "Relocation plan request - Sara", &body);
        let uri = link.uri();
        assert!(uri.len() > 400);

        let lines = link_lines(&link);
        let printed = console::strip_ansi_codes(&lines[4]);
        let printed = printed.trim_start().trim_start_matches(LINK.0).trim_start();
        assert_eq!(printed, uri);
    }
}
