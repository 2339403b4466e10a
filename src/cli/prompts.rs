//! Interactive prompts using dialoguer

use anyhow::Result;
use dialoguer::Confirm;

use crate::delivery::DeliveryKind;

/// Prompt user to confirm proceeding with an action
pub fn confirm_step(message: &str) -> Result<bool> {
    let confirmed = Confirm::new()
        .with_prompt(message)
        .default(true)
        .interact()?;
    Ok(confirmed)
}

/// Prompt user to confirm handing the link to the mail client
pub fn confirm_open_mail_client(kind: DeliveryKind) -> Result<bool> {
    let message = format!("Open your mail client to {}?", kind.action().to_lowercase());
    confirm_step(&message)
}
