//! Interactive prompts using dialoguer

use anyhow::Result;
use dialoguer::Confirm;
use std::path::Path;

/// Prompt user to confirm overwriting an existing file
pub fn confirm_overwrite(path: &Path) -> Result<bool> {
    let confirmed = Confirm::new()
        .with_prompt(format!("{} exists. Overwrite?", path.display()))
        .default(true)
        .interact()?;
    Ok(confirmed)
}
