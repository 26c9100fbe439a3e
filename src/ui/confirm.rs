//! Confirmation prompts for destructive operations

use dialoguer::Confirm;

use crate::error::{Result, ZiaError};

/// Ask the user to confirm a destructive action.
///
/// `--yes` short-circuits to true. Batch mode auto-declines so scripted
/// runs never hang on a prompt; pass `--yes` there instead.
pub fn confirm_action(prompt: &str, batch: bool, yes: bool) -> Result<bool> {
    if yes {
        return Ok(true);
    }
    if batch {
        eprintln!("{} declined (batch mode, pass -y to confirm)", prompt);
        return Ok(false);
    }

    Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| ZiaError::Config(format!("Prompt failed: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yes_flag_skips_prompt() {
        assert!(confirm_action("Delete?", false, true).unwrap());
    }

    #[test]
    fn test_batch_mode_declines() {
        assert!(!confirm_action("Delete?", true, false).unwrap());
    }

    #[test]
    fn test_yes_wins_over_batch() {
        assert!(confirm_action("Delete?", true, true).unwrap());
    }
}
