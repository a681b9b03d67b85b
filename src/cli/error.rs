// Error handling utilities for consistent error messages and exit codes

use std::process;
use crate::cli::input::InputError;
use crate::config::ConfigError;

/// Exit code for invalid input or configuration
pub const EXIT_USER_ERROR: i32 = 1;
/// Exit code for unexpected failures (I/O on stdout, etc.)
pub const EXIT_INTERNAL_ERROR: i32 = 2;

/// Exit with a user error (exit code 1)
/// User errors are for invalid input, unreadable input files, bad config values.
pub fn user_error(message: &str) -> ! {
    eprintln!("Error: {}", message);
    process::exit(EXIT_USER_ERROR);
}

/// Whether an error was caused by something the user supplied
pub fn is_user_error(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| cause.is::<InputError>() || cause.is::<ConfigError>())
}

/// Validate that a string is not empty
pub fn validate_non_empty(value: &str, field_name: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{} cannot be empty", field_name))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_validate_non_empty() {
        assert!(validate_non_empty("test", "field").is_ok());
        assert!(validate_non_empty("", "field").is_err());
        assert!(validate_non_empty("   ", "field").is_err());
    }

    #[test]
    fn test_is_user_error() {
        let err = anyhow::Error::new(InputError::EmptyEnvironment);
        assert!(is_user_error(&err));

        let wrapped: anyhow::Result<()> = Err(InputError::MalformedDeployPair("dev".to_string()))
            .context("Failed to assemble pipeline input");
        assert!(is_user_error(&wrapped.unwrap_err()));

        let internal = anyhow::anyhow!("broken pipe");
        assert!(!is_user_error(&internal));
    }
}
