//! Environment variable expansion for configuration strings.

use std::borrow::Cow;

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` references in `value`.
///
/// `field` names the configuration key in error messages.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    shellexpand::env(value)
        .map(Cow::into_owned)
        .map_err(|e| ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{}}} not set", e.var_name),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_is_unchanged() {
        assert_eq!(expand_env("Hyperapp", "site.title").unwrap(), "Hyperapp");
    }

    #[test]
    fn test_default_used_when_unset() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("DOCSITE_EXPAND_UNSET");
        }
        assert_eq!(
            expand_env("${DOCSITE_EXPAND_UNSET:-fallback}", "site.title").unwrap(),
            "fallback"
        );
    }

    #[test]
    fn test_set_variable_is_substituted() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("DOCSITE_EXPAND_SET", "docs");
        }
        assert_eq!(
            expand_env("https://${DOCSITE_EXPAND_SET}.example.com", "site.base_url").unwrap(),
            "https://docs.example.com"
        );
        unsafe {
            std::env::remove_var("DOCSITE_EXPAND_SET");
        }
    }

    #[test]
    fn test_missing_variable_names_field() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("DOCSITE_EXPAND_MISSING");
        }
        let err = expand_env("${DOCSITE_EXPAND_MISSING}", "site.base_url").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("DOCSITE_EXPAND_MISSING"), "{msg}");
        assert!(msg.contains("site.base_url"), "{msg}");
    }
}
