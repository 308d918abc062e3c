//! `${VAR}` expansion in configuration strings.

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` references in `value`.
///
/// Values without `${` are returned as they are, so a bare `$` in a URL
/// survives untouched. An unset variable without a default is an error naming
/// the config field it appeared in.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |name| std::env::var(name).map(Some))
        .map(std::borrow::Cow::into_owned)
        .map_err(|e| ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{}}} not set", e.var_name),
        })
}

/// Expand an optional value, leaving `None` alone.
pub(crate) fn expand_opt(value: Option<&str>, field: &str) -> Result<Option<String>, ConfigError> {
    value.map(|v| expand_env(v, field)).transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_set_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("COMPRULES_TEST_OUT_DIR", "/srv/www");
        }
        let result = expand_env("${COMPRULES_TEST_OUT_DIR}/rules.html", "output.path").unwrap();
        assert_eq!(result, "/srv/www/rules.html");
        unsafe {
            std::env::remove_var("COMPRULES_TEST_OUT_DIR");
        }
    }

    #[test]
    fn test_expand_default_when_unset() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("COMPRULES_TEST_UNSET_HOST");
        }
        let result = expand_env(
            "https://${COMPRULES_TEST_UNSET_HOST:-magic.wizards.com}/en/rules",
            "source.rules_page_url",
        )
        .unwrap();
        assert_eq!(result, "https://magic.wizards.com/en/rules");
    }

    #[test]
    fn test_expand_missing_var_names_field() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("COMPRULES_TEST_MISSING");
        }
        let err = expand_env("${COMPRULES_TEST_MISSING}", "source.text_url").unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("COMPRULES_TEST_MISSING"));
        assert!(err.to_string().contains("source.text_url"));
    }

    #[test]
    fn test_bare_dollar_is_literal() {
        assert_eq!(
            expand_env("https://example.com/$rules", "source.text_url").unwrap(),
            "https://example.com/$rules"
        );
    }

    #[test]
    fn test_expand_opt_none() {
        assert_eq!(expand_opt(None, "output.stylesheet").unwrap(), None);
    }
}
