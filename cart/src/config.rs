//! Cart configuration
//!
//! ## Configuration Sources
//! Values are loaded from:
//! 1. `.env` file in the current directory or parent directories (if present)
//! 2. System environment variables
//!
//! Environment variables take precedence over .env file values.
//!
//! ## Keys
//! - `CART_LOCALE`: locale name used to group the total, e.g. `de` or `en-IN` (default `en`)
//! - `CART_NOTES_DELIMITER`: string joining notes in the handoff (default newline)
//! - `CART_FORM_PAGE`: page the checkout navigates to (default `form.html`)

use num_format::Locale;
use serde::{Deserialize, Serialize};
use shared::{SharedError, SharedResult};

/// Formatting and navigation settings for one cart session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartConfig {
    /// Locale whose digit grouping and separator format the total
    pub locale: Locale,
    /// Joins chef notes in the handoff; notes are single-line free text
    pub notes_delimiter: String,
    pub form_page: String,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            locale: Locale::en,
            notes_delimiter: "\n".to_string(),
            form_page: "form.html".to_string(),
        }
    }
}

impl CartConfig {
    pub const LOCALE_KEY: &'static str = "CART_LOCALE";
    pub const NOTES_DELIMITER_KEY: &'static str = "CART_NOTES_DELIMITER";
    pub const FORM_PAGE_KEY: &'static str = "CART_FORM_PAGE";

    /// Load configuration from `.env` and the process environment
    pub fn from_env() -> SharedResult<Self> {
        // Silently ignored when no .env file exists
        let _ = dotenv::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> SharedResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(Self::LOCALE_KEY) {
            config.locale = Self::parse_locale(&value)?;
        }
        if let Some(value) = lookup(Self::NOTES_DELIMITER_KEY) {
            config.notes_delimiter = value;
        }
        if let Some(value) = lookup(Self::FORM_PAGE_KEY) {
            let value = value.trim();
            if value.is_empty() {
                return Err(SharedError::InvalidConfig {
                    field: Self::FORM_PAGE_KEY.to_string(),
                    value: value.to_string(),
                });
            }
            config.form_page = value.to_string();
        }

        Ok(config)
    }

    /// Parse a locale name such as `en`, `de` or `en-IN` (`en_IN` also accepted)
    pub fn parse_locale(value: &str) -> SharedResult<Locale> {
        Locale::from_name(value.trim().replace('_', "-")).map_err(|_| SharedError::InvalidConfig {
            field: Self::LOCALE_KEY.to_string(),
            value: value.to_string(),
        })
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn with_notes_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.notes_delimiter = delimiter.into();
        self
    }

    pub fn with_form_page(mut self, page: impl Into<String>) -> Self {
        self.form_page = page.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = CartConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, CartConfig::default());
        assert_eq!(config.locale, Locale::en);
        assert_eq!(config.notes_delimiter, "\n");
        assert_eq!(config.form_page, "form.html");
    }

    #[test]
    fn test_overrides_from_lookup() {
        let config = CartConfig::from_lookup(lookup_from(&[
            ("CART_LOCALE", "de"),
            ("CART_NOTES_DELIMITER", " | "),
            ("CART_FORM_PAGE", "order.html"),
        ]))
        .unwrap();

        assert_eq!(config.locale, Locale::de);
        assert_eq!(config.notes_delimiter, " | ");
        assert_eq!(config.form_page, "order.html");
    }

    #[test]
    fn test_unknown_locale_rejected() {
        let err = CartConfig::from_lookup(lookup_from(&[("CART_LOCALE", "xx-nowhere")])).unwrap_err();
        assert!(matches!(err, SharedError::InvalidConfig { .. }));

        assert!(CartConfig::parse_locale("").is_err());
        assert_eq!(CartConfig::parse_locale(" en ").unwrap(), Locale::en);
    }

    #[test]
    fn test_blank_form_page_rejected() {
        let result = CartConfig::from_lookup(lookup_from(&[("CART_FORM_PAGE", "   ")]));
        assert!(result.is_err());
    }
}
