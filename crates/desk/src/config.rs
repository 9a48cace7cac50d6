//! Desk configuration from environment variables.
//!
//! | Variable                  | Default                          |
//! |---------------------------|----------------------------------|
//! | `BILLPAD_COMPANY_NAME`    | shop default                     |
//! | `BILLPAD_COMPANY_ADDRESS` | shop default                     |
//! | `BILLPAD_OFFICE_ADDRESS`  | shop default                     |
//! | `BILLPAD_COMPANY_PHONE`   | shop default                     |
//! | `BILLPAD_COMPANY_EMAIL`   | shop default                     |
//! | `BILLPAD_COPYRIGHT`       | shop default                     |
//! | `BILLPAD_NOTES`           | `Thank you for your business!`   |
//! | `BILLPAD_CURRENCY_SYMBOL` | `₦`                              |
//! | `BILLPAD_SHARE_ENDPOINT`  | `https://wa.me/`                 |
//! | `BILLPAD_PRINT_WIDTH`     | `72` (48..=200)                  |
//! | `BILLPAD_LOG_FORMAT`      | `text` (or `json`)               |

use billpad_invoicing::{CompanyProfile, DEFAULT_PRINT_WIDTH, DEFAULT_SHARE_ENDPOINT, MIN_PRINT_WIDTH};
use billpad_observability::LogFormat;

use crate::error::DeskError;

pub const MAX_PRINT_WIDTH: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeskConfig {
    pub company: CompanyProfile,
    pub share_endpoint: String,
    pub print_width: usize,
    pub log_format: LogFormat,
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            company: CompanyProfile::default(),
            share_endpoint: DEFAULT_SHARE_ENDPOINT.to_string(),
            print_width: DEFAULT_PRINT_WIDTH,
            log_format: LogFormat::default(),
        }
    }
}

impl DeskConfig {
    /// Read the process environment.
    pub fn from_env() -> Result<Self, DeskError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DeskError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let company = &mut config.company;

        for (key, slot) in [
            ("BILLPAD_COMPANY_NAME", &mut company.company_name),
            ("BILLPAD_COMPANY_ADDRESS", &mut company.company_address),
            ("BILLPAD_OFFICE_ADDRESS", &mut company.office_address),
            ("BILLPAD_COMPANY_PHONE", &mut company.company_phone),
            ("BILLPAD_COMPANY_EMAIL", &mut company.company_email),
            ("BILLPAD_COPYRIGHT", &mut company.copyright),
            ("BILLPAD_NOTES", &mut company.notes),
            ("BILLPAD_CURRENCY_SYMBOL", &mut company.currency_symbol),
        ] {
            if let Some(value) = lookup(key) {
                *slot = value;
            }
        }

        if let Some(endpoint) = lookup("BILLPAD_SHARE_ENDPOINT") {
            let endpoint = endpoint.trim();
            if !(endpoint.starts_with("https://") || endpoint.starts_with("http://")) {
                return Err(DeskError::config(format!(
                    "BILLPAD_SHARE_ENDPOINT must be an http(s) URL, got {endpoint:?}"
                )));
            }
            config.share_endpoint = endpoint.to_string();
        }

        if let Some(width) = lookup("BILLPAD_PRINT_WIDTH") {
            let parsed: usize = width.trim().parse().map_err(|_| {
                DeskError::config(format!("BILLPAD_PRINT_WIDTH must be an integer, got {width:?}"))
            })?;
            if !(MIN_PRINT_WIDTH..=MAX_PRINT_WIDTH).contains(&parsed) {
                return Err(DeskError::config(format!(
                    "BILLPAD_PRINT_WIDTH must be within {MIN_PRINT_WIDTH}..={MAX_PRINT_WIDTH}, got {parsed}"
                )));
            }
            config.print_width = parsed;
        }

        if let Some(format) = lookup("BILLPAD_LOG_FORMAT") {
            config.log_format = format
                .parse()
                .map_err(|e: billpad_observability::UnknownLogFormat| DeskError::config(e.to_string()))?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let config = DeskConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, DeskConfig::default());
        assert_eq!(config.share_endpoint, "https://wa.me/");
        assert_eq!(config.company.currency_symbol, "₦");
    }

    #[test]
    fn overrides_company_fields() {
        let config = DeskConfig::from_lookup(lookup(&[
            ("BILLPAD_COMPANY_NAME", "Ade Motors"),
            ("BILLPAD_CURRENCY_SYMBOL", "$"),
            ("BILLPAD_NOTES", "Goods sold are not returnable."),
        ]))
        .unwrap();
        assert_eq!(config.company.company_name, "Ade Motors");
        assert_eq!(config.company.currency_symbol, "$");
        assert_eq!(config.company.notes, "Goods sold are not returnable.");
        assert_eq!(config.company.company_email, CompanyProfile::default().company_email);
    }

    #[test]
    fn reads_width_endpoint_and_log_format() {
        let config = DeskConfig::from_lookup(lookup(&[
            ("BILLPAD_PRINT_WIDTH", " 60 "),
            ("BILLPAD_SHARE_ENDPOINT", "https://api.whatsapp.com/send"),
            ("BILLPAD_LOG_FORMAT", "json"),
        ]))
        .unwrap();
        assert_eq!(config.print_width, 60);
        assert_eq!(config.share_endpoint, "https://api.whatsapp.com/send");
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn rejects_bad_values() {
        for pairs in [
            [("BILLPAD_PRINT_WIDTH", "wide")],
            [("BILLPAD_PRINT_WIDTH", "20")],
            [("BILLPAD_PRINT_WIDTH", "500")],
            [("BILLPAD_SHARE_ENDPOINT", "wa.me")],
            [("BILLPAD_LOG_FORMAT", "xml")],
        ] {
            match DeskConfig::from_lookup(lookup(&pairs)) {
                Err(DeskError::Config(_)) => {}
                other => panic!("Expected Config error for {pairs:?}, got {other:?}"),
            }
        }
    }
}
