use std::env;
use std::path::PathBuf;

use crate::error::{MonitorError, MonitorResult};

pub const DEFAULT_API_BASE_URL: &str =
    "https://irctc-indian-railway-pnr-status.p.rapidapi.com";
pub const DEFAULT_STATE_FILE: &str = "last_status.json";
pub const DEFAULT_SMTP_RELAY: &str = "smtp.gmail.com";

/// Runtime configuration, built once at startup and passed to each component.
///
/// The booking identifier and the recipient list are configuration data, not
/// literals: `PNR_NUMBER` and `PNR_RECIPIENTS` (comma-separated) are required
/// alongside the API and mail credentials.
#[derive(Debug, Clone)]
pub struct MonitorConfig {
    pub pnr_number: String,
    pub rapidapi_key: String,
    pub api_base_url: String,
    pub state_file: PathBuf,
    pub smtp_relay: String,
    pub sender_address: String,
    pub sender_app_password: String,
    pub recipients: Vec<String>,
}

impl MonitorConfig {
    /// Read the full configuration from the environment.
    ///
    /// Required variables that are absent or empty fail here with a typed
    /// `Config` error instead of surfacing later as an auth or HTTP failure.
    pub fn from_env() -> MonitorResult<Self> {
        let pnr_number = required_var("PNR_NUMBER")?;
        let rapidapi_key = required_var("RAPIDAPI_KEY")?;
        let sender_address = required_var("PNR_GMAIL_ADDRESS")?;
        let sender_app_password = required_var("PNR_GMAIL_APP_PASSWORD")?;
        let recipients = parse_recipients(&required_var("PNR_RECIPIENTS")?)?;

        let api_base_url = env::var("PNR_API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());
        let state_file = env::var("PNR_STATE_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_STATE_FILE));
        let smtp_relay =
            env::var("PNR_SMTP_RELAY").unwrap_or_else(|_| DEFAULT_SMTP_RELAY.to_string());

        Ok(Self {
            pnr_number,
            rapidapi_key,
            api_base_url,
            state_file,
            smtp_relay,
            sender_address,
            sender_app_password,
            recipients,
        })
    }
}

fn required_var(name: &'static str) -> MonitorResult<String> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(MonitorError::missing_var(name)),
    }
}

fn parse_recipients(raw: &str) -> MonitorResult<Vec<String>> {
    let recipients: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|addr| !addr.is_empty())
        .map(str::to_string)
        .collect();

    if recipients.is_empty() {
        return Err(MonitorError::Config(
            "PNR_RECIPIENTS contains no addresses".to_string(),
        ));
    }

    Ok(recipients)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn set_required_vars() {
        env::set_var("PNR_NUMBER", "4540418892");
        env::set_var("RAPIDAPI_KEY", "test-key");
        env::set_var("PNR_GMAIL_ADDRESS", "sender@gmail.com");
        env::set_var("PNR_GMAIL_APP_PASSWORD", "app-password");
        env::set_var(
            "PNR_RECIPIENTS",
            "one@example.com, two@example.com,three@example.com , four@example.com",
        );
    }

    fn clear_all_vars() {
        for name in [
            "PNR_NUMBER",
            "RAPIDAPI_KEY",
            "PNR_GMAIL_ADDRESS",
            "PNR_GMAIL_APP_PASSWORD",
            "PNR_RECIPIENTS",
            "PNR_API_BASE_URL",
            "PNR_STATE_FILE",
            "PNR_SMTP_RELAY",
        ] {
            env::remove_var(name);
        }
    }

    #[test]
    #[serial]
    fn test_from_env_with_defaults() {
        clear_all_vars();
        set_required_vars();

        let config = MonitorConfig::from_env().unwrap();
        assert_eq!(config.pnr_number, "4540418892");
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.state_file, PathBuf::from(DEFAULT_STATE_FILE));
        assert_eq!(config.smtp_relay, DEFAULT_SMTP_RELAY);
        assert_eq!(config.recipients.len(), 4);
        assert_eq!(config.recipients[2], "three@example.com");
    }

    #[test]
    #[serial]
    fn test_missing_required_var() {
        clear_all_vars();
        set_required_vars();
        env::remove_var("RAPIDAPI_KEY");

        let err = MonitorConfig::from_env().unwrap_err();
        assert!(matches!(err, MonitorError::Config(_)));
        assert!(err.to_string().contains("RAPIDAPI_KEY"));
    }

    #[test]
    #[serial]
    fn test_empty_required_var_is_missing() {
        clear_all_vars();
        set_required_vars();
        env::set_var("PNR_GMAIL_APP_PASSWORD", "  ");

        let err = MonitorConfig::from_env().unwrap_err();
        assert!(err.to_string().contains("PNR_GMAIL_APP_PASSWORD"));
    }

    #[test]
    #[serial]
    fn test_overrides() {
        clear_all_vars();
        set_required_vars();
        env::set_var("PNR_API_BASE_URL", "http://127.0.0.1:9999");
        env::set_var("PNR_STATE_FILE", "/tmp/pnr_state.json");
        env::set_var("PNR_SMTP_RELAY", "smtp.example.com");

        let config = MonitorConfig::from_env().unwrap();
        assert_eq!(config.api_base_url, "http://127.0.0.1:9999");
        assert_eq!(config.state_file, PathBuf::from("/tmp/pnr_state.json"));
        assert_eq!(config.smtp_relay, "smtp.example.com");
    }

    #[test]
    fn test_recipient_list_must_not_be_empty() {
        let err = parse_recipients(" , ,").unwrap_err();
        assert!(matches!(err, MonitorError::Config(_)));
    }
}
