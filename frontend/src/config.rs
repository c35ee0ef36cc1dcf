//! Application configuration.
//!
//! Centralized configuration for the hotel frontend. Layout constants are
//! hardcoded; email relay credentials are injected at build time through
//! environment variables read by `option_env!`.

use crate::{AppError, AppResult};

/// Brand shown in the navigation bar.
pub const APP_NAME: &str = "Mi App";

/// Maximum accepted image size (in bytes).
///
/// 10 MiB limit.
pub const MAX_IMAGE_SIZE: u64 = 10 * 1024 * 1024;

/// How long a success notification stays visible in the uploader.
pub const SUCCESS_MESSAGE_TTL_MS: u32 = 3_000;

/// How long the contact success banner stays visible.
pub const CONTACT_SUCCESS_TTL_MS: u32 = 5_000;

/// EmailJS REST endpoint.
pub const EMAIL_RELAY_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Recipient label sent with every contact message.
pub const RECIPIENT_NAME: &str = "Administrador";

/// Embedded map shown on the contact page.
pub const MAP_EMBED_URL: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3622.2511818619855!2d-65.41453289029732!3d-24.786851107661555!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x941bc3bba3c3fefd%3A0xe77d2372b09385c9!2sHotel%20Alejandro%20I%2C%20Affiliated%20by%20Meli%C3%A1!5e0!3m2!1ses!2sar!4v1759424295746!5m2!1ses!2sar";

/// Public contact details.
pub const CONTACT_EMAIL: &str = "info@mihotel.com";
pub const CONTACT_PHONE: &str = "+54 387 123-4567";
pub const CONTACT_LOCATION: &str = "Salta, Argentina";

/// Identifiers for the transactional email relay.
///
/// Public client-side keys, supplied per deployment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelayConfig {
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl RelayConfig {
    /// Read `EMAILJS_SERVICE_ID`, `EMAILJS_TEMPLATE_ID` and `EMAILJS_PUBLIC_KEY`
    /// captured at compile time. `EMAILJS_ENDPOINT` optionally overrides
    /// [`EMAIL_RELAY_URL`].
    pub fn from_build_env() -> AppResult<Self> {
        Self::from_values(
            option_env!("EMAILJS_ENDPOINT"),
            option_env!("EMAILJS_SERVICE_ID"),
            option_env!("EMAILJS_TEMPLATE_ID"),
            option_env!("EMAILJS_PUBLIC_KEY"),
        )
    }

    fn from_values(
        endpoint: Option<&str>,
        service_id: Option<&str>,
        template_id: Option<&str>,
        public_key: Option<&str>,
    ) -> AppResult<Self> {
        Ok(Self {
            endpoint: endpoint
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(EMAIL_RELAY_URL)
                .to_string(),
            service_id: required("EMAILJS_SERVICE_ID", service_id)?,
            template_id: required("EMAILJS_TEMPLATE_ID", template_id)?,
            public_key: required("EMAILJS_PUBLIC_KEY", public_key)?,
        })
    }
}

fn required(name: &str, value: Option<&str>) -> AppResult<String> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(AppError::Config(format!("{} was not set at build time", name))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relay_config_defaults_endpoint() {
        let config = RelayConfig::from_values(None, Some("service_x"), Some("template_y"), Some("key_z"))
            .unwrap();
        assert_eq!(config.endpoint, EMAIL_RELAY_URL);
        assert_eq!(config.service_id, "service_x");
        assert_eq!(config.template_id, "template_y");
        assert_eq!(config.public_key, "key_z");
    }

    #[test]
    fn test_relay_config_missing_key_is_config_error() {
        let err = RelayConfig::from_values(None, Some("service_x"), Some(" "), Some("key_z"))
            .unwrap_err();
        assert!(matches!(err, AppError::Config(ref msg) if msg.contains("EMAILJS_TEMPLATE_ID")));
    }

    #[test]
    fn test_max_image_size_is_ten_mebibytes() {
        assert_eq!(MAX_IMAGE_SIZE, 10_485_760);
    }

    #[test]
    fn test_success_message_lasts_three_seconds() {
        assert_eq!(SUCCESS_MESSAGE_TTL_MS, 3_000);
    }

    #[test]
    fn test_contact_banner_lasts_five_seconds() {
        assert_eq!(CONTACT_SUCCESS_TTL_MS, 5_000);
    }
}
