//! Contact message delivery through the EmailJS REST API.

use std::future::Future;

use gloo_net::http::Request;
use serde::Serialize;

use crate::config::{RelayConfig, RECIPIENT_NAME};
use crate::{AppError, AppResult, ContactForm};

/// Template variables expected by the contact email template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub from_name: String,
    pub from_email: String,
    pub message: String,
    pub to_name: String,
    pub reply_to: String,
}

impl TemplateParams {
    pub fn from_form(form: &ContactForm) -> Self {
        Self {
            from_name: form.name.clone(),
            from_email: form.email.clone(),
            message: form.message.clone(),
            to_name: RECIPIENT_NAME.to_string(),
            reply_to: form.email.clone(),
        }
    }
}

/// Body of `POST /api/v1.0/email/send`.
#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a TemplateParams,
}

/// Anything able to deliver a contact message.
pub trait EmailRelay {
    fn send(&self, params: &TemplateParams) -> impl Future<Output = AppResult<()>>;
}

/// EmailJS client.
#[derive(Debug, Clone)]
pub struct EmailJsRelay {
    config: RelayConfig,
}

impl EmailJsRelay {
    pub fn new(config: RelayConfig) -> Self {
        Self { config }
    }

    /// Client configured from the identifiers captured at build time.
    pub fn from_build_env() -> AppResult<Self> {
        RelayConfig::from_build_env().map(Self::new)
    }

    fn request_body<'a>(&'a self, params: &'a TemplateParams) -> SendRequest<'a> {
        SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            template_params: params,
        }
    }
}

impl EmailRelay for EmailJsRelay {
    async fn send(&self, params: &TemplateParams) -> AppResult<()> {
        log::info!("📧 Sending contact message from {}", params.from_email);

        let request = Request::post(&self.config.endpoint)
            .json(&self.request_body(params))
            .map_err(|e| AppError::Serialization(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        if !response.ok() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::Relay {
                status: response.status(),
                body,
            });
        }

        log::info!("✅ Contact message accepted by relay");
        Ok(())
    }
}
