//! Contact form validation and submission state.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::services::email::TemplateParams;
use crate::{AppResult, ContactField, ContactForm, FieldErrors};

pub const FAILURE_ALERT: &str = "Hubo un error al enviar el mensaje. Por favor, intenta nuevamente.";

const MIN_NAME_CHARS: usize = 2;
const MIN_MESSAGE_CHARS: usize = 10;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Check all three fields and collect one message per failing field.
pub fn validate_contact(form: &ContactForm) -> FieldErrors {
    let mut errors = FieldErrors::default();

    let name = form.name.trim();
    if name.is_empty() {
        errors.insert(ContactField::Name, "El nombre es obligatorio");
    } else if name.chars().count() < MIN_NAME_CHARS {
        errors.insert(ContactField::Name, "El nombre debe tener al menos 2 caracteres");
    }

    if form.email.trim().is_empty() {
        errors.insert(ContactField::Email, "El correo electrónico es obligatorio");
    } else if !is_valid_email(&form.email) {
        errors.insert(ContactField::Email, "El correo electrónico no es válido");
    }

    let message = form.message.trim();
    if message.is_empty() {
        errors.insert(ContactField::Message, "El mensaje es obligatorio");
    } else if message.chars().count() < MIN_MESSAGE_CHARS {
        errors.insert(ContactField::Message, "El mensaje debe tener al menos 10 caracteres");
    }

    errors
}

/// Result of pressing the submit button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitAttempt {
    /// Validation failed; errors are now shown.
    Invalid,
    /// A relay call is already in flight.
    Busy,
    /// Send these values to the relay.
    Send(TemplateParams),
}

/// Handle for one showing of the success banner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BannerTicket(u64);

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Form cleared and banner shown; hide it with the ticket later.
    Sent(BannerTicket),
    /// Values kept for retry; the message must be alerted.
    Failed(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactState {
    form: ContactForm,
    errors: FieldErrors,
    loading: bool,
    banner: Option<BannerTicket>,
    banners_shown: u64,
}

impl ContactState {
    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_success_visible(&self) -> bool {
        self.banner.is_some()
    }

    /// Keystroke in one field; clears only that field's error.
    pub fn edit(&mut self, field: ContactField, value: String) {
        self.form.set(field, value);
        self.errors.remove(field);
    }

    pub fn begin_submit(&mut self) -> SubmitAttempt {
        if self.loading {
            return SubmitAttempt::Busy;
        }

        self.errors = validate_contact(&self.form);
        if !self.errors.is_empty() {
            return SubmitAttempt::Invalid;
        }

        self.loading = true;
        SubmitAttempt::Send(TemplateParams::from_form(&self.form))
    }

    /// Apply the relay's answer to an in-flight submission.
    pub fn finish(&mut self, result: AppResult<()>) -> SubmitOutcome {
        self.loading = false;
        match result {
            Ok(()) => {
                self.form = ContactForm::default();
                self.banners_shown += 1;
                let ticket = BannerTicket(self.banners_shown);
                self.banner = Some(ticket);
                SubmitOutcome::Sent(ticket)
            }
            Err(err) => {
                log::error!("Error al enviar el correo: {}", err);
                SubmitOutcome::Failed(FAILURE_ALERT.to_string())
            }
        }
    }

    /// Hide the banner, unless a newer submission replaced it.
    pub fn hide_banner(&mut self, ticket: BannerTicket) {
        if self.banner == Some(ticket) {
            self.banner = None;
        }
    }
}
