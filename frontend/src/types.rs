//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **Upload Types** - Selected file metadata and the validated preview
//! - **Notification Types** - Transient messages shown by the uploader
//! - **Contact Types** - Contact form fields and per-field errors
//! - **Catalogue Types** - Static room listings
//! - **Error Types** - Frontend error handling

use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

use crate::config::MAX_IMAGE_SIZE;

// =============================================================================
// Upload Types
// =============================================================================

/// Metadata of a file picked by the user, read off the browser `File` object.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileInfo {
    /// File name as reported by the browser
    pub name: String,
    /// Declared MIME type (may be empty)
    pub mime_type: String,
    /// Size in bytes
    pub size_bytes: u64,
    /// Last modification time, epoch milliseconds
    pub last_modified_ms: i64,
}

/// An image that passed validation and was read into memory.
///
/// Only one is held at a time; selecting a new file discards it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadedImage {
    /// `data:<mime>;base64,<payload>` URL usable as an `img` source
    pub data_url: String,
    pub original_file_name: String,
    pub mime_type: String,
    pub size_bytes: u64,
    pub last_modified_epoch_ms: i64,
}

impl UploadedImage {
    /// Build the preview record from the validated file and its encoded contents.
    pub fn from_file(info: FileInfo, data_url: String) -> Self {
        Self {
            data_url,
            original_file_name: info.name,
            mime_type: info.mime_type,
            size_bytes: info.size_bytes,
            last_modified_epoch_ms: info.last_modified_ms,
        }
    }
}

// =============================================================================
// Notification Types
// =============================================================================

/// Notification severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Auto-dismissed after a short delay
    Success,
    /// Stays until the next validation cycle
    Error,
}

impl Severity {
    /// BEM modifier used by the `Message` component.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }
}

/// Identifier of a notification, unique within one uploader instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MessageId(pub u64);

/// A single notification shown under the drop zone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NotificationMessage {
    pub id: MessageId,
    pub text: String,
    pub severity: Severity,
}

// =============================================================================
// Contact Types
// =============================================================================

/// Fields of the contact form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    /// HTML `id`/`name` attribute of the matching input.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Message => "message",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw contact form values, updated on every keystroke.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }
}

/// Field name → human-readable validation message.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<ContactField, String>);

impl FieldErrors {
    pub fn insert(&mut self, field: ContactField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn remove(&mut self, field: ContactField) {
        self.0.remove(&field);
    }

    pub fn get(&self, field: ContactField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

// =============================================================================
// Catalogue Types
// =============================================================================

/// A room offered on the services page. Fixed at build time.
#[derive(Clone, Debug, PartialEq)]
pub struct RoomListing {
    pub id: u32,
    pub name: &'static str,
    pub image_path: &'static str,
    pub description: &'static str,
    /// Price per night in dollars
    pub price_per_night: u32,
    /// Number of guests
    pub capacity: u32,
    pub amenities: &'static [&'static str],
}

impl RoomListing {
    /// Badge text shown over the room picture, e.g. `$350/noche`.
    pub fn price_label(&self) -> String {
        format!("${}/noche", self.price_per_night)
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Reasons an image selection is rejected.
///
/// `Display` is the exact text shown to the user.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum UploadError {
    /// Nothing usable was selected or dropped.
    #[error("Error: No se ha seleccionado un archivo válido.")]
    InvalidFile,

    /// Declared MIME type is not in the allow-list.
    #[error("Error: El archivo seleccionado no es una imagen válida. Por favor, selecciona un archivo de imagen (JPG, PNG, GIF, BMP, SVG, WEBP).")]
    NotAnImage { mime_type: String },

    /// File exceeds [`MAX_IMAGE_SIZE`].
    #[error("Error: La imagen es demasiado grande. El tamaño máximo permitido es 10MB.")]
    TooLarge { size: u64, max: u64 },

    /// The browser could not read the file contents.
    #[error("Error: No se pudo leer el archivo de imagen.")]
    Read(String),
}

impl UploadError {
    pub fn too_large(size: u64) -> Self {
        UploadError::TooLarge {
            size,
            max: MAX_IMAGE_SIZE,
        }
    }
}

/// Frontend application errors.
///
/// Unified error type for all frontend operations.
#[derive(Clone, Debug, Error)]
pub enum AppError {
    /// Image selection or read failed.
    #[error("Upload error: {0}")]
    Upload(#[from] UploadError),

    /// Build-time configuration is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network/HTTP error.
    #[error("Network error: {0}")]
    Network(String),

    /// The email relay answered with a non-success status.
    #[error("Email relay rejected the request ({status}): {body}")]
    Relay { status: u16, body: String },

    /// Payload could not be encoded.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_error_converts_into_app_error() {
        let err: AppError = UploadError::too_large(11 * 1024 * 1024).into();
        assert!(err.to_string().contains("demasiado grande"));
        assert!(matches!(
            err,
            AppError::Upload(UploadError::TooLarge { max, .. }) if max == MAX_IMAGE_SIZE
        ));
    }

    #[test]
    fn test_field_errors_track_fields_independently() {
        let mut errors = FieldErrors::default();
        errors.insert(ContactField::Name, "missing");
        errors.insert(ContactField::Email, "bad");
        assert_eq!(errors.len(), 2);

        errors.remove(ContactField::Name);
        assert_eq!(errors.get(ContactField::Name), None);
        assert_eq!(errors.get(ContactField::Email), Some("bad"));
    }

    #[test]
    fn test_room_price_label() {
        let room = RoomListing {
            id: 1,
            name: "Suite",
            image_path: "/suite.jpg",
            description: "",
            price_per_night: 350,
            capacity: 2,
            amenities: &["WiFi"],
        };
        assert_eq!(room.price_label(), "$350/noche");
    }
}
