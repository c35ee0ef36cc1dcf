//! Image validation and reading for the uploader.
//!
//! Validation is a short-circuiting sequence over the file metadata:
//! presence, MIME allow-list, then size. Reading turns the file contents
//! into a base64 `data:` URL the preview can use directly.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::{DateTime, Local, TimeZone};
use wasm_bindgen_futures::JsFuture;
use web_sys::File;

use crate::config::MAX_IMAGE_SIZE;
use crate::{FileInfo, UploadError};

/// MIME types accepted by the uploader, compared case-insensitively.
pub const ALLOWED_IMAGE_TYPES: [&str; 7] = [
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/gif",
    "image/bmp",
    "image/svg+xml",
    "image/webp",
];

const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

impl FileInfo {
    /// Snapshot the metadata of a browser `File`.
    pub fn from_file(file: &File) -> Self {
        Self {
            name: file.name(),
            mime_type: file.type_(),
            size_bytes: file.size().max(0.0) as u64,
            last_modified_ms: file.last_modified() as i64,
        }
    }
}

pub fn is_allowed_image_type(mime_type: &str) -> bool {
    let mime_type = mime_type.to_ascii_lowercase();
    ALLOWED_IMAGE_TYPES.contains(&mime_type.as_str())
}

/// Run the validation sequence, stopping at the first failure.
pub fn validate_image(file: Option<&FileInfo>) -> Result<&FileInfo, UploadError> {
    let file = file.ok_or(UploadError::InvalidFile)?;

    if !is_allowed_image_type(&file.mime_type) {
        return Err(UploadError::NotAnImage {
            mime_type: file.mime_type.clone(),
        });
    }

    if file.size_bytes > MAX_IMAGE_SIZE {
        return Err(UploadError::too_large(file.size_bytes));
    }

    Ok(file)
}

/// Human readable size: largest unit up to GB, at most two decimals,
/// trailing zeros dropped (`1536` → `"1.5 KB"`).
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut unit = 0;
    let mut divisor = 1u64;
    while unit + 1 < SIZE_UNITS.len() && bytes >= divisor * 1024 {
        divisor *= 1024;
        unit += 1;
    }

    let scaled = bytes as f64 / divisor as f64;
    let rounded = (scaled * 100.0).round() / 100.0;
    format!("{} {}", rounded, SIZE_UNITS[unit])
}

/// Encode raw bytes as a `data:` URL.
pub fn encode_data_url(mime_type: &str, bytes: &[u8]) -> String {
    let mime_type = if mime_type.is_empty() {
        "application/octet-stream"
    } else {
        mime_type
    };
    format!("data:{};base64,{}", mime_type, STANDARD.encode(bytes))
}

/// Read the whole file and return it as a `data:` URL.
pub async fn read_as_data_url(file: &File) -> Result<String, UploadError> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| UploadError::Read(format!("{:?}", e)))?;

    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Ok(encode_data_url(&file.type_(), &bytes))
}

/// Last-modified time in the browser's timezone, `d/m/yyyy, H:mm:ss`.
pub fn format_last_modified(epoch_ms: i64) -> String {
    match DateTime::from_timestamp_millis(epoch_ms) {
        Some(utc) => format_es(&utc.with_timezone(&Local)),
        None => "-".to_string(),
    }
}

fn format_es<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    dt.format("%-d/%-m/%Y, %-H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn file(mime_type: &str, size_bytes: u64) -> FileInfo {
        FileInfo {
            name: "photo".to_string(),
            mime_type: mime_type.to_string(),
            size_bytes,
            last_modified_ms: 0,
        }
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(500), "500 Bytes");
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(1_048_576), "1 MB");
        assert_eq!(format_file_size(1_234_567), "1.18 MB");
        assert_eq!(format_file_size(3 * 1024 * 1024 * 1024), "3 GB");
    }

    #[test]
    fn test_format_file_size_caps_at_gigabytes() {
        assert_eq!(format_file_size(2048 * 1024 * 1024 * 1024), "2048 GB");
    }

    #[test]
    fn test_allow_list_is_case_insensitive() {
        assert!(is_allowed_image_type("image/PNG"));
        assert!(is_allowed_image_type("Image/Svg+Xml"));
        assert!(!is_allowed_image_type("image/tiff"));
        assert!(!is_allowed_image_type("application/pdf"));
        assert!(!is_allowed_image_type(""));
    }

    #[test]
    fn test_missing_file_is_invalid() {
        assert_eq!(validate_image(None), Err(UploadError::InvalidFile));
    }

    #[test]
    fn test_disallowed_type_rejected_before_size() {
        let info = file("text/plain", MAX_IMAGE_SIZE + 1);
        assert!(matches!(validate_image(Some(&info)), Err(UploadError::NotAnImage { .. })));
    }

    #[test]
    fn test_size_boundary() {
        let at_limit = file("image/jpeg", MAX_IMAGE_SIZE);
        assert!(validate_image(Some(&at_limit)).is_ok());

        let over = file("image/jpeg", MAX_IMAGE_SIZE + 1);
        assert_eq!(
            validate_image(Some(&over)),
            Err(UploadError::TooLarge { size: MAX_IMAGE_SIZE + 1, max: MAX_IMAGE_SIZE })
        );
    }

    #[test]
    fn test_encode_data_url() {
        assert_eq!(encode_data_url("image/png", b"abc"), "data:image/png;base64,YWJj");
        assert_eq!(encode_data_url("", b""), "data:application/octet-stream;base64,");
    }

    #[test]
    fn test_format_es_layout() {
        let dt = Utc.with_ymd_and_hms(2025, 3, 7, 9, 5, 4).unwrap();
        assert_eq!(format_es(&dt), "7/3/2025, 9:05:04");
    }
}
