//! Image uploader state machine.
//!
//! ```text
//!  select(file) ──invalid──▶ [error message]
//!       │
//!     valid
//!       ▼
//!   reading(ticket) ──fail_read──▶ [error message]
//!       │
//!  complete_read
//!       ▼
//!   preview + [success message] ──(3 s)──▶ dismiss
//! ```
//!
//! Every `select` starts a new cycle: previous messages, preview and any
//! pending read are dropped. A read that finishes after a newer selection
//! carries a stale ticket and is ignored.
//!
//! The drop-zone highlight lives in [`DropZone`], apart from the preview, so
//! drag events never touch the image data.

use crate::services::image::validate_image;
use crate::{FileInfo, MessageId, NotificationMessage, Severity, UploadError, UploadedImage};

pub const SUCCESS_TEXT: &str = "✅ Imagen válida cargada correctamente!";

/// Handle for one in-flight file read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReadTicket(u64);

#[derive(Clone, Debug, PartialEq, Eq)]
struct PendingRead {
    ticket: ReadTicket,
    file: FileInfo,
}

/// Cosmetic highlight of the drop zone while a file is dragged over it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DropZone {
    drag_over: bool,
}

impl DropZone {
    pub fn is_drag_over(&self) -> bool {
        self.drag_over
    }

    /// Returns `false` when the flag already had that value.
    pub fn set_drag_over(&mut self, drag_over: bool) -> bool {
        let changed = self.drag_over != drag_over;
        self.drag_over = drag_over;
        changed
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UploaderState {
    messages: Vec<NotificationMessage>,
    image: Option<UploadedImage>,
    preview_ticket: Option<ReadTicket>,
    pending: Option<PendingRead>,
    next_message_id: u64,
    next_ticket: u64,
}

impl UploaderState {
    pub fn messages(&self) -> &[NotificationMessage] {
        &self.messages
    }

    pub fn image(&self) -> Option<&UploadedImage> {
        self.image.as_ref()
    }

    /// Ticket of the read that produced the current preview.
    ///
    /// Changes only when the preview itself changes.
    pub fn preview_ticket(&self) -> Option<ReadTicket> {
        self.preview_ticket
    }

    pub fn is_reading(&self) -> bool {
        self.pending.is_some()
    }

    /// Start a validation cycle for a picked or dropped file.
    ///
    /// Returns a ticket when the file passed validation and must be read.
    pub fn select(&mut self, file: Option<FileInfo>) -> Option<ReadTicket> {
        self.messages.clear();
        self.image = None;
        self.preview_ticket = None;
        self.pending = None;

        if let Err(err) = validate_image(file.as_ref()) {
            log::warn!("Image rejected: {:?}", err);
            self.push(err.to_string(), Severity::Error);
            return None;
        }

        let file = file?;
        log::info!(
            "📷 Reading {} ({}, {} bytes)",
            file.name,
            file.mime_type,
            file.size_bytes
        );

        self.next_ticket += 1;
        let ticket = ReadTicket(self.next_ticket);
        self.pending = Some(PendingRead { ticket, file });
        Some(ticket)
    }

    /// Install the preview for a finished read.
    ///
    /// Returns the id of the success message so the caller can schedule its
    /// dismissal, or `None` if the ticket is stale.
    pub fn complete_read(&mut self, ticket: ReadTicket, data_url: String) -> Option<MessageId> {
        let pending = self.take_pending(ticket)?;
        log::info!("Preview ready for {}", pending.file.name);
        self.image = Some(UploadedImage::from_file(pending.file, data_url));
        self.preview_ticket = Some(ticket);
        Some(self.push(SUCCESS_TEXT.to_string(), Severity::Success))
    }

    pub fn fail_read(&mut self, ticket: ReadTicket, err: &UploadError) {
        if self.take_pending(ticket).is_some() {
            self.push(err.to_string(), Severity::Error);
        }
    }

    /// Remove a message, if it is still shown.
    pub fn dismiss(&mut self, id: MessageId) {
        self.messages.retain(|m| m.id != id);
    }

    fn take_pending(&mut self, ticket: ReadTicket) -> Option<PendingRead> {
        match &self.pending {
            Some(p) if p.ticket == ticket => self.pending.take(),
            _ => {
                log::debug!("Ignoring stale read {:?}", ticket);
                None
            }
        }
    }

    fn push(&mut self, text: String, severity: Severity) -> MessageId {
        self.next_message_id += 1;
        let id = MessageId(self.next_message_id);
        self.messages.push(NotificationMessage { id, text, severity });
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MAX_IMAGE_SIZE;

    fn png(size_bytes: u64) -> FileInfo {
        FileInfo {
            name: "habitacion.png".to_string(),
            mime_type: "image/png".to_string(),
            size_bytes,
            last_modified_ms: 1_700_000_000_000,
        }
    }

    #[test]
    fn test_valid_file_produces_preview() {
        let mut state = UploaderState::default();
        let ticket = state.select(Some(png(MAX_IMAGE_SIZE))).expect("accepted");
        assert!(state.is_reading());
        assert!(state.image().is_none());

        let id = state.complete_read(ticket, "data:image/png;base64,AA==".to_string());
        assert!(id.is_some());

        let image = state.image().unwrap();
        assert_eq!(image.original_file_name, "habitacion.png");
        assert_eq!(image.mime_type, "image/png");
        assert_eq!(image.size_bytes, MAX_IMAGE_SIZE);
        assert_eq!(image.last_modified_epoch_ms, 1_700_000_000_000);
        assert_eq!(state.messages().len(), 1);
        assert_eq!(state.messages()[0].severity, Severity::Success);
        assert!(!state.is_reading());
    }

    #[test]
    fn test_success_message_dismissed() {
        let mut state = UploaderState::default();
        let ticket = state.select(Some(png(10))).unwrap();
        let id = state.complete_read(ticket, "data:,".to_string()).unwrap();

        state.dismiss(id);
        assert!(state.messages().is_empty());
        assert!(state.image().is_some());
    }

    #[test]
    fn test_rejections_leave_no_preview() {
        let cases = [
            None,
            Some(FileInfo { mime_type: "application/pdf".to_string(), ..png(10) }),
            Some(FileInfo { mime_type: "image/tiff".to_string(), ..png(10) }),
            Some(png(MAX_IMAGE_SIZE + 1)),
            Some(FileInfo { mime_type: "text/plain".to_string(), ..png(MAX_IMAGE_SIZE * 2) }),
        ];

        for case in cases {
            let mut state = UploaderState::default();
            assert!(state.select(case).is_none());
            assert!(state.image().is_none());
            assert_eq!(state.messages().len(), 1);
            assert_eq!(state.messages()[0].severity, Severity::Error);
        }
    }

    #[test]
    fn test_new_selection_clears_previous_cycle() {
        let mut state = UploaderState::default();
        let ticket = state.select(Some(png(10))).unwrap();
        state.complete_read(ticket, "data:,".to_string());
        assert!(state.image().is_some());

        state.select(Some(png(MAX_IMAGE_SIZE + 1)));
        assert!(state.image().is_none());
        assert_eq!(state.messages().len(), 1);
        assert_eq!(state.messages()[0].text, UploadError::too_large(0).to_string());
    }

    #[test]
    fn test_stale_read_is_ignored() {
        let mut state = UploaderState::default();
        let first = state.select(Some(png(10))).unwrap();
        let second = state
            .select(Some(FileInfo { name: "second.png".to_string(), ..png(20) }))
            .unwrap();

        assert!(state.complete_read(first, "data:old".to_string()).is_none());
        assert!(state.image().is_none());

        state.complete_read(second, "data:new".to_string());
        assert_eq!(state.image().unwrap().original_file_name, "second.png");
    }

    #[test]
    fn test_read_failure_reports_error() {
        let mut state = UploaderState::default();
        let ticket = state.select(Some(png(10))).unwrap();
        state.fail_read(ticket, &UploadError::Read("NotReadableError".to_string()));

        assert!(state.image().is_none());
        assert!(!state.is_reading());
        assert_eq!(state.messages()[0].text, "Error: No se pudo leer el archivo de imagen.");
    }

    #[test]
    fn test_message_ids_are_unique() {
        let mut state = UploaderState::default();
        let mut seen = Vec::new();
        for _ in 0..5 {
            let ticket = state.select(Some(png(10))).unwrap();
            seen.push(state.complete_read(ticket, "data:,".to_string()).unwrap());
        }
        seen.dedup();
        assert_eq!(seen.len(), 5);
    }

    #[test]
    fn test_drop_zone_reports_only_real_changes() {
        let mut zone = DropZone::default();
        assert!(zone.set_drag_over(true));
        assert!(zone.is_drag_over());

        // dragover repeats while the pointer moves
        for _ in 0..20 {
            assert!(!zone.set_drag_over(true));
        }

        assert!(zone.set_drag_over(false));
        assert!(!zone.set_drag_over(false));
        assert!(!zone.is_drag_over());
    }

    #[test]
    fn test_preview_ticket_stable_across_dismissal() {
        let mut state = UploaderState::default();
        assert_eq!(state.preview_ticket(), None);

        let ticket = state.select(Some(png(10))).unwrap();
        assert_eq!(state.preview_ticket(), None);

        let id = state.complete_read(ticket, "data:,".to_string()).unwrap();
        assert_eq!(state.preview_ticket(), Some(ticket));

        state.dismiss(id);
        assert_eq!(state.preview_ticket(), Some(ticket));

        state.select(None);
        assert_eq!(state.preview_ticket(), None);
    }

    #[test]
    fn test_late_dismissal_leaves_newer_cycle_untouched() {
        let mut state = UploaderState::default();
        let first = state.select(Some(png(10))).unwrap();
        let old_id = state.complete_read(first, "data:old".to_string()).unwrap();

        // A new file is picked before the first message's timer fires
        let second = state
            .select(Some(FileInfo { name: "second.png".to_string(), ..png(20) }))
            .unwrap();
        let new_id = state.complete_read(second, "data:new".to_string()).unwrap();
        assert_ne!(old_id, new_id);

        state.dismiss(old_id);
        assert_eq!(state.messages().len(), 1);
        assert_eq!(state.messages()[0].id, new_id);
        assert_eq!(state.messages()[0].severity, Severity::Success);

        // Same for an error left by a rejected selection
        state.select(Some(png(MAX_IMAGE_SIZE + 1)));
        state.dismiss(new_id);
        assert_eq!(state.messages().len(), 1);
        assert_eq!(state.messages()[0].severity, Severity::Error);
    }
}
