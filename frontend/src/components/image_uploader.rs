//! Image upload with drag & drop support.
//!
//! Handles file selection, validation, reading and preview. All decisions
//! are taken by [`UploaderState`]; this component only wires browser events
//! to it and runs the asynchronous read and dismissal timers.

use gloo_timers::future::TimeoutFuture;
use leptos::*;
use leptos_meta::Title;
use web_sys::{DragEvent, Event, File, HtmlInputElement};

use crate::config::SUCCESS_MESSAGE_TTL_MS;
use crate::services::image::read_as_data_url;
use crate::{DropZone, FileInfo, ImagePreview, Message, MessageId, Page, UploaderState};

#[component]
pub fn ImageUploader() -> impl IntoView {
    let state = create_rw_signal(UploaderState::default());
    let drop_zone = create_rw_signal(DropZone::default());
    // Preview re-renders only when a new read lands
    let preview_ticket = create_memo(move |_| state.with(|s| s.preview_ticket()));

    let process_file = move |file: Option<File>| {
        let info = file.as_ref().map(FileInfo::from_file);
        let ticket = state.try_update(|s| s.select(info)).flatten();

        let (Some(ticket), Some(file)) = (ticket, file) else {
            return;
        };

        spawn_local(async move {
            match read_as_data_url(&file).await {
                Ok(data_url) => {
                    if let Some(id) = state.try_update(|s| s.complete_read(ticket, data_url)).flatten() {
                        schedule_dismiss(state, id);
                    }
                }
                Err(e) => {
                    log::error!("❌ Could not read {}: {:?}", file.name(), e);
                    state.try_update(|s| s.fail_read(ticket, &e));
                }
            }
        });
    };

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            process_file(Some(file));
        }
    };

    let on_drag_over = move |ev: DragEvent| {
        ev.prevent_default();
        set_drag_over(drop_zone, true);
    };

    let on_drag_leave = move |ev: DragEvent| {
        ev.prevent_default();
        set_drag_over(drop_zone, false);
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_drag_over(drop_zone, false);

        if let Some(files) = ev.data_transfer().and_then(|dt| dt.files()) {
            if files.length() > 0 {
                process_file(files.get(0));
            }
        }
    };

    view! {
        <Title text=Page::Uploader.title()/>
        <div class="image-uploader">
            <div class="image-uploader__container">
                <h1 class="image-uploader__title">"📷 ¡Subí tu imagen!"</h1>

                <div
                    class=move || {
                        if drop_zone.with(|z| z.is_drag_over()) {
                            "image-uploader__upload-section image-uploader__upload-section--dragover"
                        } else {
                            "image-uploader__upload-section"
                        }
                    }
                    on:dragover=on_drag_over
                    on:dragleave=on_drag_leave
                    on:drop=on_drop
                >
                    <div class="image-uploader__upload-icon">"📁"</div>
                    <div class="image-uploader__upload-text">
                        "Arrastra tu imagen aquí o haz clic para seleccionar"
                    </div>
                    <label for="imageInput" class="image-uploader__file-label">
                        "Seleccionar Imagen"
                    </label>
                    // `accept` is only a picker hint; validation happens on selection
                    <input
                        type="file"
                        id="imageInput"
                        accept="image/*"
                        class="image-uploader__file-input"
                        on:change=on_file_change
                    />
                    <div class="image-uploader__supported-formats">
                        "Formatos soportados: JPG, PNG, GIF, BMP, SVG, WEBP"
                    </div>
                </div>

                <div class="image-uploader__messages">
                    <For
                        each=move || state.with(|s| s.messages().to_vec())
                        key=|message| message.id
                        children=|message| view! {
                            <Message text=message.text severity=message.severity/>
                        }
                    />
                </div>

                {move || {
                    preview_ticket
                        .get()
                        .and_then(|_| state.with_untracked(|s| s.image().cloned()))
                        .map(|image| view! { <ImagePreview image=image/> })
                }}
            </div>
        </div>
    }
}

/// `dragover` fires continuously; only real changes reach the signal.
fn set_drag_over(zone: RwSignal<DropZone>, drag_over: bool) {
    let mut next = zone.get_untracked();
    if next.set_drag_over(drag_over) {
        zone.set(next);
    }
}

fn schedule_dismiss(state: RwSignal<UploaderState>, id: MessageId) {
    spawn_local(async move {
        TimeoutFuture::new(SUCCESS_MESSAGE_TTL_MS).await;
        // The uploader may have been unmounted meanwhile
        state.try_update(|s| s.dismiss(id));
    });
}
