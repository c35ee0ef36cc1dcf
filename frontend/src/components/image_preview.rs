//! Preview of the last accepted image with its metadata.

use leptos::*;

use crate::services::image::{format_file_size, format_last_modified};
use crate::UploadedImage;

#[component]
pub fn ImagePreview(image: UploadedImage) -> impl IntoView {
    let size = format_file_size(image.size_bytes);
    let modified = format_last_modified(image.last_modified_epoch_ms);

    view! {
        <div class="image-preview">
            <h3 class="image-preview__title">"Vista Previa de la Imagen"</h3>

            <div class="image-preview__container">
                <img src=image.data_url alt="Imagen cargada" class="image-preview__image"/>
            </div>

            <div class="image-preview__info">
                <InfoItem label="Nombre:" value=image.original_file_name/>
                <InfoItem label="Tipo:" value=image.mime_type/>
                <InfoItem label="Tamaño:" value=size/>
                <InfoItem label="Última modificación:" value=modified/>
            </div>
        </div>
    }
}

#[component]
fn InfoItem(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="image-preview__info-item">
            <span class="image-preview__info-label">{label}</span>
            <span class="image-preview__info-value">{value}</span>
        </div>
    }
}
