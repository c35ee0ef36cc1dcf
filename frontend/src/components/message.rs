//! Single notification line.

use leptos::*;

use crate::Severity;

#[component]
pub fn Message(text: String, severity: Severity) -> impl IntoView {
    view! {
        <div class=format!("message message--{}", severity.as_str())>
            {text}
        </div>
    }
}
