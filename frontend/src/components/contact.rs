//! Contact page: validated form relayed through EmailJS, map and details.

use gloo_timers::future::TimeoutFuture;
use leptos::*;
use leptos_meta::Title;
use web_sys::{Event, SubmitEvent};

use crate::config::{
    CONTACT_EMAIL, CONTACT_LOCATION, CONTACT_PHONE, CONTACT_SUCCESS_TTL_MS, MAP_EMBED_URL,
};
use crate::services::email::{EmailJsRelay, EmailRelay};
use crate::{ContactField, ContactState, Page, SubmitAttempt, SubmitOutcome};

#[component]
pub fn Contact() -> impl IntoView {
    let state = create_rw_signal(ContactState::default());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let Some(SubmitAttempt::Send(params)) = state.try_update(|s| s.begin_submit()) else {
            return;
        };

        log::info!("📤 Submitting contact form");
        spawn_local(async move {
            let result = match EmailJsRelay::from_build_env() {
                Ok(relay) => relay.send(&params).await,
                Err(e) => Err(e),
            };

            match state.try_update(|s| s.finish(result)) {
                Some(SubmitOutcome::Sent(ticket)) => {
                    TimeoutFuture::new(CONTACT_SUCCESS_TTL_MS).await;
                    state.try_update(|s| s.hide_banner(ticket));
                }
                Some(SubmitOutcome::Failed(text)) => show_alert(&text),
                None => {}
            }
        });
    };

    let loading = move || state.with(|s| s.is_loading());

    view! {
        <Title text=Page::Contact.title()/>
        <div class="contact">
            <div class="contact__container">
                <div class="contact__header">
                    <h1 class="contact__title">"📧 Contacto"</h1>
                    <p class="contact__subtitle">
                        "¿Tienes alguna pregunta o sugerencia? ¡Nos encantaría saber de ti!"
                    </p>
                </div>

                <Show when=move || state.with(|s| s.is_success_visible())>
                    <div class="contact__success">
                        <div class="contact__success-icon">"✅"</div>
                        <h3>"¡Mensaje Enviado Correctamente!"</h3>
                        <p>"Gracias por contactarnos. Te responderemos a la brevedad."</p>
                    </div>
                </Show>

                <div class="contact__content">
                    <div class="contact__form-section">
                        <form class="contact__form" on:submit=on_submit>
                            <div class="contact__form-group">
                                <label for="name" class="contact__label">"👤 Nombre Completo"</label>
                                <input
                                    type="text"
                                    id="name"
                                    name="name"
                                    class=move || input_class(state, ContactField::Name, "contact__input")
                                    placeholder="Ingresa tu nombre completo"
                                    prop:value=move || state.with(|s| s.form().name.clone())
                                    on:input=on_edit(state, ContactField::Name)
                                />
                                <FieldError state=state field=ContactField::Name/>
                            </div>

                            <div class="contact__form-group">
                                <label for="email" class="contact__label">"📧 Dirección de Correo"</label>
                                <input
                                    type="email"
                                    id="email"
                                    name="email"
                                    class=move || input_class(state, ContactField::Email, "contact__input")
                                    placeholder="tu@email.com"
                                    prop:value=move || state.with(|s| s.form().email.clone())
                                    on:input=on_edit(state, ContactField::Email)
                                />
                                <FieldError state=state field=ContactField::Email/>
                            </div>

                            <div class="contact__form-group">
                                <label for="message" class="contact__label">"💬 Mensaje"</label>
                                <textarea
                                    id="message"
                                    name="message"
                                    rows="6"
                                    class=move || input_class(state, ContactField::Message, "contact__textarea")
                                    placeholder="Escribe tu mensaje aquí..."
                                    prop:value=move || state.with(|s| s.form().message.clone())
                                    on:input=on_edit(state, ContactField::Message)
                                ></textarea>
                                <FieldError state=state field=ContactField::Message/>
                            </div>

                            <button type="submit" class="contact__submit" disabled=loading>
                                {move || if loading() {
                                    view! { <span class="contact__spinner"></span> "Enviando..." }.into_view()
                                } else {
                                    "🚀 Enviar Mensaje".into_view()
                                }}
                            </button>
                        </form>
                    </div>

                    <div class="contact__map-section">
                        <div class="contact__map-container">
                            <h3>"📍 Nuestra Ubicación"</h3>
                            <iframe
                                src=MAP_EMBED_URL
                                width="100%"
                                height="100%"
                                style="border: 0;"
                                allowfullscreen=""
                                loading="lazy"
                                referrerpolicy="no-referrer-when-downgrade"
                                title="Mapa de ubicación"
                            ></iframe>
                        </div>
                        <div class="contact__info">
                            <h3>"📞 Información de Contacto"</h3>
                            <InfoLine icon="📧" text=CONTACT_EMAIL/>
                            <InfoLine icon="📱" text=CONTACT_PHONE/>
                            <InfoLine icon="📍" text=CONTACT_LOCATION/>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn FieldError(state: RwSignal<ContactState>, field: ContactField) -> impl IntoView {
    move || {
        state
            .with(|s| s.errors().get(field).map(str::to_string))
            .map(|text| view! { <span class="contact__error">{text}</span> })
    }
}

#[component]
fn InfoLine(icon: &'static str, text: &'static str) -> impl IntoView {
    view! {
        <div class="contact__info-item">
            <span class="contact__info-icon">{icon}</span>
            <span>{text}</span>
        </div>
    }
}

fn on_edit(state: RwSignal<ContactState>, field: ContactField) -> impl Fn(Event) + Copy {
    move |ev: Event| state.update(|s| s.edit(field, event_target_value(&ev)))
}

fn input_class(state: RwSignal<ContactState>, field: ContactField, base: &'static str) -> String {
    if state.with(|s| s.errors().get(field).is_some()) {
        format!("{} contact__input--error", base)
    } else {
        base.to_string()
    }
}

fn show_alert(text: &str) {
    if let Err(e) = gloo_utils::window().alert_with_message(text) {
        log::warn!("Could not show alert: {:?}", e);
    }
}
