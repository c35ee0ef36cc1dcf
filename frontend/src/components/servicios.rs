//! Room catalogue page.

use leptos::*;
use leptos_meta::Title;

use crate::data::ROOMS;
use crate::{Page, RoomListing};

#[component]
pub fn Servicios() -> impl IntoView {
    view! {
        <Title text=Page::Services.title()/>
        <div class="servicios">
            <div class="servicios__container">
                <div class="servicios__header">
                    <h1 class="servicios__title">"Nuestras Habitaciones"</h1>
                    <p class="servicios__subtitle">
                        "Descubre nuestras exclusivas habitaciones diseñadas para tu máximo confort"
                    </p>
                </div>

                <div class="servicios__grid">
                    {ROOMS.iter().map(|room| view! { <RoomCard room=room/> }).collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
fn RoomCard(room: &'static RoomListing) -> impl IntoView {
    view! {
        <div class="servicios__card">
            <div class="servicios__card-image">
                <img src=room.image_path alt=room.name/>
                <div class="servicios__card-badge">{room.price_label()}</div>
            </div>

            <div class="servicios__card-content">
                <h3 class="servicios__card-title">{room.name}</h3>
                <p class="servicios__card-description">{room.description}</p>

                <div class="servicios__card-info">
                    <div class="servicios__card-capacity">
                        <span class="servicios__icon">"👥"</span>
                        <span>"Capacidad: " {room.capacity} " personas"</span>
                    </div>
                </div>

                <div class="servicios__card-services">
                    <h4>"Servicios incluidos:"</h4>
                    <ul>
                        {room
                            .amenities
                            .iter()
                            .map(|amenity| view! { <li><span>"✓"</span> " " {*amenity}</li> })
                            .collect_view()}
                    </ul>
                </div>

                // Booking is not implemented yet
                <button class="servicios__card-button">"Reservar Ahora"</button>
            </div>
        </div>
    }
}
