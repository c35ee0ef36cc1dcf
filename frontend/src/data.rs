//! Room catalogue shown on the services page.

use crate::RoomListing;

pub static ROOMS: [RoomListing; 6] = [
    RoomListing {
        id: 1,
        name: "Suite Presidencial",
        image_path: "/suite.jpg",
        description: "Lujosa suite con vista panorámica y jacuzzi privado",
        price_per_night: 350,
        capacity: 2,
        amenities: &["WiFi", "TV Smart", "Jacuzzi", "Minibar"],
    },
    RoomListing {
        id: 2,
        name: "Habitación Deluxe",
        image_path: "/deluxe.jpg",
        description: "Habitación elegante con balcón y vista al jardín",
        price_per_night: 180,
        capacity: 2,
        amenities: &["WiFi", "TV Cable", "Aire Acondicionado", "Minibar"],
    },
    RoomListing {
        id: 3,
        name: "Habitación Familiar",
        image_path: "/familiar.jpg",
        description: "Espaciosa habitación ideal para familias con dos camas",
        price_per_night: 220,
        capacity: 4,
        amenities: &["WiFi", "TV Cable", "Aire Acondicionado", "Cocina"],
    },
    RoomListing {
        id: 4,
        name: "Habitación Ejecutiva",
        image_path: "/ejecutiva.jpeg",
        description: "Diseñada para ejecutivos con área de trabajo. Excelente área de iluminación.",
        price_per_night: 200,
        capacity: 1,
        amenities: &["WiFi", "Escritorio", "TV Smart"],
    },
    RoomListing {
        id: 5,
        name: "Habitación Standard",
        image_path: "/standard.jpg",
        description: "Confortable habitación con todas las comodidades básicas",
        price_per_night: 120,
        capacity: 2,
        amenities: &["WiFi", "TV Cable", "Aire Acondicionado"],
    },
    RoomListing {
        id: 6,
        name: "Suite Romántica",
        image_path: "/parejas.jpg",
        description: "Ambiente íntimo con decoración especial para parejas",
        price_per_night: 280,
        capacity: 2,
        amenities: &["Jacuzzi", "Champagne", "Decoración especial"],
    },
];
