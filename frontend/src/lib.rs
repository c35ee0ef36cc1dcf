//! Hotel site - Frontend Rust/Leptos Application
//!
//! A WebAssembly single-page application for a hotel: image upload with
//! preview, a room catalogue and a contact form relayed through EmailJS.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Navbar (active link from current route, mobile menu)        │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Routes                                                      │
//! │  ├── /, /subir-imagen  → ImageUploader (Message, Preview)   │
//! │  ├── /servicios        → Servicios                          │
//! │  └── /contacto         → Contact                            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (UploadedImage, NotificationMessage, etc.)
//! - [`state`] - Browser-free state machines driven by the components
//! - [`components`] - UI components (Navbar, ImageUploader, Contact, etc.)
//! - [`services`] - Image reading and email relay
//! - [`data`] - Static room catalogue

use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::{Route, Router, Routes};

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod data;
pub mod state;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::RelayConfig;

// Types
pub use types::{
    // Upload
    FileInfo, UploadedImage,
    // Notifications
    MessageId, NotificationMessage, Severity,
    // Contact
    ContactField, ContactForm, FieldErrors,
    // Catalogue
    RoomListing,
    // Errors
    AppError, AppResult, UploadError,
};

// State
pub use state::*;

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application
// =============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title formatter=|page: String| format!("{} | Mi Hotel", page)/>
        <Router>
            <div class="App">
                <Navbar/>
                <main class="main-content">
                    <Routes>
                        <Route path=HOME_PATH view=ImageUploader/>
                        <Route path=UPLOAD_PATH view=ImageUploader/>
                        <Route path=SERVICES_PATH view=Servicios/>
                        <Route path=CONTACT_PATH view=Contact/>
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
