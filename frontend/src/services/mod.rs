//! Browser and third-party services.
//!
//! # Services
//!
//! - [`image`] - Image validation, size formatting and `data:` URL reading
//! - [`email`] - Contact message delivery through EmailJS

pub mod email;
pub mod image;

pub use email::*;
pub use image::*;
