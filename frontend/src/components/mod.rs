//! UI Components for the hotel site.
//!
//! This module contains all Leptos components organized by function:
//!
//! # Layout Components
//! - [`Navbar`] - Navigation bar with mobile menu
//!
//! # Pages
//! - [`ImageUploader`] - Image upload with drag & drop and preview
//! - [`Servicios`] - Room catalogue
//! - [`Contact`] - Contact form, map and details
//!
//! # Building Blocks
//! - [`Message`] - Single notification line
//! - [`ImagePreview`] - Accepted image with its metadata

mod contact;
mod image_preview;
mod image_uploader;
mod message;
mod navbar;
mod servicios;

pub use contact::*;
pub use image_preview::*;
pub use image_uploader::*;
pub use message::*;
pub use navbar::*;
pub use servicios::*;
