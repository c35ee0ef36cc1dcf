//! Per-component state, kept free of browser types.
//!
//! Each component owns one of these inside a signal and drives it through
//! the methods below; all branching lives here so it can be unit-tested.
//!
//! - [`uploader`] - Image selection, validation and preview cycle
//! - [`contact`] - Contact form validation and submission
//! - [`navbar`] - Route table and mobile menu

pub mod contact;
pub mod navbar;
pub mod uploader;

pub use contact::*;
pub use navbar::*;
pub use uploader::*;
