//! This crate contains all shared UI components for the contact form page.

pub mod app;
pub use app::ContactPage;

pub mod components;
pub mod features;
pub mod services;
pub mod utils;
