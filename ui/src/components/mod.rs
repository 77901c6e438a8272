//! User Interface Components
//!
//! Reusable Dioxus components for the contact page:
//!
//! - **forms**: the contact form itself
//! - **display**: submission outcome notice
//! - **inputs**: controlled inputs, the department select, inline field errors

pub mod display;
pub mod forms;
pub mod inputs;
