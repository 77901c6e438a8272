//! Infrastructure Services
//!
//! - **client**: HTTP client for the outbound contact form submission
//!
//! Designed to be WASM-first: reqwest on the browser fetch backend, async
//! without Send/Sync bounds.

pub mod client;
