//! Gemini adapter
//!
//! Implements the reply gateway port against the Gemini `generateContent`
//! REST endpoint.

pub mod error;
pub mod gateway;
pub mod session;
pub mod types;
