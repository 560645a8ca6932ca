//! Application use cases

pub mod chat;
pub mod draft_once;
