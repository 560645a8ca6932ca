//! Application ports
//!
//! Interfaces between the application layer and the outside world:
//! the reply-drafting service, the presentation layer's event sink, and
//! structured conversation logging.

pub mod conversation_logger;
pub mod reply_gateway;
pub mod ui_event;
