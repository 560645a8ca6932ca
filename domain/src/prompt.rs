//! Assistant prompt text
//!
//! The persona instruction, the synthetic greeting that seeds every
//! conversation, and the fixed fallback reply substituted when the reply
//! request fails. All three are plain domain data: which service receives
//! the persona is an infrastructure concern.

/// System instruction attached to the session for its whole lifetime.
pub const PERSONA: &str = "You are a helpful assistant that generates polite and concise auto-replies \
for various situations like phone calls, SMS, or WhatsApp messages.\n\
When a user describes a situation, you should craft an appropriate auto-reply for them.\n\
Keep the tone friendly and professional. The replies should be relatively short.";

/// Greeting shown as the first model turn of every conversation.
///
/// This is seed content, not a model response.
pub const GREETING: &str = "Hello! I can help you draft the perfect auto-reply. Just tell me who \
contacted you and why.\n\nFor example, you could say:\n\
- \"My boss called me, but I'm on vacation.\"\n\
- \"A friend sent a WhatsApp message asking to borrow money.\"\n\
- \"I missed a call from an unknown number while I was in a meeting.\"";

/// Fixed model turn appended when the reply request fails.
///
/// The underlying error is logged for diagnostics but never shown here.
pub const FALLBACK_REPLY: &str = "Sorry, I encountered an error. Please try again.";
