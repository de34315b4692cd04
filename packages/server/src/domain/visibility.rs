//! Message visibility rules.
//!
//! Pure functions: no side effects, defined for every (message, viewer) pair,
//! including viewers that are not registered.

use super::{Message, MessageKind};

/// Whether `viewer` may see `message`.
///
/// - `status` and `message` entries are public.
/// - `private_message` entries are visible to their author and recipient only
///   (exact, case-sensitive match).
/// - Unknown kinds are never visible.
pub fn is_visible(message: &Message, viewer: &str) -> bool {
    match message.kind {
        MessageKind::Status | MessageKind::Message => true,
        MessageKind::PrivateMessage => {
            message.from.as_str() == viewer || message.to.as_str() == viewer
        }
        MessageKind::Unknown => false,
    }
}

/// The most recent `limit` messages visible to `viewer`, oldest first.
///
/// Filtering happens before truncation, so the window only ever contains
/// entries the viewer can see. A `limit` that is absent, non-positive, or
/// larger than the visible count yields every visible message.
pub fn recent_visible_messages(
    messages: Vec<Message>,
    viewer: &str,
    limit: Option<i64>,
) -> Vec<Message> {
    let mut visible: Vec<Message> = messages
        .into_iter()
        .filter(|m| is_visible(m, viewer))
        .collect();

    if let Some(limit) = limit.and_then(|l| usize::try_from(l).ok()).filter(|l| *l > 0)
        && limit < visible.len()
    {
        visible.drain(..visible.len() - limit);
    }
    visible
}
