//! Notification delivery interface.

use crate::error::ScanResult;

/// Telegram rejects texts over 4096 characters
pub const MAX_MESSAGE_CHARS: usize = 4095;

#[async_trait::async_trait]
pub trait Notifier {
    /// Deliver `text` to `recipient`. Callers truncate with [`truncate_message`].
    async fn send(&self, recipient: &str, text: &str) -> ScanResult<()>;
}

/// Cut `text` to at most `max_chars` characters, on a char boundary
pub fn truncate_message(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}
