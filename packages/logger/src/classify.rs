//! Level guessing for free-form text

use crate::level::Level;

/// Guess the level of foreign log text
///
/// Case-insensitive substring match on `"error"`, then `"warn"`, then
/// `"debug"`; anything else is [`Level::Info`]. Words that merely contain one
/// of these (e.g. `"terrors"`) are classified by it.
#[must_use]
pub fn classify(payload: &[u8]) -> Level {
    let text = String::from_utf8_lossy(payload).to_lowercase();
    if text.contains("error") {
        Level::Error
    } else if text.contains("warn") {
        Level::Warn
    } else if text.contains("debug") {
        Level::Debug
    } else {
        Level::Info
    }
}
