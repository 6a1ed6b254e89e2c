//! Cell content checks shared by both pipelines

use std::borrow::Cow;

/// True when every byte is in the printable ASCII range 0x20..=0x7E
pub fn is_printable_ascii(bytes: &[u8]) -> bool {
    bytes.iter().all(|&b| (0x20..=0x7e).contains(&b))
}

/// True when the content is at most `max` bytes long
pub fn within_length(bytes: &[u8], max: usize) -> bool {
    bytes.len() <= max
}

/// Borrow a validated cell as `&str`.
///
/// Returns `None` unless the cell is within `max` bytes and printable ASCII.
pub fn printable_cell(bytes: &[u8], max: usize) -> Option<&str> {
    if !within_length(bytes, max) || !is_printable_ascii(bytes) {
        return None;
    }
    std::str::from_utf8(bytes).ok()
}

/// Render raw input for a diagnostic message
pub fn lossy(bytes: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(bytes)
}
