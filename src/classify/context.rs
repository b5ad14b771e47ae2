use crate::convert;

/// Number of bytes shown on either side of a reported location.
pub const DEFAULT_CONTEXT_RADIUS: usize = 50;

/// Render the bytes around `at` for display on a terminal.
///
/// The window is `at - radius .. at + radius`, clamped to `data`. CR and LF
/// are shown as the two-character escapes `\r` and `\n`, so the excerpt
/// always fits on one line. Invalid UTF-8 is replaced lossily.
#[must_use]
pub fn excerpt(data: &[u8], at: usize, radius: usize) -> String {
    let at = at.min(data.len());
    let start = at.saturating_sub(radius);
    let end = at.saturating_add(radius).min(data.len());

    let window = &data[start..end];
    let escaped_cr = convert(window, b"\r", br"\r");
    let escaped = convert(&escaped_cr, b"\n", br"\n");
    String::from_utf8_lossy(&escaped).into_owned()
}
