//! Text helpers: markup stripping and length clipping
//!
//! Both operate on characters, not bytes, so multi-byte text never gets cut
//! mid-character.

/// Marker appended to clipped text
pub const CLIP_MARKER: &str = "...";

/// Clip text to at most `max` characters, appending [`CLIP_MARKER`] when
/// anything was cut
///
/// The output is at most `max` characters plus the marker, and carries the
/// marker iff the input exceeded `max`.
pub fn clip(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max).collect();
    out.push_str(CLIP_MARKER);
    out
}

/// Remove `<...>` markup runs without interpreting them
///
/// An unterminated `<` swallows the rest of the input, matching how the
/// text would render anyway.
pub fn strip_tags(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_tag = false;
    for ch in text.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            ch if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out
}
