//! Word wrapping for text ops, using the estimated glyph advance of each font.

use super::FontHandle;

/// Break `text` into lines no wider than `width` (when given).
///
/// Explicit newlines always break. A single word wider than the box gets a
/// line of its own rather than being split.
pub fn wrap_text(text: &str, width: Option<f32>, font: FontHandle, size: f32) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let Some(max) = width else {
            lines.push(paragraph.to_string());
            continue;
        };

        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{} {}", current, word)
            };
            if current.is_empty() || font.text_width(&candidate, size) <= max {
                current = candidate;
            } else {
                lines.push(std::mem::take(&mut current));
                current = word.to_string();
            }
        }
        lines.push(current);
    }

    lines
}
