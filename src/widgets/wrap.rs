//! Greedy word wrapping for display text.

/// Wrap `text` into lines of at most `width` characters.
///
/// Explicit newlines always break. Runs of whitespace collapse to one space
/// between words. A word that does not fit on the current line starts a new
/// one; a word longer than `width` is split across lines. A zero width yields
/// no lines.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    if width == 0 {
        return lines;
    }
    for paragraph in text.split('\n') {
        let mut line = String::new();
        let mut len = 0;
        for word in paragraph.split_whitespace() {
            let mut remaining = word.chars().count();
            if len > 0 && len + 1 + remaining > width {
                lines.push(std::mem::take(&mut line));
                len = 0;
            }
            if len > 0 {
                line.push(' ');
                len += 1;
            }
            let mut chars = word.chars();
            while len + remaining > width {
                let fits = width - len;
                line.extend(chars.by_ref().take(fits));
                lines.push(std::mem::take(&mut line));
                len = 0;
                remaining -= fits;
            }
            line.extend(chars);
            len += remaining;
        }
        lines.push(line);
    }
    lines
}
