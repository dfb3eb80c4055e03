mod help;
mod record;
mod search;

use crate::app::App;
use ratatui::Frame;

/// Top-level render dispatch.
pub fn render(app: &App, frame: &mut Frame) {
    search::render(app, frame);

    // Render help overlay on top if active
    if app.show_help {
        help::render(app, frame);
    }
}

/// Truncate a string to `max_width` display columns, adding "…" if truncated.
pub fn truncate_str(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    if unicode_width::UnicodeWidthStr::width(s) <= max_width {
        return s.to_string();
    }
    let mut result = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        used += w;
        result.push(c);
    }
    result.push('…');
    result
}
