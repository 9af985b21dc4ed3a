use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

/// Horizontal alignment inside a fixed-width cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

pub fn display_width(s: &str) -> usize {
    s.width()
}

pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Truncate to at most `max_width` display cells, appending an ellipsis
/// when anything was cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let target = max_width - 1;
    let mut result = String::new();
    let mut width = 0;

    for ch in s.chars() {
        let w = char_width(ch);
        if width + w > target {
            break;
        }
        result.push(ch);
        width += w;
    }

    result.push('…');
    result
}

/// Fit `s` into exactly `width` display cells: truncate if too long,
/// pad with spaces according to `align` if too short.
pub fn fit_to_width(s: &str, width: usize, align: Align) -> String {
    let truncated = truncate_to_width(s, width);
    let current = display_width(&truncated);
    let pad = width.saturating_sub(current);

    match align {
        Align::Left => format!("{}{}", truncated, " ".repeat(pad)),
        Align::Right => format!("{}{}", " ".repeat(pad), truncated),
        Align::Center => {
            let left = pad / 2;
            format!(
                "{}{}{}",
                " ".repeat(left),
                truncated,
                " ".repeat(pad - left)
            )
        }
    }
}
