//! Stat tiles for the dashboard.

use tabula::buffer::Buffer;
use tabula::layout::Rect;
use tabula::style::TextStyle;
use tabula::text::truncate_to_width;
use tabula::theme::{Palette, Tone};

/// Draw one stat tile: a muted label, the headline value in its tone
/// color, and a small qualifier underneath.
pub fn draw(
    buf: &mut Buffer,
    area: Rect,
    label: &str,
    value: &str,
    sub: &str,
    tone: Tone,
    palette: &Palette,
) {
    if area.is_empty() || area.width < 4 {
        return;
    }
    for y in area.y..area.bottom() {
        buf.fill_row(area.x, y, area.width, palette.surface);
    }

    let inner = area.width.saturating_sub(2) as usize;
    let x = area.x + 1;
    buf.put_str(
        x,
        area.y,
        &truncate_to_width(label, inner),
        palette.muted,
        palette.surface,
        TextStyle::new(),
    );
    if area.height > 1 {
        buf.put_str(
            x,
            area.y + 1,
            &truncate_to_width(value, inner),
            palette.tone(tone),
            palette.surface,
            TextStyle::bold(),
        );
    }
    if area.height > 2 {
        buf.put_str(
            x,
            area.y + 2,
            &truncate_to_width(sub, inner),
            palette.muted,
            palette.surface,
            TextStyle::dim(),
        );
    }
}
