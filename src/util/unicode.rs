use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Clamp a byte offset into `[0, s.len()]` and snap it down to a char boundary.
pub fn clamp_offset(s: &str, byte_offset: usize) -> usize {
    let mut offset = byte_offset.min(s.len());
    while !s.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}

/// Byte offset where the line containing `byte_offset` starts.
pub fn line_start(s: &str, byte_offset: usize) -> usize {
    let offset = clamp_offset(s, byte_offset);
    s[..offset].rfind('\n').map_or(0, |i| i + 1)
}

/// Byte offset (exclusive, before the `\n`) where the line containing `byte_offset` ends.
pub fn line_end(s: &str, byte_offset: usize) -> usize {
    let offset = clamp_offset(s, byte_offset);
    s[offset..].find('\n').map_or(s.len(), |i| offset + i)
}

/// Letters, digits and `_`.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Display width in terminal cells. Tabs count as 4 cells.
pub fn display_width(s: &str) -> usize {
    s.split('\t')
        .enumerate()
        .map(|(i, part)| {
            let w = UnicodeWidthStr::width(part);
            if i > 0 { w + 4 } else { w }
        })
        .sum()
}

/// Truncate a string to fit within `max_cells` terminal cells, appending `…` if truncated.
pub fn truncate_to_width(s: &str, max_cells: usize) -> String {
    if max_cells == 0 {
        return String::new();
    }
    if display_width(s) <= max_cells {
        return s.to_string();
    }
    if max_cells <= 1 {
        return "\u{2026}".to_string();
    }
    let budget = max_cells - 1; // reserve 1 cell for '…'
    let mut width = 0;
    let mut result = String::new();
    for grapheme in s.graphemes(true) {
        let gw = display_width(grapheme);
        if width + gw > budget {
            break;
        }
        width += gw;
        result.push_str(grapheme);
    }
    result.push('\u{2026}');
    result
}
