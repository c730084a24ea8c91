//! Shared rendering utilities and helpers.
//!
//! Text handling here works on character indices, never byte indices, so
//! multi-byte names truncate and highlight correctly.

use crate::ui::theme::Theme;

/// Positions the cursor at a specific row and column (both 1-indexed).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Fits `text` into exactly `width` characters.
///
/// Longer text is cut and ends in `…`; shorter text is padded with spaces.
#[must_use]
pub fn fit_cell(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len <= width {
        let mut fitted = String::with_capacity(text.len() + width - len);
        fitted.push_str(text);
        fitted.extend(std::iter::repeat(' ').take(width - len));
        fitted
    } else if width == 0 {
        String::new()
    } else {
        let mut fitted: String = text.chars().take(width - 1).collect();
        fitted.push('…');
        fitted
    }
}

/// Character ranges where `query` occurs in `text`, ignoring case.
///
/// Only ranges that end within the first `limit` characters are returned.
/// Text whose lowercase form changes length yields no ranges.
#[must_use]
pub fn match_ranges(text: &str, query: &str, limit: usize) -> Vec<(usize, usize)> {
    if query.is_empty() {
        return vec![];
    }
    let haystack: Vec<char> = text.to_lowercase().chars().collect();
    let needle: Vec<char> = query.to_lowercase().chars().collect();
    if haystack.len() != text.chars().count() || needle.len() > haystack.len() {
        return vec![];
    }

    let mut ranges = Vec::new();
    let mut start = 0;
    while start + needle.len() <= haystack.len() {
        if haystack[start..start + needle.len()] == needle[..] {
            let end = start + needle.len();
            if end <= limit {
                ranges.push((start, end));
            }
            start = end;
        } else {
            start += 1;
        }
    }
    ranges
}

/// Renders text with highlighted character ranges for search matches.
///
/// When `is_selected` is `true`, the selection colors are restored after each
/// highlight so the row background stays continuous.
pub fn render_highlighted_text(
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
) {
    if ranges.is_empty() {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let end = end.min(chars.len());
        if start < current_pos || start >= end {
            continue;
        }
        let normal_section: String = chars[current_pos..start].iter().collect();
        print!("{normal_section}");

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start..end].iter().collect();
        print!("{highlighted_section}");
        print!("{}", Theme::reset());

        if is_selected {
            print!("{}", Theme::fg(&theme.colors.selection_fg));
            print!("{}", Theme::bg(&theme.colors.selection_bg));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_normal));
        }

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}
