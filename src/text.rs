//! Display-width helpers for drawing text into cells.
//!
//! Widths come from `unicode-width`: wide glyphs (CJK, most emoji) occupy two
//! cells, combining marks occupy none. Word wrapping is delegated to
//! `textwrap`.

use textwrap::{wrap, Options, WordSplitter};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::geometry::Size;

/// Number of cells `ch` occupies. Control characters count as zero.
#[inline]
pub fn char_width(ch: char) -> i32 {
    UnicodeWidthChar::width(ch).unwrap_or(0) as i32
}

/// Number of cells `s` occupies on a single line.
#[inline]
pub fn str_width(s: &str) -> i32 {
    UnicodeWidthStr::width(s) as i32
}

/// Longest prefix of `s` that fits in `max_width` cells.
///
/// A wide glyph that would straddle the limit is dropped entirely.
pub fn truncate_to_width(s: &str, max_width: i32) -> &str {
    if max_width <= 0 {
        return "";
    }
    let mut used = 0;
    for (idx, ch) in s.char_indices() {
        let w = char_width(ch);
        if used + w > max_width {
            return &s[..idx];
        }
        used += w;
    }
    s
}

/// Split `text` into display lines.
///
/// Hard line breaks are always honoured. When `width` is positive the lines
/// are additionally word-wrapped to that many cells; words longer than the
/// line are broken.
pub fn layout_lines(text: &str, width: Option<i32>) -> Vec<String> {
    match width {
        Some(w) if w > 0 => {
            let options = Options::new(w as usize).word_splitter(WordSplitter::NoHyphenation);
            wrap(text, options).into_iter().map(|line| line.into_owned()).collect()
        }
        _ => text.split('\n').map(str::to_owned).collect(),
    }
}

/// Widest line by display width and the number of lines.
pub fn measure_lines<S: AsRef<str>>(lines: &[S]) -> Size {
    let width = lines.iter().map(|l| str_width(l.as_ref())).max().unwrap_or(0);
    Size::new(width, lines.len() as i32)
}
