//! Theme: the styles and border glyphs used when drawing.
//!
//! A [`Theme`] is an ordinary value handed to the tree when it is built
//! (see [`Tree::with_theme`](crate::dom::Tree::with_theme)) and read during
//! drawing. `Theme::default()` is only the fallback when none is given.

use crossterm::style::Color;

use crate::render::cell::{parse_color, CellStyle};

// ---------------------------------------------------------------------------
// BorderSymbols
// ---------------------------------------------------------------------------

/// Glyphs used to draw box borders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderSymbols {
    pub horizontal: char,
    pub vertical: char,
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
}

impl BorderSymbols {
    /// Light single-line box drawing.
    pub const PLAIN: BorderSymbols = BorderSymbols {
        horizontal: '─',
        vertical: '│',
        top_left: '┌',
        top_right: '┐',
        bottom_left: '└',
        bottom_right: '┘',
    };

    /// Rounded corners.
    pub const ROUNDED: BorderSymbols = BorderSymbols {
        top_left: '╭',
        top_right: '╮',
        bottom_left: '╰',
        bottom_right: '╯',
        ..Self::PLAIN
    };

    /// Pure ASCII, for terminals without box-drawing glyphs.
    pub const ASCII: BorderSymbols = BorderSymbols {
        horizontal: '-',
        vertical: '|',
        top_left: '+',
        top_right: '+',
        bottom_left: '+',
        bottom_right: '+',
    };
}

impl Default for BorderSymbols {
    fn default() -> Self {
        Self::PLAIN
    }
}

// ---------------------------------------------------------------------------
// Theme
// ---------------------------------------------------------------------------

/// Styles for each drawable element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Background fill for boxes and cleared areas.
    pub base: CellStyle,
    /// Border lines.
    pub border: CellStyle,
    /// Box titles.
    pub title: CellStyle,
    /// Label text.
    pub label: CellStyle,
    /// Input text while unfocused.
    pub input: CellStyle,
    /// Input text while focused.
    pub input_focused: CellStyle,
    /// Border glyph set.
    pub symbols: BorderSymbols,
}

impl Theme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            base: CellStyle::new(),
            border: CellStyle::new(),
            title: CellStyle::new().bold(),
            label: CellStyle::new(),
            input: CellStyle::new(),
            input_focused: CellStyle::new().underline(),
            symbols: BorderSymbols::PLAIN,
        }
    }

    /// Set the base style (builder).
    pub fn with_base(mut self, style: CellStyle) -> Self {
        self.base = style;
        self
    }

    /// Set the border style (builder).
    pub fn with_border(mut self, style: CellStyle) -> Self {
        self.border = style;
        self
    }

    /// Set the title style (builder).
    pub fn with_title(mut self, style: CellStyle) -> Self {
        self.title = style;
        self
    }

    /// Set the label style (builder).
    pub fn with_label(mut self, style: CellStyle) -> Self {
        self.label = style;
        self
    }

    /// Set both input styles (builder).
    pub fn with_input(mut self, unfocused: CellStyle, focused: CellStyle) -> Self {
        self.input = unfocused;
        self.input_focused = focused;
        self
    }

    /// Set the border glyphs (builder).
    pub fn with_symbols(mut self, symbols: BorderSymbols) -> Self {
        self.symbols = symbols;
        self
    }

    /// Set the border foreground from a color string such as `"cyan"` or
    /// `"#88c0d0"`. Unparseable strings leave the theme unchanged.
    pub fn with_border_color(mut self, color: &str) -> Self {
        if let Some(c) = parse_color(color) {
            self.border.fg = Some(c);
        }
        self
    }

    /// Set the background of every element from a color string.
    /// Unparseable strings leave the theme unchanged.
    pub fn with_background(mut self, color: &str) -> Self {
        if let Some(c) = parse_color(color) {
            self.apply_bg(c);
        }
        self
    }

    fn apply_bg(&mut self, color: Color) {
        for style in [
            &mut self.base,
            &mut self.border,
            &mut self.title,
            &mut self.label,
            &mut self.input,
            &mut self.input_focused,
        ] {
            style.bg = Some(color);
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}
