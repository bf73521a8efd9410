//! Cells and cell styles: the unit every surface stores.
//!
//! Colors are crossterm [`Color`] values so the driver can emit them directly.
//! [`parse_color`] turns named colors or `#rrggbb` strings into them, which is
//! how themes are usually configured.

use crossterm::style::Color;

// ---------------------------------------------------------------------------
// CellStyle
// ---------------------------------------------------------------------------

/// Visual style for a single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellStyle {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub bold: bool,
    pub dim: bool,
    pub italic: bool,
    pub underline: bool,
    pub reverse: bool,
}

impl CellStyle {
    /// Create a new `CellStyle` with all attributes unset.
    pub const fn new() -> Self {
        Self { fg: None, bg: None, bold: false, dim: false, italic: false, underline: false, reverse: false }
    }

    /// Set the foreground color (builder).
    pub const fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    /// Set the background color (builder).
    pub const fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    /// Enable bold (builder).
    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Enable dim (builder).
    pub const fn dim(mut self) -> Self {
        self.dim = true;
        self
    }

    /// Enable italic (builder).
    pub const fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Enable underline (builder).
    pub const fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    /// Enable reverse video (builder).
    pub const fn reverse(mut self) -> Self {
        self.reverse = true;
        self
    }
}

// ---------------------------------------------------------------------------
// Cell
// ---------------------------------------------------------------------------

/// One terminal cell: a character with its style.
///
/// A wide glyph occupies its own cell plus a `continuation` cell to its right;
/// continuation cells are never emitted to the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
    pub continuation: bool,
}

impl Cell {
    /// A cell holding `ch` in `style`.
    pub const fn new(ch: char, style: CellStyle) -> Self {
        Self { ch, style, continuation: false }
    }

    /// A blank (space) cell with default style.
    pub const fn blank() -> Self {
        Self::new(' ', CellStyle::new())
    }

    /// The placeholder right half of a wide glyph.
    pub const fn continuation(style: CellStyle) -> Self {
        Self { ch: ' ', style, continuation: true }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::blank()
    }
}

// ---------------------------------------------------------------------------
// Color parsing
// ---------------------------------------------------------------------------

/// Parse a color string into a crossterm `Color`.
///
/// Supports:
/// - Hex colors: `#rrggbb` or `#rgb`
/// - Named colors: `black`, `red`, `green`, `yellow`, `blue`, `magenta`, `cyan`, `white`,
///   their `dark_*` variants, and `grey`/`gray`
/// - `default` / `reset` for the terminal's own color
///
/// Returns `None` if the color string cannot be parsed.
pub fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim();

    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex_color(hex);
    }

    match s.to_ascii_lowercase().as_str() {
        "default" | "reset" => Some(Color::Reset),
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "white" => Some(Color::White),
        "dark_red" | "darkred" => Some(Color::DarkRed),
        "dark_green" | "darkgreen" => Some(Color::DarkGreen),
        "dark_yellow" | "darkyellow" => Some(Color::DarkYellow),
        "dark_blue" | "darkblue" => Some(Color::DarkBlue),
        "dark_magenta" | "darkmagenta" => Some(Color::DarkMagenta),
        "dark_cyan" | "darkcyan" => Some(Color::DarkCyan),
        "dark_grey" | "dark_gray" | "darkgrey" | "darkgray" => Some(Color::DarkGrey),
        "grey" | "gray" => Some(Color::Grey),
        _ => None,
    }
}

/// Parse a hex color string (without the leading `#`).
fn parse_hex_color(hex: &str) -> Option<Color> {
    if !hex.is_ascii() {
        return None;
    }
    match hex.len() {
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color::Rgb { r, g, b })
        }
        3 => {
            let r = u8::from_str_radix(&hex[0..1], 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()?;
            Some(Color::Rgb { r: r * 17, g: g * 17, b: b * 17 })
        }
        _ => None,
    }
}

// ===========================================================================
// Tests
// ===========================================================================
