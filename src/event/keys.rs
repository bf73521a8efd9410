//! Key and mouse identifiers.
//!
//! Events are identified by short strings. Named keys are wrapped in angle
//! brackets (`<Enter>`, `<F5>`), control chords use `<C-x>`, and a printable
//! character is just itself (`a`, `<`, `日`). Bindings match identifiers
//! case-insensitively.

pub const ENTER: &str = "<Enter>";
pub const TAB: &str = "<Tab>";
pub const ESCAPE: &str = "<Escape>";
pub const SPACE: &str = "<Space>";
pub const BACKSPACE: &str = "<Backspace>";
pub const DELETE: &str = "<Delete>";
pub const INSERT: &str = "<Insert>";
pub const HOME: &str = "<Home>";
pub const END: &str = "<End>";
pub const PAGE_UP: &str = "<PageUp>";
pub const PAGE_DOWN: &str = "<PageDown>";
pub const UP: &str = "<Up>";
pub const DOWN: &str = "<Down>";
pub const LEFT: &str = "<Left>";
pub const RIGHT: &str = "<Right>";

pub const CTRL_SPACE: &str = "<C-<Space>>";
pub const CTRL_BACKSPACE: &str = "<C-<Backspace>>";
pub const CTRL_A: &str = "<C-a>";
pub const CTRL_B: &str = "<C-b>";
pub const CTRL_C: &str = "<C-c>";
pub const CTRL_D: &str = "<C-d>";
pub const CTRL_E: &str = "<C-e>";
pub const CTRL_F: &str = "<C-f>";
pub const CTRL_K: &str = "<C-k>";
pub const CTRL_Q: &str = "<C-q>";

/// `<F1>` through `<F12>`, indexed from zero.
pub const FUNCTION_KEYS: [&str; 12] = [
    "<F1>", "<F2>", "<F3>", "<F4>", "<F5>", "<F6>", "<F7>", "<F8>", "<F9>", "<F10>", "<F11>",
    "<F12>",
];

pub const MOUSE_LEFT: &str = "<MouseLeft>";
pub const MOUSE_RIGHT: &str = "<MouseRight>";
pub const MOUSE_MIDDLE: &str = "<MouseMiddle>";
pub const MOUSE_RELEASE: &str = "<MouseRelease>";
pub const MOUSE_WHEEL_UP: &str = "<MouseWheelUp>";
pub const MOUSE_WHEEL_DOWN: &str = "<MouseWheelDown>";

/// Identifier of the function key `n` (1-based), if it exists.
pub fn function_key(n: u8) -> Option<&'static str> {
    FUNCTION_KEYS.get(usize::from(n).checked_sub(1)?).copied()
}

/// Identifier for Ctrl held with `ch`, e.g. `<C-x>`.
pub fn ctrl_key(ch: char) -> String {
    format!("<C-{}>", ch.to_ascii_lowercase())
}

/// Whether `id` names a printable character rather than a named key.
pub fn is_char_key(id: &str) -> bool {
    let mut chars = id.chars();
    match (chars.next(), chars.next()) {
        (Some(_), None) => true,
        (Some(first), Some(_)) => first != '<',
        (None, _) => false,
    }
}
