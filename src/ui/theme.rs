use crossterm::style::Color;

/// Design tokens for the debtbook CLI.
///
/// Design constraints:
/// - Only 5 semantic colors (`colors::*`)
/// - All icons and rules must be sourced from this module
pub mod colors {
    use super::Color;

    /// Positive net balance, success messages
    pub const SUCCESS: Color = Color::Green;
    /// Negative net balance, errors
    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    pub const INFO: Color = Color::Cyan;
    /// Zero cells, secondary text
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const ARROW: &str = "↳";
    pub const GROUP: &str = "●";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const ARROW: &str = "->";
    pub const GROUP: &str = "*";
}

pub mod rules {
    pub const HORIZONTAL: &str = "─";
    pub const VERTICAL: &str = "│";
    pub const CROSS: &str = "┼";
}

pub mod rules_ascii {
    pub const HORIZONTAL: &str = "-";
    pub const VERTICAL: &str = "|";
    pub const CROSS: &str = "+";
}
