/// Chip colors cycled through when a research area carries no explicit color.
/// Five entries; assignment is list position modulo palette length.
pub const PALETTE: [&str; 5] = ["#3b82f6", "#10b981", "#f59e0b", "#8b5cf6", "#ef4444"];

/// Foreground used on palette-colored chips. Explicitly colored chips compute
/// their own black/white foreground from the background luminance instead.
pub const PALETTE_FOREGROUND: &str = "#ffffff";

pub fn language() -> String {
    "en".to_string()
}

pub fn palette() -> Vec<String> {
    PALETTE.iter().map(|c| c.to_string()).collect()
}

pub fn bool_true() -> bool {
    true
}
