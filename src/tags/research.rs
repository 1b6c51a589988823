//! Research-area tag content: `A, B#ff0000, C[bg:#000000]`.
//!
//! Labels become colored chips. A trailing `#RRGGBB` on a label sets that
//! chip's color explicitly; otherwise the chip color cycles through the
//! configured palette by list position. A trailing `[bg:#RRGGBB]` directive
//! sets a background for the whole group.

use serde::Serialize;

use crate::config::defaults;

/// One rendered chip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AreaChip {
    pub label: String,
    /// Chip background and border, `#RRGGBB`.
    pub color: String,
    /// Chip foreground, `#RRGGBB`.
    pub text_color: String,
}

/// Parsed research tag, ready for the template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResearchSpec {
    pub areas: Vec<AreaChip>,
    /// Optional background for the whole group.
    pub background: Option<String>,
}

/// Parse tag content into chips. Returns `None` when no labels remain after
/// trimming, in which case the tag renders nothing.
///
/// The cycle index is the label's position in the list, advancing past
/// explicitly colored labels too.
pub fn parse_spec(content: &str, palette: &[String]) -> Option<ResearchSpec> {
    let trimmed = content.trim();
    let (list, background) = split_group_background(trimmed);

    let mut areas = Vec::new();
    let items = list.split(',').map(str::trim).filter(|s| !s.is_empty());
    for (position, item) in items.enumerate() {
        let (label, explicit) = split_explicit_color(item);
        if label.is_empty() {
            continue;
        }
        let chip = match explicit {
            Some(color) => {
                let text_color = contrast_foreground(&color).to_string();
                AreaChip {
                    label: label.to_string(),
                    color,
                    text_color,
                }
            }
            None => AreaChip {
                label: label.to_string(),
                color: palette[position % palette.len()].clone(),
                text_color: defaults::PALETTE_FOREGROUND.to_string(),
            },
        };
        areas.push(chip);
    }

    if areas.is_empty() {
        return None;
    }
    Some(ResearchSpec { areas, background })
}

/// Split a trailing `[bg:#RRGGBB]` directive off the label list.
/// A malformed directive is left in place and treated as label text.
fn split_group_background(content: &str) -> (&str, Option<String>) {
    const MARKER: &str = "[bg:#";
    if let Some(idx) = content.rfind(MARKER) {
        let hex_start = idx + MARKER.len();
        let rest = &content[hex_start..];
        if rest.len() == 7 && rest.ends_with(']') && is_hex_color(&rest[..6]) {
            let list = content[..idx].trim_end();
            return (list, Some(format!("#{}", &rest[..6])));
        }
    }
    (content, None)
}

/// Split a trailing `#RRGGBB` off one label. Anything that is not exactly a
/// `#` plus six hex digits stays part of the label.
fn split_explicit_color(item: &str) -> (&str, Option<String>) {
    if item.len() >= 7 {
        let split = item.len() - 7;
        // '#' is ASCII, so a match can't land inside a multibyte character.
        if item.as_bytes()[split] == b'#' && is_hex_color(&item[split + 1..]) {
            return (item[..split].trim_end(), Some(item[split..].to_string()));
        }
    }
    (item, None)
}

/// Exactly six hex digits.
fn is_hex_color(hex: &str) -> bool {
    hex.len() == 6 && hex.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Black or white, whichever reads against the given `#RRGGBB` background.
/// Standard luma weights; backgrounds with luminance below 128 get white text.
fn contrast_foreground(color: &str) -> &'static str {
    let (Some(r), Some(g), Some(b)) = (
        hex_channel(color, 1),
        hex_channel(color, 3),
        hex_channel(color, 5),
    ) else {
        return defaults::PALETTE_FOREGROUND;
    };
    let luma = (299 * r + 587 * g + 114 * b) / 1000;
    if luma < 128 {
        "#ffffff"
    } else {
        "#000000"
    }
}

fn hex_channel(color: &str, at: usize) -> Option<u32> {
    u32::from_str_radix(color.get(at..at + 2)?, 16).ok()
}
