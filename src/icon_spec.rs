use anyhow::Result;

use crate::error::IconSetError;

/// One required icon variant: its point-size label, its asset-catalog role
/// and the filename it is written under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSpec {
    pub size: &'static str,
    pub role: &'static str,
    pub filename: &'static str,
}

const fn spec(size: &'static str, role: &'static str, filename: &'static str) -> IconSpec {
    IconSpec {
        size,
        role,
        filename,
    }
}

/// Required watchOS icon sizes, in manifest order.
pub const WATCH_ICON_SPECS: &[IconSpec] = &[
    spec("24x24", "notificationCenter", "AppIcon-24.png"),
    spec("27.5x27.5", "notificationCenter", "AppIcon-27.5.png"),
    spec("29x29", "companionSettings", "AppIcon-29.png"),
    spec("33x33", "notificationCenter", "AppIcon-33.png"),
    spec("40x40", "appLauncher", "AppIcon-40.png"),
    spec("44x44", "appLauncher", "AppIcon-44.png"),
    spec("46x46", "appLauncher", "AppIcon-46.png"),
    spec("50x50", "appLauncher", "AppIcon-50.png"),
    spec("51x51", "appLauncher", "AppIcon-51.png"),
    spec("54x54", "appLauncher", "AppIcon-54.png"),
    spec("58x58", "appLauncher", "AppIcon-58.png"),
    spec("60x60", "appLauncher", "AppIcon-60.png"),
    spec("66x66", "appLauncher", "AppIcon-66.png"),
    spec("80x80", "appLauncher", "AppIcon-80.png"),
    spec("87x87", "appLauncher", "AppIcon-87.png"),
    spec("88x88", "appLauncher", "AppIcon-88.png"),
    spec("100x100", "appLauncher", "AppIcon-100.png"),
    spec("102x102", "appLauncher", "AppIcon-102.png"),
    spec("108x108", "appLauncher", "AppIcon-108.png"),
];

impl IconSpec {
    pub fn pixel_size(&self) -> Result<(u32, u32)> {
        parse_size_label(self.size)
    }
}

/// Parse a `"<W>x<H>"` label into pixel dimensions.
///
/// Components may be fractional; they are truncated toward zero, so
/// `"27.5x27.5"` yields `(27, 27)`. Existing asset catalogs were generated
/// with truncation and downstream tooling expects those exact pixel counts.
pub fn parse_size_label(label: &str) -> Result<(u32, u32)> {
    let invalid = || IconSetError::InvalidSizeLabel(label.to_string());

    let (w, h) = label.split_once('x').ok_or_else(invalid)?;
    let width = truncate_component(w).ok_or_else(invalid)?;
    let height = truncate_component(h).ok_or_else(invalid)?;

    Ok((width, height))
}

fn truncate_component(s: &str) -> Option<u32> {
    let v: f64 = s.trim().parse().ok()?;
    if !v.is_finite() || v < 1.0 || v > u32::MAX as f64 {
        return None;
    }
    Some(v.trunc() as u32)
}
