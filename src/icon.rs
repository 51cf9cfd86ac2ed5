use tray_icon::Icon;

use crate::error::{BinError, Result};

pub const ICON_SIZE: u32 = 32;

/// Visual state of the tray icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconVariant {
    Idle,
    /// Shown while an empty operation is running.
    Busy,
}

/// Render the tray icon as a 32x32 RGBA bitmap.
///
/// The glyph contrasts with the taskbar: dark on the light theme, light on
/// the dark theme. The busy variant dims the glyph.
pub fn render(light_theme: bool, variant: IconVariant) -> Result<Icon> {
    let shade: u8 = if light_theme { 32 } else { 235 };
    let alpha: u8 = match variant {
        IconVariant::Idle => 255,
        IconVariant::Busy => 110,
    };

    let mut rgba = vec![0u8; (ICON_SIZE * ICON_SIZE * 4) as usize];
    for y in 0..ICON_SIZE {
        for x in 0..ICON_SIZE {
            if glyph(x, y) {
                let offset = ((y * ICON_SIZE + x) * 4) as usize;
                rgba[offset] = shade;
                rgba[offset + 1] = shade;
                rgba[offset + 2] = shade;
                rgba[offset + 3] = alpha;
            }
        }
    }

    Icon::from_rgba(rgba, ICON_SIZE, ICON_SIZE).map_err(|e| BinError::Tray(e.to_string()))
}

/// Trash-can silhouette: handle, lid, body with two carved slats.
fn glyph(x: u32, y: u32) -> bool {
    let handle = (3..5).contains(&y) && (12..20).contains(&x);
    let lid = (6..9).contains(&y) && (5..27).contains(&x);
    let body = (11..28).contains(&y) && (8..24).contains(&x);
    let slat = (14..25).contains(&y) && matches!(x, 12 | 13 | 18 | 19);
    handle || lid || (body && !slat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_stays_inside_the_bitmap() {
        for y in 0..ICON_SIZE {
            for x in 0..ICON_SIZE {
                // Just exercising every cell; out-of-range would panic above.
                let _ = glyph(x, y);
            }
        }
        assert!(!glyph(0, 0));
        assert!(!glyph(ICON_SIZE - 1, ICON_SIZE - 1));
    }

    #[test]
    fn test_glyph_draws_lid_wider_than_body() {
        assert!(glyph(6, 7));
        assert!(!glyph(6, 20));
        assert!(glyph(9, 20));
    }
}
