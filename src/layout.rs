//! Layout modes and how the active one is chosen.
//!
//! The site has two presentations: the diagonal layout, where images slide in
//! as the reader scrolls, and the rectangular layout, where the page is a
//! plain vertical sequence. The user's choice is persisted under a single
//! storage key; without one, the system motion preference decides.

use std::fmt;

/// Storage key holding the user's layout choice.
pub const LAYOUT_STORAGE_KEY: &str = "layout";

/// Viewport width, in rem, above which the diagonal scroll behaviour engages.
/// Calibrated against the desktop breakpoint in `static/css/main.css`.
pub const DIAGONAL_MIN_WIDTH_REM: f64 = 33.1667;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutMode {
    Diagonal,
    Rectangular,
}

impl LayoutMode {
    pub fn as_str(self) -> &'static str {
        match self {
            LayoutMode::Diagonal => "diagonal",
            LayoutMode::Rectangular => "rectangular",
        }
    }

    /// Parse a stored value. Anything unrecognised counts as absent.
    pub fn parse(raw: &str) -> Option<LayoutMode> {
        match raw {
            "diagonal" => Some(LayoutMode::Diagonal),
            "rectangular" => Some(LayoutMode::Rectangular),
            _ => None,
        }
    }

    pub fn toggled(self) -> LayoutMode {
        match self {
            LayoutMode::Diagonal => LayoutMode::Rectangular,
            LayoutMode::Rectangular => LayoutMode::Diagonal,
        }
    }

    /// Resolve the mode to apply on page entry: a valid stored choice wins,
    /// otherwise a reduced-motion preference selects the rectangular layout.
    pub fn resolve(stored: Option<&str>, prefers_reduced_motion: bool) -> LayoutMode {
        match stored.and_then(Self::parse) {
            Some(mode) => mode,
            None if prefers_reduced_motion => LayoutMode::Rectangular,
            None => LayoutMode::Diagonal,
        }
    }
}

impl fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// True when the viewport is wide enough for the diagonal scroll behaviour.
pub fn viewport_is_wide(client_width_px: f64, root_font_size_px: f64) -> bool {
    client_width_px > DIAGONAL_MIN_WIDTH_REM * root_font_size_px
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_choice_beats_system_preference() {
        assert_eq!(
            LayoutMode::resolve(Some("diagonal"), true),
            LayoutMode::Diagonal
        );
        assert_eq!(
            LayoutMode::resolve(Some("rectangular"), false),
            LayoutMode::Rectangular
        );
    }

    #[test]
    fn missing_or_garbage_value_falls_back_to_motion_preference() {
        assert_eq!(LayoutMode::resolve(None, false), LayoutMode::Diagonal);
        assert_eq!(LayoutMode::resolve(None, true), LayoutMode::Rectangular);
        assert_eq!(
            LayoutMode::resolve(Some("sideways"), true),
            LayoutMode::Rectangular
        );
        assert_eq!(LayoutMode::resolve(Some(""), false), LayoutMode::Diagonal);
    }

    #[test]
    fn string_round_trip() {
        for mode in [LayoutMode::Diagonal, LayoutMode::Rectangular] {
            assert_eq!(LayoutMode::parse(mode.as_str()), Some(mode));
        }
    }

    #[test]
    fn toggle_flips_and_returns() {
        assert_eq!(LayoutMode::Diagonal.toggled(), LayoutMode::Rectangular);
        assert_eq!(LayoutMode::Diagonal.toggled().toggled(), LayoutMode::Diagonal);
    }

    #[test]
    fn breakpoint_scales_with_root_font_size() {
        // 33.1667rem at 16px/rem is just over 530px.
        assert!(viewport_is_wide(1200.0, 16.0));
        assert!(!viewport_is_wide(500.0, 16.0));
        // A larger root font pushes the same pixel width below the breakpoint.
        assert!(!viewport_is_wide(1200.0, 40.0));
    }
}
