//! The text-wrap guide shape: a diagonal clip polygon that tracks scroll.
//!
//! The guide is an invisible floated element; the polygon it exposes through
//! `shape-outside` is what makes the body text flow along the diagonal
//! graphic. The shape is a pure function of the current geometry, recomputed
//! on demand and never stored.

/// Inputs the shape is computed from, read off the document at call time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WrapGeometry {
    pub viewport_height: f64,
    pub scroll_offset: f64,
    /// Lower bound of the wrapped region, see [`WrapGeometry::wrap_end_of`].
    pub wrap_end: f64,
}

impl WrapGeometry {
    /// Baseline used while a resize is reflowing the document.
    pub fn zero() -> Self {
        WrapGeometry {
            viewport_height: 0.0,
            scroll_offset: 0.0,
            wrap_end: 0.0,
        }
    }

    /// The page can be shorter than the viewport, so the wrapped region ends
    /// at the largest of the three height measures.
    pub fn wrap_end_of(viewport_height: f64, offset_height: f64, scroll_height: f64) -> f64 {
        viewport_height.max(offset_height).max(scroll_height)
    }
}

/// Style payload for the guide element.
#[derive(Clone, Debug, PartialEq)]
pub struct WrapShape {
    pub height_px: f64,
    pub shape_outside: String,
}

/// Build the clip polygon for the current geometry.
///
/// The diagonal edge runs from 90% width at the scroll offset down to full
/// width at the bottom of the viewport, so the boundary shifts in proportion
/// to how far the reader has scrolled.
pub fn compute(geometry: WrapGeometry) -> WrapShape {
    let scrolled = geometry.scroll_offset;
    let lower_edge = geometry.viewport_height + scrolled;
    let end = geometry.wrap_end;
    let shape_outside = format!(
        "polygon(0 0, 90% 0, 90% {}px, 90% {}px, 90% {}px, 100% {}px, 100% {}px, 0 {}px)",
        scrolled / 2.0,
        scrolled,
        scrolled,
        lower_edge,
        end,
        end
    );
    WrapShape {
        height_px: end,
        shape_outside,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_geometry_collapses_the_polygon() {
        let shape = compute(WrapGeometry::zero());
        assert_eq!(shape.height_px, 0.0);
        assert_eq!(
            shape.shape_outside,
            "polygon(0 0, 90% 0, 90% 0px, 90% 0px, 90% 0px, 100% 0px, 100% 0px, 0 0px)"
        );
    }

    #[test]
    fn boundary_shifts_with_scroll_offset() {
        let geometry = WrapGeometry {
            viewport_height: 800.0,
            scroll_offset: 600.0,
            wrap_end: 3000.0,
        };
        let shape = compute(geometry);
        assert_eq!(shape.height_px, 3000.0);
        assert_eq!(
            shape.shape_outside,
            "polygon(0 0, 90% 0, 90% 300px, 90% 600px, 90% 600px, \
             100% 1400px, 100% 3000px, 0 3000px)"
        );
    }

    #[test]
    fn guide_height_matches_the_wrap_end() {
        let geometry = WrapGeometry {
            viewport_height: 700.0,
            scroll_offset: 0.0,
            wrap_end: 700.0,
        };
        assert_eq!(compute(geometry).height_px, 700.0);
    }

    #[test]
    fn wrap_end_takes_the_largest_measure() {
        assert_eq!(WrapGeometry::wrap_end_of(800.0, 2400.0, 2000.0), 2400.0);
        assert_eq!(WrapGeometry::wrap_end_of(800.0, 500.0, 600.0), 800.0);
    }
}
