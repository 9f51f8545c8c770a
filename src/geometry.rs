// SPDX-License-Identifier: MPL-2.0
//! Overlay placement relative to the host window.
//!
//! Both placement rules derive bounds from the window size at call time:
//! a fixed-size toast centered near the bottom edge, and a right-anchored
//! settings panel below the window header. The parked position keeps a
//! surface loaded but far off-screen.

/// Toast size, fixed regardless of the window.
pub const NOTIFICATION_WIDTH: u32 = 400;
pub const NOTIFICATION_HEIGHT: u32 = 70;

/// Gap between the toast's bottom edge and the window's bottom edge.
const NOTIFICATION_BOTTOM_MARGIN: u32 = 100;

/// The panel never grows past this, however wide the window gets.
pub const PANEL_MAX_WIDTH: u32 = 500;

/// Height of the window's header strip; the panel starts below it.
pub const HEADER_HEIGHT: u32 = 32;

/// Degenerate off-screen position for a hidden-but-loaded surface.
pub const PARKED_BOUNDS: OverlayBounds = OverlayBounds::new(0, -10_000, 0, 0);

/// Host window size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSize {
    pub width: u32,
    pub height: u32,
}

impl WindowSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Placement of one overlay surface, in window coordinates. The origin may
/// sit outside the window (the parked position relies on it).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayBounds {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl OverlayBounds {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Toast placement: horizontally centered, a fixed margin above the bottom
/// edge.
pub fn notification_bounds(window: WindowSize) -> OverlayBounds {
    let x = (window.width as i32 - NOTIFICATION_WIDTH as i32) / 2;
    let y = window.height as i32 - (NOTIFICATION_HEIGHT + NOTIFICATION_BOTTOM_MARGIN) as i32;
    OverlayBounds::new(x, y, NOTIFICATION_WIDTH, NOTIFICATION_HEIGHT)
}

/// Panel placement: anchored to the right edge below the header, at 40% of
/// the window width capped to [`PANEL_MAX_WIDTH`].
pub fn panel_bounds(window: WindowSize) -> OverlayBounds {
    let width = PANEL_MAX_WIDTH.min((window.width as f64 * 0.4) as u32);
    let x = window.width.saturating_sub(width) as i32;
    let height = window.height.saturating_sub(HEADER_HEIGHT);
    OverlayBounds::new(x, HEADER_HEIGHT as i32, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_is_centered_above_the_bottom_edge() {
        let bounds = notification_bounds(WindowSize::new(1000, 800));
        assert_eq!(bounds, OverlayBounds::new(300, 630, 400, 70));
    }

    #[test]
    fn notification_keeps_its_size_in_a_tiny_window() {
        let bounds = notification_bounds(WindowSize::new(300, 120));
        assert_eq!(bounds.width, NOTIFICATION_WIDTH);
        assert_eq!(bounds.height, NOTIFICATION_HEIGHT);
        // Centering a 400 px toast in a 300 px window pushes x negative.
        assert_eq!(bounds.x, -50);
    }

    #[test]
    fn panel_uses_forty_percent_of_a_narrow_window() {
        let bounds = panel_bounds(WindowSize::new(1000, 800));
        assert_eq!(bounds, OverlayBounds::new(600, 32, 400, 768));
    }

    #[test]
    fn panel_width_is_capped_in_a_wide_window() {
        let bounds = panel_bounds(WindowSize::new(2000, 1000));
        assert_eq!(bounds, OverlayBounds::new(1500, 32, 500, 968));
    }

    #[test]
    fn panel_height_never_underflows() {
        let bounds = panel_bounds(WindowSize::new(100, 10));
        assert_eq!(bounds.height, 0);
    }

    #[test]
    fn parked_bounds_sit_far_off_screen() {
        assert!(PARKED_BOUNDS.y < -(NOTIFICATION_HEIGHT as i32));
        assert_eq!(PARKED_BOUNDS.width, 0);
    }
}
