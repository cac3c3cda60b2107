//! Viewport state: scroll offsets and canvas size.

/// Viewport state - the visible area of the grid
///
/// Scrolling is cell-granular: `h_scroll` counts columns scrolled past the
/// fixed columns, `v_scroll` counts data rows scrolled past the fixed rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    /// Columns scrolled out of view (excluding fixed columns)
    pub h_scroll: i32,
    /// Data rows scrolled out of view (excluding fixed rows)
    pub v_scroll: i32,
    /// Viewport width in pixels
    pub width: f32,
    /// Viewport height in pixels
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}

impl Viewport {
    /// Create a new viewport with default values
    pub fn new() -> Self {
        Self {
            h_scroll: 0,
            v_scroll: 0,
            width: 800.0,
            height: 600.0,
        }
    }

    /// Clamp scroll position to `0..=max` on each axis.
    pub fn clamp_scroll(&mut self, max_h: i32, max_v: i32) {
        self.h_scroll = self.h_scroll.clamp(0, max_h.max(0));
        self.v_scroll = self.v_scroll.clamp(0, max_v.max(0));
    }

    /// Scroll by delta amounts
    pub fn scroll_by(&mut self, delta_h: i32, delta_v: i32, max_h: i32, max_v: i32) {
        self.h_scroll = self.h_scroll.saturating_add(delta_h);
        self.v_scroll = self.v_scroll.saturating_add(delta_v);
        self.clamp_scroll(max_h, max_v);
    }

    /// Set absolute scroll position
    pub fn set_scroll(&mut self, h: i32, v: i32, max_h: i32, max_v: i32) {
        self.h_scroll = h;
        self.v_scroll = v;
        self.clamp_scroll(max_h, max_v);
    }

    /// Resize the viewport
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }
}
