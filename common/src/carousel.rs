//! Index and scroll bookkeeping for carousels and horizontal scrollers.

/// Interval between hero carousel slides.
pub const CAROUSEL_INTERVAL_MS: u32 = 5000;

/// Distance scrolled by the industry scroller's arrow buttons.
pub const SCROLL_STEP_PX: f64 = 400.0;

/// Next slide, wrapping around. An empty carousel stays at zero.
pub fn next_index(current: usize, len: usize) -> usize {
    if len == 0 { 0 } else { (current + 1) % len }
}

/// Which arrow buttons of a horizontal scroller are enabled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollExtent {
    pub can_scroll_left: bool,
    pub can_scroll_right: bool,
}

impl ScrollExtent {
    /// Initial state before the container has been measured.
    pub const INITIAL: ScrollExtent = ScrollExtent {
        can_scroll_left: false,
        can_scroll_right: true,
    };

    /// The right arrow switches off within 10px of the end.
    pub fn measure(scroll_left: f64, scroll_width: f64, client_width: f64) -> Self {
        Self {
            can_scroll_left: scroll_left > 0.0,
            can_scroll_right: scroll_left < scroll_width - client_width - 10.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carousel_wraps() {
        assert_eq!(next_index(0, 3), 1);
        assert_eq!(next_index(2, 3), 0);
        assert_eq!(next_index(5, 0), 0);
    }

    #[test]
    fn scroll_extent_tracks_both_ends() {
        let start = ScrollExtent::measure(0.0, 2000.0, 800.0);
        assert!(!start.can_scroll_left && start.can_scroll_right);

        let middle = ScrollExtent::measure(400.0, 2000.0, 800.0);
        assert!(middle.can_scroll_left && middle.can_scroll_right);

        let end = ScrollExtent::measure(1195.0, 2000.0, 800.0);
        assert!(end.can_scroll_left && !end.can_scroll_right);
    }
}
