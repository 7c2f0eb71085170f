//! Scroll-offset tracking for the navigation bar

/// Vertical offset past which the navigation bar switches to its scrolled style
pub const SCROLL_THRESHOLD: f64 = 50.0;

/// Whether a vertical scroll offset counts as scrolled
pub fn is_scrolled(offset: f64) -> bool {
    offset > SCROLL_THRESHOLD
}

/// Scrolled flag fed by raw scroll events
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollTracker {
    scrolled: bool,
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a scroll offset
    ///
    /// Returns true if the scrolled flag changed, false otherwise
    pub fn observe(&mut self, offset: f64) -> bool {
        let scrolled = is_scrolled(offset);
        if scrolled != self.scrolled {
            self.scrolled = scrolled;
            return true;
        }
        false
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    /// CSS class for the navigation bar
    pub fn nav_class(&self) -> &'static str {
        if self.scrolled {
            "layout-nav scrolled"
        } else {
            "layout-nav"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_boundary() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(49.9));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
        assert!(is_scrolled(51.0));
        assert!(is_scrolled(4000.0));
    }

    #[test]
    fn test_starts_unscrolled() {
        let tracker = ScrollTracker::new();
        assert!(!tracker.is_scrolled());
        assert_eq!(tracker.nav_class(), "layout-nav");
    }

    #[test]
    fn test_transitions_once_each_direction() {
        let mut tracker = ScrollTracker::new();
        let offsets = [0.0, 10.0, 50.0, 51.0, 120.0, 300.0, 80.0, 50.0, 20.0, 0.0];

        let changes: Vec<_> = offsets
            .iter()
            .filter_map(|&offset| tracker.observe(offset).then_some(offset))
            .collect();

        assert_eq!(changes, [51.0, 50.0]);
        assert!(!tracker.is_scrolled());
    }

    #[test]
    fn test_repeated_events_do_not_report_change() {
        let mut tracker = ScrollTracker::new();
        assert!(tracker.observe(200.0));
        assert!(!tracker.observe(210.0));
        assert!(!tracker.observe(220.0));
        assert!(tracker.is_scrolled());
        assert_eq!(tracker.nav_class(), "layout-nav scrolled");
    }
}
