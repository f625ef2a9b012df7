//! View window over an already-fetched list: the first `shown` records
//! are rendered, expandable in fixed steps, with a collapse back to the
//! default once everything is visible. No server round-trips.

/// Default number of rows/bars rendered before "show more".
pub const DEFAULT_WINDOW: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayWindow {
    shown: usize,
    default_count: usize,
    step: usize,
}

impl DisplayWindow {
    pub fn new() -> Self {
        Self::with_default(DEFAULT_WINDOW)
    }

    pub fn with_default(count: usize) -> Self {
        Self {
            shown: count,
            default_count: count,
            step: count,
        }
    }

    /// Number of records to render for a sequence of `len`; never
    /// exceeds `len`.
    pub fn visible(&self, len: usize) -> usize {
        self.shown.min(len)
    }

    /// Whether records beyond the window remain hidden.
    pub fn has_more(&self, len: usize) -> bool {
        self.visible(len) < len
    }

    /// Whether the toggle control should render at all. A sequence that
    /// fits in the default window needs no button.
    pub fn needs_control(&self, len: usize) -> bool {
        len > self.default_count
    }

    /// "Show more" / collapse toggle: grow by one step (capped at
    /// `len`), or reset to the default once everything is shown.
    pub fn advance(&mut self, len: usize) {
        if self.has_more(len) {
            self.shown = (self.shown + self.step).min(len);
        } else {
            self.shown = self.default_count;
        }
    }
}

impl Default for DisplayWindow {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_never_exceeds_sequence_length() {
        let w = DisplayWindow::new();
        assert_eq!(w.visible(3), 3);
        assert_eq!(w.visible(10), 10);
        assert_eq!(w.visible(25), 10);
    }

    #[test]
    fn short_sequence_needs_no_control() {
        let mut w = DisplayWindow::new();
        assert!(!w.needs_control(10));
        assert!(!w.has_more(7));
        // Toggling anyway is a no-op.
        w.advance(7);
        assert_eq!(w.visible(7), 7);
        assert!(!w.has_more(7));
    }

    #[test]
    fn grows_in_steps_and_caps_at_length() {
        let mut w = DisplayWindow::new();
        w.advance(25);
        assert_eq!(w.visible(25), 20);
        w.advance(25);
        assert_eq!(w.visible(25), 25);
        assert!(!w.has_more(25));
    }

    #[test]
    fn collapses_to_default_once_fully_shown() {
        let mut w = DisplayWindow::new();
        w.advance(15); // 10 -> 15, fully shown
        assert_eq!(w.visible(15), 15);
        w.advance(15); // collapse
        assert_eq!(w.visible(15), 10);
        assert!(w.has_more(15));
    }

    #[test]
    fn custom_default_window() {
        let mut w = DisplayWindow::with_default(5);
        assert_eq!(w.visible(12), 5);
        w.advance(12);
        assert_eq!(w.visible(12), 10);
        w.advance(12);
        assert_eq!(w.visible(12), 12);
        w.advance(12);
        assert_eq!(w.visible(12), 5);
    }
}
