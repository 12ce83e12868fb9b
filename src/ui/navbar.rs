/// Navbar scroll behavior and animated anchor scrolling.

use crate::core::config;
use crate::ui::anim::{lerp, Animation};

/// Fixed top bar that turns solid past a small scroll offset and slides out
/// of the way while the page scrolls down.
pub struct Navbar {
    last_y: f64,
    solid: bool,
    hidden: bool,
    // Latest queued scroll sample, applied once per frame
    pending_y: Option<f64>,
}

impl Navbar {
    pub fn new() -> Self {
        Self {
            last_y: 0.0,
            solid: false,
            hidden: false,
            pending_y: None,
        }
    }

    /// Queue a scroll sample. Bursts of samples within one frame collapse
    /// to the latest value.
    pub fn scrolled(&mut self, y: f64) {
        self.pending_y = Some(y);
    }

    /// Apply the queued sample, if any.
    pub fn step(&mut self) {
        let y = match self.pending_y.take() {
            Some(y) => y,
            None => return,
        };

        self.solid = y > config::NAV_SOLID_AT;
        self.hidden = y > self.last_y && y > config::NAV_HIDE_AT;
        self.last_y = y;
    }

    pub fn is_solid(&self) -> bool {
        self.solid
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }
}

impl Default for Navbar {
    fn default() -> Self {
        Self::new()
    }
}

/// Eased scroll between the current offset and an anchor target.
pub struct SmoothScroll {
    anim: Animation,
    from: f64,
    to: f64,
}

impl SmoothScroll {
    pub fn new() -> Self {
        Self {
            anim: Animation::new(),
            from: 0.0,
            to: 0.0,
        }
    }

    /// Scroll so the anchor lands below the fixed navbar.
    pub fn scroll_to_anchor(&mut self, current: f64, anchor_y: f64) {
        self.scroll_to(current, anchor_y - config::NAV_ANCHOR_OFFSET);
    }

    pub fn scroll_to(&mut self, current: f64, target: f64) {
        self.from = current;
        self.to = target.max(0.0);
        self.anim.start(config::SCROLL_ANIM_MS);
    }

    /// Abort mid-flight, e.g. when the wheel takes over.
    pub fn cancel(&mut self) {
        self.anim = Animation::new();
    }

    /// Returns the new offset while the animation runs.
    pub fn update(&mut self, dt_ms: f64) -> Option<f64> {
        if !self.anim.is_active() {
            return None;
        }
        self.anim.update(dt_ms);
        Some(lerp(self.from, self.to, self.anim.progress()))
    }

    pub fn is_active(&self) -> bool {
        self.anim.is_active()
    }

    pub fn target(&self) -> f64 {
        self.to
    }
}

impl Default for SmoothScroll {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solid_threshold() {
        let mut nav = Navbar::new();
        nav.scrolled(49.0);
        nav.step();
        assert!(!nav.is_solid());

        nav.scrolled(51.0);
        nav.step();
        assert!(nav.is_solid());
    }

    #[test]
    fn test_hides_only_scrolling_down_past_threshold() {
        let mut nav = Navbar::new();

        // Down, but still above the hide threshold
        nav.scrolled(150.0);
        nav.step();
        assert!(!nav.is_hidden());

        // Down past the threshold
        nav.scrolled(300.0);
        nav.step();
        assert!(nav.is_hidden());

        // Back up, still deep in the page
        nav.scrolled(250.0);
        nav.step();
        assert!(!nav.is_hidden());
    }

    #[test]
    fn test_burst_of_samples_applies_latest_only() {
        let mut nav = Navbar::new();
        nav.scrolled(400.0);
        nav.scrolled(30.0);
        nav.step();
        assert!(!nav.is_solid());
        assert!(!nav.is_hidden());

        // No queued sample, step is a no-op
        nav.step();
        assert!(!nav.is_solid());
    }

    #[test]
    fn test_anchor_target_compensates_for_navbar() {
        let mut scroll = SmoothScroll::new();
        scroll.scroll_to_anchor(0.0, 500.0);
        assert_eq!(scroll.target(), 500.0 - config::NAV_ANCHOR_OFFSET);

        // Near the top the target clamps to zero
        scroll.scroll_to_anchor(300.0, 40.0);
        assert_eq!(scroll.target(), 0.0);
    }

    #[test]
    fn test_scroll_reaches_target() {
        let mut scroll = SmoothScroll::new();
        scroll.scroll_to(100.0, 600.0);

        let mut offset = 100.0;
        let mut steps = 0;
        while let Some(y) = scroll.update(16.0) {
            offset = y;
            steps += 1;
            assert!(steps < 100, "scroll never settled");
        }
        assert!((offset - 600.0).abs() < 1e-9);
        assert!(!scroll.is_active());
    }
}
