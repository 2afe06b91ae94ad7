//! Reveal-on-scroll model.

/// Fraction of a section that must be visible before it reveals.
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.1;

/// One-shot visibility latch for a section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reveal {
    threshold: f64,
    visible: bool,
}

impl Reveal {
    /// `threshold` is clamped to `0.0..=1.0`.
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            visible: false,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Class list for a section in this state.
    pub fn css_class(&self) -> &'static str {
        if self.visible {
            "reveal visible"
        } else {
            "reveal"
        }
    }

    /// Feed the currently visible fraction of the section.
    ///
    /// Returns `true` only on the call that reveals it. Once visible it stays visible.
    pub fn observe(&mut self, intersection_ratio: f64) -> bool {
        if self.visible || intersection_ratio < self.threshold {
            return false;
        }
        self.visible = true;
        true
    }
}

impl Default for Reveal {
    fn default() -> Self {
        Self::new(DEFAULT_REVEAL_THRESHOLD)
    }
}
