//! Reveal (fade-in) state for rendered page elements.
//!
//! Elements carrying the fade class start hidden and become visible exactly
//! once: a one-shot timer shortly after the initial render reveals whatever
//! is already on the page, and a viewport-intersection watch reveals
//! anything scrolled into view later. Both triggers are idempotent.

/// Class renderers put on elements that participate in the reveal.
pub const FADE_CLASS: &str = "fade-in";

/// Class marking an element as revealed. Terminal; never removed.
pub const VISIBLE_CLASS: &str = "visible";

/// Fraction of an element's area that must enter the viewport before the
/// intersection watch reveals it. No root-margin adjustment.
pub const INTERSECTION_THRESHOLD: f64 = 0.1;

/// Delay of the one-shot reveal pass that runs after the initial render,
/// in milliseconds.
pub const INITIAL_REVEAL_DELAY_MS: u64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Hidden,
    Visible,
}

impl RevealState {
    /// One-way transition; revealing an already visible element is a no-op.
    pub fn reveal(self) -> Self {
        RevealState::Visible
    }

    /// Intersection trigger. Ratios below the threshold leave the state
    /// unchanged; visibility never reverses once reached.
    pub fn on_intersection(self, ratio: f64) -> Self {
        if ratio >= INTERSECTION_THRESHOLD {
            self.reveal()
        } else {
            self
        }
    }

    pub fn is_visible(self) -> bool {
        self == RevealState::Visible
    }
}

/// Animation start offset for the `index`-th item of a staggered list:
/// one tenth of a second per position.
pub fn stagger_delay(index: usize) -> f64 {
    index as f64 / 10.0
}

/// Inline style carrying the stagger offset, e.g. `animation-delay: 0.2s`.
pub fn stagger_style(index: usize) -> String {
    format!("animation-delay: {}s", stagger_delay(index))
}
