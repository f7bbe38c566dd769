//! Page-chrome interaction logic: navbar scroll styling, active-section
//! tracking, the mobile menu, and smooth in-page anchor scrolling.
//!
//! These functions are the behavioral contract of the page script emitted
//! by `render`; the thresholds below reach the browser as `data-*`
//! attributes on `<body>`.

/// Scroll offset above which the navbar switches to its scrolled style.
pub const NAVBAR_SCROLL_THRESHOLD: f64 = 50.0;

/// Look-ahead subtracted from a section's top when deciding which nav link
/// is active.
pub const SECTION_LOOKAHEAD: f64 = 100.0;

/// Fixed-header clearance subtracted from anchor scroll targets.
pub const HEADER_CLEARANCE: f64 = 80.0;

/// True once the page has scrolled past the navbar threshold; at or below
/// it the navbar keeps its resting style.
pub fn navbar_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAVBAR_SCROLL_THRESHOLD
}

// ── Active-section tracking ────────────────────────────

/// Geometry of one page section, in document order.
#[derive(Debug, Clone)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: &str, top: f64, height: f64) -> Self {
        SectionBounds {
            id: id.to_string(),
            top,
            height,
        }
    }

    fn contains(&self, scroll_y: f64) -> bool {
        let adjusted_top = self.top - SECTION_LOOKAHEAD;
        scroll_y >= adjusted_top && scroll_y < adjusted_top + self.height
    }
}

/// The section the given scroll position falls in, if any. When adjusted
/// ranges overlap, the last matching section in document order wins. No
/// match means no nav link is highlighted.
pub fn active_section(sections: &[SectionBounds], scroll_y: f64) -> Option<&str> {
    let mut current = None;
    for section in sections {
        if section.contains(scroll_y) {
            current = Some(section.id.as_str());
        }
    }
    current
}

// ── Mobile menu ────────────────────────────────────────

/// Open/closed state of the mobile navigation menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    /// Selecting any nav link closes the menu, whether or not the link's
    /// target exists.
    pub fn after_nav_click(self) -> Self {
        MenuState::Closed
    }

    /// Glyph shown on the toggle control in this state.
    pub fn icon(self) -> &'static str {
        match self {
            MenuState::Open => "fas fa-times",
            MenuState::Closed => "fas fa-bars",
        }
    }

    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }
}

// ── Smooth anchor scrolling ────────────────────────────

/// Scroll target for a click on `href`, or None when the click should be
/// left alone: a non-fragment href is never intercepted, and a fragment
/// with no matching element falls through to default navigation.
pub fn anchor_scroll_target<F>(href: &str, element_top: F) -> Option<f64>
where
    F: Fn(&str) -> Option<f64>,
{
    let id = href.strip_prefix('#')?;
    let top = element_top(id)?;
    Some(top - HEADER_CLEARANCE)
}
