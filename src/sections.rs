//! Scroll-linked section tracking
//!
//! Decides which page section is "active" for the navigation highlight,
//! and turns navigation clicks into scroll destinations.

use serde::{Deserialize, Serialize};

/// Vertical extent of a section in document coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub top: f64,
    pub height: f64,
}

impl Span {
    pub const fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Half-open: `[top, top + height)`
    #[inline]
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Something that can be measured into a `Span` (a DOM element, a fixed span).
/// `None` means the boundary is not laid out yet.
pub trait Boundary {
    fn span(&self) -> Option<Span>;
}

impl Boundary for Span {
    fn span(&self) -> Option<Span> {
        Some(*self)
    }
}

impl<B: Boundary> Boundary for Option<B> {
    fn span(&self) -> Option<Span> {
        self.as_ref().and_then(Boundary::span)
    }
}

/// A tracked section
#[derive(Debug, Clone)]
pub struct Section<H> {
    pub id: String,
    pub boundary: H,
}

impl<H> Section<H> {
    pub fn new(id: impl Into<String>, boundary: H) -> Self {
        Self {
            id: id.into(),
            boundary,
        }
    }
}

/// Active-section tracker over sections in declaration order
#[derive(Debug)]
pub struct SectionTracker<H> {
    sections: Vec<Section<H>>,
    lookahead: f64,
    active: Option<usize>,
}

impl<H: Boundary> SectionTracker<H> {
    /// The first section starts out active
    pub fn new(sections: Vec<Section<H>>, lookahead: f64) -> Self {
        let active = if sections.is_empty() { None } else { Some(0) };
        Self {
            sections,
            lookahead,
            active,
        }
    }

    pub fn sections(&self) -> &[Section<H>] {
        &self.sections
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active.map(|i| self.sections[i].id.as_str())
    }

    /// First section containing `scroll_y + lookahead`, if any
    pub fn resolve(&self, scroll_y: f64) -> Option<usize> {
        let position = scroll_y + self.lookahead;
        self.sections
            .iter()
            .position(|s| s.boundary.span().is_some_and(|span| span.contains(position)))
    }

    /// Recompute from the current scroll offset. When nothing matches the
    /// previous section stays active. Returns true if the active id changed.
    pub fn on_scroll(&mut self, scroll_y: f64) -> bool {
        match self.resolve(scroll_y) {
            Some(i) if self.active != Some(i) => {
                self.active = Some(i);
                true
            }
            _ => false,
        }
    }

    /// Document offset to scroll to for section `id`
    pub fn scroll_target(&self, id: &str) -> Option<f64> {
        self.sections
            .iter()
            .find(|s| s.id == id)
            .and_then(|s| s.boundary.span())
            .map(|span| span.top)
    }
}

/// A navigation bar entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub label: String,
    /// Section id
    pub target: String,
}

impl NavItem {
    pub fn new(label: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target: target.into(),
        }
    }
}

/// Navigation bar state
#[derive(Debug, Clone, Default)]
pub struct Navigation {
    items: Vec<NavItem>,
    mobile_open: bool,
}

impl Navigation {
    pub fn new(items: Vec<NavItem>) -> Self {
        Self {
            items,
            mobile_open: false,
        }
    }

    pub fn items(&self) -> &[NavItem] {
        &self.items
    }

    pub fn is_mobile_open(&self) -> bool {
        self.mobile_open
    }

    /// Flip the mobile overlay; returns the new state
    pub fn toggle_mobile(&mut self) -> bool {
        self.mobile_open = !self.mobile_open;
        self.mobile_open
    }

    /// A nav item was clicked: close the overlay and return where to scroll
    pub fn select<H: Boundary>(&mut self, target: &str, tracker: &SectionTracker<H>) -> Option<f64> {
        self.mobile_open = false;
        let top = tracker.scroll_target(target);
        if top.is_none() {
            log::warn!("Navigation target '{}' has no section", target);
        }
        top
    }
}
