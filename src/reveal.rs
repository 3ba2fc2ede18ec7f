//! Reveal-on-visible
//!
//! Content blocks fade/slide in the first time they scroll into view and
//! then stay revealed. The browser side feeds intersection callbacks into
//! `RevealState`; the geometry here mirrors how the observer is configured.

use serde::{Deserialize, Serialize};

use crate::consts::{REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};

/// Observer configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealOptions {
    /// Fraction of the block that must be visible (0.0 - 1.0)
    pub threshold: f64,
    /// Inset applied to the top and bottom of the viewport
    pub root_margin: f64,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: REVEAL_THRESHOLD,
            root_margin: REVEAL_ROOT_MARGIN,
        }
    }
}

impl RevealOptions {
    /// CSS `rootMargin` string (negative inset, vertical only)
    pub fn root_margin_css(&self) -> String {
        format!("{}px 0px", -self.root_margin)
    }

    /// Fraction of a block (viewport-relative `top`, `height`) inside the
    /// margin-inset viewport
    pub fn visible_ratio(&self, top: f64, height: f64, viewport_height: f64) -> f64 {
        let root_top = self.root_margin;
        let root_bottom = viewport_height - self.root_margin;
        if root_bottom <= root_top {
            return 0.0;
        }

        let bottom = top + height;
        if height <= 0.0 {
            return if top >= root_top && top <= root_bottom { 1.0 } else { 0.0 };
        }

        let overlap = (bottom.min(root_bottom) - top.max(root_top)).max(0.0);
        (overlap / height).clamp(0.0, 1.0)
    }

    /// Whether the observer would report the block as intersecting
    pub fn intersects(&self, top: f64, height: f64, viewport_height: f64) -> bool {
        let ratio = self.visible_ratio(top, height, viewport_height);
        ratio > 0.0 && ratio >= self.threshold
    }
}

/// Per-block reveal state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RevealState {
    visible: bool,
    has_animated: bool,
    delay_ms: u32,
}

impl RevealState {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            ..Default::default()
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn has_animated(&self) -> bool {
        self.has_animated
    }

    /// Feed an intersection callback. Only the first intersecting callback
    /// does anything; returns true exactly then.
    pub fn on_intersection(&mut self, is_intersecting: bool) -> bool {
        if self.has_animated || !is_intersecting {
            return false;
        }
        self.visible = true;
        self.has_animated = true;
        true
    }

    /// Transition delay to apply; the stagger only kicks in once visible
    pub fn transition_delay_ms(&self) -> u32 {
        if self.visible { self.delay_ms } else { 0 }
    }
}
