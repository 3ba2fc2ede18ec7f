//! Site configuration
//!
//! Every field has a default, so an override document only needs the
//! fields it changes. In the browser the override is read from an inline
//! `<script type="application/json" id="site-config">` element.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Result, SiteError};
use crate::reveal::RevealOptions;
use crate::sections::NavItem;

/// Particle backdrop tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub particle_count: usize,
    /// Half-range of each velocity component
    pub speed: f32,
    pub radius_min: f32,
    pub radius_max: f32,
    pub link_distance: f32,
    pub link_max_opacity: f32,
    pub particle_opacity: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            particle_count: PARTICLE_COUNT,
            speed: PARTICLE_SPEED,
            radius_min: PARTICLE_RADIUS_MIN,
            radius_max: PARTICLE_RADIUS_MAX,
            link_distance: LINK_DISTANCE,
            link_max_opacity: LINK_MAX_OPACITY,
            particle_opacity: PARTICLE_OPACITY,
        }
    }
}

/// Loading screen timing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplashConfig {
    pub step: u8,
    pub interval_ms: i32,
    pub finish_delay_ms: i32,
}

impl Default for SplashConfig {
    fn default() -> Self {
        Self {
            step: SPLASH_STEP,
            interval_ms: SPLASH_INTERVAL_MS,
            finish_delay_ms: SPLASH_FINISH_DELAY_MS,
        }
    }
}

/// Complete site configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub field: FieldConfig,
    pub splash: SplashConfig,
    pub reveal: RevealOptions,
    /// Scroll lookahead for section tracking
    pub scroll_lookahead: f64,
    /// Stagger between portfolio card reveals (ms)
    pub reveal_stagger_ms: u32,
    /// Navigation bar entries, in section order
    pub nav: Vec<NavItem>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            field: FieldConfig::default(),
            splash: SplashConfig::default(),
            reveal: RevealOptions::default(),
            scroll_lookahead: SCROLL_LOOKAHEAD,
            reveal_stagger_ms: REVEAL_STAGGER_MS,
            nav: vec![
                NavItem::new("HOME", "home"),
                NavItem::new("ABOUT", "about"),
                NavItem::new("PORTFOLIO", "portfolio"),
                NavItem::new("PACKAGES", "packages"),
                NavItem::new("CONTACT", "contact"),
            ],
        }
    }
}

impl SiteConfig {
    /// Parse an override document; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(SiteError::Config)
    }

    /// Element id of the inline override document
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    const ELEMENT_ID: &'static str = "site-config";

    /// Load config from the page (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let text = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(Self::ELEMENT_ID))
            .and_then(|el| el.text_content());

        if let Some(json) = text {
            match Self::from_json(&json) {
                Ok(config) => {
                    log::info!("Loaded site config from #{}", Self::ELEMENT_ID);
                    return config;
                }
                Err(e) => log::warn!("{e}; using defaults"),
            }
        }

        log::info!("Using default site config");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
