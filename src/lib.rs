//! CeyCodez studio site
//!
//! Core modules:
//! - `field`: Particle field simulation (pure, seeded)
//! - `renderer`: Draws the particle field onto an injectable 2D surface
//! - `frame`: Frame loop lifecycle (schedule, run, cancel)
//! - `sections`: Scroll-linked section tracking and navigation
//! - `reveal`: One-shot reveal-on-visible state
//! - `portfolio`: Project content, category filter, detail modal
//! - `splash`: Loading screen progress
//! - `config`: Site configuration with JSON overrides
//! - `platform`: Browser bindings (wasm32 only)

pub mod config;
pub mod error;
pub mod field;
pub mod frame;
#[cfg(target_arch = "wasm32")]
pub mod platform;
pub mod portfolio;
pub mod renderer;
pub mod reveal;
pub mod sections;
pub mod splash;

pub use config::SiteConfig;
pub use error::{Result, SiteError};

/// Site tuning constants (defaults for `SiteConfig`)
pub mod consts {
    /// Particles in the background pool
    pub const PARTICLE_COUNT: usize = 80;
    /// Half-range of each velocity component (units per frame)
    pub const PARTICLE_SPEED: f32 = 0.25;
    /// Particle radius range [min, max)
    pub const PARTICLE_RADIUS_MIN: f32 = 1.0;
    pub const PARTICLE_RADIUS_MAX: f32 = 3.0;

    /// Pairs closer than this are joined by a line
    pub const LINK_DISTANCE: f32 = 150.0;
    /// Line opacity at distance 0
    pub const LINK_MAX_OPACITY: f32 = 0.15;
    /// Particle fill opacity
    pub const PARTICLE_OPACITY: f32 = 0.5;

    /// Added to scroll offset before matching sections
    pub const SCROLL_LOOKAHEAD: f64 = 200.0;

    /// Fraction of a block that must be visible to reveal it
    pub const REVEAL_THRESHOLD: f64 = 0.1;
    /// Viewport inset (top and bottom) for reveal visibility
    pub const REVEAL_ROOT_MARGIN: f64 = 50.0;
    /// Delay between sibling reveals in the portfolio grid (ms)
    pub const REVEAL_STAGGER_MS: u32 = 100;

    /// Splash progress increment per tick (percent)
    pub const SPLASH_STEP: u8 = 2;
    /// Splash tick interval (ms)
    pub const SPLASH_INTERVAL_MS: i32 = 30;
    /// Delay between reaching 100% and hiding the splash (ms)
    pub const SPLASH_FINISH_DELAY_MS: i32 = 500;
}
