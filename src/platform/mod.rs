//! Browser platform layer (wasm32 only)
//!
//! Binds the pure site modules to the DOM:
//! - `dom`: element lookup plus listener/timer guards that clean up on drop
//! - `canvas`: `Surface` over a 2D canvas context
//! - `background`: particle backdrop frame loop
//! - `nav`: scroll-linked navigation bar
//! - `reveal`: intersection observer subscriptions
//! - `portfolio`: filter buttons, project grid, detail modal
//! - `splash`: loading screen

pub mod background;
pub mod canvas;
pub mod dom;
pub mod nav;
pub mod portfolio;
pub mod reveal;
pub mod splash;

pub use background::ParticleBackground;
pub use nav::NavView;
pub use portfolio::PortfolioView;
pub use reveal::Reveal;
pub use splash::SplashView;
