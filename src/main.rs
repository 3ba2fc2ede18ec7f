//! CeyCodez site entry point
//!
//! Handles platform-specific initialization. On the web it mounts the
//! backdrop and splash, then the site sections once the splash finishes.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_site {
    use std::cell::RefCell;

    use wasm_bindgen::JsCast;
    use web_sys::HtmlElement;

    use ceycodez_site::SiteConfig;
    use ceycodez_site::platform::{NavView, ParticleBackground, PortfolioView, Reveal, SplashView};
    use ceycodez_site::portfolio::Portfolio;
    use ceycodez_site::{Result, SiteError};

    const CANVAS_ID: &str = "bg-canvas";

    /// Everything mounted after the splash
    struct Site {
        _nav: NavView,
        _portfolio: Option<PortfolioView>,
        _reveals: Vec<Reveal>,
    }

    /// Page instance holding every mounted view
    #[derive(Default)]
    struct App {
        background: Option<ParticleBackground>,
        splash: Option<SplashView>,
        site: Option<Site>,
    }

    thread_local! {
        static APP: RefCell<Option<App>> = const { RefCell::new(None) };
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Failed to init logger: {e}").into());
        }

        log::info!("CeyCodez site starting...");

        let config = SiteConfig::load();
        let seed = js_sys::Date::now() as u64;

        let mut app = App::default();

        match ParticleBackground::mount(CANVAS_ID, &config.field, seed) {
            Ok(background) => app.background = Some(background),
            Err(e) => log::error!("Background not mounted: {e}"),
        }

        let site_config = config.clone();
        match SplashView::show(&config.splash, move || mount_site(&site_config)) {
            Ok(splash) => app.splash = Some(splash),
            Err(e) => {
                log::warn!("Splash not shown: {e}");
                APP.with(|cell| *cell.borrow_mut() = Some(app));
                mount_site(&config);
                return;
            }
        }

        APP.with(|cell| *cell.borrow_mut() = Some(app));
    }

    fn mount_site(config: &SiteConfig) {
        let site = match build_site(config) {
            Ok(site) => site,
            Err(e) => {
                log::error!("Site not mounted: {e}");
                return;
            }
        };
        APP.with(|cell| {
            if let Some(app) = cell.borrow_mut().as_mut() {
                app.site = Some(site);
            }
        });
        log::info!("Site mounted");
    }

    fn build_site(config: &SiteConfig) -> Result<Site> {
        let nav = NavView::mount(config)?;

        let portfolio = match Portfolio::bundled().and_then(|p| PortfolioView::mount(config, p)) {
            Ok(view) => Some(view),
            Err(e) => {
                log::error!("Portfolio not mounted: {e}");
                None
            }
        };

        Ok(Site {
            _nav: nav,
            _portfolio: portfolio,
            _reveals: static_reveals(config)?,
        })
    }

    /// Observe every `[data-reveal]` block; `data-reveal-delay` sets its
    /// transition delay in milliseconds
    fn static_reveals(config: &SiteConfig) -> Result<Vec<Reveal>> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| SiteError::Js("no document".into()))?;
        let nodes = document.query_selector_all("[data-reveal]")?;

        let mut reveals = Vec::with_capacity(nodes.length() as usize);
        for i in 0..nodes.length() {
            let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) else {
                continue;
            };
            let delay = el
                .get_attribute("data-reveal-delay")
                .and_then(|d| d.trim().parse::<u32>().ok())
                .unwrap_or(0);
            reveals.push(Reveal::observe(&el, delay, &config.reveal)?);
        }
        log::info!("Observing {} reveal blocks", reveals.len());
        Ok(reveals)
    }

    pub fn unmount() {
        let app = APP.with(|cell| cell.borrow_mut().take());
        if app.is_some() {
            log::info!("Unmounting site");
        }
        drop(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_site::run();
}

/// Tear down every mounted view: stops the backdrop animation and removes
/// all listeners, observers and timers
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn unmount() {
    wasm_site::unmount();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("CeyCodez site (native) starting...");
    log::info!("The site runs in the browser - build with `trunk serve` for the web version");

    println!("\nRunning headless particle field...");
    run_headless_field();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn run_headless_field() {
    use ceycodez_site::SiteConfig;
    use ceycodez_site::field::ParticleField;

    const WIDTH: f32 = 1280.0;
    const HEIGHT: f32 = 720.0;
    const STEPS: u32 = 600;

    let config = SiteConfig::load();
    let mut field = ParticleField::new(WIDTH, HEIGHT, &config.field, 42);

    let mut max_links = 0;
    for _ in 0..STEPS {
        field.step();
        max_links = max_links.max(field.links().count());
    }

    let bounds = field.bounds();
    let escaped = field
        .particles()
        .iter()
        .filter(|p| p.pos.x < -1.0 || p.pos.y < -1.0 || p.pos.x > bounds.x + 1.0 || p.pos.y > bounds.y + 1.0)
        .count();

    log::info!(
        "{} frames, {} particles, peak {} links",
        field.frames(),
        field.particles().len(),
        max_links
    );
    assert_eq!(escaped, 0, "Particles should stay inside the viewport");
    println!("✓ Particle field stayed in bounds for {} frames", field.frames());
}
